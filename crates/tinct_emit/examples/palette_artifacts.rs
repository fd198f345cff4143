//! Print the stylesheet generated from the built-in palette.
//!
//! Run with: cargo run -p tinct_emit --example palette_artifacts

use tinct_emit::web::{stylesheet, WebOptions};
use tinct_tokens::palette;

fn main() {
    let tokens = palette::builtin();
    let css = stylesheet(&tokens, &WebOptions::default()).expect("builtin palette is valid");
    println!("{css}");
}
