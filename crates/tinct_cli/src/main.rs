//! tinct - design-token color pipeline
//!
//! Resolves 2×2 (light/dark × base/wcag) color-token matrices and projects
//! them into platform artifacts: a CSS stylesheet plus JS data module, a
//! Swift `UIColor` extension and an Android resource-qualifier set.

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tinct_emit::{generate, Platform, PipelineOptions};
use tinct_tokens::{palette, ModeThemeResolver, TokenSet, UserTheme};
use tracing::info;

use config::TinctConfig;

#[derive(Parser)]
#[command(name = "tinct", version, about = "Design-token color pipeline")]
struct Cli {
    /// Path to tinct.toml or a directory containing it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate platform artifacts from a token document
    Generate(GenerateArgs),
    /// Check a token document for structural and syntactic validity
    Validate {
        /// Token document (JSON)
        tokens: PathBuf,
    },
    /// Print the built-in token set as JSON
    Palette,
}

#[derive(Args)]
struct GenerateArgs {
    /// Token document (JSON); uses the built-in palette when omitted
    #[arg(long)]
    tokens: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Platform to generate, repeatable (default: all)
    #[arg(long = "platform", value_enum)]
    platforms: Vec<PlatformArg>,

    /// Skip wcag theme variants and persistence hooks
    #[arg(long)]
    no_theme: bool,

    /// Skip the dark-mode media block in the web stylesheet
    #[arg(long)]
    no_dark: bool,

    /// Skip the runtime blend-utility sources
    #[arg(long)]
    no_blend_utils: bool,

    /// Theme backing the non-suffixed artifacts
    #[arg(long, value_enum)]
    default_theme: Option<ThemeArg>,

    /// CSS custom-property prefix (overrides config)
    #[arg(long)]
    prefix: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    Web,
    Swift,
    Android,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Web => Platform::Web,
            PlatformArg::Swift => Platform::Swift,
            PlatformArg::Android => Platform::Android,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Base,
    Wcag,
}

impl From<ThemeArg> for UserTheme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Base => UserTheme::Base,
            ThemeArg::Wcag => UserTheme::Wcag,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => run_generate(&config, &args),
        Command::Validate { tokens } => run_validate(&tokens),
        Command::Palette => run_palette(),
    }
}

fn load_config(path: Option<&Path>) -> Result<TinctConfig> {
    match path {
        Some(path) => TinctConfig::load(path),
        None => TinctConfig::load_or_default(Path::new(".")),
    }
}

fn run_generate(config: &TinctConfig, args: &GenerateArgs) -> Result<()> {
    let tokens = load_tokens(args.tokens.as_deref())?;
    let platforms = selected_platforms(config, args)?;
    let options = pipeline_options(config, args)?;

    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.dir));

    for platform in platforms {
        let artifacts = generate(platform, &tokens, &options)
            .with_context(|| format!("generation failed for platform {platform}"))?;

        for artifact in artifacts {
            let path = out_dir.join(&artifact.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&path, &artifact.content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote artifact");
        }
    }

    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let tokens = read_token_document(path)?;
    let resolver = ModeThemeResolver::new();

    let mut invalid = 0usize;
    for (name, token) in &tokens {
        if resolver.validate(token) {
            println!("ok      {name}");
        } else {
            invalid += 1;
            println!("invalid {name}");
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} tokens are invalid", tokens.len());
    }
    println!("all {} tokens valid", tokens.len());
    Ok(())
}

fn run_palette() -> Result<()> {
    let json = serde_json::to_string_pretty(&palette::builtin())
        .context("failed to serialize the built-in palette")?;
    println!("{json}");
    Ok(())
}

fn load_tokens(path: Option<&Path>) -> Result<TokenSet> {
    match path {
        Some(path) => read_token_document(path),
        None => Ok(palette::builtin()),
    }
}

fn read_token_document(path: &Path) -> Result<TokenSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let tokens: TokenSet = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse token document {}", path.display()))?;
    Ok(tokens)
}

fn selected_platforms(config: &TinctConfig, args: &GenerateArgs) -> Result<Vec<Platform>> {
    if !args.platforms.is_empty() {
        return Ok(args.platforms.iter().map(|&p| p.into()).collect());
    }
    if !config.output.platforms.is_empty() {
        return config
            .output
            .platforms
            .iter()
            .map(|name| name.parse::<Platform>().map_err(anyhow::Error::msg))
            .collect();
    }
    Ok(Platform::ALL.to_vec())
}

fn pipeline_options(config: &TinctConfig, args: &GenerateArgs) -> Result<PipelineOptions> {
    let default_theme = match args.default_theme {
        Some(theme) => theme.into(),
        None => match config.theme.default_theme.as_str() {
            "base" => UserTheme::Base,
            "wcag" => UserTheme::Wcag,
            other => anyhow::bail!("unknown default theme {other:?} in config"),
        },
    };

    Ok(PipelineOptions {
        include_theme_switching: !args.no_theme && config.theme.switching,
        include_dark_mode: !args.no_dark && config.theme.dark_mode,
        default_theme,
        css_prefix: args
            .prefix
            .clone()
            .unwrap_or_else(|| config.output.css_prefix.clone()),
        include_blend_utilities: !args.no_blend_utils,
        ..PipelineOptions::default()
    })
}
