//! Prism CLI
//!
//! Inspect the theme catalog, print CSS variables and stylesheets, and drive
//! the runtime applier against a file-backed document root.

mod commands;
mod state;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prism_theme::{
    ColorScheme, ColorSchemeSource, FixedColorScheme, PrismConfig, SystemColorScheme,
    ThemeApplier, ThemeRegistry, ThemeSession,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::VarsFormat;
use crate::state::StateDir;

/// Design-token themes: composition, CSS variables and runtime application
#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Compose design-token themes and apply them to a document root")]
#[command(version)]
struct Cli {
    /// Config file or directory containing prism.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the document root and persisted preferences
    #[arg(long, global = true, default_value = ".prism")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered themes
    List,

    /// Print a theme's tokens as JSON
    Show { name: String },

    /// Print a theme's CSS variables
    Vars {
        name: String,
        /// Variable name prefix (defaults to the configured prefix)
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long, value_enum, default_value_t = VarsFormat::Css)]
        format: VarsFormat,
    },

    /// Print a stylesheet covering every registered theme
    Stylesheet {
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Apply a theme and remember the choice
    Apply { name: String },

    /// Toggle between light and dark
    Toggle,

    /// Print the applied theme
    Current,

    /// Remove the theme and forget the saved choice
    Remove,

    /// Reconcile saved choice, system preference and default
    Init {
        /// Use this system preference instead of detecting it
        #[arg(long)]
        system: Option<ColorScheme>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let registry = Arc::new(config.registry().context("Invalid theme catalog")?);
    let runtime = &config.runtime;

    match cli.command {
        Command::List => print!("{}", commands::list_themes(&registry)),
        Command::Show { name } => println!("{}", commands::show_theme(&registry, &name)?),
        Command::Vars {
            name,
            prefix,
            format,
        } => {
            let prefix = prefix.as_deref().unwrap_or(&runtime.prefix);
            let out = commands::theme_vars(&registry, &name, prefix, &runtime.attribute, format)?;
            println!("{}", out.trim_end());
        }
        Command::Stylesheet { prefix } => {
            let prefix = prefix.as_deref().unwrap_or(&runtime.prefix);
            print!("{}", commands::stylesheet(&registry, prefix, &runtime.attribute));
        }
        Command::Apply { name } => with_session(&cli.state_dir, &config, registry, None, |s| {
            if !s.select(&name) {
                anyhow::bail!("Unknown theme `{name}`. Run `prism list` to see themes.");
            }
            println!("{}", s.current());
            Ok(())
        })?,
        Command::Toggle => with_session(&cli.state_dir, &config, registry, None, |s| {
            println!("{}", s.toggle());
            Ok(())
        })?,
        Command::Current => with_session(&cli.state_dir, &config, registry, None, |s| {
            println!("{}", s.current());
            Ok(())
        })?,
        Command::Remove => with_session(&cli.state_dir, &config, registry, None, |s| {
            s.reset();
            Ok(())
        })?,
        Command::Init { system } => {
            with_session(&cli.state_dir, &config, registry, system, |s| {
                println!("{}", serde_json::to_string_pretty(s.initialize())?);
                Ok(())
            })?
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<PrismConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let local = PathBuf::from(prism_theme::config::CONFIG_FILE);
            if !local.exists() {
                debug!("no {} found; using built-in catalog", local.display());
                return Ok(PrismConfig::default());
            }
            local
        }
    };
    debug!(path = %path.display(), "loading config");
    PrismConfig::load(&path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Load the document root, run one session operation, save the root
fn with_session<F>(
    state_dir: &Path,
    config: &PrismConfig,
    registry: Arc<ThemeRegistry>,
    system: Option<ColorScheme>,
    f: F,
) -> Result<()>
where
    F: FnOnce(&ThemeSession) -> Result<()>,
{
    let state = StateDir::new(state_dir);
    let document = Arc::new(state.load_document()?);

    let system: Arc<dyn ColorSchemeSource> = match system {
        Some(scheme) => Arc::new(FixedColorScheme(Some(scheme))),
        None => Arc::new(SystemColorScheme),
    };
    let applier =
        ThemeApplier::new(registry, document.clone()).with_dark_class(&config.runtime.dark_class);
    let session = ThemeSession::new(applier, Arc::new(state.preferences()), system)
        .with_storage_key(&config.runtime.storage_key)
        .with_options(config.runtime.apply_options());

    f(&session)?;
    state.save_document(&document)
}
