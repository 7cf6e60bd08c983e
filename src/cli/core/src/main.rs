/* src/cli/core/src/main.rs */

mod config;
mod render;
mod serve;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{ElfinderConfig, find_config, load_config};
use render::{RenderArgs, render_widget};

#[derive(Parser)]
#[command(name = "elfinder", about = "elFinder embed CLI", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the widget's resource tags, container and init script
  Render {
    /// Path to elfinder.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Ambient locale (defaults to server.default_locale)
    #[arg(short, long)]
    locale: Option<String>,
    /// CSRF token to embed (random if omitted)
    #[arg(long)]
    csrf: Option<String>,
    /// Print a complete HTML document with the file manager filling the window
    #[arg(long)]
    full_page: bool,
    /// Do not load any translation file
    #[arg(long)]
    lang_off: bool,
  },
  /// Serve a standalone file manager page
  Serve {
    /// Path to elfinder.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Port to listen on (defaults to server.port)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// List the locale table (lookup key -> translation file suffix)
  Locales,
}

/// Logs go to stderr so `render` output can be piped.
fn setup_tracing() {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("elfinder=info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, ElfinderConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_config(&cwd)?
    }
  };
  let config = load_config(&path)?;
  Ok((path, config))
}

fn write_stdout(text: &str) -> Result<()> {
  let mut out = std::io::stdout().lock();
  writeln!(out, "{text}").context("failed to write to stdout")?;
  out.flush().context("failed to flush stdout")
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_tracing();

  match cli.command {
    Command::Render { config, locale, csrf, full_page, lang_off } => {
      let (path, config) = resolve_config(config)?;
      tracing::debug!(config = %path.display(), "loaded config");
      let args = RenderArgs { locale, csrf, full_page, lang_off };
      write_stdout(&render_widget(&config, &args)?)?;
    }
    Command::Serve { config, port } => {
      let (path, config) = resolve_config(config)?;
      let port = port.unwrap_or(config.server.port);
      serve::run_serve(&config, &path, port).await?;
    }
    Command::Locales => {
      let table = elfinder_engine::locale_table()
        .iter()
        .map(|(key, suffix)| format!("{key:<8} -> {suffix}"))
        .collect::<Vec<_>>()
        .join("\n");
      write_stdout(&table)?;
    }
  }
  Ok(())
}
