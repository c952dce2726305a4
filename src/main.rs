use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use newsdeck::app::{App, AppEvent};
use newsdeck::config::Config;
use newsdeck::source::Category;
use newsdeck::ui;

/// Environment variable consulted for the API key before the config file.
const API_KEY_ENV: &str = "NEWSDECK_API_KEY";

/// Get the config file path (~/.config/newsdeck/config.toml).
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("newsdeck")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(
    name = "newsdeck",
    about = "Terminal news browser with category headlines and search"
)]
struct Args {
    /// Use an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run against the built-in demo source, ignoring any configured API key
    #[arg(long)]
    demo: bool,

    /// Category to open on startup (overrides the config file)
    #[arg(long, value_name = "CATEGORY")]
    category: Option<Category>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging. Logs go to stderr so they do
    // not tear the alternate-screen UI.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Key precedence: --demo wins, then the env var, then the config file
    if args.demo {
        config.api_key = None;
    } else if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.api_key = Some(key);
        }
    }

    if let Some(category) = args.category {
        config.default_category = category;
    }

    let mut app = App::new(&config).context("Failed to create application")?;

    // Event channel for background fetch tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Kick off the initial headlines fetch before entering the loop
    let request = app.controller.refresh();
    app.dispatch(request, &event_tx);

    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
