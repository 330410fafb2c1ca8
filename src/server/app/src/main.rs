/* src/server/app/src/main.rs */

mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use epoxy_content::{ContentSources, ContentStore, static_paths};
use epoxy_server::site_server;
use epoxy_server_axum::IntoAxumRouter;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::SiteConfig;

#[derive(Parser)]
#[command(name = "epoxy-site", about = "Epoxy Maestro site server")]
struct Cli {
  /// Path to site.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve pages, procedures and static images
  Serve {
    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,
    /// Override content.latency_ms
    #[arg(long)]
    latency_ms: Option<u64>,
  },
  /// Load and validate the content, then exit
  Check,
  /// Print every localized page path
  Routes,
}

fn load_store(config: &SiteConfig) -> Result<ContentStore> {
  let sources = match &config.content.dir {
    Some(dir) => ContentSources::from_dir(dir)
      .with_context(|| format!("failed to read content from {}", dir.display()))?,
    None => ContentSources::embedded(),
  };
  ContentStore::load(&sources).context("content failed validation")
}

async fn serve(config: SiteConfig) -> Result<()> {
  let store = Arc::new(load_store(&config)?);
  let latency = Duration::from_millis(config.content.latency_ms);
  let images = config.server.public_dir.join("images");

  let router = site_server(store, latency)
    .locale_cookie(config.server.locale_cookie.clone())
    .into_axum_router()
    .nest_service("/images", ServeDir::new(&images))
    .layer(TraceLayer::new_for_http());

  let addr = config.addr();
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  info!(
    addr = %listener.local_addr()?,
    images = %images.display(),
    latency_ms = config.content.latency_ms,
    "site server listening"
  );
  axum::serve(listener, router)
    .with_graceful_shutdown(async {
      let _ = tokio::signal::ctrl_c().await;
      info!("shutting down");
    })
    .await
    .context("server error")
}

#[allow(clippy::print_stdout)]
fn print_routes(store: &ContentStore) {
  for path in static_paths(store) {
    println!("{path}");
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let cli = Cli::parse();
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let (path, mut config) =
    config::resolve_config(cli.config.as_deref(), &cwd, |key| std::env::var(key).ok())?;
  match &path {
    Some(p) => info!(config = %p.display(), "loaded configuration"),
    None => info!("no site.toml found, using defaults"),
  }

  match cli.command {
    Command::Serve { port, latency_ms } => {
      if let Some(port) = port {
        config.server.port = port;
      }
      if let Some(ms) = latency_ms {
        config.content.latency_ms = ms;
      }
      config.validate()?;
      serve(config).await
    }
    Command::Check => {
      let store = load_store(&config)?;
      info!(
        pages = static_paths(&store).len(),
        services = store.services().len(),
        posts = store.blogs().len(),
        "content ok"
      );
      Ok(())
    }
    Command::Routes => {
      print_routes(&load_store(&config)?);
      Ok(())
    }
  }
}
