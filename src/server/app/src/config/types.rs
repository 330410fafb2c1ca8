/* src/server/app/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub content: ContentSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// Directory holding `images/`, served under `/images`.
  #[serde(default = "default_public_dir")]
  pub public_dir: PathBuf,
  #[serde(default = "default_locale_cookie")]
  pub locale_cookie: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      public_dir: default_public_dir(),
      locale_cookie: default_locale_cookie(),
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentSection {
  /// Overrides the embedded documents file by file when set.
  #[serde(default)]
  pub dir: Option<PathBuf>,
  #[serde(default)]
  pub latency_ms: u64,
}

const MAX_LATENCY_MS: u64 = 10_000;

impl SiteConfig {
  pub fn validate(&self) -> Result<()> {
    if self.server.host.trim().is_empty() {
      bail!("server.host must not be empty");
    }
    if self.server.port == 0 {
      bail!("server.port must not be 0");
    }
    let cookie = &self.server.locale_cookie;
    if cookie.is_empty() || cookie.contains(|c: char| c.is_whitespace() || c == ';' || c == '=') {
      bail!("server.locale_cookie \"{cookie}\" is not a valid cookie name");
    }
    if self.content.latency_ms > MAX_LATENCY_MS {
      bail!("content.latency_ms must be at most {MAX_LATENCY_MS}, got {}", self.content.latency_ms);
    }
    Ok(())
  }

  /// Apply `PORT` and `SITE_CONTENT_DIR`, read through `var` so tests can
  /// supply their own environment.
  pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(port) = var("PORT") {
      self.server.port = port.trim().parse().with_context(|| format!("PORT \"{port}\" is not a port"))?;
    }
    if let Some(dir) = var("SITE_CONTENT_DIR")
      && !dir.is_empty()
    {
      self.content.dir = Some(PathBuf::from(dir));
    }
    Ok(())
  }

  /// Relative paths are taken relative to the directory holding `site.toml`.
  pub fn resolve_paths(&mut self, base_dir: &Path) {
    if self.server.public_dir.is_relative() {
      self.server.public_dir = base_dir.join(&self.server.public_dir);
    }
    if let Some(dir) = &self.content.dir
      && dir.is_relative()
    {
      self.content.dir = Some(base_dir.join(dir));
    }
  }

  pub fn addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_public_dir() -> PathBuf {
  PathBuf::from("public")
}

fn default_locale_cookie() -> String {
  epoxy_server::DEFAULT_LOCALE_COOKIE.to_string()
}
