/* src/server/app/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::SiteConfig;

pub const CONFIG_FILE: &str = "site.toml";

/// Walk upward from `start` to find `site.toml`, like Cargo.toml discovery
pub fn find_site_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: SiteConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  if let Some(base) = path.parent() {
    config.resolve_paths(base);
  }
  Ok(config)
}

/// Explicit path, else `site.toml` found upward from `cwd`, else defaults.
/// Environment overrides are applied last, then the result is validated.
pub fn resolve_config(
  explicit: Option<&Path>,
  cwd: &Path,
  var: impl Fn(&str) -> Option<String>,
) -> Result<(Option<PathBuf>, SiteConfig)> {
  let (path, mut config) = match explicit {
    Some(p) => (Some(p.to_path_buf()), load_site_config(p)?),
    None => match find_site_config(cwd) {
      Ok(p) => {
        let config = load_site_config(&p)?;
        (Some(p), config)
      }
      Err(_) => {
        let mut config = SiteConfig::default();
        config.resolve_paths(cwd);
        (None, config)
      }
    },
  };
  config.apply_env(var)?;
  config.validate()?;
  Ok((path, config))
}
