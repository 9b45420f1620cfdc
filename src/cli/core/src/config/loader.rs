/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::types::LangpathConfig;

pub const CONFIG_FILE: &str = "langpath.toml";

/// Walk upward from `start` to find `langpath.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
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

pub fn load_config(path: &Path) -> Result<LangpathConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: LangpathConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  if let Some(ref i18n) = config.i18n {
    i18n.validate().with_context(|| format!("invalid [i18n] in {}", path.display()))?;
  }
  debug!(path = %path.display(), "loaded config");
  Ok(config)
}

/// Load the explicit config, else the nearest one above `cwd`, else defaults.
/// Returns the path the config came from, if any.
pub fn resolve_config(
  explicit: Option<PathBuf>,
  cwd: &Path,
) -> Result<(Option<PathBuf>, LangpathConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => match find_config(cwd) {
      Ok(p) => p,
      Err(e) => {
        debug!("{e:#}; using built-in defaults");
        return Ok((None, LangpathConfig::default()));
      }
    },
  };
  let config = load_config(&path)?;
  Ok((Some(path), config))
}
