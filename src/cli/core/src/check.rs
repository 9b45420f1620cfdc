/* src/cli/core/src/check.rs */

// Configuration summary for `langpath check`.

use std::path::Path;

use langpath::Classifier;

use crate::config::LangpathConfig;
use crate::ui::{self, DIM, RESET};

/// Lines describing the effective configuration, without styling.
pub fn summary_lines(
  source: Option<&Path>,
  site: &LangpathConfig,
  classifier: &Classifier,
) -> Vec<String> {
  let cfg = classifier.config();
  let source = source.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
  let mut lines = vec![format!("config       {source}")];
  if let Some(ref name) = site.site.name {
    lines.push(format!("site         {name}"));
  }
  lines.push(format!("locales      {}", cfg.locales.join(", ")));
  lines.push(format!("default      {}", cfg.default));
  lines.push(format!("blog path    /{}", cfg.blog_path));
  lines.push(format!("locale check {}", cfg.locale_check.as_str()));
  lines
}

pub fn run_check(source: Option<&Path>, site: &LangpathConfig, classifier: &Classifier) {
  ui::banner("check");
  if source.is_none() {
    ui::warn("no langpath.toml found, using built-in defaults");
  }
  for line in summary_lines(source, site, classifier) {
    ui::detail(&format!("{DIM}{line}{RESET}"));
  }
  ui::blank();
  ui::ok("configuration is valid");
}
