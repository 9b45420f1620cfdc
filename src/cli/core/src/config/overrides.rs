/* src/cli/core/src/config/overrides.rs */

use clap::Args;
use langpath::{I18nConfig, LocaleCheck};

/// Command-line overrides applied on top of the loaded `[i18n]` table.
#[derive(Debug, Clone, Default, Args)]
pub struct I18nOverrides {
  /// Language used when the path carries no language segment
  #[arg(long, global = true)]
  pub default_language: Option<String>,
  /// Reserved segment of the blog index and posts
  #[arg(long, global = true)]
  pub blog_path: Option<String>,
  /// Site locale (repeatable, replaces the configured list). When the
  /// configured default is not in the new list, the first one becomes the default
  #[arg(long = "locale", global = true)]
  pub locales: Vec<String>,
  /// Only treat listed locales as language segments
  #[arg(long, global = true)]
  pub known_locales_only: bool,
}

impl I18nOverrides {
  pub fn apply(&self, mut config: I18nConfig) -> I18nConfig {
    if !self.locales.is_empty() {
      config.locales = self.locales.clone();
      if !config.is_locale(&config.default) {
        config.default = self.locales[0].clone();
      }
    }
    if let Some(ref default) = self.default_language {
      config.default = default.clone();
    }
    if let Some(ref blog_path) = self.blog_path {
      config.blog_path = blog_path.clone();
    }
    if self.known_locales_only {
      config.locale_check = LocaleCheck::Known;
    }
    config
  }
}
