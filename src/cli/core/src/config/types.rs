/* src/cli/core/src/config/types.rs */

use anyhow::Result;
use langpath::{DEFAULT_BLOG_PATH, DEFAULT_LANGUAGE, I18nConfig, LocaleCheck};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangpathConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub i18n: Option<I18nSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSection {
  pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  pub locales: Vec<String>,
  #[serde(default = "default_i18n_default")]
  pub default: String,
  #[serde(default = "default_blog_path")]
  pub blog_path: String,
  #[serde(default)]
  pub locale_check: LocaleCheck,
}

impl I18nSection {
  pub fn to_config(&self) -> I18nConfig {
    I18nConfig::new(self.locales.clone(), self.default.clone())
      .with_blog_path(self.blog_path.clone())
      .with_locale_check(self.locale_check)
  }

  pub fn validate(&self) -> Result<()> {
    self.to_config().validate()?;
    Ok(())
  }
}

fn default_i18n_default() -> String {
  DEFAULT_LANGUAGE.to_string()
}

fn default_blog_path() -> String {
  DEFAULT_BLOG_PATH.to_string()
}

impl LangpathConfig {
  /// Runtime i18n settings; a missing `[i18n]` table means the built-in defaults.
  pub fn i18n_config(&self) -> I18nConfig {
    self.i18n.as_ref().map_or_else(I18nConfig::default, I18nSection::to_config)
  }
}
