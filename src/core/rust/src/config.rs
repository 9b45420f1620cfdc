/* src/core/rust/src/config.rs */

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::segments::js_length;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_BLOG_PATH: &str = "blog";

/// How a two-letter first segment is recognized as a language code.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCheck {
  /// Any two-letter first segment is a language, listed or not.
  #[default]
  Any,
  /// Only first segments listed in `locales` are languages.
  Known,
}

impl LocaleCheck {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Any => "any",
      Self::Known => "known",
    }
  }
}

/// Site language settings the classifier runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
  pub locales: Vec<String>,
  pub default: String,
  /// Reserved segment of the blog index and its posts, e.g. "blog".
  pub blog_path: String,
  pub locale_check: LocaleCheck,
}

impl Default for I18nConfig {
  fn default() -> Self {
    Self {
      locales: vec![DEFAULT_LANGUAGE.to_string()],
      default: DEFAULT_LANGUAGE.to_string(),
      blog_path: DEFAULT_BLOG_PATH.to_string(),
      locale_check: LocaleCheck::Any,
    }
  }
}

impl I18nConfig {
  pub fn new(locales: Vec<String>, default: impl Into<String>) -> Self {
    Self { locales, default: default.into(), ..Self::default() }
  }

  pub fn with_blog_path(mut self, blog_path: impl Into<String>) -> Self {
    self.blog_path = blog_path.into();
    self
  }

  pub fn with_locale_check(mut self, locale_check: LocaleCheck) -> Self {
    self.locale_check = locale_check;
    self
  }

  pub fn is_locale(&self, code: &str) -> bool {
    self.locales.iter().any(|l| l == code)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.locales.is_empty() {
      return Err(ConfigError::NoLocales);
    }
    if let Some(bad) = self.locales.iter().find(|l| js_length(l) != 2) {
      return Err(ConfigError::InvalidLocale(bad.clone()));
    }
    if !self.is_locale(&self.default) {
      return Err(ConfigError::DefaultNotListed {
        default: self.default.clone(),
        locales: self.locales.clone(),
      });
    }
    if self.blog_path.is_empty() || self.blog_path.contains('/') {
      return Err(ConfigError::InvalidBlogPath(self.blog_path.clone()));
    }
    Ok(())
  }
}
