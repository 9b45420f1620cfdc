/* src/core/rust/src/errors.rs */

use thiserror::Error;

/// Rejected i18n configuration. Classification itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("i18n.locales must not be empty")]
  NoLocales,

  #[error("i18n locale \"{0}\" is not a two-letter code")]
  InvalidLocale(String),

  #[error("i18n.default \"{default}\" is not in i18n.locales {locales:?}")]
  DefaultNotListed { default: String, locales: Vec<String> },

  #[error("i18n.blog_path \"{0}\" must be a single non-empty path segment")]
  InvalidBlogPath(String),
}
