/* src/core/rust/src/classify/mod.rs */

use tracing::trace;

use crate::config::{I18nConfig, LocaleCheck};
use crate::descriptor::PageDescriptor;
use crate::errors::ConfigError;
use crate::segments::{js_length, split_segments, to_number};

#[cfg(test)]
mod tests;

/// Classify `pathname` for a site whose default language is
/// `default_language` and whose blog lives under `blog_segment`.
///
/// Any two-letter first segment is taken as the language code;
/// `known_languages` is not consulted. Use a [`Classifier`] with
/// [`LocaleCheck::Known`] to restrict languages to a list.
pub fn classify(
  pathname: &str,
  _known_languages: &[String],
  default_language: &str,
  blog_segment: &str,
) -> PageDescriptor {
  classify_segments(pathname, default_language, blog_segment, |_| true)
}

/// Reusable classifier bound to a validated [`I18nConfig`].
#[derive(Debug, Clone)]
pub struct Classifier {
  config: I18nConfig,
}

impl Classifier {
  pub fn new(config: I18nConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &I18nConfig {
    &self.config
  }

  pub fn classify(&self, pathname: &str) -> PageDescriptor {
    let cfg = &self.config;
    let descriptor = match cfg.locale_check {
      LocaleCheck::Any => classify_segments(pathname, &cfg.default, &cfg.blog_path, |_| true),
      LocaleCheck::Known => {
        classify_segments(pathname, &cfg.default, &cfg.blog_path, |code| cfg.is_locale(code))
      }
    };
    trace!(pathname, kind = %descriptor.kind(), language = %descriptor.language, "classified path");
    descriptor
  }
}

/// Every field is recomputed from the segments; nothing carries over
/// between calls.
fn classify_segments(
  pathname: &str,
  default_language: &str,
  blog_segment: &str,
  is_language: impl Fn(&str) -> bool,
) -> PageDescriptor {
  let segs = split_segments(pathname);
  let first = segs.first().copied();
  let last = segs.last().copied();
  let second_to_last = segs.iter().rev().nth(1).copied();

  let path_language = first.filter(|&f| js_length(f) == 2 && is_language(f));
  let language = path_language.unwrap_or(default_language).to_string();

  let is_home_default = segs.is_empty();
  let is_home_secondary = path_language.is_some() && segs.len() == 1;

  let page_number = last.map(to_number).filter(|n| !n.is_nan());
  let last_is_numeric = page_number.is_some();

  let mut descriptor = PageDescriptor {
    pathname: pathname.to_string(),
    language,
    is_home_default,
    is_home_secondary,
    is_archive_root: false,
    is_paginated_archive: last_is_numeric,
    page_number,
    is_page: false,
    page_name: String::new(),
    is_post: false,
    post_name: String::new(),
  };

  let Some(last) = last else {
    return descriptor;
  };
  let under_blog = second_to_last == Some(blog_segment);

  // Checked in order: page, post, archive root. At most one applies.
  if last != blog_segment && js_length(last) > 2 && !under_blog {
    descriptor.is_page = true;
    descriptor.page_name = last.to_string();
  } else if under_blog && !last_is_numeric {
    descriptor.is_post = true;
    descriptor.post_name = last.to_string();
  } else if last == blog_segment {
    descriptor.is_archive_root = true;
  }

  descriptor
}
