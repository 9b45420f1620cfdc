/* src/core/rust/src/descriptor.rs */

use std::fmt;

use serde::{Serialize, Serializer};

/// Largest integer an IEEE double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Page classification derived from one pathname.
///
/// `is_page`, `is_post` and `is_archive_root` are mutually exclusive.
/// `is_paginated_archive` and the home/language fields are computed
/// independently and can co-occur with them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
  /// The pathname this descriptor was computed from.
  pub pathname: String,
  /// Language code in effect for the path.
  pub language: String,
  /// Site root under the default language.
  pub is_home_default: bool,
  /// Language root (`/xx`) of a secondary language.
  pub is_home_secondary: bool,
  /// Last segment is the blog index segment.
  pub is_archive_root: bool,
  /// Last segment is numeric.
  pub is_paginated_archive: bool,
  /// Numeric value of the last segment. `Some` iff `is_paginated_archive`.
  #[serde(serialize_with = "serialize_page_number")]
  pub page_number: Option<f64>,
  pub is_page: bool,
  /// Slug of the static page, empty unless `is_page`.
  pub page_name: String,
  pub is_post: bool,
  /// Slug of the blog post, empty unless `is_post`.
  pub post_name: String,
}

/// The single category a template selector acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
  HomeDefault,
  HomeSecondary,
  Page,
  Post,
  ArchiveRoot,
  PaginatedArchive,
  Unclassified,
}

impl PageKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::HomeDefault => "home-default",
      Self::HomeSecondary => "home-secondary",
      Self::Page => "page",
      Self::Post => "post",
      Self::ArchiveRoot => "archive-root",
      Self::PaginatedArchive => "paginated-archive",
      Self::Unclassified => "unclassified",
    }
  }
}

impl fmt::Display for PageKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl PageDescriptor {
  /// Collapse the flags into one kind, by priority: home (default, then
  /// secondary), page, post, archive root, paginated archive.
  pub fn kind(&self) -> PageKind {
    if self.is_home_default {
      PageKind::HomeDefault
    } else if self.is_home_secondary {
      PageKind::HomeSecondary
    } else if self.is_page {
      PageKind::Page
    } else if self.is_post {
      PageKind::Post
    } else if self.is_archive_root {
      PageKind::ArchiveRoot
    } else if self.is_paginated_archive {
      PageKind::PaginatedArchive
    } else {
      PageKind::Unclassified
    }
  }

  /// `page_number` as an index, when it is a finite non-negative integer
  /// that fits in `u32`.
  pub fn page_index(&self) -> Option<u32> {
    let n = self.page_number?;
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) {
      Some(n as u32)
    } else {
      None
    }
  }
}

// Integral values are written as integers, non-finite values as null.
fn serialize_page_number<S: Serializer>(
  value: &Option<f64>,
  serializer: S,
) -> Result<S::Ok, S::Error> {
  match *value {
    Some(n) if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
      serializer.serialize_i64(n as i64)
    }
    Some(n) if n.is_finite() => serializer.serialize_f64(n),
    _ => serializer.serialize_none(),
  }
}
