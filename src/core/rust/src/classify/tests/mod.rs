/* src/core/rust/src/classify/tests/mod.rs */

use super::*;
use crate::descriptor::PageKind;


fn known() -> Vec<String> {
  vec!["en".to_string(), "fr".to_string(), "de".to_string()]
}

/// Classify against the default site: English default, blog under "blog".
fn site(pathname: &str) -> PageDescriptor {
  classify(pathname, &known(), "en", "blog")
}
