/* src/core/rust/src/lib.rs */

pub mod classify;
pub mod config;
pub mod descriptor;
pub mod errors;
pub mod segments;

// Re-exports for ergonomic use
pub use classify::{Classifier, classify};
pub use config::{DEFAULT_BLOG_PATH, DEFAULT_LANGUAGE, I18nConfig, LocaleCheck};
pub use descriptor::{PageDescriptor, PageKind};
pub use errors::ConfigError;
pub use segments::{is_numeric, js_length, split_segments, to_number};
