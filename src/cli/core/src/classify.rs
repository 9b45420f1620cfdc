/* src/cli/core/src/classify.rs */

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use langpath::{Classifier, PageDescriptor};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// One compact JSON object per line
  #[default]
  Json,
  /// A single pretty-printed JSON array
  Pretty,
  /// `<path>\t<kind>` per line
  Kind,
}

/// Read one pathname per line. Blank lines are skipped; other lines are kept
/// verbatim apart from the line terminator, since whitespace inside a path
/// affects classification.
pub fn read_paths(reader: impl BufRead) -> Result<Vec<String>> {
  let mut paths = Vec::new();
  for line in reader.lines() {
    let line = line.context("failed to read path from stdin")?;
    let line = line.strip_suffix('\r').unwrap_or(&line);
    if line.trim().is_empty() {
      continue;
    }
    paths.push(line.to_string());
  }
  Ok(paths)
}

pub fn render(descriptors: &[PageDescriptor], format: OutputFormat) -> Result<String> {
  let mut out = String::new();
  match format {
    OutputFormat::Json => {
      for d in descriptors {
        out.push_str(&serde_json::to_string(d).context("failed to serialize descriptor")?);
        out.push('\n');
      }
    }
    OutputFormat::Pretty => {
      out.push_str(
        &serde_json::to_string_pretty(descriptors).context("failed to serialize descriptors")?,
      );
      out.push('\n');
    }
    OutputFormat::Kind => {
      for d in descriptors {
        out.push_str(&format!("{}\t{}\n", d.pathname, d.kind()));
      }
    }
  }
  Ok(out)
}

/// Classify every path and write the rendered result to `out`.
pub fn run_classify(
  classifier: &Classifier,
  paths: &[String],
  format: OutputFormat,
  out: &mut impl Write,
) -> Result<()> {
  let descriptors: Vec<PageDescriptor> = paths.iter().map(|p| classifier.classify(p)).collect();
  debug!(count = descriptors.len(), "classified paths");
  out.write_all(render(&descriptors, format)?.as_bytes()).context("failed to write output")?;
  out.flush().context("failed to flush output")?;
  Ok(())
}
