/* src/cli/core/src/main.rs */

mod check;
mod classify;
mod config;
mod ui;

use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use langpath::Classifier;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use classify::OutputFormat;
use config::{I18nOverrides, resolve_config};

/// Environment variable holding the tracing filter directives.
const LOG_ENV: &str = "LANGPATH_LOG";

#[derive(Parser)]
#[command(name = "langpath", about = "Classify multi-language blog pathnames", version)]
struct Cli {
  /// Path to langpath.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  /// Log at debug level unless LANGPATH_LOG says otherwise
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(flatten)]
  overrides: I18nOverrides,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Classify pathnames given as arguments, or one per line on stdin
  Classify {
    /// Pathnames to classify, e.g. /fr/blog/2
    paths: Vec<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
  },
  /// Validate the configuration and print a summary
  Check,
}

fn init_tracing(verbose: bool) {
  let fallback = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .init();
}

/// Resolve configuration and execute the parsed command. `stdin` is read
/// only by `classify` when no paths are given.
fn run(cli: Cli, cwd: &Path, stdin: impl BufRead, stdout: &mut impl Write) -> Result<()> {
  let (source, site) = resolve_config(cli.config, cwd)?;
  let i18n = cli.overrides.apply(site.i18n_config());
  debug!(?i18n, "effective i18n config");
  let classifier = Classifier::new(i18n).context("invalid i18n configuration")?;

  match cli.command {
    Command::Classify { paths, format } => {
      let paths = if paths.is_empty() { classify::read_paths(stdin)? } else { paths };
      classify::run_classify(&classifier, &paths, format, stdout)?;
    }
    Command::Check => {
      check::run_check(source.as_deref(), &site, &classifier);
    }
  }
  Ok(())
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let stdin = std::io::stdin();
  let reads_stdin = matches!(cli.command, Command::Classify { ref paths, .. } if paths.is_empty());
  if reads_stdin && stdin.is_terminal() {
    ui::hint("reading paths from stdin, one per line (Ctrl-D to finish)");
  }

  let cwd = std::env::current_dir().context("failed to get cwd")?;
  run(cli, &cwd, stdin.lock(), &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("langpath").chain(args.iter().copied())).unwrap()
  }

  fn run_to_string(args: &[&str], cwd: &Path, stdin: &str) -> Result<String> {
    let mut out = Vec::new();
    run(parse(args), cwd, stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
  }

  #[test]
  fn global_flags_after_subcommand() {
    let cli = parse(&[
      "classify",
      "/fr",
      "-c",
      "site.toml",
      "-v",
      "--locale",
      "en",
      "--locale",
      "fr",
      "--default-language",
      "fr",
      "--blog-path",
      "news",
      "--known-locales-only",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    assert!(cli.verbose);
    assert_eq!(cli.overrides.locales, vec!["en".to_string(), "fr".to_string()]);
    assert_eq!(cli.overrides.default_language.as_deref(), Some("fr"));
    assert_eq!(cli.overrides.blog_path.as_deref(), Some("news"));
    assert!(cli.overrides.known_locales_only);
    assert!(matches!(cli.command, Command::Classify { ref paths, .. } if paths == &["/fr"]));
  }

  #[test]
  fn global_flags_before_subcommand() {
    let cli = parse(&["--config", "a.toml", "--locale", "de", "check"]);
    assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
    assert_eq!(cli.overrides.locales, vec!["de".to_string()]);
    assert!(!cli.verbose);
    assert!(matches!(cli.command, Command::Check));
  }

  #[test]
  fn format_values() {
    fn format_of(args: &[&str]) -> OutputFormat {
      match parse(args).command {
        Command::Classify { format, .. } => format,
        Command::Check => panic!("expected classify"),
      }
    }
    assert_eq!(format_of(&["classify", "/"]), OutputFormat::Json);
    assert_eq!(format_of(&["classify", "-f", "kind", "/"]), OutputFormat::Kind);
    assert_eq!(format_of(&["classify", "--format", "pretty"]), OutputFormat::Pretty);
    assert!(Cli::try_parse_from(["langpath", "classify", "--format", "yaml"]).is_err());
  }

  #[test]
  fn paths_from_arguments() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_to_string(&["classify", "-f", "kind", "/fr", "/blog/2"], tmp.path(), "").unwrap();
    assert_eq!(out, "/fr\thome-secondary\n/blog/2\tpaginated-archive\n");
  }

  #[test]
  fn paths_from_stdin_when_none_given() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_to_string(&["classify", "-f", "kind"], tmp.path(), "/about-us\n\n/blog\n").unwrap();
    assert_eq!(out, "/about-us\tpage\n/blog\tarchive-root\n");
  }

  #[test]
  fn dash_leading_path_after_separator() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_to_string(&["classify", "--", "-1"], tmp.path(), "").unwrap();
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["language"], "-1");
    assert_eq!(value["isHomeSecondary"], true);
    assert_eq!(value["pageNumber"], -1);
  }

  #[test]
  fn overrides_reach_the_classifier() {
    let tmp = tempfile::tempdir().unwrap();
    let args = ["classify", "-f", "kind", "--blog-path", "news", "--known-locales-only", "/news", "/xx"];
    let out = run_to_string(&args, tmp.path(), "").unwrap();
    assert_eq!(out, "/news\tarchive-root\n/xx\tunclassified\n");
  }

  #[test]
  fn config_file_is_used() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("site.toml");
    std::fs::write(&path, "[i18n]\nlocales = [\"fr\", \"en\"]\ndefault = \"fr\"\nblog_path = \"carnet\"\n")
      .unwrap();
    let config = path.to_str().unwrap();
    let out = run_to_string(&["classify", "--config", config, "/", "/carnet/bonjour"], tmp.path(), "")
      .unwrap();
    let lines: Vec<serde_json::Value> =
      out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines[0]["language"], "fr");
    assert_eq!(lines[1]["postName"], "bonjour");
  }

  #[test]
  fn invalid_overrides_are_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err =
      run_to_string(&["classify", "--locale", "fr", "--default-language", "de", "/"], tmp.path(), "")
        .unwrap_err();
    assert!(format!("{err:#}").contains("invalid i18n configuration"), "{err:#}");

    let err = run_to_string(&["check", "--blog-path", "a/b"], tmp.path(), "").unwrap_err();
    assert!(format!("{err:#}").contains("single non-empty path segment"), "{err:#}");
  }

  #[test]
  fn missing_explicit_config_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");
    let result = run_to_string(&["check", "-c", missing.to_str().unwrap()], tmp.path(), "");
    assert!(result.is_err());
  }
}
