//! html5check command line
//!
//! Validates HTML documents from files, an inline string or standard input.
//!
//! Exit status:
//! - 0: every document is valid
//! - 1: at least one document is invalid
//! - 2: input or configuration could not be read, or a document could not
//!   be lexed

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use html5check::{
    Config, Error, Event, Mode, Options, Position, Report, validate_inspecting, validate_with,
};
use html5check_rules::RuleTables;
use owo_colors::OwoColorize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// html5check - structural and attribute validation for HTML5 documents
#[derive(Parser, Debug)]
#[command(name = "html5check")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Validate files, stopping at the first problem in each
    html5check index.html about.html

    # Report every problem
    html5check --accumulate index.html

    # Validate standard input
    curl -s https://example.com | html5check

    # Validate an inline fragment
    html5check --html '<ul><li>one<li>two</ul>'

    # Machine-readable reports with extra allowed attributes
    html5check --json --config html5check.json index.html
"#)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// HTML files to validate (reads standard input when none are given)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Validate this HTML string instead of files
    #[arg(long, value_name = "HTML", conflicts_with = "files")]
    html: Option<String>,

    /// Report every problem instead of stopping at the first
    #[arg(short, long)]
    accumulate: bool,

    /// Treat a missing <!DOCTYPE> as an error
    #[arg(long)]
    require_doctype: bool,

    /// JSON configuration file (mode, require_doctype, rules)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print one JSON report per document
    #[arg(long)]
    json: bool,

    /// Print the validation events of each document
    #[arg(long)]
    events: bool,

    /// Log validator decisions to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// Result of checking one document; the worst one decides the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Outcome {
    Valid,
    Invalid,
    Failed,
}

impl Outcome {
    fn exit_code(self) -> ExitCode {
        match self {
            Self::Valid => ExitCode::SUCCESS,
            Self::Invalid => ExitCode::from(1),
            Self::Failed => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            Outcome::Failed.exit_code()
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "off" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<Outcome> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if cli.accumulate {
        config.mode = Mode::Accumulate;
    }
    if cli.require_doctype {
        config.require_doctype = true;
    }

    let options = config.options();
    let rules = config.rule_tables();

    if let Some(html) = &cli.html {
        return check_document(cli, "<html>", html, &rules, options);
    }

    if cli.files.is_empty() {
        let mut text = String::new();
        let _ = io::stdin()
            .read_to_string(&mut text)
            .context("reading standard input")?;
        return check_document(cli, "<stdin>", &text, &rules, options);
    }

    let mut worst = Outcome::Valid;
    for path in &cli.files {
        let name = path.display().to_string();
        let outcome = match fs::read_to_string(path) {
            Ok(text) => check_document(cli, &name, &text, &rules, options)?,
            Err(error) => {
                eprintln!("{} {name}: {error}", "error:".red().bold());
                Outcome::Failed
            }
        };
        worst = worst.max(outcome);
    }
    Ok(worst)
}

fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading configuration file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing configuration file {}", path.display()))
}

fn check_document(
    cli: &Cli,
    name: &str,
    text: &str,
    rules: &RuleTables,
    options: Options,
) -> Result<Outcome> {
    tracing::debug!(document = name, mode = %options.mode, "checking");

    let result = if cli.events {
        let mut events = Vec::new();
        let result = validate_inspecting(text, rules, options, |token, produced| {
            events.extend(produced.into_iter().map(|event| (token.position, event)));
        });
        print_events(cli.json, &events)?;
        result
    } else {
        validate_with(text, rules, options)
    };

    match result {
        Ok(report) => {
            print_report(cli.json, name, &report)?;
            Ok(if report.is_valid() {
                Outcome::Valid
            } else {
                Outcome::Invalid
            })
        }
        Err(Error::Invalid(violation)) => {
            if cli.json {
                let value = json!({ "file": name, "valid": false, "errors": [violation] });
                println!("{}", serde_json::to_string(&value)?);
            } else {
                println!("{name}:{}", violation.red());
            }
            Ok(Outcome::Invalid)
        }
        Err(Error::Lex(error)) => {
            if cli.json {
                let value = json!({ "file": name, "valid": false, "lex_error": error.to_string() });
                println!("{}", serde_json::to_string(&value)?);
            } else {
                println!("{name}:{}", error.red());
            }
            Ok(Outcome::Failed)
        }
    }
}

fn print_report(as_json: bool, name: &str, report: &Report) -> Result<()> {
    if as_json {
        let value = json!({ "file": name, "report": report });
        println!("{}", serde_json::to_string(&value)?);
        return Ok(());
    }

    for warning in &report.warnings {
        println!("{name}:{}", warning.yellow());
    }
    for violation in &report.errors {
        println!("{name}:{}", violation.red());
    }
    if report.is_valid() {
        println!("{name}: {}", "valid".green());
    } else {
        let summary = format!("{} error(s)", report.errors.len());
        println!("{name}: {}", summary.red().bold());
    }
    Ok(())
}

/// Print the events of every token up to the first lexical error or, in
/// fail-fast mode, the first violation. The report that follows explains
/// where the stream stopped.
fn print_events(as_json: bool, events: &[(Position, Event)]) -> Result<()> {
    for (position, event) in events {
        if as_json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            println!("{} {event}", position.dimmed());
        }
    }
    Ok(())
}
