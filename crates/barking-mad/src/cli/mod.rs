//! Command-line support for the `barking-mad` report.
//!
//! The binary delegates parsing and rendering to this module so the
//! behaviour can be exercised in tests without spawning a process.

use std::fmt;
use std::io::Write;

use tracing::{debug, info};

use crate::factory::{potato, random_email_line, random_name_line, random_new_human};
use crate::provider::{FakeDataProvider, FakeProvider};

mod error;

pub use error::CliError;

/// Parsed options for the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    seed: Option<u64>,
    humans: usize,
}

impl Options {
    /// Returns the RNG seed, if one was supplied.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns how many random humans to append to the report.
    #[must_use]
    pub const fn humans(&self) -> usize {
        self.humans
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments, excluding the program name.
///
/// # Errors
///
/// Returns [`CliError`] when an argument is unknown, a flag is missing its
/// value, or a value cannot be parsed as a number.
///
/// # Example
///
/// ```
/// use barking_mad::cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--seed".to_owned(), "42".to_owned()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.seed(), Some(42));
/// assert_eq!(options.humans(), 0);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                options.seed = Some(parse_number(&value, "--seed")?);
            }
            "--humans" => {
                let value = next_value(&mut args, "--humans")?;
                options.humans = parse_number(&value, "--humans")?;
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(options))
}

/// Builds the provider selected by `options`.
///
/// A supplied seed yields a deterministic provider; otherwise the provider
/// is seeded from entropy.
#[must_use]
pub fn build_provider(options: &Options) -> FakeProvider {
    options
        .seed
        .map_or_else(FakeProvider::from_entropy, FakeProvider::seeded)
}

/// Renders the report lines in output order.
///
/// The first three lines are the marker, a random name sentence, and a
/// random email sentence. One JSON object follows for each requested human.
///
/// # Errors
///
/// Returns [`CliError::Serialization`] if a human cannot be encoded.
///
/// # Example
///
/// ```
/// use barking_mad::cli::{Options, build_provider, render_report};
///
/// let options = Options::default();
/// let mut provider = build_provider(&options);
/// let lines = render_report(&options, &mut provider).expect("render");
///
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines.first().map(String::as_str), Some("potato!"));
/// ```
pub fn render_report<P>(options: &Options, provider: &mut P) -> Result<Vec<String>, CliError>
where
    P: FakeDataProvider + ?Sized,
{
    let mut lines = vec![
        potato().to_owned(),
        random_name_line(provider),
        random_email_line(provider),
    ];

    for _ in 0..options.humans {
        let human = random_new_human(provider);
        let json = serde_json::to_string(&human).map_err(|err| CliError::Serialization {
            message: err.to_string(),
        })?;
        lines.push(json);
    }

    debug!(line_count = lines.len(), "rendered report");
    Ok(lines)
}

/// Returns the help text.
#[must_use]
pub const fn usage() -> &'static str {
    concat!(
        "Usage: barking-mad [options]\n",
        "\n",
        "Options:\n",
        "  --seed <seed>        RNG seed value (defaults to random)\n",
        "  --humans <n>         Append n random humans as JSON lines (defaults to 0)\n",
        "  -h, --help           Print this help output\n",
    )
}

/// Parses `args` and writes the help text or the report to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when the arguments are invalid, a human cannot be
/// encoded, or writing to `out` fails.
///
/// # Example
///
/// ```
/// use barking_mad::cli::run;
///
/// let args = vec!["--seed".to_owned(), "42".to_owned()];
/// let mut out = Vec::new();
/// run(args.into_iter(), &mut out).expect("run");
///
/// let text = String::from_utf8(out).expect("utf-8 output");
/// assert!(text.starts_with("potato!\n"));
/// ```
pub fn run<I, W>(args: I, out: &mut W) -> Result<(), CliError>
where
    I: Iterator<Item = String>,
    W: Write + ?Sized,
{
    match parse_args(args)? {
        ParseOutcome::Help => write_lines(out, [usage().trim_end()]),
        ParseOutcome::Options(options) => {
            let mut provider = build_provider(&options);
            info!(
                seed = provider.seed(),
                humans = options.humans(),
                "rendering report"
            );
            let lines = render_report(&options, &mut provider)?;
            write_lines(out, lines.iter().map(String::as_str))
        }
    }
}

/// Writes each line followed by a newline, then flushes `out`.
///
/// # Errors
///
/// Returns [`CliError::Output`] on the first failed write or flush.
pub fn write_lines<'a, W>(
    out: &mut W,
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    for line in lines {
        writeln!(out, "{line}").map_err(|err| CliError::Output {
            message: err.to_string(),
        })?;
    }
    out.flush().map_err(|err| CliError::Output {
        message: err.to_string(),
    })
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
