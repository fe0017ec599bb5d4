#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end for the `fsfilter` binary. It
//! gathers an ordered pattern list from `--pattern` and `--patterns-from`,
//! gathers candidate paths from operands, `--paths-from` lists or a directory
//! walk, and prints the candidates the pattern list selects.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, and returns the process exit code. A
//! [`clap`](https://docs.rs/clap/) command definition performs the parse;
//! help and version output use fixed text so the wording stays stable.
//! [`run_with_input`] additionally takes the reader used for `--paths-from -`,
//! which keeps the whole front-end testable with in-memory buffers.
//!
//! Evaluation runs inside [`logging::with_tracing`], so filter events emitted
//! through `tracing` and messages emitted with the `logging` macros land in
//! the same diagnostic buffer. The buffer is written to standard error once
//! the run finishes, before any error line.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Selected paths are written exactly as given, one per line (or
//!   NUL-terminated with `--from0`), in input order.
//! - Standard output carries nothing but selected paths, help, or version.
//!
//! # Errors
//!
//! See [`ExitCode`] for the mapping from failure kinds to exit statuses.
//! Diagnostics are written to standard error as `fsfilter: error: ...`.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(
//!     ["fsfilter", "-p", "docs", "-p", "!docs/README.md", "docs/a.md", "docs/README.md"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(status, 0);
//! assert_eq!(stdout, b"docs/a.md\n");
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `filters` for pattern semantics.
//! - `src/bin/fsfilter.rs` for the binary that wires [`run`] into `main`.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use logging::{VerbosityConfig, drain_events};

mod args;
mod command;
mod error;
mod execute;
mod exit_code;
mod input;

pub use exit_code::ExitCode;

use args::parse_args;
use command::{HELP_TEXT, PROGRAM_NAME, version_text};
use error::CliError;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI, reading `--paths-from -` from the process's standard input.
///
/// Returns the exit code the process should use.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let stdin = io::stdin();
    run_with_input(arguments, &mut stdin.lock(), stdout, stderr)
}

/// Runs the CLI with an explicit standard input reader.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: BufRead,
    Out: Write,
    Err: Write,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let parsed = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(error) => {
            let rendered = error.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            let first = first.strip_prefix("error: ").unwrap_or(first);
            return report(stderr, &CliError::usage(first));
        }
    };

    if parsed.show_help {
        return write_or_fail(stdout, HELP_TEXT);
    }
    if parsed.show_version {
        return write_or_fail(stdout, &version_text());
    }

    let config = match verbosity(&parsed) {
        Ok(config) => config,
        Err(error) => return report(stderr, &error),
    };

    let outcome = logging::with_tracing(config, || execute::execute(&parsed, stdin, stdout));

    for event in drain_events() {
        let _ = writeln!(stderr, "{event}");
    }

    match outcome {
        Ok(code) => code.as_i32(),
        Err(error) => report(stderr, &error),
    }
}

/// Converts a status returned by [`run`] into a process exit code.
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

fn verbosity(parsed: &args::ParsedArgs) -> Result<VerbosityConfig, CliError> {
    let mut config = VerbosityConfig::from_verbose_level(parsed.verbose);
    for token in &parsed.info {
        config.apply_info_flags(token).map_err(CliError::usage)?;
    }
    for token in &parsed.debug {
        config.apply_debug_flags(token).map_err(CliError::usage)?;
    }
    Ok(config)
}

fn report<Err: Write>(stderr: &mut Err, error: &CliError) -> i32 {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: error: {error}");
    error.exit_code().as_i32()
}

fn write_or_fail<Out: Write>(stdout: &mut Out, text: &str) -> i32 {
    match stdout.write_all(text.as_bytes()) {
        Ok(()) => ExitCode::Ok.as_i32(),
        Err(_) => ExitCode::Io.as_i32(),
    }
}
