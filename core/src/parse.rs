//! Dispatch loop over the process arguments.
//!
//! Every argument after the program name is tried against the option set in
//! registration order, and only the first descriptor whose pattern matches
//! the whole argument runs. Anything unmatched is reported and the scan goes
//! on, so every valid argument still reaches its handler. If help was asked
//! for or anything went unmatched, the usage banner is printed once at the
//! end.

use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::opt::Opt;

/// Reserved argument that always requests the usage banner.
pub const HELP_TOKEN: &str = "--help";

/// Outcome of one pass over the arguments.
///
/// [`parse_cmd_line`] collapses this to a boolean; callers that need to tell
/// a help request from a bad argument use [`parse_cmd_line_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Argument 0, as shown in the usage banner.
    pub program: String,
    /// Number of arguments dispatched to a handler.
    pub matched: usize,
    /// `--help` appeared at least once.
    pub help_requested: bool,
    /// Arguments no option matched, in order of appearance.
    pub unrecognised: Vec<String>,
}

impl ParseReport {
    /// Whether the usage banner is (or was) due.
    pub fn show_usage(&self) -> bool {
        self.help_requested || !self.unrecognised.is_empty()
    }

    /// The boolean form of the result: `true` when no usage was shown.
    pub fn is_valid(&self) -> bool {
        !self.show_usage()
    }
}

/// Parses `args` against `opts`, printing to stdout and stderr.
///
/// `args[0]` is the program name and is never matched. Returns `false` if
/// help was requested or any argument was unrecognised, `true` otherwise.
/// Failing to write to the console does not change the result.
///
/// # Examples
///
/// ```
/// use opt_parse_core::{Opt, parse_cmd_line};
///
/// let mut width = 0u32;
/// let mut height = 0u32;
/// let ok = parse_cmd_line(
///     &["prog", "--screen=1280x1024"],
///     &mut [Opt::new("--screen=([0-9]+)x([0-9]+)", "screen size", |m| {
///         width = m.parse(1).unwrap_or(width);
///         height = m.parse(2).unwrap_or(height);
///     })
///     .unwrap()],
/// );
/// assert!(ok);
/// assert_eq!((width, height), (1280, 1024));
/// ```
pub fn parse_cmd_line<S: AsRef<str>>(args: &[S], opts: &mut [Opt<'_>]) -> bool {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let mut console = Console {
        out: &mut out,
        err: &mut err,
    };

    match parse_into(args, opts, &mut console) {
        Ok(report) => report.is_valid(),
        Err(failure) => {
            warn!(error = %failure.error, "Failed to write option parser output");
            failure.report.is_valid()
        }
    }
}

/// Same as [`parse_cmd_line`] over the arguments of the current process.
///
/// Arguments that are not valid UTF-8 are converted lossily.
pub fn parse_env(opts: &mut [Opt<'_>]) -> bool {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    parse_cmd_line(&args, opts)
}

/// Parses `args` against `opts`, writing the usage banner to `out` and
/// diagnostics to `err`.
///
/// # Errors
///
/// Returns the first I/O error raised by `out` or `err`. Handlers of every
/// matching argument have run by then.
///
/// # Examples
///
/// ```
/// use opt_parse_core::{Opt, parse_cmd_line_with};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let report = parse_cmd_line_with(
///     &["prog", "--bogus", "--help"],
///     &mut [Opt::new("--quiet", "say less", |_| {}).unwrap()],
///     &mut out,
///     &mut err,
/// )
/// .unwrap();
///
/// assert!(report.help_requested);
/// assert_eq!(report.unrecognised, vec!["--bogus".to_string()]);
/// assert_eq!(String::from_utf8(err).unwrap(), "Unrecognised option: --bogus\n");
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Usage: prog\n  --quiet:\tsay less\n\n"
/// );
/// ```
pub fn parse_cmd_line_with<S, O, E>(
    args: &[S],
    opts: &mut [Opt<'_>],
    out: &mut O,
    err: &mut E,
) -> io::Result<ParseReport>
where
    S: AsRef<str>,
    O: Write,
    E: Write,
{
    let mut console = Console { out, err };
    parse_into(args, opts, &mut console).map_err(|failure| failure.error)
}

/// Writes the usage banner for `opts`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_usage<W: Write>(out: &mut W, program: &str, opts: &[Opt<'_>]) -> io::Result<()> {
    writeln!(out, "Usage: {program}")?;
    for opt in opts {
        writeln!(out, "{}", opt.help_line())?;
    }
    writeln!(out)?;
    out.flush()
}

struct Console<'w, O: Write, E: Write> {
    out: &'w mut O,
    err: &'w mut E,
}

struct WriteFailure {
    report: ParseReport,
    error: io::Error,
}

fn parse_into<S, O, E>(
    args: &[S],
    opts: &mut [Opt<'_>],
    console: &mut Console<'_, O, E>,
) -> Result<ParseReport, WriteFailure>
where
    S: AsRef<str>,
    O: Write,
    E: Write,
{
    let mut report = ParseReport {
        program: args
            .first()
            .map(|program| <S as AsRef<str>>::as_ref(program).to_string())
            .unwrap_or_default(),
        ..ParseReport::default()
    };
    let mut first_error = None;

    for arg in args.iter().skip(1) {
        let arg = <S as AsRef<str>>::as_ref(arg);
        if arg == HELP_TOKEN {
            debug!("Help requested");
            report.help_requested = true;
            continue;
        }

        match opts.iter_mut().position(|opt| opt.dispatch(arg)) {
            Some(index) => {
                debug!(argument = arg, pattern = opts[index].pattern(), "Dispatched option");
                report.matched += 1;
            }
            None => {
                debug!(argument = arg, "Unrecognised option");
                if let Err(error) = writeln!(console.err, "Unrecognised option: {arg}") {
                    first_error.get_or_insert(error);
                }
                report.unrecognised.push(arg.to_string());
            }
        }
    }

    if report.show_usage() {
        if let Err(error) = write_usage(console.out, &report.program, opts) {
            first_error.get_or_insert(error);
        }
    }

    match first_error {
        Some(error) => Err(WriteFailure { report, error }),
        None => Ok(report),
    }
}
