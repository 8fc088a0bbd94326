//! Error types for option registration and capture conversion.
//!
//! Pattern failures surface when an [`Opt`](crate::Opt) is built, before any
//! argument is looked at. Unrecognised arguments are not errors at this level:
//! they are reported on the console and collected in
//! [`ParseReport`](crate::ParseReport).

use thiserror::Error;

/// An option pattern could not be compiled.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern is not valid regular expression syntax.
    #[error("invalid option pattern `{pattern}`: {source}")]
    Invalid {
        /// The pattern text as supplied by the caller.
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A capture group could not be converted by [`OptMatch::parse`](crate::OptMatch::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// The group does not exist or did not take part in the match.
    #[error("capture group {0} is missing")]
    Missing(usize),

    /// The captured text does not parse as the requested type.
    #[error("capture group {group} (`{value}`) is invalid: {reason}")]
    Invalid {
        group: usize,
        value: String,
        reason: String,
    },
}

/// Convenience alias for results with [`PatternError`].
pub type Result<T> = std::result::Result<T, PatternError>;
