//! Option descriptors and the captures handed to their handlers.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::error::{CaptureError, PatternError, Result};

/// Callback invoked with the captures of the argument an [`Opt`] matched.
pub type Handler<'a> = Box<dyn FnMut(&OptMatch<'_>) + 'a>;

/// One registered option: a pattern, its help text and a handler.
///
/// The pattern must match the whole argument. It is compiled when the
/// descriptor is built, so a bad pattern is reported before parsing starts.
///
/// # Examples
///
/// ```
/// use opt_parse_core::Opt;
///
/// let mut address = String::from("localhost:10000");
/// {
///     let mut opt = Opt::new("--server=(.*)", "address of server to connect to", |m| {
///         address = m[1].to_string();
///     })
///     .unwrap();
///     assert_eq!(opt.help_line(), "  --server=(.*):\taddress of server to connect to");
///     assert!(opt.dispatch("--server=example.org:80"));
///     assert!(!opt.dispatch("x--server=example.org:80"));
/// }
/// assert_eq!(address, "example.org:80");
/// ```
pub struct Opt<'a> {
    pattern: String,
    regex: Regex,
    help: String,
    handler: Handler<'a>,
}

impl<'a> Opt<'a> {
    /// Builds a descriptor, compiling `pattern` as an anchored regex.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Invalid`] if `pattern` is not valid regex
    /// syntax.
    ///
    /// ```
    /// use opt_parse_core::{Opt, PatternError};
    ///
    /// let err = Opt::new("--size=([0-9]+", "unbalanced", |_| {}).unwrap_err();
    /// assert!(matches!(err, PatternError::Invalid { .. }));
    /// ```
    pub fn new<F>(pattern: &str, help: &str, handler: F) -> Result<Self>
    where
        F: FnMut(&OptMatch<'_>) + 'a,
    {
        let regex = Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| {
            PatternError::Invalid {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            help: format!("  {pattern}:\t{help}"),
            handler: Box::new(handler),
        })
    }

    /// The pattern text as registered.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The formatted line shown in the usage banner.
    pub fn help_line(&self) -> &str {
        &self.help
    }

    /// Returns `true` if `arg` matches the pattern in full.
    pub fn matches(&self, arg: &str) -> bool {
        self.regex.is_match(arg)
    }

    /// Returns the captures for `arg` without running the handler.
    pub fn captures<'t>(&self, arg: &'t str) -> Option<OptMatch<'t>> {
        self.regex
            .captures(arg)
            .map(|captures| OptMatch { captures })
    }

    /// Runs the handler if `arg` matches, returning whether it did.
    pub fn dispatch(&mut self, arg: &str) -> bool {
        match self.regex.captures(arg) {
            Some(captures) => {
                (self.handler)(&OptMatch { captures });
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("pattern", &self.pattern)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Capture groups of one matched argument.
///
/// Group 0 is the whole argument, groups `1..len()` are the parenthesised
/// captures in pattern order. Indexing never panics: a group that does not
/// exist or did not participate reads as the empty string.
///
/// # Examples
///
/// ```
/// use opt_parse_core::Opt;
///
/// let opt = Opt::new("--screen=([0-9]+)x([0-9]+)", "screen size", |_| {}).unwrap();
/// let m = opt.captures("--screen=1280x1024").unwrap();
/// assert_eq!(m.as_str(), "--screen=1280x1024");
/// assert_eq!(&m[1], "1280");
/// assert_eq!(m.parse::<u32>(2), Ok(1024));
/// assert_eq!(&m[7], "");
/// ```
#[derive(Debug)]
pub struct OptMatch<'t> {
    captures: Captures<'t>,
}

impl<'t> OptMatch<'t> {
    /// The whole matched argument.
    pub fn as_str(&self) -> &'t str {
        self.str(0)
    }

    /// Text of group `index`, or `None` if it did not participate.
    pub fn get(&self, index: usize) -> Option<&'t str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// Text of group `index`, empty if it did not participate.
    pub fn str(&self, index: usize) -> &'t str {
        self.get(index).unwrap_or_default()
    }

    /// Number of groups, counting group 0.
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.len() == 0
    }

    /// All groups in order, `None` for groups that did not participate.
    pub fn iter(&self) -> impl Iterator<Item = Option<&'t str>> + '_ {
        self.captures.iter().map(|m| m.map(|m| m.as_str()))
    }

    /// Parses group `index` with [`FromStr`].
    ///
    /// # Errors
    ///
    /// [`CaptureError::Missing`] if the group is absent,
    /// [`CaptureError::Invalid`] if the text does not parse.
    pub fn parse<T>(&self, index: usize) -> std::result::Result<T, CaptureError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let value = self.get(index).ok_or(CaptureError::Missing(index))?;
        value.parse().map_err(|err: T::Err| CaptureError::Invalid {
            group: index,
            value: value.to_string(),
            reason: err.to_string(),
        })
    }
}

impl Index<usize> for OptMatch<'_> {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.str(index)
    }
}
