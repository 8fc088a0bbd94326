//! Regex-driven command-line option parsing.
//!
//! Options are registered as a list of [`Opt`] descriptors, each pairing a
//! pattern with a line of help text and a handler:
//!
//! - [`Opt`] — one option. Its pattern must match a whole argument; the
//!   handler receives the capture groups as an [`OptMatch`].
//! - [`parse_cmd_line`] — walks the arguments after the program name and
//!   runs the handler of the first option that matches each one.
//! - [`ParseReport`] — what happened, for callers that need more than the
//!   boolean (see [`parse_cmd_line_with`]).
//!
//! `--help` is reserved. It, or any argument no option matches, causes the
//! usage banner to be printed after all arguments have been processed.
//!
//! # Example
//!
//! ```
//! use opt_parse_core::{Opt, PatternError, parse_cmd_line};
//!
//! fn main() -> Result<(), PatternError> {
//!     let args = ["prog", "--server=example.org:80", "--reverseFluxPolarity"];
//!
//!     let mut server_address = String::from("localhost:10000");
//!     let mut reverse_flux_polarity = false;
//!
//!     let ok = parse_cmd_line(
//!         &args,
//!         &mut [
//!             Opt::new("--server=(.*)", "address of server to connect to", |m| {
//!                 server_address = m[1].to_string();
//!             })?,
//!             Opt::new(
//!                 "--reverseFluxPolarity",
//!                 "operate with flux polarity reversed",
//!                 |_| reverse_flux_polarity = true,
//!             )?,
//!         ],
//!     );
//!
//!     assert!(ok);
//!     assert_eq!(server_address, "example.org:80");
//!     assert!(reverse_flux_polarity);
//!     Ok(())
//! }
//! ```

mod error;
mod opt;
mod parse;

pub use error::{CaptureError, PatternError, Result};
pub use opt::{Handler, Opt, OptMatch};
pub use parse::{
    HELP_TOKEN, ParseReport, parse_cmd_line, parse_cmd_line_with, parse_env, write_usage,
};
