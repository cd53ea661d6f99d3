//! cron-parser — expand a crontab line into the values it fires on.
//!
//! Each of the five time fields is evaluated into the explicit, ascending
//! list of values it denotes; the sixth token is kept as the command.
//!
//! # Examples
//!
//! ```
//! use cron_parser::CronExpression;
//!
//! let cron: CronExpression = "*/15 0 1,15 * 1-5 /usr/bin/find".parse().unwrap();
//! assert_eq!(cron.minute.values(), &[0, 15, 30, 45]);
//! print!("{cron}");
//! ```

pub mod display;
pub mod error;
pub mod expression;
pub mod field;
pub mod parser;

pub use error::ParseError;
pub use expression::CronExpression;
pub use field::{FieldResult, FieldSpec};

use std::ffi::OsStr;
use std::io;
use std::str::FromStr;

impl CronExpression {
    /// Parse a cron line.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::parse(input)
    }

    /// Check whether a line parses, without keeping the result.
    pub fn validate(input: &str) -> bool {
        parser::parse(input).is_ok()
    }
}

impl FromStr for CronExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Stateful front end holding the outcome of the most recent parse.
///
/// A new parser holds nothing; every call to [`CronParser::parse`] replaces
/// the previous outcome entirely, so [`CronParser::error`] is set exactly
/// when the last parse failed.
#[derive(Debug, Clone, Default)]
pub struct CronParser {
    outcome: Option<Result<CronExpression, ParseError>>,
}

impl CronParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `input`, returning whether it succeeded.
    pub fn parse(&mut self, input: &str) -> bool {
        self.record(parser::parse(input))
    }

    /// Like [`CronParser::parse`] for input that may not be a string.
    pub fn parse_os_str(&mut self, input: &OsStr) -> bool {
        self.record(parser::parse_os_str(input))
    }

    fn record(&mut self, outcome: Result<CronExpression, ParseError>) -> bool {
        let ok = outcome.is_ok();
        self.outcome = Some(outcome);
        ok
    }

    /// The parsed line, if the last parse succeeded.
    pub fn expression(&self) -> Option<&CronExpression> {
        self.outcome.as_ref()?.as_ref().ok()
    }

    /// The error of the last parse, if it failed.
    pub fn error_kind(&self) -> Option<&ParseError> {
        self.outcome.as_ref()?.as_ref().err()
    }

    /// Message of the last parse error, if it failed.
    pub fn error(&self) -> Option<String> {
        self.error_kind().map(ToString::to_string)
    }

    /// Write the table for the last successful parse. Writes nothing if
    /// there is none.
    pub fn output<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        match self.expression() {
            Some(cron) => write!(out, "{cron}"),
            None => Ok(()),
        }
    }
}
