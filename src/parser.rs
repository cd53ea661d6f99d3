// Splits a cron line into its tokens and hands each field to the evaluator.

use std::ffi::OsStr;

use log::debug;

use crate::error::ParseError;
use crate::expression::CronExpression;
use crate::field::{FieldResult, DAY_OF_MONTH, DAY_OF_WEEK, HOUR, MINUTE, MONTH};

/// Number of whitespace separated tokens in a line: five fields + command.
pub const TOKEN_COUNT: usize = 6;

/// Parse a cron line such as `*/15 0 1,15 * 1-5 /usr/bin/find`.
///
/// Fields are evaluated left to right and the first failing field aborts
/// the parse.
pub fn parse(input: &str) -> Result<CronExpression, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::NoExpression);
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [minute, hour, day_of_month, month, day_of_week, command] = tokens[..] else {
        debug!(
            "expected {TOKEN_COUNT} tokens, got {} in {input:?}",
            tokens.len()
        );
        return Err(ParseError::InvalidFormat);
    };

    Ok(CronExpression {
        minute: FieldResult::parse(MINUTE, minute)?,
        hour: FieldResult::parse(HOUR, hour)?,
        day_of_month: FieldResult::parse(DAY_OF_MONTH, day_of_month)?,
        month: FieldResult::parse(MONTH, month)?,
        day_of_week: FieldResult::parse(DAY_OF_WEEK, day_of_week)?,
        command: command.to_string(),
    })
}

/// Parse raw bytes; anything that is not UTF-8 is rejected as
/// [`ParseError::InvalidInput`].
pub fn parse_bytes(input: &[u8]) -> Result<CronExpression, ParseError> {
    let input = std::str::from_utf8(input).map_err(|_| ParseError::InvalidInput)?;
    parse(input)
}

/// Parse an OS string, e.g. a command line argument.
pub fn parse_os_str(input: &OsStr) -> Result<CronExpression, ParseError> {
    let input = input.to_str().ok_or(ParseError::InvalidInput)?;
    parse(input)
}
