//! Evaluation of a single cron field into the values it denotes.
//!
//! Grammar, in evaluation order:
//!
//! ```text
//! field  = base [ "/" step ]
//! base   = "*" | alias | term { "," term }
//! term   = number [ "-" number ]
//! ```
//!
//! All five cron fields share one evaluator; they differ only in the
//! [`FieldSpec`] (bounds and alias table) it is driven by.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::error::ParseError;

/// Month aliases; `JAN` is the field minimum.
pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Day-of-week aliases; `SUN` is the field minimum.
pub const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Bounds and symbolic names of one cron field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSpec {
    /// Label used when rendering.
    pub name: &'static str,
    /// Smallest allowed value, inclusive.
    pub min: u32,
    /// Largest allowed value, inclusive.
    pub max: u32,
    /// Alias at index `i` stands for `min + i`.
    pub aliases: &'static [&'static str],
}

pub const MINUTE: FieldSpec = FieldSpec {
    name: "minute",
    min: 0,
    max: 59,
    aliases: &[],
};

pub const HOUR: FieldSpec = FieldSpec {
    name: "hour",
    min: 0,
    max: 23,
    aliases: &[],
};

pub const DAY_OF_MONTH: FieldSpec = FieldSpec {
    name: "day of month",
    min: 1,
    max: 31,
    aliases: &[],
};

pub const MONTH: FieldSpec = FieldSpec {
    name: "month",
    min: 1,
    max: 12,
    aliases: &MONTHS,
};

pub const DAY_OF_WEEK: FieldSpec = FieldSpec {
    name: "day of week",
    min: 0,
    max: 6,
    aliases: &WEEKDAYS,
};

/// The five fields of a cron line, in the order they appear.
pub const FIELDS: [FieldSpec; 5] = [MINUTE, HOUR, DAY_OF_MONTH, MONTH, DAY_OF_WEEK];

impl FieldSpec {
    /// Evaluate `expression` against this field. See [`evaluate`].
    pub fn evaluate(&self, expression: &str) -> Result<Vec<u32>, ParseError> {
        evaluate(self, expression)
    }

    /// Every value of the field, ascending.
    pub fn all_values(&self) -> Vec<u32> {
        (self.min..=self.max).collect()
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Look up a symbolic name. Matching is exact and case-sensitive.
    pub fn resolve_alias(&self, name: &str) -> Option<u32> {
        let index = self.aliases.iter().position(|alias| *alias == name)?;
        let value = self.min + index as u32;
        trace!("{}: alias {name} -> {value}", self.name);
        Some(value)
    }

    /// Insert `start..=end` into `values`.
    ///
    /// Both ends must lie within the field's bounds; `start > end` inserts
    /// nothing. `expression` is only used to name the offending text.
    fn add_range(
        &self,
        values: &mut BTreeSet<u32>,
        start: u32,
        end: u32,
        expression: &str,
    ) -> Result<(), ParseError> {
        if !self.contains(start) || !self.contains(end) {
            return Err(ParseError::range(expression));
        }
        values.extend(start..=end);
        Ok(())
    }
}

/// One evaluated field of a cron line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldResult {
    #[cfg_attr(feature = "serde", serde(flatten))]
    spec: FieldSpec,
    values: Vec<u32>,
}

impl FieldResult {
    /// Evaluate `expression` for the field described by `spec`.
    pub fn parse(spec: FieldSpec, expression: &str) -> Result<Self, ParseError> {
        let values = spec.evaluate(expression)?;
        Ok(Self { spec, values })
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Ascending, duplicate-free values within the field's bounds.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.binary_search(&value).is_ok()
    }
}

/// Evaluate one cron field into the ordered values it denotes.
///
/// A step of `0` behaves as if no step had been given. A single number
/// followed by a step (`5/15`) is read as a range running to the field's
/// maximum (`5-59/15` for minutes), matching what classic crontab tooling
/// accepted.
pub fn evaluate(spec: &FieldSpec, expression: &str) -> Result<Vec<u32>, ParseError> {
    let parts: Vec<&str> = expression.split('/').collect();
    let (base, step) = match parts.as_slice() {
        [base] => (*base, None),
        [base, step] => (*base, Some(parse_number(step)?)),
        _ => return Err(ParseError::expression(expression)),
    };
    let step = step.filter(|&step| step > 0);

    let values = if base == "*" {
        spec.all_values()
    } else if is_alias(base) {
        let value = spec
            .resolve_alias(base)
            .ok_or_else(|| ParseError::value(base))?;
        vec![value]
    } else {
        expand_range_list(spec, base, step.is_some())?
    };

    let values = match step {
        Some(step) => filter_by_step(values, step),
        None => values,
    };
    debug!("{}: {expression:?} -> {values:?}", spec.name);
    Ok(values)
}

fn is_alias(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

fn parse_number(text: &str) -> Result<u32, ParseError> {
    text.parse().map_err(|_| ParseError::value(text))
}

/// Expand a comma separated list of numbers and `A-B` ranges.
fn expand_range_list(
    spec: &FieldSpec,
    expression: &str,
    stepped: bool,
) -> Result<Vec<u32>, ParseError> {
    let mut values = BTreeSet::new();

    for term in expression.split(',') {
        let bounds: Vec<&str> = term.split('-').collect();
        match bounds.as_slice() {
            [single] => {
                let value = parse_number(single)?;
                let end = if stepped { spec.max } else { value };
                spec.add_range(&mut values, value, end, expression)?;
            }
            [start, end] => {
                let start = parse_number(start)?;
                let end = parse_number(end)?;
                spec.add_range(&mut values, start, end, expression)?;
            }
            _ => return Err(ParseError::expression(term)),
        }
    }

    Ok(values.into_iter().collect())
}

/// Keep the elements at index 0, `step`, `2 * step`, ...
fn filter_by_step(values: Vec<u32>, step: u32) -> Vec<u32> {
    trace!("filtering {} values by step {step}", values.len());
    values.into_iter().step_by(step as usize).collect()
}
