use std::fmt;

use crate::expression::CronExpression;
use crate::field::FieldResult;

/// Width of the label column in the rendered table.
pub const LABEL_WIDTH: usize = 14;

impl fmt::Display for FieldResult {
    /// One table row: padded label followed by the space separated values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<LABEL_WIDTH$}", self.name())?;
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.fields() {
            writeln!(f, "{field}")?;
        }
        writeln!(f, "{:<LABEL_WIDTH$}{}", "command", self.command)
    }
}
