use crate::field::FieldResult;

/// A fully evaluated cron line: the five time fields and the command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CronExpression {
    pub minute: FieldResult,
    pub hour: FieldResult,
    pub day_of_month: FieldResult,
    pub month: FieldResult,
    pub day_of_week: FieldResult,
    /// The sixth token, taken verbatim.
    pub command: String,
}

impl CronExpression {
    /// The five time fields in the order they appear on the line.
    pub fn fields(&self) -> [&FieldResult; 5] {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
    }
}
