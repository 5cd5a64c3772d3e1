use crate::types::ValidationError;
use chrono::NaiveDate;

const DAY_MONTH_YEAR: &str = "%d-%m-%Y";

/// Parses `dd-mm-yyyy`, e.g. `28-11-1986`.
pub fn parse_day_month_year(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DAY_MONTH_YEAR).map_err(|_| {
        ValidationError::InvalidDate {
            input: input.to_string(),
        }
    })
}

pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format(DAY_MONTH_YEAR).to_string()
}
