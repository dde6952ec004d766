use crate::error::AppError;
use chrono::NaiveDate;

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Every day from `start` to `end` inclusive, ascending. Empty when
/// `start > end`.
pub fn expand(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Canonical "YYYY-MM-DD" identifier, also used as the store lookup key.
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Inclusive range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::Validation(format!(
                "inicio ({}) must not be after fin ({})",
                day_key(start),
                day_key(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// Shared validation for the form and the JSON API.
    pub fn parse(inicio: Option<&str>, fin: Option<&str>) -> Result<Self, AppError> {
        let start = parse_day("inicio", inicio)?;
        let end = parse_day("fin", fin)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Day identifiers of the whole range.
    pub fn day_keys(&self) -> Vec<String> {
        expand(self.start, self.end).into_iter().map(day_key).collect()
    }
}

fn parse_day(field: &str, value: Option<&str>) -> Result<NaiveDate, AppError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))?;

    NaiveDate::parse_from_str(value, DAY_FORMAT).map_err(|e| {
        AppError::Validation(format!("{field} must be a valid YYYY-MM-DD date, got {value:?}: {e}"))
    })
}
