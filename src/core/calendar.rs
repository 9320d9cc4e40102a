use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A calendar month without a day component, used for recurrence end bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// First day of the month a date falls in
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Number of days in the month a date falls in
pub fn days_in_month(date: NaiveDate) -> u32 {
    match date.month() {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if date.leap_year() {
                29
            } else {
                28
            }
        }
    }
}

/// Sets the day of month on `month`, clamping it to the month's actual
/// length. A due day of 31 lands on the 30th or 28th in shorter months.
pub fn with_day_clamped(month: NaiveDate, day: u32) -> Result<NaiveDate> {
    if day < 1 {
        return Err(AppError::validation(format!(
            "Day of month must be at least 1, got {}",
            day
        )));
    }
    let safe_day = day.min(days_in_month(month));
    month
        .with_day(safe_day)
        .ok_or_else(|| AppError::internal(format!("Day {} invalid for month {}", safe_day, month)))
}

/// Steps `months` whole months forward from `anchor`, keeping the anchor's
/// day-of-month and clamping to the last day of shorter months. The anchor
/// day returns in longer months: Jan 31 -> Feb 28 -> Mar 31.
pub fn plus_months_anchored(anchor: NaiveDate, months: u32) -> Result<NaiveDate> {
    let target = first_of_month(anchor)
        .checked_add_months(Months::new(months))
        .ok_or_else(|| AppError::validation("Date arithmetic exceeds the calendar range"))?;
    with_day_clamped(target, anchor.day())
}
