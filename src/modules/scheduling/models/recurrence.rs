use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::calendar::YearMonth;
use crate::core::{money, AppError, Result};
use crate::modules::transactions::models::TransactionType;

/// A transaction template duplicated once per calendar month through an
/// end month, independent of credit-card billing cycles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceRequest {
    pub title: String,
    /// Every produced entry carries the full amount; there is no splitting
    pub amount: Decimal,
    pub kind: TransactionType,
    pub category: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    /// Last month that receives an entry (inclusive)
    pub end_month: YearMonth,
}

impl RecurrenceRequest {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Recurrence title is required"));
        }

        money::validate_amount("Recurrence amount", self.amount)?;

        if self.end_month < YearMonth::of(self.start_date) {
            return Err(AppError::validation(format!(
                "Recurrence end month {} precedes the start date {}",
                self.end_month, self.start_date
            )));
        }

        Ok(())
    }
}
