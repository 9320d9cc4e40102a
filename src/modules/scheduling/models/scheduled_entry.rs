use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::transactions::models::TransactionStatus;

/// One dated line produced by the scheduler, ready to be persisted as a
/// transaction row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEntry {
    pub due_date: NaiveDate,
    /// Cent-rounded amount for this line
    pub amount: Decimal,
    /// Display label, e.g. `"Mercado (2/3)"`
    pub label: String,
    pub status: TransactionStatus,
}
