use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{calendar, money, AppError, Result};

/// Direction of a ledger row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

/// Whether a row has happened or is a forecast
///
/// Installment charges are always stored as predictions; the recurrence
/// path derives the status from the entry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Predicted,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Predicted => "predicted",
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "predicted" => Ok(Self::Predicted),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

/// A single ledger row.
///
/// Installment and recurring registrations produce plain rows; once stored
/// they are indistinguishable from manually entered transactions, with no
/// link back to the schedule that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub date: NaiveDate,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TransactionRecord {
    pub fn new(
        title: String,
        amount: Decimal,
        kind: TransactionType,
        status: TransactionStatus,
        date: NaiveDate,
        category: String,
        description: Option<String>,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(AppError::validation("Transaction title is required"));
        }

        if category.trim().is_empty() {
            return Err(AppError::validation("Transaction category is required"));
        }

        money::validate_amount("Transaction amount", amount)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title,
            amount,
            kind,
            status,
            date,
            category,
            description,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }

    /// Copies this row one month ahead as a prediction, the way the cash
    /// flow screen's duplicate action does. The copy gets a fresh id.
    pub fn duplicate_next_month(&self) -> Result<TransactionRecord> {
        let date = calendar::plus_months_anchored(self.date, 1)?;
        TransactionRecord::new(
            self.title.clone(),
            self.amount,
            self.kind,
            TransactionStatus::Predicted,
            date,
            self.category.clone(),
            self.description.clone(),
        )
    }

    pub fn is_predicted(&self) -> bool {
        self.status == TransactionStatus::Predicted
    }
}
