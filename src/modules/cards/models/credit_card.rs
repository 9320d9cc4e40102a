use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::cards::models::BillingCycle;

/// A credit card registered by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: String,
    pub name: String,
    pub institution: String,
    /// Day of month the statement closes (1-31)
    pub closing_day: Option<u32>,
    /// Day of month payment is due (1-31)
    pub due_day: Option<u32>,
    pub credit_limit: Option<Decimal>,
    /// Display hint for the card tile
    pub color: Option<String>,
    pub created_at: NaiveDateTime,
}

impl CreditCard {
    pub fn new(
        name: String,
        institution: String,
        closing_day: Option<u32>,
        due_day: Option<u32>,
        credit_limit: Option<Decimal>,
        color: Option<String>,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Card name is required"));
        }

        if institution.trim().is_empty() {
            return Err(AppError::validation("Card institution is required"));
        }

        // Reuses the cycle range checks so a card can never hold days the
        // scheduler would reject
        BillingCycle::new(closing_day, due_day)?;

        if let Some(limit) = credit_limit {
            if limit < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "Credit limit cannot be negative, got {}",
                    limit
                )));
            }
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            institution,
            closing_day,
            due_day,
            credit_limit,
            color,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }

    /// Statement cycle used by the installment scheduler
    pub fn billing_cycle(&self) -> BillingCycle {
        BillingCycle {
            closing_day: self.closing_day,
            due_day: self.due_day,
        }
    }
}
