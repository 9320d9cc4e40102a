use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::modules::cards::models::CreditCard;

/// A purchase to register against a card, optionally split into monthly
/// installments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub title: String,
    pub total_amount: Decimal,
    /// 1 means the purchase is not installment-split
    pub installment_count: u32,
    pub purchase_date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
}

impl ChargeRequest {
    /// Builds a request the way the card screen does: the category is the
    /// card name and the description records which card took the charge.
    pub fn for_card(
        card: &CreditCard,
        title: String,
        total_amount: Decimal,
        installment_count: u32,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            title,
            total_amount,
            installment_count,
            purchase_date,
            category: card.name.clone(),
            description: Some(format!("Charge registered on card {}", card.name)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Charge title is required"));
        }

        if self.installment_count < 1 {
            return Err(AppError::validation(
                "Installment count must be at least 1",
            ));
        }

        money::validate_amount("Charge amount", self.total_amount)?;

        Ok(())
    }

    /// `"Title (i/N)"` for split purchases, the bare title otherwise
    pub fn label(&self, installment_index: u32) -> String {
        if self.installment_count > 1 {
            format!(
                "{} ({}/{})",
                self.title,
                installment_index + 1,
                self.installment_count
            )
        } else {
            self.title.clone()
        }
    }
}
