use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Ledger amounts carry cent precision (2 decimal places)
pub const CENT_SCALE: u32 = 2;

/// Rounds an amount to cent precision (banker's rounding)
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp(CENT_SCALE)
}

/// Validates that an amount is non-negative and carries at most cent
/// precision. `label` names the offending field in the error message.
pub fn validate_amount(label: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "{} cannot be negative, got {}",
            label, amount
        )));
    }

    if round_cents(amount) != amount {
        return Err(AppError::validation(format!(
            "{} must have at most {} decimal places, got {}",
            label, CENT_SCALE, amount
        )));
    }

    Ok(())
}
