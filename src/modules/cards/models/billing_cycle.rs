use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A credit card's statement cycle.
///
/// Both days are optional. The scheduler falls back to the purchase day
/// when the closing day is missing, and to `closing_day + 10` when the due
/// day is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCycle {
    /// Day of month the statement closes (1-31)
    pub closing_day: Option<u32>,
    /// Day of month payment is due (1-31)
    pub due_day: Option<u32>,
}

impl BillingCycle {
    pub fn new(closing_day: Option<u32>, due_day: Option<u32>) -> Result<Self> {
        let cycle = Self {
            closing_day,
            due_day,
        };
        cycle.validate()?;
        Ok(cycle)
    }

    /// Configured days must be plausible days of month. Nothing requires
    /// the due day to fall after the closing day.
    pub fn validate(&self) -> Result<()> {
        if let Some(day) = self.closing_day {
            if !(1..=31).contains(&day) {
                return Err(AppError::validation(format!(
                    "Closing day must be between 1 and 31, got {}",
                    day
                )));
            }
        }

        if let Some(day) = self.due_day {
            if !(1..=31).contains(&day) {
                return Err(AppError::validation(format!(
                    "Due day must be between 1 and 31, got {}",
                    day
                )));
            }
        }

        Ok(())
    }
}
