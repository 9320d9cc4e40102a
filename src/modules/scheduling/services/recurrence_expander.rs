use chrono::NaiveDate;
use tracing::info;

use crate::core::calendar::{self, YearMonth};
use crate::core::{money, Result};
use crate::modules::scheduling::models::{RecurrenceRequest, ScheduledEntry};
use crate::modules::transactions::models::TransactionStatus;

/// Expands a monthly recurring transaction into one entry per month
pub struct RecurrenceExpander;

impl RecurrenceExpander {
    /// One entry per calendar month from the start date through the end
    /// month, inclusive, every entry carrying the full amount and the
    /// unmodified title.
    ///
    /// Entries keep the start date's day-of-month, clamped to the last day
    /// of shorter months; the anchor day returns in longer months
    /// (Jan 31, Feb 28, Mar 31). Entries dated on or before `today` are
    /// completed, later ones predicted. `today` is a parameter so the
    /// expansion stays pure.
    pub fn expand(request: &RecurrenceRequest, today: NaiveDate) -> Result<Vec<ScheduledEntry>> {
        request.validate()?;

        let amount = money::round_cents(request.amount);
        let mut entries = Vec::new();

        for offset in 0u32.. {
            let due_date = calendar::plus_months_anchored(request.start_date, offset)?;
            if YearMonth::of(due_date) > request.end_month {
                break;
            }

            let status = if due_date <= today {
                TransactionStatus::Completed
            } else {
                TransactionStatus::Predicted
            };

            entries.push(ScheduledEntry {
                due_date,
                amount,
                label: request.title.clone(),
                status,
            });
        }

        info!(
            title = request.title.as_str(),
            entries = entries.len(),
            end_month = %request.end_month,
            "Expanded recurring transaction"
        );

        Ok(entries)
    }
}
