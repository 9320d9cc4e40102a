use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{calendar, money, AppError, Result};
use crate::modules::cards::models::BillingCycle;
use crate::modules::scheduling::models::{ChargeRequest, ScheduledEntry};
use crate::modules::transactions::models::TransactionStatus;

/// Scheduler for credit-card installment charges
///
/// Converts one charge request plus a statement cycle into an ordered list
/// of dated, cent-exact entries. Pure and deterministic; persistence is the
/// caller's concern.
pub struct InstallmentScheduler;

impl InstallmentScheduler {
    /// Days granted after the closing day when a card has no configured
    /// due day
    pub const DUE_DAY_GRACE: u32 = 10;

    /// Computes the due date of one installment (0-based index).
    ///
    /// Purchases after the closing day roll to the next statement, shifting
    /// the whole series one month. The due day is clamped to the length of
    /// each target month, so a due day of 31 lands on Feb 28.
    pub fn installment_due_date(
        cycle: &BillingCycle,
        purchase_date: NaiveDate,
        installment_index: u32,
    ) -> Result<NaiveDate> {
        cycle.validate()?;

        let closing_day = cycle.closing_day.unwrap_or_else(|| purchase_date.day());
        // The fallback may exceed 31; it is clamped per target month below
        let due_day = cycle.due_day.unwrap_or(closing_day + Self::DUE_DAY_GRACE);

        let after_closing = purchase_date.day() > closing_day;
        let month_offset = u32::from(after_closing) + installment_index;

        let target = calendar::first_of_month(purchase_date)
            .checked_add_months(Months::new(month_offset))
            .ok_or_else(|| {
                AppError::validation("Installment due date exceeds the calendar range")
            })?;

        calendar::with_day_clamped(target, due_day)
    }

    /// Splits a total into equal cent-rounded installments.
    ///
    /// Every installment gets the same rounded base amount; the last one
    /// absorbs the rounding remainder so the amounts sum exactly to the
    /// cent-rounded total.
    pub fn split_amount(total_amount: Decimal, installment_count: u32) -> Result<Vec<Decimal>> {
        if installment_count < 1 {
            return Err(AppError::validation(
                "Installment count must be at least 1",
            ));
        }

        money::validate_amount("Charge amount", total_amount)?;

        let total = money::round_cents(total_amount);
        if installment_count == 1 {
            return Ok(vec![total]);
        }

        let count = Decimal::from(installment_count);
        let base = money::round_cents(total / count);
        let remainder = total - base * count;

        let mut amounts = vec![base; installment_count as usize];
        if let Some(last) = amounts.last_mut() {
            *last = base + remainder;
        }

        Ok(amounts)
    }

    /// Produces the full installment schedule for a charge.
    ///
    /// Entries are ordered by installment index and labelled
    /// `"Title (i/N)"` when the purchase is split. Card charges land on
    /// future statements, so every entry is a prediction.
    pub fn build_schedule(
        request: &ChargeRequest,
        cycle: &BillingCycle,
    ) -> Result<Vec<ScheduledEntry>> {
        request.validate()?;
        cycle.validate()?;

        info!(
            title = request.title.as_str(),
            installment_count = request.installment_count,
            total_amount = %request.total_amount,
            "Building installment schedule"
        );

        let amounts = Self::split_amount(request.total_amount, request.installment_count)?;
        let mut entries = Vec::with_capacity(amounts.len());

        for (index, amount) in amounts.into_iter().enumerate() {
            let index = index as u32;
            let due_date = Self::installment_due_date(cycle, request.purchase_date, index)?;

            entries.push(ScheduledEntry {
                due_date,
                amount,
                label: request.label(index),
                status: TransactionStatus::Predicted,
            });
        }

        // The split must conserve the rounded total exactly
        let distributed: Decimal = entries.iter().map(|e| e.amount).sum();
        let expected = money::round_cents(request.total_amount);
        if distributed != expected {
            warn!(
                "Installment amounts ({}) do not sum to the charge total ({})",
                distributed, expected
            );
            return Err(AppError::internal(format!(
                "Installment amounts ({}) do not sum to the charge total ({})",
                distributed, expected
            )));
        }

        Ok(entries)
    }
}
