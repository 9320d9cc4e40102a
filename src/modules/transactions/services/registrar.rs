use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::cards::models::CreditCard;
use crate::modules::scheduling::models::{ChargeRequest, RecurrenceRequest, ScheduledEntry};
use crate::modules::scheduling::services::{InstallmentScheduler, RecurrenceExpander};
use crate::modules::transactions::models::{TransactionRecord, TransactionType};
use crate::modules::transactions::repositories::TransactionStore;

/// How a multi-entry registration is written to the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistencePolicy {
    /// One awaited create per entry. A failure partway through leaves the
    /// already-persisted prefix in place and the error reports the counts.
    #[default]
    BestEffortSequential,
    /// A single all-or-nothing batch create
    TransactionalBatch,
}

impl PersistencePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BestEffortSequential => "best_effort_sequential",
            Self::TransactionalBatch => "transactional_batch",
        }
    }
}

impl std::fmt::Display for PersistencePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersistencePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "best_effort_sequential" => Ok(Self::BestEffortSequential),
            "transactional_batch" => Ok(Self::TransactionalBatch),
            _ => Err(format!("Invalid persistence policy: {}", s)),
        }
    }
}

/// Workflow that turns charge and recurrence requests into stored ledger
/// rows
pub struct ChargeRegistrar<S> {
    store: S,
    policy: PersistencePolicy,
}

impl<S: TransactionStore> ChargeRegistrar<S> {
    pub fn new(store: S, policy: PersistencePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> PersistencePolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registers a card purchase, splitting it into installment rows dated
    /// by the card's statement cycle. Every row is a predicted expense.
    pub async fn register_card_charge(
        &self,
        card: &CreditCard,
        request: &ChargeRequest,
    ) -> Result<Vec<TransactionRecord>> {
        let entries = InstallmentScheduler::build_schedule(request, &card.billing_cycle())?;

        info!(
            card = card.name.as_str(),
            entries = entries.len(),
            policy = %self.policy,
            "Registering card charge"
        );

        let records = Self::to_records(
            &entries,
            TransactionType::Expense,
            &request.category,
            request.description.as_deref(),
        )?;

        self.persist(records).await
    }

    /// Registers a recurring transaction, one row per month through the
    /// end month. Rows dated on or before `today` are completed, later
    /// ones predicted.
    pub async fn register_recurring(
        &self,
        request: &RecurrenceRequest,
        today: NaiveDate,
    ) -> Result<Vec<TransactionRecord>> {
        let entries = RecurrenceExpander::expand(request, today)?;

        info!(
            title = request.title.as_str(),
            entries = entries.len(),
            policy = %self.policy,
            "Registering recurring transaction"
        );

        let records = Self::to_records(
            &entries,
            request.kind,
            &request.category,
            request.description.as_deref(),
        )?;

        self.persist(records).await
    }

    /// Clones a stored row one month ahead as a prediction and persists
    /// the copy
    pub async fn duplicate_next_month(&self, id: &str) -> Result<TransactionRecord> {
        let source = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Transaction {} not found", id)))?;

        let copy = source.duplicate_next_month()?;
        self.store.create(copy).await
    }

    fn to_records(
        entries: &[ScheduledEntry],
        kind: TransactionType,
        category: &str,
        description: Option<&str>,
    ) -> Result<Vec<TransactionRecord>> {
        entries
            .iter()
            .map(|entry| {
                TransactionRecord::new(
                    entry.label.clone(),
                    entry.amount,
                    kind,
                    entry.status,
                    entry.due_date,
                    category.to_string(),
                    description.map(str::to_string),
                )
            })
            .collect()
    }

    async fn persist(&self, records: Vec<TransactionRecord>) -> Result<Vec<TransactionRecord>> {
        match self.policy {
            PersistencePolicy::BestEffortSequential => {
                let total = records.len();
                let mut stored = Vec::with_capacity(total);

                for record in records {
                    match self.store.create(record).await {
                        Ok(created) => stored.push(created),
                        Err(source) => {
                            return Err(AppError::PartialPersistence {
                                persisted: stored.len(),
                                total,
                                source: Box::new(source),
                            });
                        }
                    }
                }

                Ok(stored)
            }
            PersistencePolicy::TransactionalBatch => self.store.create_batch(records).await,
        }
    }
}
