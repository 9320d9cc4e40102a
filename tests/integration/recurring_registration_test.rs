// Recurring-transaction registration and the duplicate-next-month flow
// against the in-memory store.

use chrono::NaiveDate;
use parcela::config::{self, AppConfig};
use parcela::core::calendar::YearMonth;
use parcela::scheduling::models::RecurrenceRequest;
use parcela::transactions::models::{TransactionStatus, TransactionType};
use parcela::transactions::repositories::InMemoryTransactionStore;
use parcela::transactions::services::{ChargeRegistrar, PersistencePolicy};
use rust_decimal_macros::dec;

fn init_tracing() {
    config::init_tracing(&AppConfig {
        env: "test".to_string(),
        log_level: "info".to_string(),
    });
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn registrar() -> ChargeRegistrar<InMemoryTransactionStore> {
    ChargeRegistrar::new(
        InMemoryTransactionStore::new(),
        PersistencePolicy::BestEffortSequential,
    )
}

#[tokio::test]
async fn test_recurring_rows_span_months_with_status() {
    init_tracing();

    let request = RecurrenceRequest {
        title: "Aluguel".to_string(),
        amount: dec!(1500.00),
        kind: TransactionType::Expense,
        category: "Casa".to_string(),
        description: Some("Apartamento".to_string()),
        start_date: date(2025, 1, 31),
        end_month: YearMonth::new(2025, 3).unwrap(),
    };

    let registrar = registrar();
    let records = registrar
        .register_recurring(&request, date(2025, 2, 15))
        .await
        .unwrap();

    assert_eq!(records.len(), 3);

    // Clamped in February, back on the 31st in March
    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![date(2025, 1, 31), date(2025, 2, 28), date(2025, 3, 31)]
    );

    let statuses: Vec<TransactionStatus> = records.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            TransactionStatus::Completed,
            TransactionStatus::Predicted,
            TransactionStatus::Predicted,
        ]
    );

    // Recurrence never splits the amount and never renames the row
    for record in &records {
        assert_eq!(record.amount, dec!(1500.00));
        assert_eq!(record.title, "Aluguel");
        assert_eq!(record.category, "Casa");
    }

    assert_eq!(registrar.store().len().await, 3);
}

#[tokio::test]
async fn test_recurring_income_passes_kind_through() {
    let request = RecurrenceRequest {
        title: "Salário".to_string(),
        amount: dec!(8000.00),
        kind: TransactionType::Income,
        category: "Trabalho".to_string(),
        description: None,
        start_date: date(2025, 6, 5),
        end_month: YearMonth::new(2025, 7).unwrap(),
    };

    let registrar = registrar();
    let records = registrar
        .register_recurring(&request, date(2025, 6, 30))
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.kind == TransactionType::Income));
    assert_eq!(records[0].status, TransactionStatus::Completed);
    assert_eq!(records[1].status, TransactionStatus::Predicted);
}

#[tokio::test]
async fn test_duplicate_next_month_persists_predicted_copy() {
    init_tracing();

    let request = RecurrenceRequest {
        title: "Academia".to_string(),
        amount: dec!(99.90),
        kind: TransactionType::Expense,
        category: "Saúde".to_string(),
        description: None,
        start_date: date(2025, 1, 31),
        end_month: YearMonth::new(2025, 1).unwrap(),
    };

    let registrar = registrar();
    let records = registrar
        .register_recurring(&request, date(2025, 2, 1))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);

    let copy = registrar.duplicate_next_month(&records[0].id).await.unwrap();

    assert_eq!(copy.date, date(2025, 2, 28));
    assert_eq!(copy.status, TransactionStatus::Predicted);
    assert_eq!(copy.title, "Academia");
    assert_ne!(copy.id, records[0].id);

    assert_eq!(registrar.store().len().await, 2);
}

#[tokio::test]
async fn test_duplicate_unknown_id_is_not_found() {
    let registrar = registrar();

    let err = registrar.duplicate_next_month("missing").await.unwrap_err();
    assert!(matches!(err, parcela::core::AppError::NotFound(_)));
}
