pub mod models;
pub mod repositories;
pub mod services;

pub use models::{TransactionRecord, TransactionStatus, TransactionType};
pub use repositories::{InMemoryTransactionStore, TransactionStore};
pub use services::{ChargeRegistrar, PersistencePolicy};
