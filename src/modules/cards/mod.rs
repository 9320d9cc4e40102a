pub mod models;

pub use models::{BillingCycle, CreditCard};
