pub mod models;
pub mod services;

pub use models::{ChargeRequest, RecurrenceRequest, ScheduledEntry};
pub use services::{InstallmentScheduler, RecurrenceExpander};
