pub mod charge_request;
pub mod recurrence;
pub mod scheduled_entry;

pub use charge_request::ChargeRequest;
pub use recurrence::RecurrenceRequest;
pub use scheduled_entry::ScheduledEntry;
