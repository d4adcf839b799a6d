// Domain models: cleaned report rows, the joined alarm view, and per-node summaries.

mod alarm;
mod availability;
mod summary;

pub use alarm::{CleanedAlarmRecord, JoinedRecord};
pub use availability::CleanedAvailabilityRecord;
pub use summary::{DateBounds, DowntimeSummary};
