use crate::model::{attendance::DayRecord, employee::Employee};
use derive_more::Display;
use futures::future::BoxFuture;

#[cfg(test)]
pub mod memory;
pub mod mysql;
pub mod retry;

/// Failure talking to the attendance store.
#[derive(Debug, Clone, Display)]
#[display(fmt = "store unavailable: {}", _0)]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError(message.into())
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        StoreError::new(error.to_string())
    }
}

/// Read access to employees and their per-day attendance records.
///
/// Implementations are shared across requests as `Arc<dyn AttendanceStore>`.
pub trait AttendanceStore: Send + Sync {
    /// All known employees, in the store's iteration order.
    fn list_employees(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>>;

    /// The record for `employee_id` on `day` ("YYYY-MM-DD"), if one exists.
    fn get_day_record<'a>(
        &'a self,
        employee_id: &'a str,
        day: &'a str,
    ) -> BoxFuture<'a, Result<Option<DayRecord>, StoreError>>;
}
