use crate::model::{attendance::DayRecord, employee::Employee};
use crate::store::{AttendanceStore, StoreError};
use actix_web::rt::time::sleep;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Retries failed store calls a bounded number of times with a fixed delay.
pub struct RetryingStore {
    inner: Arc<dyn AttendanceStore>,
    attempts: u32,
    delay: Duration,
}

impl RetryingStore {
    /// `attempts` counts the first try; values below 1 are treated as 1.
    pub fn new(inner: Arc<dyn AttendanceStore>, attempts: u32, delay: Duration) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
            delay,
        }
    }

    /// Runs `call` until it succeeds or attempts run out. `on_retry` sees each
    /// failure that will be retried along with its attempt number.
    async fn with_retry<T, F, Fut, R>(&self, mut call: F, on_retry: R) -> Result<T, StoreError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
        R: Fn(&StoreError, u32),
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.attempts => {
                    on_retry(&e, attempt);
                    attempt += 1;
                    sleep(self.delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl AttendanceStore for RetryingStore {
    fn list_employees(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        let max_attempts = self.attempts;
        self.with_retry(
            || self.inner.list_employees(),
            move |e, attempt| {
                warn!(error = %e, attempt, max_attempts, "Listing employees failed, retrying");
            },
        )
        .boxed()
    }

    fn get_day_record<'a>(
        &'a self,
        employee_id: &'a str,
        day: &'a str,
    ) -> BoxFuture<'a, Result<Option<DayRecord>, StoreError>> {
        let max_attempts = self.attempts;
        self.with_retry(
            move || self.inner.get_day_record(employee_id, day),
            move |e, attempt| {
                warn!(
                    error = %e,
                    attempt,
                    max_attempts,
                    employee_id,
                    day,
                    "Attendance lookup failed, retrying"
                );
            },
        )
        .boxed()
    }
}
