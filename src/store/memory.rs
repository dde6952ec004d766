use crate::model::{attendance::DayRecord, employee::Employee};
use crate::store::{AttendanceStore, StoreError};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory store for tests. Counts every call and can be told to fail the
/// next `n` calls.
#[derive(Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    records: HashMap<(String, String), DayRecord>,
    calls: AtomicUsize,
    failures: AtomicUsize,
}

impl MemoryStore {
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    pub fn with_record(mut self, employee_id: &str, fecha: &str, estado: Option<&str>) -> Self {
        self.records.insert(
            (employee_id.to_string(), fecha.to_string()),
            DayRecord {
                empleado_id: employee_id.to_string(),
                fecha: fecha.to_string(),
                estado: estado.map(str::to_string),
            },
        );
        self
    }

    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            Err(StoreError::new("simulated outage"))
        } else {
            Ok(())
        }
    }
}

impl AttendanceStore for MemoryStore {
    fn list_employees(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        let res = self.check().map(|_| self.employees.clone());
        futures::future::ready(res).boxed()
    }

    fn get_day_record<'a>(
        &'a self,
        employee_id: &'a str,
        day: &'a str,
    ) -> BoxFuture<'a, Result<Option<DayRecord>, StoreError>> {
        let res = self.check().map(|_| {
            self.records
                .get(&(employee_id.to_string(), day.to_string()))
                .cloned()
        });
        futures::future::ready(res).boxed()
    }
}
