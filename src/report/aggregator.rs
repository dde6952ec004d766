use crate::model::attendance::DayStatus;
use crate::store::{AttendanceStore, StoreError};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub on_time: u32,
    pub late: u32,
    pub absent: u32,
}

impl Tally {
    /// `None` means no record was stored for the day.
    pub fn record(&mut self, status: Option<DayStatus>) {
        match status {
            Some(DayStatus::OnTime) => self.on_time += 1,
            Some(DayStatus::Late) => self.late += 1,
            None => self.absent += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.on_time + self.late + self.absent
    }
}

/// Classifies each day of a range for one employee.
#[derive(Clone)]
pub struct AttendanceAggregator {
    store: Arc<dyn AttendanceStore>,
}

impl AttendanceAggregator {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self { store }
    }

    /// One lookup per day. Any failed lookup aborts the whole summary.
    #[instrument(skip(self, days), fields(days = days.len()))]
    pub async fn summarize(&self, employee_id: &str, days: &[String]) -> Result<Tally, StoreError> {
        let mut tally = Tally::default();
        for day in days {
            let record = self.store.get_day_record(employee_id, day).await?;
            tally.record(record.map(|r| r.status()));
        }
        debug!(?tally, total = tally.total(), "Summarized employee");
        Ok(tally)
    }
}

#[cfg(test)]
mod test {
    use super::{AttendanceAggregator, Tally};
    use crate::model::employee::Employee;
    use crate::store::memory::MemoryStore;
    use std::sync::Arc;

    fn days(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn store() -> MemoryStore {
        MemoryStore::default()
            .with_employee(Employee::new("emp-1", "Ana"))
            .with_record("emp-1", "2024-01-01", None)
            .with_record("emp-1", "2024-01-02", Some("retardo"))
    }

    #[actix_web::test]
    async fn one_of_each() {
        let aggregator = AttendanceAggregator::new(Arc::new(store()));
        let tally = aggregator
            .summarize("emp-1", &days(&["2024-01-01", "2024-01-02", "2024-01-03"]))
            .await
            .unwrap();
        assert_eq!(
            Tally {
                on_time: 1,
                late: 1,
                absent: 1
            },
            tally
        );
    }

    #[actix_web::test]
    async fn puntual_and_unknown_estado_are_on_time() {
        let store = MemoryStore::default()
            .with_record("emp-1", "2024-05-01", Some("puntual"))
            .with_record("emp-1", "2024-05-02", Some("justificado"));
        let aggregator = AttendanceAggregator::new(Arc::new(store));
        let tally = aggregator
            .summarize("emp-1", &days(&["2024-05-01", "2024-05-02"]))
            .await
            .unwrap();
        assert_eq!(2, tally.on_time);
        assert_eq!(0, tally.late);
    }

    #[actix_web::test]
    async fn totals_match_day_count_and_repeat() {
        let aggregator = AttendanceAggregator::new(Arc::new(store()));
        let range = days(&[
            "2023-12-31",
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
        ]);

        let first = aggregator.summarize("emp-1", &range).await.unwrap();
        let second = aggregator.summarize("emp-1", &range).await.unwrap();
        assert_eq!(range.len() as u32, first.total());
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn unknown_employee_is_absent_every_day() {
        let aggregator = AttendanceAggregator::new(Arc::new(store()));
        let tally = aggregator
            .summarize("nobody", &days(&["2024-01-01", "2024-01-02"]))
            .await
            .unwrap();
        assert_eq!(2, tally.absent);
    }

    #[actix_web::test]
    async fn empty_day_list_is_all_zero() {
        let aggregator = AttendanceAggregator::new(Arc::new(store()));
        let tally = aggregator.summarize("emp-1", &[]).await.unwrap();
        assert_eq!(Tally::default(), tally);
    }

    #[actix_web::test]
    async fn failed_lookup_aborts() {
        let store = Arc::new(store());
        store.fail_next(1);
        let aggregator = AttendanceAggregator::new(store);
        assert!(
            aggregator
                .summarize("emp-1", &days(&["2024-01-01", "2024-01-02"]))
                .await
                .is_err()
        );
    }
}
