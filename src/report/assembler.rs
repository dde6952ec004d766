use crate::model::{attendance::EmployeeSummary, employee::Employee};
use crate::report::aggregator::AttendanceAggregator;
use crate::store::StoreError;
use futures::{StreamExt, TryStreamExt, stream};

/// Builds one summary per employee, in directory order.
#[derive(Clone)]
pub struct ReportAssembler {
    aggregator: AttendanceAggregator,
    concurrency: usize,
}

impl ReportAssembler {
    /// `concurrency` is how many employees are summarized at once.
    pub fn new(aggregator: AttendanceAggregator, concurrency: usize) -> Self {
        Self {
            aggregator,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn assemble(
        &self,
        employees: &[Employee],
        days: &[String],
    ) -> Result<Vec<EmployeeSummary>, StoreError> {
        // `buffered` yields results in input order whatever order they finish in
        stream::iter(employees)
            .map(|employee| async move {
                let tally = self.aggregator.summarize(&employee.id, days).await?;
                Ok::<_, StoreError>(EmployeeSummary {
                    display_name: employee.nombre.clone(),
                    on_time: tally.on_time,
                    late: tally.late,
                    absent: tally.absent,
                })
            })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }
}
