pub mod aggregator;
pub mod assembler;
pub mod dates;
pub mod directory;

use crate::error::AppError;
use crate::model::attendance::EmployeeSummary;
use crate::store::AttendanceStore;
use aggregator::AttendanceAggregator;
use assembler::ReportAssembler;
use dates::DateRange;
use directory::EmployeeDirectory;
use std::sync::Arc;
use tracing::info;

/// Entry point shared by the HTML page and the JSON API.
#[derive(Clone)]
pub struct ReportService {
    directory: EmployeeDirectory,
    assembler: ReportAssembler,
}

impl ReportService {
    pub fn new(store: Arc<dyn AttendanceStore>, concurrency: usize) -> Self {
        Self {
            directory: EmployeeDirectory::new(store.clone()),
            assembler: ReportAssembler::new(AttendanceAggregator::new(store), concurrency),
        }
    }

    pub async fn summary(&self, range: DateRange) -> Result<Vec<EmployeeSummary>, AppError> {
        let days = range.day_keys();
        let employees = self.directory.list_employees().await?;
        let report = self.assembler.assemble(&employees, &days).await?;
        info!(
            start = %range.start(),
            end = %range.end(),
            days = days.len(),
            employees = report.len(),
            "Built attendance summary"
        );
        Ok(report)
    }
}
