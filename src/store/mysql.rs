use crate::model::{attendance::DayRecord, employee::Employee};
use crate::store::{AttendanceStore, StoreError};
use futures::FutureExt;
use futures::future::BoxFuture;
use sqlx::MySqlPool;
use tracing::{debug, error};

/// Attendance store backed by the `empleados` and `asistencias` tables.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl AttendanceStore for MySqlStore {
    fn list_employees(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        async move {
            let employees = sqlx::query_as::<_, Employee>(
                r#"
                SELECT id, nombre
                FROM empleados
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch employees");
                StoreError::from(e)
            })?;

            debug!(count = employees.len(), "Fetched employees");
            Ok(employees)
        }
        .boxed()
    }

    fn get_day_record<'a>(
        &'a self,
        employee_id: &'a str,
        day: &'a str,
    ) -> BoxFuture<'a, Result<Option<DayRecord>, StoreError>> {
        async move {
            sqlx::query_as::<_, DayRecord>(
                r#"
                SELECT empleado_id, fecha, estado
                FROM asistencias
                WHERE empleado_id = ? AND fecha = ?
                "#,
            )
            .bind(employee_id)
            .bind(day)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, employee_id, day, "Failed to fetch attendance record");
                StoreError::from(e)
            })
        }
        .boxed()
    }
}
