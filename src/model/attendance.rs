use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Stored attendance status. Anything other than `retardo` counts as on-time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString, AsRefStr)]
pub enum DayStatus {
    #[strum(serialize = "puntual")]
    OnTime,
    #[strum(serialize = "retardo")]
    Late,
}

impl DayStatus {
    pub fn from_estado(estado: Option<&str>) -> Self {
        estado
            .and_then(|s| s.parse().ok())
            .unwrap_or(DayStatus::OnTime)
    }
}

/// A row of the `asistencias` table. Its existence means the employee showed up
/// on `fecha`; a missing row means absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DayRecord {
    pub empleado_id: String,
    pub fecha: String,
    pub estado: Option<String>,
}

impl DayRecord {
    pub fn status(&self) -> DayStatus {
        DayStatus::from_estado(self.estado.as_deref())
    }
}

/// Per-employee tally over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "nombre": "Luis Carrillo",
        "asistencias": 18,
        "retardos": 2,
        "faltas": 1
    })
)]
pub struct EmployeeSummary {
    #[serde(rename = "nombre")]
    pub display_name: String,
    #[serde(rename = "asistencias")]
    pub on_time: u32,
    #[serde(rename = "retardos")]
    pub late: u32,
    #[serde(rename = "faltas")]
    pub absent: u32,
}
