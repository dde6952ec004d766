use serde::{Deserialize, Serialize};

/// A row of the `empleados` table. `id` is the stable identity, `nombre` is
/// only used for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: String,
    pub nombre: String,
}

#[cfg(test)]
impl Employee {
    pub fn new(id: impl Into<String>, nombre: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nombre: nombre.into(),
        }
    }
}
