use serde::{Deserialize, Serialize};

/// Ficha de empleado; solo se usa en el report de empleados.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub is_active: bool,
}
