use serde::{Deserialize, Serialize};

/// Payload del POST /api/contact (sin auth).
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ContactResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
