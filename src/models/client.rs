use serde::{Deserialize, Serialize};

/// Perfil de cliente, read-only desde el frontend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Client {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub phone: String,
}

impl Client {
    /// Etiqueta de los selects de remitente/destinatario.
    pub fn select_label(&self) -> String {
        format!("{} {} ({})", self.first_name, self.last_name, self.company_name)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_label_includes_company() {
        let client = Client {
            id: 7,
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            company_name: "Acme Ltd".to_string(),
            email: String::new(),
            city: String::new(),
            address: String::new(),
            country: String::new(),
            phone: String::new(),
        };
        assert_eq!(client.select_label(), "Ivan Petrov (Acme Ltd)");
        assert_eq!(client.full_name(), "Ivan Petrov");
    }
}
