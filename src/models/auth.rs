use serde::{Deserialize, Serialize};

use super::session::Role;

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: i64,
    pub role: String,
}

/// Cuerpo de error JSON del backend: {"error": ...} o {"message": ...}.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Registro con forma de payload de cliente (role = CLIENT).
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ClientRegistration {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

impl ClientRegistration {
    /// Campos obligatorios del contrato de registro de cliente.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty()
            && !self.password.is_empty()
            && !self.company_name.is_empty()
            && !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.phone.is_empty()
    }
}

/// Registro con forma de payload de empleado (role = EMPLOYEE).
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct EmployeeRegistration {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub company_id: i64,
    pub office_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl EmployeeRegistration {
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty()
            && !self.password.is_empty()
            && self.company_id > 0
            && self.office_id > 0
            && !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.phone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_registration() -> ClientRegistration {
        ClientRegistration {
            email: "ivan@acme.bg".to_string(),
            password: "secret".to_string(),
            role: Role::Client,
            company_name: "Acme Ltd".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            phone: "+359888123456".to_string(),
            address: "bul. Vitosha 1".to_string(),
            city: "Sofia".to_string(),
            country: "Bulgaria".to_string(),
        }
    }

    #[test]
    fn complete_client_registration_passes() {
        assert!(client_registration().is_complete());
    }

    #[test]
    fn client_registration_requires_role_specific_fields() {
        let mut registration = client_registration();
        registration.company_name.clear();
        assert!(!registration.is_complete());

        let mut registration = client_registration();
        registration.phone.clear();
        assert!(!registration.is_complete());
    }

    #[test]
    fn employee_registration_requires_company_and_office() {
        let registration = EmployeeRegistration {
            email: "maria@acme.bg".to_string(),
            password: "secret".to_string(),
            role: Role::Employee,
            company_id: 0,
            office_id: 2,
            first_name: "Maria".to_string(),
            last_name: "Ivanova".to_string(),
            phone: "+359888000111".to_string(),
        };
        assert!(!registration.is_complete());

        let registration = EmployeeRegistration {
            company_id: 1,
            ..registration
        };
        assert!(registration.is_complete());
    }
}
