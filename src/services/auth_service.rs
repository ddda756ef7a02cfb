use gloo_net::http::Request;

use super::error_from_response;
use crate::models::{ClientRegistration, EmployeeRegistration, LoginRequest, LoginResponse};
use crate::utils::BACKEND_URL;

/// POST /api/auth/login
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    let url = format!("{}/api/auth/login", BACKEND_URL);
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Logging in: {}", email);

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// POST /api/auth/register con forma de payload de cliente
pub async fn register_client(registration: &ClientRegistration) -> Result<(), String> {
    log::info!("📝 Registering client: {}", registration.email);
    post_registration(registration).await
}

/// POST /api/auth/register con forma de payload de empleado
pub async fn register_employee(registration: &EmployeeRegistration) -> Result<(), String> {
    log::info!("📝 Registering employee: {}", registration.email);
    post_registration(registration).await
}

async fn post_registration<T: serde::Serialize>(body: &T) -> Result<(), String> {
    let url = format!("{}/api/auth/register", BACKEND_URL);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
