use gloo_net::http::Request;

use super::{bearer, error_from_response};
use crate::models::Employee;
use crate::utils::BACKEND_URL;

/// GET /api/employee — solo lo consume el report de empleados.
pub async fn fetch_employees(token: &str) -> Result<Vec<Employee>, String> {
    let url = format!("{}/api/employee", BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Vec<Employee>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
