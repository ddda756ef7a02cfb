// ============================================================================
// SERVICES - SOLO COMUNICACIÓN API (stateless)
// ============================================================================
// Sin lógica de negocio: cada función hace un request y devuelve el
// resultado ya listo para mostrar inline.
// ============================================================================

pub mod auth_service;
pub mod client_service;
pub mod contact_service;
pub mod employee_service;
pub mod shipment_service;

pub use auth_service::*;
pub use client_service::*;
pub use contact_service::*;
pub use employee_service::*;
pub use shipment_service::*;

use gloo_net::http::Response;

use crate::models::ApiErrorBody;

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Prefiere el mensaje del cuerpo JSON de error del backend; si no hay
/// cuerpo parseable cae a la línea de status HTTP.
pub(crate) async fn error_from_response(response: Response) -> String {
    let fallback = format!("HTTP {}: {}", response.status(), response.status_text());
    match response.text().await {
        Ok(text) => match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => body.error.or(body.message).unwrap_or(fallback),
            Err(_) => fallback,
        },
        Err(_) => fallback,
    }
}
