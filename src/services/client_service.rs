use gloo_net::http::Request;

use super::{bearer, error_from_response};
use crate::models::Client;
use crate::utils::BACKEND_URL;

/// GET /api/client — lista completa para los selects de remitente/destinatario.
pub async fn fetch_clients(token: &str) -> Result<Vec<Client>, String> {
    let url = format!("{}/api/client", BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let clients = response
        .json::<Vec<Client>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    log::info!("👥 Loaded {} clients", clients.len());

    Ok(clients)
}

/// GET /api/client/me — perfil propio del cliente autenticado.
pub async fn fetch_own_profile(token: &str) -> Result<Client, String> {
    let url = format!("{}/api/client/me", BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Client>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
