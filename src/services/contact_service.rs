use gloo_net::http::Request;

use super::error_from_response;
use crate::models::{ContactMessage, ContactResponse};
use crate::utils::BACKEND_URL;

/// POST /api/contact (sin auth). Devuelve el mensaje de confirmación del
/// backend, con fallback fijo si no manda ninguno.
pub async fn send_message(message: &ContactMessage) -> Result<String, String> {
    let url = format!("{}/api/contact", BACKEND_URL);

    log::info!("✉️ Sending contact message from {}", message.email);

    let response = Request::post(&url)
        .json(message)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|_| "Could not reach the server.".to_string())?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    let body = response.json::<ContactResponse>().await.unwrap_or_default();
    Ok(body.message.unwrap_or_else(|| "Message sent!".to_string()))
}
