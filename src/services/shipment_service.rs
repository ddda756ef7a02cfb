use std::fmt;

use gloo_net::http::Request;

use super::{bearer, error_from_response};
use crate::models::{NewShipment, Shipment, ShipmentUpdate, STATUS_DELIVERED};
use crate::utils::BACKEND_URL;

/// Fallo al cargar la lista: un 401 fuerza re-login, el resto se muestra
/// inline como cualquier otro error.
#[derive(Clone, PartialEq, Debug)]
pub enum ShipmentLoadError {
    SessionExpired,
    Other(String),
}

impl fmt::Display for ShipmentLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipmentLoadError::SessionExpired => {
                write!(f, "Session expired. Please log in again.")
            }
            ShipmentLoadError::Other(message) => write!(f, "{}", message),
        }
    }
}

/// GET /api/shipment
pub async fn fetch_shipments(token: &str) -> Result<Vec<Shipment>, ShipmentLoadError> {
    let url = format!("{}/api/shipment", BACKEND_URL);

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ShipmentLoadError::Other(format!("Network error: {}", e)))?;

    if response.status() == 401 {
        log::warn!("⚠️ Shipment load returned 401, session expired");
        return Err(ShipmentLoadError::SessionExpired);
    }

    if !response.ok() {
        return Err(ShipmentLoadError::Other(error_from_response(response).await));
    }

    let shipments = response
        .json::<Vec<Shipment>>()
        .await
        .map_err(|e| ShipmentLoadError::Other(format!("Parse error: {}", e)))?;

    log::info!("📦 Loaded {} shipments", shipments.len());

    Ok(shipments)
}

/// POST /api/shipment
pub async fn create_shipment(token: &str, shipment: &NewShipment) -> Result<(), String> {
    let url = format!("{}/api/shipment", BACKEND_URL);

    log::info!("📦 Registering shipment: {}", shipment.tracking_number);

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .json(shipment)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

/// PUT /api/shipment/{id} — marca el envío como entregado ahora mismo.
pub async fn mark_delivered(token: &str, shipment_id: i64) -> Result<(), String> {
    let url = format!("{}/api/shipment/{}", BACKEND_URL, shipment_id);
    let body = ShipmentUpdate {
        status: STATUS_DELIVERED.to_string(),
        received_date: chrono::Utc::now().to_rfc3339(),
    };

    log::info!("✅ Marking shipment {} as delivered", shipment_id);

    let response = Request::put(&url)
        .header("Authorization", &bearer(token))
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}
