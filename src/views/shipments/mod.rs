mod filter_bar;
mod shipment_card;
mod shipment_list;

pub use filter_bar::FilterBar;
pub use shipment_card::ShipmentCard;
pub use shipment_list::ShipmentList;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::message::FormMessage;
use crate::models::Shipment;
use crate::services::{fetch_shipments, ShipmentLoadError};
use crate::utils::AUTH_REDIRECT_DELAY_MS;

/// Carga la lista dentro de `shipments`. Un 401 muestra el aviso de sesión
/// expirada y dispara `on_expired` tras un delay corto; cualquier otro fallo
/// queda como mensaje inline. No limpia mensajes previos: eso es del caller.
pub(crate) async fn load_shipments(
    token: &str,
    shipments: &UseStateHandle<Vec<Shipment>>,
    message: &UseStateHandle<Option<FormMessage>>,
    on_expired: &Callback<()>,
) {
    match fetch_shipments(token).await {
        Ok(list) => shipments.set(list),
        Err(ShipmentLoadError::SessionExpired) => {
            message.set(Some(FormMessage::error(
                ShipmentLoadError::SessionExpired.to_string(),
            )));
            let on_expired = on_expired.clone();
            Timeout::new(AUTH_REDIRECT_DELAY_MS, move || on_expired.emit(())).forget();
        }
        Err(error) => {
            message.set(Some(FormMessage::error(format!(
                "Error loading shipments: {}",
                error
            ))));
        }
    }
}
