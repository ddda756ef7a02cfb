// ============================================================================
// VIEWS - componentes Yew (pantallas y widgets)
// ============================================================================

pub mod app;
pub mod auth;
pub mod client;
pub mod contact;
pub mod employee;
pub mod message;
pub mod shared;
pub mod shipments;

pub use app::App;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::NodeRef;

/// Valor actual de un <input> referenciado; vacío si no está montado.
pub(crate) fn input_value(node_ref: &NodeRef) -> String {
    node_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub(crate) fn select_value(node_ref: &NodeRef) -> String {
    node_ref
        .cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

pub(crate) fn textarea_value(node_ref: &NodeRef) -> String {
    node_ref
        .cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}
