use yew::prelude::*;

use crate::models::{card_class, status_label, Shipment, STATUS_DELIVERED};
use crate::utils::{format_date, format_price};

#[derive(Properties, PartialEq)]
pub struct ShipmentCardProps {
    pub shipment: Shipment,
    /// Solo el dashboard de empleado pasa esto.
    #[prop_or_default]
    pub on_mark_delivered: Option<Callback<i64>>,
}

#[function_component(ShipmentCard)]
pub fn shipment_card(props: &ShipmentCardProps) -> Html {
    let shipment = &props.shipment;

    let modifier = card_class(&shipment.status);
    let card_classes = classes!(
        "shipment-card",
        (!modifier.is_empty()).then_some(modifier)
    );
    let status_classes = classes!(
        "shipment-status",
        format!("status-{}", shipment.status.to_lowercase())
    );

    let deliver_button = match &props.on_mark_delivered {
        Some(on_mark_delivered) if shipment.status != STATUS_DELIVERED => {
            let on_mark_delivered = on_mark_delivered.clone();
            let shipment_id = shipment.id;
            let onclick =
                Callback::from(move |_: MouseEvent| on_mark_delivered.emit(shipment_id));

            html! {
                <div class="shipment-actions">
                    <button class="btn-deliver" {onclick}>{"Mark as delivered"}</button>
                </div>
            }
        }
        _ => html! {},
    };

    html! {
        <div class={card_classes}>
            <div class="shipment-header">
                <div class="shipment-number">
                    {format!("Shipment #{} - {}", shipment.id, shipment.tracking_number)}
                </div>
                <div class={status_classes}>{status_label(&shipment.status)}</div>
            </div>
            <div class="shipment-details">
                <div class="detail-row">
                    <span class="detail-label">{"From:"}</span>
                    <span class="detail-value">{&shipment.origin_address}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"To:"}</span>
                    <span class="detail-value">{&shipment.destination_address}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Weight:"}</span>
                    <span class="detail-value">{format!("{} kg", shipment.weight)}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Dimensions:"}</span>
                    <span class="detail-value">{&shipment.dimensions}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Description:"}</span>
                    <span class="detail-value">{&shipment.description}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Price:"}</span>
                    <span class="detail-value">
                        {format!("{} BGN", format_price(shipment.price))}
                    </span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Sent:"}</span>
                    <span class="detail-value">{format_date(&shipment.sent_date)}</span>
                </div>
                if let Some(received) = &shipment.received_date {
                    <div class="detail-row">
                        <span class="detail-label">{"Received:"}</span>
                        <span class="detail-value">{format_date(received)}</span>
                    </div>
                }
            </div>
            {deliver_button}
        </div>
    }
}
