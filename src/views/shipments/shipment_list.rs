use yew::prelude::*;

use super::ShipmentCard;
use crate::models::{filter_shipments, Shipment, StatusFilter};

#[derive(Properties, PartialEq)]
pub struct ShipmentListProps {
    pub shipments: Vec<Shipment>,
    pub filter: StatusFilter,
    #[prop_or_default]
    pub on_mark_delivered: Option<Callback<i64>>,
}

/// Lista filtrada en una sola escritura, orden de entrada preservado.
#[function_component(ShipmentList)]
pub fn shipment_list(props: &ShipmentListProps) -> Html {
    let visible = filter_shipments(&props.shipments, props.filter);

    if visible.is_empty() {
        return html! {
            <p class="empty-list">{"No shipments to show"}</p>
        };
    }

    html! {
        <div class="shipments-container">
            { for visible.into_iter().map(|shipment| html! {
                <ShipmentCard
                    key={shipment.id.to_string()}
                    shipment={shipment.clone()}
                    on_mark_delivered={props.on_mark_delivered.clone()}
                />
            }) }
        </div>
    }
}
