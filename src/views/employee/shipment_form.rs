use gloo_timers::callback::Timeout;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::models::{
    tracking_number_exists, Client, NewShipment, Session, Shipment, STATUS_PENDING,
};
use crate::services::shipment_service;
use crate::utils::FORM_MESSAGE_CLEAR_MS;
use crate::views::message::{FormMessage, MessageLine};
use crate::views::{input_value, select_value};

#[derive(Properties, PartialEq)]
pub struct EmployeeShipmentFormProps {
    pub session: Session,
    pub clients: Vec<Client>,
    pub clients_error: Option<String>,
    /// Lista cargada, para el chequeo rápido de duplicados.
    pub shipments: Vec<Shipment>,
    pub on_created: Callback<()>,
}

/// Alta de envío desde mostrador. El empleado que registra sale de la
/// sesión autenticada, nunca de un id fijo.
#[function_component(EmployeeShipmentForm)]
pub fn employee_shipment_form(props: &EmployeeShipmentFormProps) -> Html {
    let message = use_state(|| None::<FormMessage>);

    let sender_ref = use_node_ref();
    let receiver_ref = use_node_ref();
    let tracking_ref = use_node_ref();
    let weight_ref = use_node_ref();
    let dimensions_ref = use_node_ref();
    let description_ref = use_node_ref();
    let price_ref = use_node_ref();
    let origin_ref = use_node_ref();
    let destination_ref = use_node_ref();

    let on_submit = {
        let message = message.clone();
        let shipments = props.shipments.clone();
        let employee_id = props.session.user_id;
        let token = props.session.access_token.clone();
        let on_created = props.on_created.clone();

        let sender_ref = sender_ref.clone();
        let receiver_ref = receiver_ref.clone();
        let tracking_ref = tracking_ref.clone();
        let weight_ref = weight_ref.clone();
        let dimensions_ref = dimensions_ref.clone();
        let description_ref = description_ref.clone();
        let price_ref = price_ref.clone();
        let origin_ref = origin_ref.clone();
        let destination_ref = destination_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();

            let tracking_number = input_value(&tracking_ref);

            // Chequeo local de duplicados antes de tocar la red
            if tracking_number_exists(&shipments, &tracking_number) {
                message.set(Some(FormMessage::error(
                    "A shipment with this tracking number already exists!",
                )));
                return;
            }

            let sender_id: i64 = select_value(&sender_ref).parse().unwrap_or(0);
            let receiver_id: i64 = select_value(&receiver_ref).parse().unwrap_or(0);
            if sender_id == 0 || receiver_id == 0 {
                message.set(Some(FormMessage::error("Choose a sender and a receiver!")));
                return;
            }

            let shipment = NewShipment {
                sender_id,
                receiver_id,
                registered_by_employee_id: Some(employee_id),
                tracking_number,
                weight: input_value(&weight_ref).parse().unwrap_or_default(),
                dimensions: input_value(&dimensions_ref),
                description: input_value(&description_ref),
                price: input_value(&price_ref).parse().unwrap_or_default(),
                sent_date: chrono::Utc::now().to_rfc3339(),
                status: STATUS_PENDING.to_string(),
                origin_address: input_value(&origin_ref),
                destination_address: input_value(&destination_ref),
            };

            let message = message.clone();
            let token = token.clone();
            let on_created = on_created.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match shipment_service::create_shipment(&token, &shipment).await {
                    Ok(()) => {
                        message.set(Some(FormMessage::success(
                            "Shipment registered successfully!",
                        )));
                        form.reset();
                        on_created.emit(());

                        let message = message.clone();
                        Timeout::new(FORM_MESSAGE_CLEAR_MS, move || message.set(None)).forget();
                    }
                    Err(error) => {
                        message.set(Some(FormMessage::error(format!("Error: {}", error))));
                    }
                }
            });
        })
    };

    let client_options = |selected_prompt: &str| -> Html {
        html! {
            <>
                <option value="">{selected_prompt}</option>
                if let Some(error) = &props.clients_error {
                    <option disabled=true>{format!("Error: {}", error)}</option>
                }
                { for props.clients.iter().map(|client| html! {
                    <option value={client.id.to_string()}>{client.select_label()}</option>
                }) }
            </>
        }
    };

    html! {
        <form class="shipment-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="sender_id">{"Sender"}</label>
                <select id="sender_id" ref={sender_ref.clone()} required=true>
                    {client_options("Choose a sender")}
                </select>
            </div>

            <div class="form-group">
                <label for="receiver_id">{"Receiver"}</label>
                <select id="receiver_id" ref={receiver_ref.clone()} required=true>
                    {client_options("Choose a receiver")}
                </select>
            </div>

            <div class="form-group">
                <label for="tracking_number">{"Tracking number"}</label>
                <input type="text" id="tracking_number" ref={tracking_ref.clone()} required=true />
            </div>

            <div class="form-group">
                <label for="weight">{"Weight (kg)"}</label>
                <input type="number" id="weight" step="0.1" min="0" ref={weight_ref.clone()} required=true />
            </div>

            <div class="form-group">
                <label for="dimensions">{"Dimensions"}</label>
                <input type="text" id="dimensions" placeholder="30x20x10" ref={dimensions_ref.clone()} required=true />
            </div>

            <div class="form-group">
                <label for="description">{"Description"}</label>
                <input type="text" id="description" ref={description_ref.clone()} required=true />
            </div>

            <div class="form-group">
                <label for="price">{"Price (BGN)"}</label>
                <input type="number" id="price" step="0.01" min="0" ref={price_ref.clone()} required=true />
            </div>

            <div class="form-group">
                <label for="origin_address">{"Origin address"}</label>
                <input type="text" id="origin_address" ref={origin_ref.clone()} required=true />
            </div>

            <div class="form-group">
                <label for="destination_address">{"Destination address"}</label>
                <input type="text" id="destination_address" ref={destination_ref.clone()} required=true />
            </div>

            <button type="submit" class="btn-primary">{"Register shipment"}</button>

            <MessageLine message={(*message).clone()} />
        </form>
    }
}
