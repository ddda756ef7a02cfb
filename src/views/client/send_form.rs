use gloo_timers::callback::Timeout;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::models::{
    generate_tracking_number, Client, NewShipment, Session, STATUS_PENDING,
};
use crate::services::shipment_service;
use crate::utils::FORM_MESSAGE_CLEAR_MS;
use crate::views::message::{FormMessage, MessageLine};
use crate::views::{input_value, select_value};

#[derive(Properties, PartialEq)]
pub struct SendShipmentFormProps {
    pub session: Session,
    /// Perfil propio; remitente del envío. None mientras carga.
    pub sender: Option<Client>,
    pub clients: Vec<Client>,
    pub clients_error: Option<String>,
    pub on_created: Callback<()>,
    pub on_show_list: Callback<()>,
}

/// Formulario self-service de envío. El tracking se genera en cliente y el
/// backend asigna el empleado que lo registra.
#[function_component(SendShipmentForm)]
pub fn send_shipment_form(props: &SendShipmentFormProps) -> Html {
    let message = use_state(|| None::<FormMessage>);

    let receiver_ref = use_node_ref();
    let weight_ref = use_node_ref();
    let dimensions_ref = use_node_ref();
    let description_ref = use_node_ref();
    let price_ref = use_node_ref();
    let origin_ref = use_node_ref();
    let destination_ref = use_node_ref();

    let on_submit = {
        let message = message.clone();
        let sender = props.sender.clone();
        let token = props.session.access_token.clone();
        let on_created = props.on_created.clone();
        let on_show_list = props.on_show_list.clone();

        let receiver_ref = receiver_ref.clone();
        let weight_ref = weight_ref.clone();
        let dimensions_ref = dimensions_ref.clone();
        let description_ref = description_ref.clone();
        let price_ref = price_ref.clone();
        let origin_ref = origin_ref.clone();
        let destination_ref = destination_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();

            let sender_id = match &sender {
                Some(me) => me.id,
                None => {
                    message.set(Some(FormMessage::error(
                        "Your profile is still loading. Try again in a moment.",
                    )));
                    return;
                }
            };

            let receiver_id: i64 = select_value(&receiver_ref).parse().unwrap_or(0);
            if receiver_id == 0 {
                message.set(Some(FormMessage::error("Choose a receiver!")));
                return;
            }

            let tracking_number = generate_tracking_number();
            let shipment = NewShipment {
                sender_id,
                receiver_id,
                registered_by_employee_id: None,
                tracking_number: tracking_number.clone(),
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
            let on_show_list = on_show_list.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match shipment_service::create_shipment(&token, &shipment).await {
                    Ok(()) => {
                        message.set(Some(FormMessage::success(format!(
                            "Shipment registered successfully! Number: {}",
                            tracking_number
                        ))));
                        form.reset();
                        on_created.emit(());

                        // El mensaje se limpia solo y volvemos a la lista
                        let message = message.clone();
                        Timeout::new(FORM_MESSAGE_CLEAR_MS, move || {
                            message.set(None);
                            on_show_list.emit(());
                        })
                        .forget();
                    }
                    Err(error) => {
                        message.set(Some(FormMessage::error(format!("Error: {}", error))));
                    }
                }
            });
        })
    };

    html! {
        <form class="shipment-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="receiver_id">{"Receiver"}</label>
                <select id="receiver_id" ref={receiver_ref.clone()} required=true>
                    <option value="">{"Choose a receiver"}</option>
                    if let Some(error) = &props.clients_error {
                        <option disabled=true>{format!("Error: {}", error)}</option>
                    }
                    { for props.clients.iter().map(|client| html! {
                        <option value={client.id.to_string()}>{client.select_label()}</option>
                    }) }
                </select>
            </div>

            <div class="form-group">
                <label for="send_weight">{"Weight (kg)"}</label>
                <input
                    type="number"
                    id="send_weight"
                    step="0.1"
                    min="0"
                    ref={weight_ref.clone()}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for="send_dimensions">{"Dimensions"}</label>
                <input
                    type="text"
                    id="send_dimensions"
                    placeholder="30x20x10"
                    ref={dimensions_ref.clone()}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for="send_description">{"Description"}</label>
                <input type="text" id="send_description" ref={description_ref.clone()} required=true />
            </div>

            <div class="form-group">
                <label for="send_price">{"Price (BGN)"}</label>
                <input
                    type="number"
                    id="send_price"
                    step="0.01"
                    min="0"
                    ref={price_ref.clone()}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for="send_origin_address">{"Origin address"}</label>
                <input type="text" id="send_origin_address" ref={origin_ref.clone()} required=true />
            </div>

            <div class="form-group">
                <label for="send_destination_address">{"Destination address"}</label>
                <input
                    type="text"
                    id="send_destination_address"
                    ref={destination_ref.clone()}
                    required=true
                />
            </div>

            <button type="submit" class="btn-primary">{"Send shipment"}</button>

            <MessageLine message={(*message).clone()} />
        </form>
    }
}
