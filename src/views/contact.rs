use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::models::ContactMessage;
use crate::services::contact_service;
use crate::views::message::{FormMessage, MessageLine};
use crate::views::{input_value, textarea_value};

#[derive(Properties, PartialEq)]
pub struct ContactViewProps {
    pub on_back: Callback<()>,
}

/// Formulario de contacto del sitio público; único endpoint sin auth.
#[function_component(ContactView)]
pub fn contact_view(props: &ContactViewProps) -> Html {
    let message = use_state(|| None::<FormMessage>);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let body_ref = use_node_ref();

    let on_submit = {
        let message = message.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let body_ref = body_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();

            let payload = ContactMessage {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                message: textarea_value(&body_ref),
            };

            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match contact_service::send_message(&payload).await {
                    Ok(confirmation) => {
                        message.set(Some(FormMessage::success(confirmation)));
                        form.reset();
                    }
                    Err(error) => {
                        log::error!("❌ Contact form error: {}", error);
                        message.set(Some(FormMessage::error(error)));
                    }
                }
            });
        })
    };

    html! {
        <div class="contact-screen">
            <div class="contact-container">
                <div class="contact-header">
                    <button
                        type="button"
                        class="btn-back"
                        onclick={props.on_back.reform(|_| ())}
                    >
                        {"← Back"}
                    </button>
                    <h1>{"Contact us"}</h1>
                    <p>{"Questions about your shipment? Write to us."}</p>
                </div>

                <form class="contact-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input type="text" id="name" name="name" ref={name_ref.clone()} required=true />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" name="email" ref={email_ref.clone()} required=true />
                    </div>

                    <div class="form-group">
                        <label for="message">{"Message"}</label>
                        <textarea id="message" name="message" rows="5" ref={body_ref.clone()} required=true />
                    </div>

                    <button type="submit" class="btn-primary">{"Send"}</button>

                    <MessageLine message={(*message).clone()} />
                </form>
            </div>
        </div>
    }
}
