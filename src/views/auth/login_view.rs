use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{Role, Session};
use crate::services::auth_service;
use crate::utils::LOGIN_REDIRECT_DELAY_MS;
use crate::views::message::{FormMessage, MessageLine};

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub on_logged_in: Callback<Session>,
    pub on_show_register: Callback<()>,
    pub on_show_contact: Callback<()>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(|| None::<FormMessage>);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let message = message.clone();
        let on_logged_in = props.on_logged_in.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = (*email).clone();
            let password_value = (*password).clone();

            if email_value.is_empty() || password_value.is_empty() {
                message.set(Some(FormMessage::error("Email and password are required!")));
                return;
            }

            let message = message.clone();
            let on_logged_in = on_logged_in.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&email_value, &password_value).await {
                    Ok(response) => {
                        let role = match Role::parse(&response.role) {
                            Some(role) => role,
                            None => {
                                log::error!("❌ Backend sent unknown role: {}", response.role);
                                message.set(Some(FormMessage::error(format!(
                                    "Unknown role: {}",
                                    response.role
                                ))));
                                return;
                            }
                        };

                        let session = Session {
                            access_token: response.access_token,
                            user_id: response.user_id,
                            role,
                        };
                        session.save();

                        log::info!("✅ Login ok: user {} ({})", session.user_id, role.as_str());
                        message.set(Some(FormMessage::success(
                            "Login successful! Redirecting...",
                        )));

                        // El cambio de pantalla llega tras el delay fijo
                        let on_logged_in = on_logged_in.clone();
                        Timeout::new(LOGIN_REDIRECT_DELAY_MS, move || {
                            on_logged_in.emit(session);
                        })
                        .forget();
                    }
                    Err(error) => {
                        log::error!("❌ Login failed: {}", error);
                        message.set(Some(FormMessage::error(format!("Error: {}", error))));
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="logo-icon">{"📦"}</div>
                    <h1>{"Shipment Tracker"}</h1>
                    <p>{"Sign in to manage your shipments"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Your password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-primary">{"Sign in"}</button>

                    <MessageLine message={(*message).clone()} />

                    <div class="auth-footer">
                        <button
                            type="button"
                            class="btn-link"
                            onclick={props.on_show_register.reform(|_| ())}
                        >
                            {"Create an account"}
                        </button>
                        <button
                            type="button"
                            class="btn-link"
                            onclick={props.on_show_contact.reform(|_| ())}
                        >
                            {"Contact us"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
