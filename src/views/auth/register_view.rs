use gloo_timers::callback::Timeout;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::{ClientRegistration, EmployeeRegistration, Role};
use crate::services::auth_service;
use crate::utils::AUTH_REDIRECT_DELAY_MS;
use crate::views::input_value;
use crate::views::message::{FormMessage, MessageLine};

#[derive(Properties, PartialEq)]
pub struct RegisterViewProps {
    pub on_back_to_login: Callback<()>,
}

/// Pantalla de registro. El selector de rol cambia la forma del payload;
/// ambos bloques de campos quedan montados y solo se alterna su display.
#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let role = use_state(|| Role::Client);
    let message = use_state(|| None::<FormMessage>);

    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    // Campos de cliente
    let company_name_ref = use_node_ref();
    let first_name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let address_ref = use_node_ref();
    let city_ref = use_node_ref();
    let country_ref = use_node_ref();

    // Campos de empleado
    let company_id_ref = use_node_ref();
    let office_id_ref = use_node_ref();
    let emp_first_name_ref = use_node_ref();
    let emp_last_name_ref = use_node_ref();
    let emp_phone_ref = use_node_ref();

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = Role::parse(&select.value()) {
                role.set(selected);
            }
        })
    };

    let on_submit = {
        let role = role.clone();
        let message = message.clone();
        let on_back_to_login = props.on_back_to_login.clone();

        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let company_name_ref = company_name_ref.clone();
        let first_name_ref = first_name_ref.clone();
        let last_name_ref = last_name_ref.clone();
        let phone_ref = phone_ref.clone();
        let address_ref = address_ref.clone();
        let city_ref = city_ref.clone();
        let country_ref = country_ref.clone();
        let company_id_ref = company_id_ref.clone();
        let office_id_ref = office_id_ref.clone();
        let emp_first_name_ref = emp_first_name_ref.clone();
        let emp_last_name_ref = emp_last_name_ref.clone();
        let emp_phone_ref = emp_phone_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = input_value(&email_ref);
            let password = input_value(&password_ref);

            if email.is_empty() || password.is_empty() {
                message.set(Some(FormMessage::error("Email and password are required!")));
                return;
            }

            match *role {
                Role::Client => {
                    let registration = ClientRegistration {
                        email,
                        password,
                        role: Role::Client,
                        company_name: input_value(&company_name_ref),
                        first_name: input_value(&first_name_ref),
                        last_name: input_value(&last_name_ref),
                        phone: input_value(&phone_ref),
                        address: input_value(&address_ref),
                        city: input_value(&city_ref),
                        country: input_value(&country_ref),
                    };

                    if !registration.is_complete() {
                        message.set(Some(FormMessage::error("Please fill in all fields!")));
                        return;
                    }

                    let message = message.clone();
                    let on_back_to_login = on_back_to_login.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match auth_service::register_client(&registration).await {
                            Ok(()) => {
                                registration_succeeded(&message, &on_back_to_login);
                            }
                            Err(error) => {
                                message
                                    .set(Some(FormMessage::error(format!("Error: {}", error))));
                            }
                        }
                    });
                }
                Role::Employee => {
                    let registration = EmployeeRegistration {
                        email,
                        password,
                        role: Role::Employee,
                        company_id: input_value(&company_id_ref).parse().unwrap_or(0),
                        office_id: input_value(&office_id_ref).parse().unwrap_or(0),
                        first_name: input_value(&emp_first_name_ref),
                        last_name: input_value(&emp_last_name_ref),
                        phone: input_value(&emp_phone_ref),
                    };

                    if !registration.is_complete() {
                        message.set(Some(FormMessage::error("Please fill in all fields!")));
                        return;
                    }

                    let message = message.clone();
                    let on_back_to_login = on_back_to_login.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match auth_service::register_employee(&registration).await {
                            Ok(()) => {
                                registration_succeeded(&message, &on_back_to_login);
                            }
                            Err(error) => {
                                message
                                    .set(Some(FormMessage::error(format!("Error: {}", error))));
                            }
                        }
                    });
                }
            }
        })
    };

    let client_display = if *role == Role::Client {
        "display:block"
    } else {
        "display:none"
    };
    let employee_display = if *role == Role::Employee {
        "display:block"
    } else {
        "display:none"
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container register-container">
                <div class="auth-header">
                    <button
                        type="button"
                        class="btn-back"
                        onclick={props.on_back_to_login.reform(|_| ())}
                    >
                        {"← Back"}
                    </button>
                    <h1>{"Create an account"}</h1>
                </div>

                <form class="auth-form register-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="role">{"Account type"}</label>
                        <select id="role" name="role" onchange={on_role_change}>
                            <option value="CLIENT" selected={*role == Role::Client}>
                                {"Client"}
                            </option>
                            <option value="EMPLOYEE" selected={*role == Role::Employee}>
                                {"Employee"}
                            </option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" ref={email_ref.clone()} required=true />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            ref={password_ref.clone()}
                            required=true
                        />
                    </div>

                    <div class="form-section" id="clientFields" style={client_display}>
                        <h3 class="section-title">{"Client details"}</h3>
                        <div class="form-group">
                            <label for="company_name">{"Company name"}</label>
                            <input type="text" id="company_name" ref={company_name_ref.clone()} />
                        </div>
                        <div class="form-group">
                            <label for="first_name">{"First name"}</label>
                            <input type="text" id="first_name" ref={first_name_ref.clone()} />
                        </div>
                        <div class="form-group">
                            <label for="last_name">{"Last name"}</label>
                            <input type="text" id="last_name" ref={last_name_ref.clone()} />
                        </div>
                        <div class="form-group">
                            <label for="phone">{"Phone"}</label>
                            <input type="tel" id="phone" ref={phone_ref.clone()} />
                        </div>
                        <div class="form-group">
                            <label for="address">{"Address"}</label>
                            <input type="text" id="address" ref={address_ref.clone()} />
                        </div>
                        <div class="form-group">
                            <label for="city">{"City"}</label>
                            <input type="text" id="city" ref={city_ref.clone()} />
                        </div>
                        <div class="form-group">
                            <label for="country">{"Country"}</label>
                            <input type="text" id="country" ref={country_ref.clone()} />
                        </div>
                    </div>

                    <div class="form-section" id="employeeFields" style={employee_display}>
                        <h3 class="section-title">{"Employee details"}</h3>
                        <div class="form-group">
                            <label for="company_id">{"Company id"}</label>
                            <input type="number" id="company_id" ref={company_id_ref.clone()} />
                        </div>
                        <div class="form-group">
                            <label for="office_id">{"Office id"}</label>
                            <input type="number" id="office_id" ref={office_id_ref.clone()} />
                        </div>
                        <div class="form-group">
                            <label for="emp_first_name">{"First name"}</label>
                            <input
                                type="text"
                                id="emp_first_name"
                                ref={emp_first_name_ref.clone()}
                            />
                        </div>
                        <div class="form-group">
                            <label for="emp_last_name">{"Last name"}</label>
                            <input
                                type="text"
                                id="emp_last_name"
                                ref={emp_last_name_ref.clone()}
                            />
                        </div>
                        <div class="form-group">
                            <label for="emp_phone">{"Phone"}</label>
                            <input type="tel" id="emp_phone" ref={emp_phone_ref.clone()} />
                        </div>
                    </div>

                    <button type="submit" class="btn-primary">{"Register"}</button>

                    <MessageLine message={(*message).clone()} />
                </form>
            </div>
        </div>
    }
}

fn registration_succeeded(
    message: &UseStateHandle<Option<FormMessage>>,
    on_back_to_login: &Callback<()>,
) {
    log::info!("✅ Registration ok");
    message.set(Some(FormMessage::success(
        "Registration successful! Redirecting...",
    )));

    let on_back_to_login = on_back_to_login.clone();
    Timeout::new(AUTH_REDIRECT_DELAY_MS, move || on_back_to_login.emit(())).forget();
}
