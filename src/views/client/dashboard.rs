use yew::prelude::*;

use super::SendShipmentForm;
use crate::models::{Client, Session, Shipment, StatusFilter};
use crate::services::client_service;
use crate::views::message::{FormMessage, MessageLine};
use crate::views::shared::AppHeader;
use crate::views::shipments::{load_shipments, FilterBar, ShipmentList};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    MyShipments,
    Send,
}

#[derive(Properties, PartialEq)]
pub struct ClientDashboardProps {
    pub session: Session,
    pub on_logout: Callback<()>,
}

#[function_component(ClientDashboard)]
pub fn client_dashboard(props: &ClientDashboardProps) -> Html {
    let shipments = use_state(Vec::<Shipment>::new);
    let filter = use_state(|| StatusFilter::All);
    let clients = use_state(Vec::<Client>::new);
    let clients_error = use_state(|| None::<String>);
    let profile = use_state(|| None::<Client>);
    let load_message = use_state(|| None::<FormMessage>);
    let tab = use_state(|| Tab::MyShipments);

    // Secuencia de carga del montaje: perfil → envíos → clientes
    {
        let shipments = shipments.clone();
        let clients = clients.clone();
        let clients_error = clients_error.clone();
        let profile = profile.clone();
        let load_message = load_message.clone();
        let token = props.session.access_token.clone();
        let on_expired = props.on_logout.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match client_service::fetch_own_profile(&token).await {
                    Ok(me) => {
                        log::info!("👤 Client profile loaded: id {}", me.id);
                        profile.set(Some(me));
                    }
                    Err(error) => {
                        log::error!("❌ Error loading client profile: {}", error);
                    }
                }

                load_shipments(&token, &shipments, &load_message, &on_expired).await;

                match client_service::fetch_clients(&token).await {
                    Ok(list) => clients.set(list),
                    Err(error) => {
                        log::error!("❌ Error loading clients: {}", error);
                        clients_error.set(Some(error));
                    }
                }
            });
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |selected: StatusFilter| filter.set(selected))
    };

    // Re-fetch completo tras registrar un envío
    let reload_shipments = {
        let shipments = shipments.clone();
        let load_message = load_message.clone();
        let token = props.session.access_token.clone();
        let on_expired = props.on_logout.clone();

        Callback::from(move |_| {
            let shipments = shipments.clone();
            let load_message = load_message.clone();
            let token = token.clone();
            let on_expired = on_expired.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load_shipments(&token, &shipments, &load_message, &on_expired).await;
            });
        })
    };

    let show_list_tab = {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(Tab::MyShipments))
    };

    let select_tab = |wanted: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(wanted))
    };

    let tab_class = |wanted: Tab| {
        classes!("tab-btn", (*tab == wanted).then_some("active"))
    };

    let user_label = match &*profile {
        Some(me) => format!("👤 {}", me.full_name()),
        None => "👤 Client".to_string(),
    };

    html! {
        <div class="dashboard client-dashboard">
            <AppHeader {user_label} on_logout={props.on_logout.clone()} />

            <MessageLine message={(*load_message).clone()} />

            <nav class="tab-bar">
                <button class={tab_class(Tab::MyShipments)} onclick={select_tab(Tab::MyShipments)}>
                    {"My shipments"}
                </button>
                <button class={tab_class(Tab::Send)} onclick={select_tab(Tab::Send)}>
                    {"Send a shipment"}
                </button>
            </nav>

            {
                match *tab {
                    Tab::MyShipments => html! {
                        <section class="tab-content">
                            <FilterBar active={*filter} on_select={on_filter} />
                            <ShipmentList shipments={(*shipments).clone()} filter={*filter} />
                        </section>
                    },
                    Tab::Send => html! {
                        <section class="tab-content">
                            <SendShipmentForm
                                session={props.session.clone()}
                                sender={(*profile).clone()}
                                clients={(*clients).clone()}
                                clients_error={(*clients_error).clone()}
                                on_created={reload_shipments}
                                on_show_list={show_list_tab}
                            />
                        </section>
                    },
                }
            }
        </div>
    }
}
