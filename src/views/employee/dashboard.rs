use yew::prelude::*;

use super::{EmployeeShipmentForm, ReportsPanel};
use crate::models::{Client, Session, Shipment, ShipmentStats, StatusFilter};
use crate::services::{client_service, shipment_service};
use crate::views::message::{FormMessage, MessageLine};
use crate::views::shared::AppHeader;
use crate::views::shipments::{load_shipments, FilterBar, ShipmentList};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Shipments,
    NewShipment,
    Reports,
}

#[derive(Properties, PartialEq)]
pub struct EmployeeDashboardProps {
    pub session: Session,
    pub on_logout: Callback<()>,
}

#[function_component(EmployeeDashboard)]
pub fn employee_dashboard(props: &EmployeeDashboardProps) -> Html {
    let shipments = use_state(Vec::<Shipment>::new);
    let filter = use_state(|| StatusFilter::All);
    let clients = use_state(Vec::<Client>::new);
    let clients_error = use_state(|| None::<String>);
    let load_message = use_state(|| None::<FormMessage>);
    let section = use_state(|| Section::Shipments);

    // Montaje: clientes para los selects, después los envíos
    {
        let shipments = shipments.clone();
        let clients = clients.clone();
        let clients_error = clients_error.clone();
        let load_message = load_message.clone();
        let token = props.session.access_token.clone();
        let on_expired = props.on_logout.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match client_service::fetch_clients(&token).await {
                    Ok(list) => clients.set(list),
                    Err(error) => {
                        log::error!("❌ Error loading clients: {}", error);
                        clients_error.set(Some(error));
                    }
                }

                load_shipments(&token, &shipments, &load_message, &on_expired).await;
            });
            || ()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |selected: StatusFilter| filter.set(selected))
    };

    // Re-fetch completo tras cada mutación; los contadores salen de la
    // misma lista recargada.
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

    let on_mark_delivered = {
        let shipments = shipments.clone();
        let load_message = load_message.clone();
        let token = props.session.access_token.clone();
        let on_expired = props.on_logout.clone();

        Callback::from(move |shipment_id: i64| {
            let shipments = shipments.clone();
            let load_message = load_message.clone();
            let token = token.clone();
            let on_expired = on_expired.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match shipment_service::mark_delivered(&token, shipment_id).await {
                    Ok(()) => {
                        load_message.set(Some(FormMessage::success(
                            "Shipment marked as delivered!",
                        )));
                        load_shipments(&token, &shipments, &load_message, &on_expired).await;
                    }
                    Err(error) => {
                        load_message.set(Some(FormMessage::error(format!("Error: {}", error))));
                    }
                }
            });
        })
    };

    let select_section = |wanted: Section| {
        let section = section.clone();
        Callback::from(move |_: MouseEvent| section.set(wanted))
    };

    let nav_class = |wanted: Section| {
        classes!("nav-link", (*section == wanted).then_some("active"))
    };

    let stats = ShipmentStats::collect(&shipments);

    html! {
        <div class="dashboard employee-dashboard">
            <AppHeader user_label={"👤 Employee".to_string()} on_logout={props.on_logout.clone()} />

            <MessageLine message={(*load_message).clone()} />

            <nav class="dashboard-nav">
                <button class={nav_class(Section::Shipments)} onclick={select_section(Section::Shipments)}>
                    {"Shipments"}
                </button>
                <button class={nav_class(Section::NewShipment)} onclick={select_section(Section::NewShipment)}>
                    {"Register shipment"}
                </button>
                <button class={nav_class(Section::Reports)} onclick={select_section(Section::Reports)}>
                    {"Reports"}
                </button>
            </nav>

            {
                match *section {
                    Section::Shipments => html! {
                        <section class="dashboard-section">
                            <div class="stats-grid">
                                <div class="stat-card">
                                    <div class="stat-value">{stats.total}</div>
                                    <div class="stat-label">{"Total"}</div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-value">{stats.pending}</div>
                                    <div class="stat-label">{"Pending"}</div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-value">{stats.in_transit}</div>
                                    <div class="stat-label">{"In transit"}</div>
                                </div>
                                <div class="stat-card">
                                    <div class="stat-value">{stats.delivered}</div>
                                    <div class="stat-label">{"Delivered"}</div>
                                </div>
                            </div>

                            <FilterBar active={*filter} on_select={on_filter} />
                            <ShipmentList
                                shipments={(*shipments).clone()}
                                filter={*filter}
                                on_mark_delivered={on_mark_delivered}
                            />
                        </section>
                    },
                    Section::NewShipment => html! {
                        <section class="dashboard-section">
                            <EmployeeShipmentForm
                                session={props.session.clone()}
                                clients={(*clients).clone()}
                                clients_error={(*clients_error).clone()}
                                shipments={(*shipments).clone()}
                                on_created={reload_shipments}
                            />
                        </section>
                    },
                    Section::Reports => html! {
                        <section class="dashboard-section">
                            <ReportsPanel
                                token={props.session.access_token.clone()}
                                shipments={(*shipments).clone()}
                            />
                        </section>
                    },
                }
            }
        </div>
    }
}
