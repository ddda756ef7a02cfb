use yew::prelude::*;

use crate::models::{status_label, Client, Employee, Shipment};
use crate::reports::{revenue_summary, undelivered_shipments, ReportKind};
use crate::services::{client_service, employee_service};
use crate::utils::format_price;

/// Contenido del panel de reports. Los reports de empleados/clientes traen
/// datos frescos; el resto reutiliza la lista de envíos ya cargada.
#[derive(Clone, PartialEq)]
enum ReportContent {
    None,
    Loading,
    Employees(Vec<Employee>),
    Clients(Vec<Client>),
    AllShipments,
    Undelivered,
    Revenue,
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct ReportsPanelProps {
    pub token: String,
    pub shipments: Vec<Shipment>,
}

#[function_component(ReportsPanel)]
pub fn reports_panel(props: &ReportsPanelProps) -> Html {
    let content = use_state(|| ReportContent::None);

    let on_show = {
        let content = content.clone();
        let token = props.token.clone();

        Callback::from(move |kind: ReportKind| match kind {
            ReportKind::Employees => {
                content.set(ReportContent::Loading);
                let content = content.clone();
                let token = token.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match employee_service::fetch_employees(&token).await {
                        Ok(employees) => content.set(ReportContent::Employees(employees)),
                        Err(error) => {
                            log::error!("❌ Employees report failed: {}", error);
                            content.set(ReportContent::Failed(error));
                        }
                    }
                });
            }
            ReportKind::Clients => {
                content.set(ReportContent::Loading);
                let content = content.clone();
                let token = token.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match client_service::fetch_clients(&token).await {
                        Ok(clients) => content.set(ReportContent::Clients(clients)),
                        Err(error) => {
                            log::error!("❌ Clients report failed: {}", error);
                            content.set(ReportContent::Failed(error));
                        }
                    }
                });
            }
            ReportKind::AllShipments => content.set(ReportContent::AllShipments),
            ReportKind::Undelivered => content.set(ReportContent::Undelivered),
            ReportKind::Revenue => content.set(ReportContent::Revenue),
        })
    };

    let rendered = match &*content {
        ReportContent::None => html! {},
        ReportContent::Loading => html! { <p class="report-loading">{"Loading..."}</p> },
        ReportContent::Employees(employees) => employees_table(employees),
        ReportContent::Clients(clients) => clients_table(clients),
        ReportContent::AllShipments => all_shipments_table(&props.shipments),
        ReportContent::Undelivered => undelivered_table(&props.shipments),
        ReportContent::Revenue => revenue_report(&props.shipments),
        ReportContent::Failed(error) => html! {
            <p class="error">{format!("Error: {}", error)}</p>
        },
    };

    html! {
        <div class="reports-panel">
            <div class="report-buttons">
                { for ReportKind::ALL_KINDS.iter().map(|kind| {
                    let kind = *kind;
                    let onclick = {
                        let on_show = on_show.clone();
                        Callback::from(move |_: MouseEvent| on_show.emit(kind))
                    };
                    html! {
                        <button class="report-btn" {onclick}>{kind.button_label()}</button>
                    }
                }) }
            </div>

            <div class="report-container">
                {rendered}
            </div>
        </div>
    }
}

fn employees_table(employees: &[Employee]) -> Html {
    html! {
        <>
            <h3>{"Company employees"}</h3>
            <table class="report-table">
                <tr>
                    <th>{"ID"}</th>
                    <th>{"First name"}</th>
                    <th>{"Last name"}</th>
                    <th>{"Phone"}</th>
                    <th>{"Active"}</th>
                </tr>
                { for employees.iter().map(|employee| html! {
                    <tr key={employee.id.to_string()}>
                        <td>{employee.id}</td>
                        <td>{&employee.first_name}</td>
                        <td>{&employee.last_name}</td>
                        <td>{&employee.phone}</td>
                        <td>{if employee.is_active { "Yes" } else { "No" }}</td>
                    </tr>
                }) }
            </table>
        </>
    }
}

fn clients_table(clients: &[Client]) -> Html {
    html! {
        <>
            <h3>{"Company clients"}</h3>
            <table class="report-table">
                <tr>
                    <th>{"ID"}</th>
                    <th>{"Name"}</th>
                    <th>{"Company"}</th>
                    <th>{"Email"}</th>
                    <th>{"City"}</th>
                </tr>
                { for clients.iter().map(|client| html! {
                    <tr key={client.id.to_string()}>
                        <td>{client.id}</td>
                        <td>{client.full_name()}</td>
                        <td>{&client.company_name}</td>
                        <td>{&client.email}</td>
                        <td>{&client.city}</td>
                    </tr>
                }) }
            </table>
        </>
    }
}

fn all_shipments_table(shipments: &[Shipment]) -> Html {
    html! {
        <>
            <h3>{format!("All shipments ({})", shipments.len())}</h3>
            <table class="report-table">
                <tr>
                    <th>{"ID"}</th>
                    <th>{"Number"}</th>
                    <th>{"Status"}</th>
                    <th>{"From"}</th>
                    <th>{"To"}</th>
                    <th>{"Price"}</th>
                </tr>
                { for shipments.iter().map(|shipment| html! {
                    <tr key={shipment.id.to_string()}>
                        <td>{shipment.id}</td>
                        <td>{&shipment.tracking_number}</td>
                        <td>{status_label(&shipment.status)}</td>
                        <td>{&shipment.origin_address}</td>
                        <td>{&shipment.destination_address}</td>
                        <td>{format!("{} BGN", format_price(shipment.price))}</td>
                    </tr>
                }) }
            </table>
        </>
    }
}

fn undelivered_table(shipments: &[Shipment]) -> Html {
    let undelivered = undelivered_shipments(shipments);

    html! {
        <>
            <h3>{format!("Undelivered shipments ({})", undelivered.len())}</h3>
            <table class="report-table">
                <tr>
                    <th>{"ID"}</th>
                    <th>{"Number"}</th>
                    <th>{"Status"}</th>
                    <th>{"From"}</th>
                    <th>{"To"}</th>
                </tr>
                { for undelivered.into_iter().map(|shipment| html! {
                    <tr key={shipment.id.to_string()}>
                        <td>{shipment.id}</td>
                        <td>{&shipment.tracking_number}</td>
                        <td>{status_label(&shipment.status)}</td>
                        <td>{&shipment.origin_address}</td>
                        <td>{&shipment.destination_address}</td>
                    </tr>
                }) }
            </table>
        </>
    }
}

fn revenue_report(shipments: &[Shipment]) -> Html {
    let summary = revenue_summary(shipments);

    html! {
        <>
            <h3>{"Revenue report"}</h3>
            <div class="revenue-total">
                {format!("Total revenue: {} BGN", format_price(summary.total))}
            </div>
            <p>{format!("Shipment count: {}", summary.count)}</p>
            <p>{format!("Average price: {} BGN", format_price(summary.average()))}</p>
        </>
    }
}
