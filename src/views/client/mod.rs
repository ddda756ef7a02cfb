mod dashboard;
mod send_form;

pub use dashboard::ClientDashboard;
pub use send_form::SendShipmentForm;
