mod dashboard;
mod reports;
mod shipment_form;

pub use dashboard::EmployeeDashboard;
pub use reports::ReportsPanel;
pub use shipment_form::EmployeeShipmentForm;
