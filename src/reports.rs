// ============================================================================
// REPORTS - cálculos puros sobre las listas ya cargadas
// ============================================================================

use crate::models::{Shipment, STATUS_CANCELLED, STATUS_DELIVERED};

/// Reports disponibles en el dashboard de empleado.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReportKind {
    Employees,
    Clients,
    AllShipments,
    Undelivered,
    Revenue,
}

impl ReportKind {
    pub const ALL_KINDS: [ReportKind; 5] = [
        ReportKind::Employees,
        ReportKind::Clients,
        ReportKind::AllShipments,
        ReportKind::Undelivered,
        ReportKind::Revenue,
    ];

    /// Texto del botón que lanza el report.
    pub fn button_label(&self) -> &'static str {
        match self {
            ReportKind::Employees => "Employees",
            ReportKind::Clients => "Clients",
            ReportKind::AllShipments => "All shipments",
            ReportKind::Undelivered => "Undelivered",
            ReportKind::Revenue => "Revenue",
        }
    }
}

/// Envíos todavía en camino: ni entregados ni cancelados.
pub fn undelivered_shipments(shipments: &[Shipment]) -> Vec<&Shipment> {
    shipments
        .iter()
        .filter(|s| s.status != STATUS_DELIVERED && s.status != STATUS_CANCELLED)
        .collect()
}

/// Totales del report financiero.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct RevenueSummary {
    pub total: f64,
    pub count: usize,
}

impl RevenueSummary {
    /// Precio medio; 0.0 con la lista vacía.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

pub fn revenue_summary(shipments: &[Shipment]) -> RevenueSummary {
    RevenueSummary {
        total: shipments.iter().map(|s| s.price).sum(),
        count: shipments.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{STATUS_IN_TRANSIT, STATUS_PENDING};
    use crate::utils::format_price;

    fn shipment(id: i64, status: &str, price: f64) -> Shipment {
        Shipment {
            id,
            tracking_number: format!("TRK-{}", id),
            sender_id: 1,
            receiver_id: 2,
            registered_by_employee_id: None,
            weight: 1.0,
            dimensions: "10x10x10".to_string(),
            description: "box".to_string(),
            price,
            origin_address: "Sofia".to_string(),
            destination_address: "Plovdiv".to_string(),
            sent_date: "2026-08-01T08:00:00+00:00".to_string(),
            received_date: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn undelivered_excludes_delivered_and_cancelled() {
        let list = vec![
            shipment(1, STATUS_PENDING, 10.0),
            shipment(2, STATUS_CANCELLED, 20.0),
            shipment(3, STATUS_DELIVERED, 30.0),
        ];
        let undelivered = undelivered_shipments(&list);
        assert_eq!(undelivered.len(), 1);
        assert_eq!(undelivered[0].id, 1);
    }

    #[test]
    fn undelivered_keeps_unknown_statuses() {
        let list = vec![shipment(1, "LOST", 10.0)];
        assert_eq!(undelivered_shipments(&list).len(), 1);
    }

    #[test]
    fn revenue_totals_and_average_match_the_list() {
        let list = vec![
            shipment(1, STATUS_PENDING, 10.50),
            shipment(2, STATUS_IN_TRANSIT, 20.25),
            shipment(3, STATUS_DELIVERED, 30.00),
        ];
        let summary = revenue_summary(&list);
        assert_eq!(summary.count, 3);
        assert_eq!(format_price(summary.total), "60.75");
        assert_eq!(format_price(summary.average()), "20.25");
    }

    #[test]
    fn empty_list_average_is_zero() {
        let summary = revenue_summary(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(format_price(summary.total), "0.00");
        assert_eq!(format_price(summary.average()), "0.00");
    }
}
