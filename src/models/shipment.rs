use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_IN_TRANSIT: &str = "IN_TRANSIT";
pub const STATUS_DELIVERED: &str = "DELIVERED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

/// Registro de envío compartido con el backend. El status viaja como string
/// plano para que valores desconocidos del backend sobrevivan tal cual.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Shipment {
    pub id: i64,
    pub tracking_number: String,
    pub sender_id: i64,
    pub receiver_id: i64,
    #[serde(default)]
    pub registered_by_employee_id: Option<i64>,
    pub weight: f64,
    pub dimensions: String,
    pub description: String,
    pub price: f64,
    pub origin_address: String,
    pub destination_address: String,
    pub sent_date: String,
    #[serde(default)]
    pub received_date: Option<String>,
    pub status: String,
}

/// Payload del POST /api/shipment.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewShipment {
    pub sender_id: i64,
    pub receiver_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_by_employee_id: Option<i64>,
    pub tracking_number: String,
    pub weight: f64,
    pub dimensions: String,
    pub description: String,
    pub price: f64,
    pub sent_date: String,
    pub status: String,
    pub origin_address: String,
    pub destination_address: String,
}

/// Payload del PUT /api/shipment/{id} al marcar una entrega.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ShipmentUpdate {
    pub status: String,
    pub received_date: String,
}

/// Fixed status → display label table; unknown values pass through unchanged.
pub fn status_label(status: &str) -> &str {
    match status {
        STATUS_PENDING => "pending",
        STATUS_IN_TRANSIT => "in transit",
        STATUS_DELIVERED => "delivered",
        STATUS_CANCELLED => "cancelled",
        other => other,
    }
}

/// Modificador CSS de la tarjeta según status.
pub fn card_class(status: &str) -> &'static str {
    match status {
        STATUS_PENDING => "pending",
        STATUS_IN_TRANSIT => "in-transit",
        STATUS_DELIVERED => "delivered",
        _ => "",
    }
}

/// Filtro activo de la lista: todo, o un status concreto.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusFilter {
    All,
    Pending,
    InTransit,
    Delivered,
    Cancelled,
}

impl StatusFilter {
    pub const ALL_FILTERS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::InTransit,
        StatusFilter::Delivered,
        StatusFilter::Cancelled,
    ];

    fn as_status(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(STATUS_PENDING),
            StatusFilter::InTransit => Some(STATUS_IN_TRANSIT),
            StatusFilter::Delivered => Some(STATUS_DELIVERED),
            StatusFilter::Cancelled => Some(STATUS_CANCELLED),
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self.as_status() {
            None => true,
            Some(wanted) => wanted == status,
        }
    }

    /// Texto del botón de filtro.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::InTransit => "In transit",
            StatusFilter::Delivered => "Delivered",
            StatusFilter::Cancelled => "Cancelled",
        }
    }
}

/// Subconjunto de `shipments` que pasa el filtro, en el orden original.
pub fn filter_shipments<'a>(shipments: &'a [Shipment], filter: StatusFilter) -> Vec<&'a Shipment> {
    shipments
        .iter()
        .filter(|shipment| filter.matches(&shipment.status))
        .collect()
}

/// Comprobación de duplicados sobre la lista ya cargada. Best-effort: el
/// backend sigue siendo la autoridad sobre unicidad.
pub fn tracking_number_exists(shipments: &[Shipment], tracking_number: &str) -> bool {
    shipments
        .iter()
        .any(|shipment| shipment.tracking_number == tracking_number)
}

/// Número de tracking generado en cliente para envíos self-service.
pub fn generate_tracking_number() -> String {
    format!("CLN-{}", chrono::Utc::now().timestamp_millis())
}

/// Contadores agregados del dashboard de empleado.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ShipmentStats {
    pub total: usize,
    pub pending: usize,
    pub in_transit: usize,
    pub delivered: usize,
}

impl ShipmentStats {
    pub fn collect(shipments: &[Shipment]) -> ShipmentStats {
        let mut stats = ShipmentStats {
            total: shipments.len(),
            ..ShipmentStats::default()
        };
        for shipment in shipments {
            match shipment.status.as_str() {
                STATUS_PENDING => stats.pending += 1,
                STATUS_IN_TRANSIT => stats.in_transit += 1,
                STATUS_DELIVERED => stats.delivered += 1,
                _ => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(id: i64, tracking: &str, status: &str, price: f64) -> Shipment {
        Shipment {
            id,
            tracking_number: tracking.to_string(),
            sender_id: 1,
            receiver_id: 2,
            registered_by_employee_id: Some(3),
            weight: 1.5,
            dimensions: "30x20x10".to_string(),
            description: "box".to_string(),
            price,
            origin_address: "Sofia".to_string(),
            destination_address: "Varna".to_string(),
            sent_date: "2026-08-01T08:00:00+00:00".to_string(),
            received_date: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn filter_all_keeps_everything_in_order() {
        let list = vec![
            shipment(1, "A1", STATUS_PENDING, 10.0),
            shipment(2, "A2", STATUS_DELIVERED, 20.0),
        ];
        let visible = filter_shipments(&list, StatusFilter::All);
        assert_eq!(
            visible.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn filter_keeps_exactly_the_matching_status() {
        let list = vec![
            shipment(1, "A1", STATUS_PENDING, 10.0),
            shipment(2, "A2", STATUS_DELIVERED, 20.0),
        ];
        let visible = filter_shipments(&list, StatusFilter::Delivered);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn filter_preserves_original_order() {
        let list = vec![
            shipment(5, "A5", STATUS_PENDING, 1.0),
            shipment(3, "A3", STATUS_IN_TRANSIT, 1.0),
            shipment(9, "A9", STATUS_PENDING, 1.0),
            shipment(1, "A1", STATUS_PENDING, 1.0),
        ];
        let visible = filter_shipments(&list, StatusFilter::Pending);
        assert_eq!(
            visible.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![5, 9, 1]
        );
    }

    #[test]
    fn filter_can_come_up_empty() {
        let list = vec![shipment(1, "A1", STATUS_PENDING, 10.0)];
        assert!(filter_shipments(&list, StatusFilter::Cancelled).is_empty());
    }

    #[test]
    fn status_labels_match_fixed_table() {
        assert_eq!(status_label(STATUS_PENDING), "pending");
        assert_eq!(status_label(STATUS_IN_TRANSIT), "in transit");
        assert_eq!(status_label(STATUS_DELIVERED), "delivered");
        assert_eq!(status_label(STATUS_CANCELLED), "cancelled");
    }

    #[test]
    fn unknown_status_passes_through_unchanged() {
        assert_eq!(status_label("LOST"), "LOST");
        assert_eq!(card_class("LOST"), "");
    }

    #[test]
    fn duplicate_tracking_number_is_detected() {
        let list = vec![shipment(1, "TRK-100", STATUS_PENDING, 10.0)];
        assert!(tracking_number_exists(&list, "TRK-100"));
        assert!(!tracking_number_exists(&list, "TRK-101"));
        assert!(!tracking_number_exists(&[], "TRK-100"));
    }

    #[test]
    fn generated_tracking_numbers_carry_the_client_prefix() {
        assert!(generate_tracking_number().starts_with("CLN-"));
    }

    #[test]
    fn stats_count_per_status() {
        let list = vec![
            shipment(1, "A1", STATUS_PENDING, 1.0),
            shipment(2, "A2", STATUS_PENDING, 1.0),
            shipment(3, "A3", STATUS_IN_TRANSIT, 1.0),
            shipment(4, "A4", STATUS_DELIVERED, 1.0),
            shipment(5, "A5", "LOST", 1.0),
        ];
        let stats = ShipmentStats::collect(&list);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.in_transit, 1);
        assert_eq!(stats.delivered, 1);
    }
}
