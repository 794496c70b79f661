//! Reservation Model

use super::table::TableId;
use serde::{Deserialize, Serialize};

/// One ordered menu item on a reservation.
///
/// `price` keeps the catalog's decimal-string form (comma as fractional
/// separator, e.g. `"1.250,00"`); parsing happens at the edges that need
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: String,
    pub quantity: u32,
}

/// Reservation entity: one row of demand for one table on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Opaque store-assigned id, immutable after creation.
    pub id: String,
    /// Calendar date `YYYY-MM-DD`, the partition key for all filtering.
    pub date: String,
    #[serde(rename = "tableNumber")]
    pub table: TableId,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    /// 10 digits (external line) or 3 digits (internal extension).
    pub phone: String,
    #[serde(rename = "adultCount")]
    pub adult_count: u32,
    #[serde(rename = "childCount")]
    pub child_count: u32,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub orders: Vec<OrderLine>,
    #[serde(rename = "recordedBy")]
    pub recorded_by: String,
}

impl Reservation {
    /// Adults plus children, the `peopleCount` sort key.
    pub fn people_count(&self) -> u32 {
        self.adult_count + self.child_count
    }
}

/// Create reservation payload (store assigns the id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub date: String,
    #[serde(rename = "tableNumber")]
    pub table: TableId,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    pub phone: String,
    #[serde(rename = "adultCount")]
    pub adult_count: u32,
    #[serde(rename = "childCount")]
    pub child_count: u32,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub orders: Vec<OrderLine>,
    #[serde(rename = "recordedBy")]
    pub recorded_by: String,
}

/// Update reservation payload. Named fields merge into the stored
/// document, absent fields stay untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub date: Option<String>,
    #[serde(rename = "tableNumber")]
    pub table: Option<TableId>,
    #[serde(rename = "customerName")]
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "adultCount")]
    pub adult_count: Option<u32>,
    #[serde(rename = "childCount")]
    pub child_count: Option<u32>,
    pub note: Option<String>,
    pub orders: Option<Vec<OrderLine>>,
    #[serde(rename = "recordedBy")]
    pub recorded_by: Option<String>,
}

impl ReservationUpdate {
    /// Move a reservation to another table, leaving every other field alone.
    pub fn table_only(table: TableId) -> Self {
        Self {
            table: Some(table),
            ..Self::default()
        }
    }

    /// Merge the present fields into an existing reservation.
    pub fn apply(&self, res: &mut Reservation) {
        if let Some(v) = &self.date {
            res.date = v.clone();
        }
        if let Some(v) = self.table {
            res.table = v;
        }
        if let Some(v) = &self.customer_name {
            res.customer_name = v.clone();
        }
        if let Some(v) = &self.phone {
            res.phone = v.clone();
        }
        if let Some(v) = self.adult_count {
            res.adult_count = v;
        }
        if let Some(v) = self.child_count {
            res.child_count = v;
        }
        if let Some(v) = &self.note {
            res.note = v.clone();
        }
        if let Some(v) = &self.orders {
            res.orders = v.clone();
        }
        if let Some(v) = &self.recorded_by {
            res.recorded_by = v.clone();
        }
    }
}

impl From<ReservationCreate> for ReservationUpdate {
    fn from(c: ReservationCreate) -> Self {
        Self {
            date: Some(c.date),
            table: Some(c.table),
            customer_name: Some(c.customer_name),
            phone: Some(c.phone),
            adult_count: Some(c.adult_count),
            child_count: Some(c.child_count),
            note: Some(c.note),
            orders: Some(c.orders),
            recorded_by: Some(c.recorded_by),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reservation {
        Reservation {
            id: "r1".into(),
            date: "2026-02-19".into(),
            table: TableId::Numbered(5),
            customer_name: "AYŞE DEMİR".into(),
            phone: "5321234567".into(),
            adult_count: 2,
            child_count: 1,
            note: String::new(),
            orders: vec![],
            recorded_by: "KENAN".into(),
        }
    }

    #[test]
    fn test_people_count() {
        assert_eq!(sample().people_count(), 3);
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut res = sample();
        let update = ReservationUpdate {
            table: Some(TableId::Numbered(9)),
            note: Some("cam kenarı".into()),
            ..Default::default()
        };
        update.apply(&mut res);
        assert_eq!(res.table, TableId::Numbered(9));
        assert_eq!(res.note, "cam kenarı");
        assert_eq!(res.customer_name, "AYŞE DEMİR");
        assert_eq!(res.adult_count, 2);
    }

    #[test]
    fn test_document_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["tableNumber"], 5);
        assert_eq!(json["customerName"], "AYŞE DEMİR");
        assert_eq!(json["adultCount"], 2);
        assert_eq!(json["recordedBy"], "KENAN");
    }
}
