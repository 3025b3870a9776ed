//! Dining Table Model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Order;

/// Seat counts a table can be configured with
pub const TABLE_CAPACITIES: [u8; 4] = [2, 4, 6, 8];

/// Table status on the floor
///
/// Service flow: `empty -> reserved | occupied`, `reserved -> occupied | empty`,
/// `occupied -> paid | empty`, `paid -> empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Empty,
    Reserved,
    Occupied,
    Paid,
}

impl TableStatus {
    pub const ALL: [TableStatus; 4] = [
        TableStatus::Empty,
        TableStatus::Reserved,
        TableStatus::Occupied,
        TableStatus::Paid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Reserved => "reserved",
            Self::Occupied => "occupied",
            Self::Paid => "paid",
        }
    }

    /// Dashboard label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "خالی",
            Self::Reserved => "رزرو شده",
            Self::Occupied => "در حال سرویس",
            Self::Paid => "تسویه شده",
        }
    }

    /// Whether `next` follows the service flow from this status.
    ///
    /// Re-setting the same status is always allowed (it only refreshes
    /// the activity timestamp).
    pub fn can_transition_to(&self, next: TableStatus) -> bool {
        use TableStatus::*;
        *self == next
            || matches!(
                (self, next),
                (Empty, Reserved)
                    | (Empty, Occupied)
                    | (Reserved, Occupied)
                    | (Reserved, Empty)
                    | (Occupied, Paid)
                    | (Occupied, Empty)
                    | (Paid, Empty)
            )
    }

    /// Only occupied tables carry an order
    pub fn holds_order(&self) -> bool {
        matches!(self, Self::Occupied)
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dining table entity (میز)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub capacity: u8,
    pub status: TableStatus,
    /// Owning hall
    pub hall_id: String,
    /// Unix millis of the last status change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_order: Option<Order>,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableCreate {
    pub hall_id: String,
    pub name: String,
    pub capacity: u8,
    #[serde(default)]
    pub status: TableStatus,
}

/// Update dining table payload
///
/// `hall_id` pointing at a different hall moves the table there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    pub name: Option<String>,
    pub capacity: Option<u8>,
    pub status: Option<TableStatus>,
    pub hall_id: Option<String>,
}

/// Table flattened out of its hall, for the management list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    #[serde(flatten)]
    pub table: DiningTable,
    pub hall_name: String,
}
