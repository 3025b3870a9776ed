//! Hall Model

use serde::{Deserialize, Serialize};

use super::DiningTable;

/// Floors a hall can be placed on
pub const FLOORS: [u8; 2] = [1, 2];

/// Hall entity (سالن: seating area on one floor)
///
/// A hall exclusively owns its tables, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hall {
    pub id: String,
    pub name: String,
    pub floor: u8,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
}

impl Hall {
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn contains_table(&self, table_id: &str) -> bool {
        self.tables.iter().any(|t| t.id == table_id)
    }

    pub fn table(&self, table_id: &str) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == table_id)
    }
}

/// Create hall payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallCreate {
    pub name: String,
    pub floor: u8,
}

/// Update hall payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallUpdate {
    pub name: Option<String>,
    pub floor: Option<u8>,
}
