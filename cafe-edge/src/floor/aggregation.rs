//! Read-only views derived from the registry for the dashboard

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, Hall, TableStatus, TableView};

/// Tables per status. Statuses without tables are absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCounts(BTreeMap<TableStatus, usize>);

impl StatusCounts {
    /// Count for `status`, zero when absent
    pub fn get(&self, status: TableStatus) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableStatus, usize)> + '_ {
        self.0.iter().map(|(s, n)| (*s, *n))
    }

    pub fn as_map(&self) -> &BTreeMap<TableStatus, usize> {
        &self.0
    }
}

pub fn counts_by_status<'a>(tables: impl IntoIterator<Item = &'a DiningTable>) -> StatusCounts {
    let mut counts = BTreeMap::new();
    for table in tables {
        *counts.entry(table.status).or_insert(0) += 1;
    }
    StatusCounts(counts)
}

/// Counts over every table of every hall
pub fn counts_for_halls(halls: &[Hall]) -> StatusCounts {
    counts_by_status(halls.iter().flat_map(|h| h.tables.iter()))
}

/// Halls on `floor`, in insertion order, each with its tables in order
pub fn tables_by_hall(halls: &[Hall], floor: u8) -> Vec<Hall> {
    halls.iter().filter(|h| h.floor == floor).cloned().collect()
}

/// Every table in hall order, tagged with its hall's name
pub fn all_tables_flat(halls: &[Hall]) -> Vec<TableView> {
    halls
        .iter()
        .flat_map(|hall| {
            hall.tables.iter().map(|table| TableView {
                table: table.clone(),
                hall_name: hall.name.clone(),
            })
        })
        .collect()
}

/// Whole minutes an occupied table has been in service
pub fn occupied_minutes(table: &DiningTable, now_millis: i64) -> Option<i64> {
    if table.status != TableStatus::Occupied {
        return None;
    }
    table
        .last_activity
        .map(|since| (now_millis - since).max(0) / 60_000)
}

/// Everything the dashboard renders for one floor tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Counts across all floors (the stats cards)
    pub counts: StatusCounts,
    pub floor: u8,
    pub halls: Vec<Hall>,
}

pub fn dashboard(halls: &[Hall], floor: u8) -> DashboardSnapshot {
    DashboardSnapshot {
        counts: counts_for_halls(halls),
        floor,
        halls: tables_by_hall(halls, floor),
    }
}
