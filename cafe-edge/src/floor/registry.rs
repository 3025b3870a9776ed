//! Hall / table registry
//!
//! The authoritative in-memory store of halls and the tables they own.
//! Every operation validates first and mutates last, so a failed call
//! leaves the registry untouched.

use std::collections::HashSet;
use std::sync::Arc;

use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, Hall, HallCreate, HallUpdate, Order,
    TableStatus, FLOORS, TABLE_CAPACITIES,
};
use shared::util::snowflake_id;

use super::lifecycle::{self, TransitionPolicy};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_capacity, validate_floor, validate_hall_selected,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, Clock, ErrorCode, SystemClock};

/// In-memory hall/table registry
#[derive(Debug)]
pub struct Registry {
    halls: Vec<Hall>,
    clock: Arc<dyn Clock>,
    policy: TransitionPolicy,
    /// Last numeric id handed out; ids only grow
    last_id: i64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl Registry {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_policy(clock, TransitionPolicy::default())
    }

    pub fn with_policy(clock: Arc<dyn Clock>, policy: TransitionPolicy) -> Self {
        Self {
            halls: Vec::new(),
            clock,
            policy,
            last_id: 0,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Halls in insertion order
    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    pub fn hall(&self, hall_id: &str) -> Option<&Hall> {
        self.halls.iter().find(|h| h.id == hall_id)
    }

    pub fn table(&self, table_id: &str) -> Option<&DiningTable> {
        self.locate_table(table_id)
            .map(|(h, t)| &self.halls[h].tables[t])
    }

    pub fn table_count(&self) -> usize {
        self.halls.iter().map(Hall::table_count).sum()
    }

    /// Owned copy of every hall and table
    pub fn snapshot(&self) -> Vec<Hall> {
        self.halls.clone()
    }

    // =========================================================================
    // Halls
    // =========================================================================

    pub fn add_hall(&mut self, data: HallCreate) -> AppResult<Hall> {
        let name = validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_floor(data.floor)?;

        let hall = Hall {
            id: self.next_id("hall"),
            name,
            floor: data.floor,
            tables: Vec::new(),
        };
        tracing::info!(hall_id = %hall.id, name = %hall.name, floor = hall.floor, "Hall created");
        self.halls.push(hall.clone());
        Ok(hall)
    }

    pub fn edit_hall(&mut self, hall_id: &str, data: HallUpdate) -> AppResult<Hall> {
        let name = validate_optional_text(data.name.as_deref(), "name", MAX_NAME_LEN)?;
        if let Some(floor) = data.floor {
            validate_floor(floor)?;
        }
        let idx = self
            .hall_index(hall_id)
            .ok_or_else(|| AppError::hall_not_found(hall_id))?;

        let hall = &mut self.halls[idx];
        if let Some(name) = name {
            hall.name = name;
        }
        if let Some(floor) = data.floor {
            hall.floor = floor;
        }
        tracing::info!(hall_id = %hall.id, name = %hall.name, floor = hall.floor, "Hall updated");
        Ok(hall.clone())
    }

    /// Remove an empty hall. Halls that still own tables are never cascaded.
    pub fn remove_hall(&mut self, hall_id: &str) -> AppResult<Hall> {
        let idx = self
            .hall_index(hall_id)
            .ok_or_else(|| AppError::hall_not_found(hall_id))?;
        let table_count = self.halls[idx].table_count();
        if table_count > 0 {
            return Err(AppError::conflict(
                ErrorCode::HallHasTables,
                format!(
                    "Hall {} still has {} table(s)",
                    self.halls[idx].name, table_count
                ),
            )
            .with_detail("hall_id", hall_id)
            .with_detail("table_count", table_count));
        }
        let hall = self.halls.remove(idx);
        tracing::info!(hall_id = %hall.id, name = %hall.name, "Hall removed");
        Ok(hall)
    }

    // =========================================================================
    // Tables
    // =========================================================================

    /// Create a table at the end of its hall's sequence.
    ///
    /// An unknown hall is a validation failure here (the hall selection is
    /// part of the form), unlike [`Registry::edit_table`].
    pub fn add_table(&mut self, data: DiningTableCreate) -> AppResult<DiningTable> {
        let name = validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_hall_selected(&data.hall_id)?;
        validate_capacity(data.capacity)?;
        let hall_idx = self.hall_index(&data.hall_id).ok_or_else(|| {
            AppError::validation(format!("Hall {} does not exist", data.hall_id))
                .with_detail("field", "hallId")
        })?;

        let table = DiningTable {
            id: self.next_id("table"),
            name,
            capacity: data.capacity,
            status: data.status,
            hall_id: data.hall_id,
            last_activity: Some(self.clock.now_millis()),
            current_order: None,
        };
        tracing::info!(
            table_id = %table.id,
            hall_id = %table.hall_id,
            name = %table.name,
            status = %table.status,
            "Table created"
        );
        self.halls[hall_idx].tables.push(table.clone());
        Ok(table)
    }

    /// Update a table; a different `hall_id` moves it to the end of that hall.
    pub fn edit_table(&mut self, table_id: &str, data: DiningTableUpdate) -> AppResult<DiningTable> {
        let name = validate_optional_text(data.name.as_deref(), "name", MAX_NAME_LEN)?;
        if let Some(hall_id) = &data.hall_id {
            validate_hall_selected(hall_id)?;
        }
        if let Some(capacity) = data.capacity {
            validate_capacity(capacity)?;
        }

        let (hall_idx, table_idx) = self
            .locate_table(table_id)
            .ok_or_else(|| AppError::table_not_found(table_id))?;
        let target_idx = match &data.hall_id {
            Some(hall_id) if *hall_id != self.halls[hall_idx].id => Some(
                self.hall_index(hall_id)
                    .ok_or_else(|| AppError::hall_not_found(hall_id))?,
            ),
            _ => None,
        };
        let current_status = self.halls[hall_idx].tables[table_idx].status;
        let status_change = data.status.filter(|s| *s != current_status);
        if let Some(status) = status_change {
            lifecycle::check_transition(self.policy, table_id, current_status, status)?;
        }

        // All checks passed: from here on nothing can fail.
        let now = self.clock.now_millis();
        let apply = |table: &mut DiningTable| {
            if let Some(name) = name {
                table.name = name;
            }
            if let Some(capacity) = data.capacity {
                table.capacity = capacity;
            }
            if let Some(status) = status_change {
                lifecycle::apply_status(table, status, now);
            }
        };

        let updated = match target_idx {
            Some(target_idx) => {
                let mut table = self.halls[hall_idx].tables.remove(table_idx);
                apply(&mut table);
                table.hall_id = self.halls[target_idx].id.clone();
                tracing::info!(
                    table_id = %table.id,
                    from = %self.halls[hall_idx].id,
                    to = %table.hall_id,
                    "Table moved to another hall"
                );
                self.halls[target_idx].tables.push(table.clone());
                table
            }
            None => {
                let table = &mut self.halls[hall_idx].tables[table_idx];
                apply(table);
                table.clone()
            }
        };
        tracing::info!(table_id = %updated.id, status = %updated.status, "Table updated");
        Ok(updated)
    }

    pub fn remove_table(&mut self, table_id: &str) -> AppResult<DiningTable> {
        let (hall_idx, table_idx) = self
            .locate_table(table_id)
            .ok_or_else(|| AppError::table_not_found(table_id))?;
        let table = self.halls[hall_idx].tables.remove(table_idx);
        tracing::info!(table_id = %table.id, hall_id = %table.hall_id, "Table removed");
        Ok(table)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Change a table's status. Always refreshes `last_activity`, even when
    /// the status does not change.
    pub fn set_table_status(&mut self, table_id: &str, status: TableStatus) -> AppResult<DiningTable> {
        let (hall_idx, table_idx) = self
            .locate_table(table_id)
            .ok_or_else(|| AppError::table_not_found(table_id))?;
        let from = self.halls[hall_idx].tables[table_idx].status;
        lifecycle::check_transition(self.policy, table_id, from, status)?;

        let now = self.clock.now_millis();
        let table = &mut self.halls[hall_idx].tables[table_idx];
        lifecycle::apply_status(table, status, now);
        tracing::info!(table_id = %table.id, %from, to = %status, "Table status changed");
        Ok(table.clone())
    }

    /// Attach or replace the order of an occupied table
    pub fn attach_order(&mut self, table_id: &str, order: Order) -> AppResult<DiningTable> {
        let (hall_idx, table_idx) = self
            .locate_table(table_id)
            .ok_or_else(|| AppError::table_not_found(table_id))?;
        let now = self.clock.now_millis();
        let table = &mut self.halls[hall_idx].tables[table_idx];
        lifecycle::attach_order(table, order, now)?;
        tracing::info!(
            table_id = %table.id,
            total = %table.current_order.as_ref().map(|o| o.total_amount).unwrap_or_default(),
            "Order attached"
        );
        Ok(table.clone())
    }

    /// Seat guests: move to `occupied` and attach their order in one step
    pub fn seat_with_order(&mut self, table_id: &str, order: Order) -> AppResult<DiningTable> {
        let (hall_idx, table_idx) = self
            .locate_table(table_id)
            .ok_or_else(|| AppError::table_not_found(table_id))?;
        let from = self.halls[hall_idx].tables[table_idx].status;
        lifecycle::check_transition(self.policy, table_id, from, TableStatus::Occupied)?;

        let now = self.clock.now_millis();
        let table = &mut self.halls[hall_idx].tables[table_idx];
        lifecycle::apply_status(table, TableStatus::Occupied, now);
        lifecycle::attach_order(table, order, now)?;
        tracing::info!(table_id = %table.id, %from, "Guests seated with order");
        Ok(table.clone())
    }

    // =========================================================================
    // Integrity
    // =========================================================================

    /// Verify the registry invariants:
    /// - hall and table ids are unique registry-wide
    /// - every table's `hall_id` names the hall that holds it
    /// - floors and capacities are in range
    /// - only occupied tables carry an order
    pub fn check_integrity(&self) -> AppResult<()> {
        let mut hall_ids = HashSet::new();
        let mut table_ids = HashSet::new();
        for hall in &self.halls {
            if !hall_ids.insert(hall.id.as_str()) {
                return Err(integrity(format!("duplicate hall id {}", hall.id)));
            }
            if !FLOORS.contains(&hall.floor) {
                return Err(integrity(format!("hall {} on floor {}", hall.id, hall.floor)));
            }
            for table in &hall.tables {
                if !table_ids.insert(table.id.as_str()) {
                    return Err(integrity(format!("table {} appears twice", table.id)));
                }
                if table.hall_id != hall.id {
                    return Err(integrity(format!(
                        "table {} says hall {} but sits in {}",
                        table.id, table.hall_id, hall.id
                    )));
                }
                if !TABLE_CAPACITIES.contains(&table.capacity) {
                    return Err(integrity(format!(
                        "table {} has capacity {}",
                        table.id, table.capacity
                    )));
                }
                if table.current_order.is_some() && !table.status.holds_order() {
                    return Err(integrity(format!(
                        "table {} is {} but holds an order",
                        table.id, table.status
                    )));
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn hall_index(&self, hall_id: &str) -> Option<usize> {
        self.halls.iter().position(|h| h.id == hall_id)
    }

    fn locate_table(&self, table_id: &str) -> Option<(usize, usize)> {
        self.halls.iter().enumerate().find_map(|(h, hall)| {
            hall.tables
                .iter()
                .position(|t| t.id == table_id)
                .map(|t| (h, t))
        })
    }

    /// `<prefix>-<n>`: snowflake of the clock, bumped past the last id so a
    /// frozen or rewound clock still yields unique ids.
    fn next_id(&mut self, prefix: &str) -> String {
        let candidate = snowflake_id(self.clock.now_millis(), 0);
        self.last_id = candidate.max(self.last_id + 1);
        format!("{prefix}-{}", self.last_id)
    }
}

fn integrity(msg: String) -> AppError {
    AppError::internal(format!("Registry integrity violated: {msg}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ManualClock;
    use rust_decimal::Decimal;
    use shared::models::OrderItem;

    const T0: i64 = 1_760_000_000_000;

    fn registry() -> (Registry, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(T0));
        (Registry::new(clock.clone()), clock)
    }

    fn hall(reg: &mut Registry, name: &str, floor: u8) -> Hall {
        reg.add_hall(HallCreate {
            name: name.into(),
            floor,
        })
        .unwrap()
    }

    fn table(reg: &mut Registry, hall_id: &str, name: &str) -> DiningTable {
        reg.add_table(DiningTableCreate {
            hall_id: hall_id.into(),
            name: name.into(),
            capacity: 4,
            status: TableStatus::Empty,
        })
        .unwrap()
    }

    fn espresso_order() -> Order {
        Order::new(vec![OrderItem::new("Espresso", 2, Decimal::new(85_000, 0))]).unwrap()
    }

    #[test]
    fn test_add_hall() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "  Main hall ", 1);
        assert!(h.id.starts_with("hall-"));
        assert_eq!(h.name, "Main hall");
        assert!(h.tables.is_empty());
        assert_eq!(reg.halls().len(), 1);
    }

    #[test]
    fn test_add_hall_validation() {
        let (mut reg, _) = registry();
        let err = reg
            .add_hall(HallCreate {
                name: " ".into(),
                floor: 1,
            })
            .unwrap_err();
        assert!(err.is_validation());

        let err = reg
            .add_hall(HallCreate {
                name: "Roof".into(),
                floor: 3,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(reg.halls().is_empty());
    }

    #[test]
    fn test_ids_unique_with_frozen_clock() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);
        let ids: HashSet<String> = (0..50)
            .map(|i| table(&mut reg, &h.id, &format!("T{i}")).id)
            .collect();
        assert_eq!(ids.len(), 50);
        assert!(!ids.contains(&h.id));
    }

    #[test]
    fn test_edit_hall() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);

        let edited = reg
            .edit_hall(
                &h.id,
                HallUpdate {
                    name: Some("Garden".into()),
                    floor: Some(2),
                },
            )
            .unwrap();
        assert_eq!(edited.name, "Garden");
        assert_eq!(edited.floor, 2);

        let err = reg.edit_hall("hall-404", HallUpdate::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::HallNotFound);

        let err = reg
            .edit_hall(
                &h.id,
                HallUpdate {
                    name: Some("".into()),
                    floor: None,
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(reg.hall(&h.id).unwrap().name, "Garden");
    }

    #[test]
    fn test_remove_hall_with_tables_conflicts() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);
        let t = table(&mut reg, &h.id, "A1");
        let before = reg.snapshot();

        let err = reg.remove_hall(&h.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::HallHasTables);
        assert!(err.is_conflict());
        assert_eq!(reg.snapshot(), before);

        reg.remove_table(&t.id).unwrap();
        reg.remove_hall(&h.id).unwrap();
        assert!(reg.halls().is_empty());

        let err = reg.remove_hall(&h.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_table() {
        let (mut reg, clock) = registry();
        let h = hall(&mut reg, "Main", 1);
        clock.advance(1_000);
        let t = table(&mut reg, &h.id, "A1");

        assert!(t.id.starts_with("table-"));
        assert_eq!(t.hall_id, h.id);
        assert_eq!(t.status, TableStatus::Empty);
        assert_eq!(t.last_activity, Some(T0 + 1_000));
        assert_eq!(reg.hall(&h.id).unwrap().tables, vec![t]);
    }

    #[test]
    fn test_add_table_validation() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);
        let create = |hall_id: &str, name: &str, capacity: u8| DiningTableCreate {
            hall_id: hall_id.into(),
            name: name.into(),
            capacity,
            status: TableStatus::Empty,
        };

        let err = reg.add_table(create(&h.id, "", 4)).unwrap_err();
        assert!(err.is_validation());

        let err = reg.add_table(create("", "A1", 4)).unwrap_err();
        assert!(err.is_validation());

        // unknown hall on create is a validation error, not "not found"
        let err = reg.add_table(create("hall-404", "A1", 4)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = reg.add_table(create(&h.id, "A1", 5)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        assert_eq!(reg.table_count(), 0);
    }

    #[test]
    fn test_edit_table_in_place_keeps_position() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);
        let a = table(&mut reg, &h.id, "A1");
        let b = table(&mut reg, &h.id, "A2");

        let edited = reg
            .edit_table(
                &a.id,
                DiningTableUpdate {
                    name: Some("A1-window".into()),
                    capacity: Some(6),
                    hall_id: Some(h.id.clone()),
                    status: None,
                },
            )
            .unwrap();
        assert_eq!(edited.name, "A1-window");
        assert_eq!(edited.capacity, 6);

        let order: Vec<_> = reg.hall(&h.id).unwrap().tables.iter().map(|t| t.id.clone()).collect();
        assert_eq!(order, vec![a.id, b.id]);
    }

    #[test]
    fn test_edit_table_moves_between_halls() {
        let (mut reg, clock) = registry();
        let h1 = hall(&mut reg, "Main", 1);
        let h2 = hall(&mut reg, "Terrace", 2);
        let existing = table(&mut reg, &h2.id, "B1");
        let t = table(&mut reg, &h1.id, "A1");

        clock.advance(5_000);
        let moved = reg
            .edit_table(
                &t.id,
                DiningTableUpdate {
                    hall_id: Some(h2.id.clone()),
                    status: Some(TableStatus::Reserved),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(moved.hall_id, h2.id);
        assert_eq!(moved.status, TableStatus::Reserved);
        assert_eq!(moved.last_activity, Some(T0 + 5_000));
        assert!(!reg.hall(&h1.id).unwrap().contains_table(&t.id));
        let ids: Vec<_> = reg.hall(&h2.id).unwrap().tables.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec![existing.id, t.id]);
        reg.check_integrity().unwrap();
    }

    #[test]
    fn test_edit_table_failures_leave_registry_unchanged() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);
        let t = table(&mut reg, &h.id, "A1");
        let before = reg.snapshot();

        let err = reg
            .edit_table(
                &t.id,
                DiningTableUpdate {
                    hall_id: Some("hall-404".into()),
                    name: Some("renamed".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::HallNotFound);

        let err = reg
            .edit_table(
                &t.id,
                DiningTableUpdate {
                    hall_id: Some("".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());

        let err = reg
            .edit_table(
                &t.id,
                DiningTableUpdate {
                    name: Some("  ".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());

        let err = reg
            .edit_table("table-404", DiningTableUpdate::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);

        assert_eq!(reg.snapshot(), before);
    }

    #[test]
    fn test_edit_table_same_status_keeps_activity() {
        let (mut reg, clock) = registry();
        let h = hall(&mut reg, "Main", 1);
        let t = table(&mut reg, &h.id, "A1");
        clock.advance(60_000);

        let edited = reg
            .edit_table(
                &t.id,
                DiningTableUpdate {
                    status: Some(TableStatus::Empty),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edited.last_activity, t.last_activity);
    }

    #[test]
    fn test_edit_table_away_from_occupied_clears_order() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);
        let t = table(&mut reg, &h.id, "A1");
        reg.seat_with_order(&t.id, espresso_order()).unwrap();

        let edited = reg
            .edit_table(
                &t.id,
                DiningTableUpdate {
                    status: Some(TableStatus::Paid),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(edited.current_order.is_none());
        reg.check_integrity().unwrap();
    }

    #[test]
    fn test_remove_table_unknown_is_not_found() {
        let (mut reg, _) = registry();
        let err = reg.remove_table("table-1").unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
    }

    #[test]
    fn test_set_table_status_refreshes_activity() {
        let (mut reg, clock) = registry();
        let h = hall(&mut reg, "Main", 1);
        let t = table(&mut reg, &h.id, "A1");

        let now = clock.advance(90_000);
        let updated = reg.set_table_status(&t.id, TableStatus::Occupied).unwrap();
        assert_eq!(updated.status, TableStatus::Occupied);
        assert_eq!(updated.last_activity, Some(now));

        // same status still refreshes
        let now = clock.advance(1_000);
        let updated = reg.set_table_status(&t.id, TableStatus::Occupied).unwrap();
        assert_eq!(updated.last_activity, Some(now));
        assert_eq!(reg.table(&t.id).unwrap(), &updated);
    }

    #[test]
    fn test_service_flow_with_order() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);
        let t = table(&mut reg, &h.id, "A1");

        reg.set_table_status(&t.id, TableStatus::Reserved).unwrap();
        let err = reg.attach_order(&t.id, espresso_order()).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderRequiresOccupied);

        let seated = reg.seat_with_order(&t.id, espresso_order()).unwrap();
        assert_eq!(seated.status, TableStatus::Occupied);
        assert_eq!(
            seated.current_order.as_ref().unwrap().total_amount,
            Decimal::new(170_000, 0)
        );

        let paid = reg.set_table_status(&t.id, TableStatus::Paid).unwrap();
        assert!(paid.current_order.is_none());

        let cleared = reg.set_table_status(&t.id, TableStatus::Empty).unwrap();
        assert_eq!(cleared.status, TableStatus::Empty);
        reg.check_integrity().unwrap();
    }

    #[test]
    fn test_strict_policy_rejects_off_flow() {
        let clock = Arc::new(ManualClock::new(T0));
        let mut reg = Registry::with_policy(clock, TransitionPolicy::Strict);
        let h = hall(&mut reg, "Main", 1);
        let t = table(&mut reg, &h.id, "A1");

        let err = reg.set_table_status(&t.id, TableStatus::Paid).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert_eq!(reg.table(&t.id).unwrap().status, TableStatus::Empty);

        reg.set_table_status(&t.id, TableStatus::Occupied).unwrap();
        reg.set_table_status(&t.id, TableStatus::Paid).unwrap();

        let err = reg.seat_with_order(&t.id, espresso_order()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);

        let err = reg
            .edit_table(
                &t.id,
                DiningTableUpdate {
                    status: Some(TableStatus::Reserved),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
    }

    #[test]
    fn test_check_integrity_detects_orphan_reference() {
        let (mut reg, _) = registry();
        let h = hall(&mut reg, "Main", 1);
        table(&mut reg, &h.id, "A1");
        reg.check_integrity().unwrap();

        reg.halls[0].tables[0].hall_id = "hall-elsewhere".into();
        assert!(reg.check_integrity().is_err());
    }
}
