//! Table lifecycle
//!
//! Status changes always refresh `last_activity`, and a table only keeps
//! its `current_order` while it is occupied. Whether an off-flow change
//! (say `paid -> occupied`) is accepted depends on the [`TransitionPolicy`].

use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, Order, TableStatus};

use crate::utils::{AppError, AppResult, ErrorCode};

/// How strictly status changes follow the service flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any status may follow any other (the dashboard lets staff fix mistakes)
    #[default]
    Permissive,
    /// Only [`TableStatus::can_transition_to`] moves are accepted
    Strict,
}

/// Reject `from -> to` when the policy does not allow it
pub fn check_transition(
    policy: TransitionPolicy,
    table_id: &str,
    from: TableStatus,
    to: TableStatus,
) -> AppResult<()> {
    if policy == TransitionPolicy::Strict && !from.can_transition_to(to) {
        return Err(AppError::conflict(
            ErrorCode::InvalidTransition,
            format!("Table {table_id} cannot go from {from} to {to}"),
        )
        .with_detail("table_id", table_id)
        .with_detail("from", from.as_str())
        .with_detail("to", to.as_str()));
    }
    Ok(())
}

/// Set the status, stamp the activity time and drop the order when the
/// new status does not hold one.
pub fn apply_status(table: &mut DiningTable, status: TableStatus, now: i64) {
    table.status = status;
    table.last_activity = Some(now);
    if !status.holds_order() {
        table.current_order = None;
    }
}

/// Attach (or replace) the order of an occupied table
pub fn attach_order(table: &mut DiningTable, order: Order, now: i64) -> AppResult<()> {
    if !table.status.holds_order() {
        return Err(AppError::conflict(
            ErrorCode::OrderRequiresOccupied,
            format!("Table {} is {}, not occupied", table.name, table.status),
        )
        .with_detail("table_id", table.id.as_str()));
    }
    table.current_order = Some(order);
    table.last_activity = Some(now);
    Ok(())
}
