//! Floor Service - shared handle over the registry
//!
//! Every mutation runs under one write lock, so concurrent callers never see
//! a table in two halls (or none). Successful mutations are announced on a
//! broadcast channel as [`SyncPayload`]s with a per-resource version.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use serde::Serialize;
use shared::message::{RESOURCE_HALL, RESOURCE_TABLE, SyncAction, SyncPayload};
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, Hall, HallCreate, HallUpdate, Order,
    TableStatus, TableView,
};
use tokio::sync::broadcast;

use super::aggregation::{self, DashboardSnapshot, StatusCounts};
use super::lifecycle::TransitionPolicy;
use super::registry::Registry;
use crate::utils::{AppResult, Clock};

/// Sync channel capacity; slow subscribers lag and should resync
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// 资源版本管理器
///
/// 为每种资源类型维护独立的版本号，订阅者据此判断是否漏掉了变更。
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 递增指定资源的版本号并返回新值
    ///
    /// 如果资源不存在，从 0 开始递增（返回 1）
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取资源当前版本号 (未变更过为 0)
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

#[derive(Clone)]
pub struct FloorService {
    registry: Arc<RwLock<Registry>>,
    versions: Arc<ResourceVersions>,
    event_tx: broadcast::Sender<SyncPayload>,
    /// Instance epoch; subscribers seeing a new one must resync
    epoch: String,
}

impl std::fmt::Debug for FloorService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.read();
        f.debug_struct("FloorService")
            .field("halls", &registry.halls().len())
            .field("tables", &registry.table_count())
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl FloorService {
    pub fn new(clock: Arc<dyn Clock>, policy: TransitionPolicy) -> Self {
        Self::from_registry(Registry::with_policy(clock, policy))
    }

    pub fn from_registry(registry: Registry) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::debug!(epoch = %epoch, policy = ?registry.policy(), "FloorService started");
        Self {
            registry: Arc::new(RwLock::new(registry)),
            versions: Arc::new(ResourceVersions::new()),
            event_tx,
            epoch,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SyncPayload> {
        self.event_tx.subscribe()
    }

    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub fn version(&self, resource: &str) -> u64 {
        self.versions.get(resource)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn snapshot(&self) -> Vec<Hall> {
        self.registry.read().snapshot()
    }

    pub fn hall(&self, hall_id: &str) -> Option<Hall> {
        self.registry.read().hall(hall_id).cloned()
    }

    pub fn table(&self, table_id: &str) -> Option<DiningTable> {
        self.registry.read().table(table_id).cloned()
    }

    pub fn status_counts(&self) -> StatusCounts {
        aggregation::counts_for_halls(self.registry.read().halls())
    }

    pub fn tables_by_hall(&self, floor: u8) -> Vec<Hall> {
        aggregation::tables_by_hall(self.registry.read().halls(), floor)
    }

    pub fn all_tables_flat(&self) -> Vec<TableView> {
        aggregation::all_tables_flat(self.registry.read().halls())
    }

    pub fn dashboard(&self, floor: u8) -> DashboardSnapshot {
        aggregation::dashboard(self.registry.read().halls(), floor)
    }

    /// Run `f` against the registry under the read lock
    pub fn with_registry<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        f(&self.registry.read())
    }

    // =========================================================================
    // Halls
    // =========================================================================

    pub fn add_hall(&self, data: HallCreate) -> AppResult<Hall> {
        let mut registry = self.registry.write();
        let hall = registry.add_hall(data).inspect_err(|e| rejected("add_hall", e))?;
        self.publish(RESOURCE_HALL, SyncAction::Created, &hall.id, Some(&hall));
        Ok(hall)
    }

    pub fn edit_hall(&self, hall_id: &str, data: HallUpdate) -> AppResult<Hall> {
        let mut registry = self.registry.write();
        let hall = registry
            .edit_hall(hall_id, data)
            .inspect_err(|e| rejected("edit_hall", e))?;
        self.publish(RESOURCE_HALL, SyncAction::Updated, &hall.id, Some(&hall));
        Ok(hall)
    }

    pub fn remove_hall(&self, hall_id: &str) -> AppResult<()> {
        let mut registry = self.registry.write();
        let hall = registry
            .remove_hall(hall_id)
            .inspect_err(|e| rejected("remove_hall", e))?;
        self.publish::<()>(RESOURCE_HALL, SyncAction::Deleted, &hall.id, None);
        Ok(())
    }

    // =========================================================================
    // Tables
    // =========================================================================

    pub fn add_table(&self, data: DiningTableCreate) -> AppResult<DiningTable> {
        let mut registry = self.registry.write();
        let table = registry
            .add_table(data)
            .inspect_err(|e| rejected("add_table", e))?;
        self.publish(RESOURCE_TABLE, SyncAction::Created, &table.id, Some(&table));
        Ok(table)
    }

    pub fn edit_table(&self, table_id: &str, data: DiningTableUpdate) -> AppResult<DiningTable> {
        let mut registry = self.registry.write();
        let table = registry
            .edit_table(table_id, data)
            .inspect_err(|e| rejected("edit_table", e))?;
        self.publish(RESOURCE_TABLE, SyncAction::Updated, &table.id, Some(&table));
        Ok(table)
    }

    pub fn remove_table(&self, table_id: &str) -> AppResult<()> {
        let mut registry = self.registry.write();
        let table = registry
            .remove_table(table_id)
            .inspect_err(|e| rejected("remove_table", e))?;
        self.publish::<()>(RESOURCE_TABLE, SyncAction::Deleted, &table.id, None);
        Ok(())
    }

    pub fn set_table_status(&self, table_id: &str, status: TableStatus) -> AppResult<DiningTable> {
        let mut registry = self.registry.write();
        let table = registry
            .set_table_status(table_id, status)
            .inspect_err(|e| rejected("set_table_status", e))?;
        self.publish(RESOURCE_TABLE, SyncAction::Updated, &table.id, Some(&table));
        Ok(table)
    }

    pub fn attach_order(&self, table_id: &str, order: Order) -> AppResult<DiningTable> {
        let mut registry = self.registry.write();
        let table = registry
            .attach_order(table_id, order)
            .inspect_err(|e| rejected("attach_order", e))?;
        self.publish(RESOURCE_TABLE, SyncAction::Updated, &table.id, Some(&table));
        Ok(table)
    }

    pub fn seat_with_order(&self, table_id: &str, order: Order) -> AppResult<DiningTable> {
        let mut registry = self.registry.write();
        let table = registry
            .seat_with_order(table_id, order)
            .inspect_err(|e| rejected("seat_with_order", e))?;
        self.publish(RESOURCE_TABLE, SyncAction::Updated, &table.id, Some(&table));
        Ok(table)
    }

    /// Called with the write lock held so versions follow mutation order
    fn publish<T: Serialize>(&self, resource: &str, action: SyncAction, id: &str, data: Option<&T>) {
        let version = self.versions.increment(resource);
        let payload = SyncPayload {
            resource: resource.to_string(),
            version,
            action,
            id: id.to_string(),
            data: data.and_then(|d| serde_json::to_value(d).ok()),
        };
        // No subscribers is fine
        let _ = self.event_tx.send(payload);
    }
}

fn rejected(op: &str, err: &crate::utils::AppError) {
    tracing::warn!(op, code = %err.code, kind = ?err.kind(), "{}", err.message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ManualClock;

    fn service() -> FloorService {
        FloorService::new(
            Arc::new(ManualClock::new(1_760_000_000_000)),
            TransitionPolicy::Permissive,
        )
    }

    #[test]
    fn test_resource_versions() {
        let versions = ResourceVersions::new();
        assert_eq!(versions.get("hall"), 0);
        assert_eq!(versions.increment("hall"), 1);
        assert_eq!(versions.increment("hall"), 2);
        assert_eq!(versions.increment("table"), 1);
        assert_eq!(versions.get("hall"), 2);
    }

    #[test]
    fn test_mutations_publish_sync_events() {
        let svc = service();
        let mut rx = svc.subscribe();

        let hall = svc
            .add_hall(HallCreate {
                name: "Main".into(),
                floor: 1,
            })
            .unwrap();
        let table = svc
            .add_table(DiningTableCreate {
                hall_id: hall.id.clone(),
                name: "A1".into(),
                capacity: 2,
                status: TableStatus::Empty,
            })
            .unwrap();
        svc.set_table_status(&table.id, TableStatus::Occupied).unwrap();
        svc.remove_table(&table.id).unwrap();

        let created_hall = rx.try_recv().unwrap();
        assert_eq!(created_hall.resource, "hall");
        assert_eq!(created_hall.action, SyncAction::Created);
        assert_eq!(created_hall.version, 1);

        let created_table = rx.try_recv().unwrap();
        assert_eq!(created_table.resource, "table");
        assert_eq!(created_table.id, table.id);
        assert_eq!(created_table.data.unwrap()["hallId"], hall.id.as_str());

        let updated = rx.try_recv().unwrap();
        assert_eq!(updated.action, SyncAction::Updated);
        assert_eq!(updated.version, 2);
        assert_eq!(updated.data.unwrap()["status"], "occupied");

        let deleted = rx.try_recv().unwrap();
        assert_eq!(deleted.action, SyncAction::Deleted);
        assert!(deleted.data.is_none());
        assert_eq!(svc.version("table"), 3);
    }

    #[test]
    fn test_failed_mutation_publishes_nothing() {
        let svc = service();
        let mut rx = svc.subscribe();

        assert!(svc.remove_hall("hall-404").is_err());
        assert!(svc.set_table_status("table-404", TableStatus::Paid).is_err());
        assert!(rx.try_recv().is_err());
        assert_eq!(svc.version("hall"), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let svc = service();
        let other = svc.clone();
        other
            .add_hall(HallCreate {
                name: "Main".into(),
                floor: 2,
            })
            .unwrap();
        assert_eq!(svc.snapshot().len(), 1);
        assert_eq!(svc.tables_by_hall(2).len(), 1);
        assert_eq!(svc.epoch(), other.epoch());
    }
}
