use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource name for hall changes
pub const RESOURCE_HALL: &str = "hall";
/// Resource name for table changes
pub const RESOURCE_TABLE: &str = "table";

/// 变更类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

/// 同步信号载荷
///
/// 当某个资源发生变更时，服务广播此信号，通知所有订阅者刷新数据。
///
/// # 示例
/// - `resource`: "table"
/// - `version`: 42
/// - `action`: updated
/// - `id`: "table-123"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// 资源类型 ("hall" / "table")
    pub resource: String,
    /// 版本号 (每种资源单调递增，订阅者发现跳号时应全量刷新)
    pub version: u64,
    pub action: SyncAction,
    /// 资源 ID
    pub id: String,
    /// 资源数据 (deleted 时为 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
