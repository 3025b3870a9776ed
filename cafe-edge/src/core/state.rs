use std::sync::Arc;

use crate::core::Config;
use crate::floor::{FloorService, seed};
use crate::session::SessionStore;
use crate::utils::{AppError, AppResult, Clock, SystemClock};

/// 服务状态 - 持有所有服务的引用
///
/// Clone 开销低 (内部均为 Arc)，可在任务间共享。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务配置
    pub config: Config,
    /// 大厅/桌台服务
    pub floor: FloorService,
    /// 当前用户会话
    pub sessions: SessionStore,
}

impl ServerState {
    /// 创建服务状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替
    pub fn new(config: Config, floor: FloorService, sessions: SessionStore) -> Self {
        Self {
            config,
            floor,
            sessions,
        }
    }

    /// 初始化服务状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录
    /// 2. 会话数据库 (work_dir/session.redb)
    /// 3. 楼面服务，按配置加载示例数据
    pub fn initialize(config: &Config) -> AppResult<Self> {
        Self::initialize_with_clock(config, Arc::new(SystemClock))
    }

    pub fn initialize_with_clock(config: &Config, clock: Arc<dyn Clock>) -> AppResult<Self> {
        config.ensure_work_dir().map_err(|e| {
            AppError::storage(format!("Failed to create work dir {}: {e}", config.work_dir))
        })?;

        let sessions = SessionStore::open(config.session_db_path())?;

        let floor = FloorService::new(clock, config.transition_policy());
        if config.seed_demo {
            seed::demo_halls(&floor)?;
        }

        tracing::info!(
            work_dir = %config.work_dir,
            policy = ?config.transition_policy(),
            epoch = %floor.epoch(),
            "Server state initialized"
        );
        Ok(Self::new(config.clone(), floor, sessions))
    }

    pub fn floor(&self) -> &FloorService {
        &self.floor
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}
