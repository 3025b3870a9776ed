//! Cafe Edge - 咖啡馆楼面管理节点
//!
//! # 架构概述
//!
//! - **楼面** (`floor`): 大厅、桌台及其服务状态，变更通过 broadcast 通知
//! - **会话** (`session`): redb 保存的当前登录用户
//! - **核心** (`core`): 配置和服务状态
//!
//! # 模块结构
//!
//! ```text
//! cafe-edge/src/
//! ├── core/          # 配置、状态
//! ├── floor/         # 注册表、生命周期、统计、示例数据
//! ├── session/       # 当前用户
//! └── utils/         # 日志、校验、时钟
//! ```

pub mod core;
pub mod floor;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, ServerState};
pub use floor::{FloorService, Registry, TransitionPolicy};
pub use session::SessionStore;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env、创建工作目录、初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env is optional
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    config.ensure_work_dir()?;

    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ______       ____
  / ____/___ _ / __/__
 / /   / __ `// /_/ _ \
/ /___/ /_/ // __/  __/
\____/\__,_//_/  \___/
    "#
    );
}
