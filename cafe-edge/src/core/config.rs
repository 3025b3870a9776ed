use std::path::PathBuf;

use crate::floor::TransitionPolicy;

/// 服务配置 - 楼面服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (会话数据库、日志) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，存在时按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | STRICT_TRANSITIONS | false | 拒绝不符合服务流程的状态变更 |
/// | SEED_DEMO | true | 启动时加载示例大厅和桌台 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/cafe STRICT_TRANSITIONS=true cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
    /// 是否严格校验状态流转
    pub strict_transitions: bool,
    /// 是否加载示例数据
    pub seed_demo: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            strict_transitions: std::env::var("STRICT_TRANSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            seed_demo: std::env::var("SEED_DEMO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// 会话数据库路径
    pub fn session_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("session.redb")
    }

    /// 确保工作目录存在
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }

    pub fn transition_policy(&self) -> TransitionPolicy {
        if self.strict_transitions {
            TransitionPolicy::Strict
        } else {
            TransitionPolicy::Permissive
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
