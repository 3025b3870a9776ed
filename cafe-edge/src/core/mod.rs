//! 核心模块 - 服务配置和状态
//!
//! # 模块结构
//!
//! - [`Config`] - 服务配置
//! - [`ServerState`] - 服务状态

pub mod config;
pub mod state;

pub use config::Config;
pub use state::ServerState;
