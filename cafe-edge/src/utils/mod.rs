//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`Clock`] - 可注入的时间源
//! - 日志、输入校验

pub mod clock;
pub mod logger;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};

pub use clock::{Clock, ManualClock, SystemClock};
