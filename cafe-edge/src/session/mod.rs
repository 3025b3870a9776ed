//! 会话模块 - 当前登录用户
//!
//! 登录状态保存在 redb 中，重启后仍然有效。设置页面 (大厅/桌台管理)
//! 只对管理员开放。

mod storage;

pub use storage::{CURRENT_USER_KEY, SessionError, SessionResult, SessionStore};

use shared::models::User;

use crate::utils::{AppError, AppResult};

impl SessionStore {
    /// The logged-in user, or `NotAuthenticated`
    pub fn require_user(&self) -> AppResult<User> {
        self.load_current_user()?
            .ok_or_else(AppError::not_authenticated)
    }

    /// The logged-in admin; hosts get `AdminRequired`
    pub fn require_admin(&self) -> AppResult<User> {
        let user = self.require_user()?;
        if !user.is_admin() {
            tracing::warn!(user = %user.name, "Settings denied: admin required");
            return Err(AppError::admin_required());
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use shared::models::UserRole;

    #[test]
    fn test_require_user() {
        let store = SessionStore::open_in_memory().unwrap();
        let err = store.require_user().unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);

        store
            .save_current_user(&User::new("Sara", UserRole::Host))
            .unwrap();
        assert_eq!(store.require_user().unwrap().name, "Sara");
    }

    #[test]
    fn test_require_admin() {
        let store = SessionStore::open_in_memory().unwrap();
        assert_eq!(
            store.require_admin().unwrap_err().code,
            ErrorCode::NotAuthenticated
        );

        store
            .save_current_user(&User::new("Sara", UserRole::Host))
            .unwrap();
        assert_eq!(
            store.require_admin().unwrap_err().code,
            ErrorCode::AdminRequired
        );

        store
            .save_current_user(&User::new("Reza", UserRole::Admin))
            .unwrap();
        assert!(store.require_admin().unwrap().is_admin());
    }
}
