//! User Model

use serde::{Deserialize, Serialize};

/// Dashboard role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// مدیر سیستم: may open hall/table settings
    Admin,
    /// سالن‌دار: runs the floor
    Host,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "مدیر سیستم",
            Self::Host => "سالن‌دار",
        }
    }
}

/// Logged-in user, as kept in the session store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: UserRole,
}

impl User {
    pub fn new(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
