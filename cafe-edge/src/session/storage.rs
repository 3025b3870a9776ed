//! redb-based storage for the logged-in user

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::User;
use thiserror::Error;

use crate::utils::AppError;

/// Session table: key = record name, value = JSON
const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

/// The single record kept in the session table
pub const CURRENT_USER_KEY: &str = "currentUser";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::storage(err.to_string())
    }
}

/// Current-user store
#[derive(Clone)]
pub struct SessionStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open or create database
    pub fn open(path: impl AsRef<Path>) -> SessionResult<Self> {
        Self::init(Database::create(path)?)
    }

    /// Open in-memory database (tests, ephemeral runs)
    pub fn open_in_memory() -> SessionResult<Self> {
        Self::init(
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?,
        )
    }

    fn init(db: Database) -> SessionResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// The logged-in user, if any.
    ///
    /// An unreadable record counts as logged out.
    pub fn load_current_user(&self) -> SessionResult<Option<User>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        let Some(guard) = table.get(CURRENT_USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_slice::<User>(guard.value()) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session record");
                Ok(None)
            }
        }
    }

    /// Log in: replace the stored user
    pub fn save_current_user(&self, user: &User) -> SessionResult<()> {
        let value = serde_json::to_vec(user)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.insert(CURRENT_USER_KEY, value.as_slice())?;
        }
        write_txn.commit()?;
        tracing::info!(user = %user.name, role = ?user.role, "User logged in");
        Ok(())
    }

    /// Log out. Clearing an empty session is a no-op.
    pub fn clear(&self) -> SessionResult<()> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(CURRENT_USER_KEY)?.is_some()
        };
        write_txn.commit()?;
        if removed {
            tracing::info!("User logged out");
        }
        Ok(())
    }

    /// Raw write, used to exercise unreadable records
    #[cfg(test)]
    fn put_raw(&self, value: &[u8]) -> SessionResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.insert(CURRENT_USER_KEY, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
