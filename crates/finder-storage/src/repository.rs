//! Per-user attribute persistence.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::OptionalExtension;
use tracing::debug;

use finder_core::error::FinderError;
use finder_core::types::PersistentAttributes;

use crate::db::Database;

/// Durable storage for the attributes that outlive a session.
///
/// Writes are last-write-wins; concurrent sessions for the same user on
/// different devices overwrite each other.
pub trait AttributeRepository: Send + Sync {
    fn load(&self, user_id: &str) -> Result<Option<PersistentAttributes>, FinderError>;
    fn save(&self, user_id: &str, attributes: &PersistentAttributes) -> Result<(), FinderError>;
    fn delete(&self, user_id: &str) -> Result<(), FinderError>;
}

/// SQLite-backed [`AttributeRepository`].
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Number of users with stored attributes.
    pub fn count(&self) -> Result<u64, FinderError> {
        self.db.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM user_attributes", [], |row| {
                row.get::<_, i64>(0)
            })
            .map(|n| n as u64)
            .map_err(|e| FinderError::Storage(format!("Failed to count users: {}", e)))
        })
    }
}

impl AttributeRepository for UserRepository {
    fn load(&self, user_id: &str) -> Result<Option<PersistentAttributes>, FinderError> {
        let raw: Option<String> = self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT attributes FROM user_attributes WHERE user_id = ?1",
                rusqlite::params![user_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| FinderError::Storage(format!("Failed to load attributes: {}", e)))
        })?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, user_id: &str, attributes: &PersistentAttributes) -> Result<(), FinderError> {
        let json = serde_json::to_string(attributes)?;
        let updated_at = Utc::now().to_rfc3339();

        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO user_attributes (user_id, attributes, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(user_id) DO UPDATE SET
                    attributes = excluded.attributes,
                    updated_at = excluded.updated_at",
                rusqlite::params![user_id, json, updated_at],
            )
            .map_err(|e| FinderError::Storage(format!("Failed to save attributes: {}", e)))?;
            Ok(())
        })?;

        debug!(user_id = %user_id, "User attributes saved");
        Ok(())
    }

    fn delete(&self, user_id: &str) -> Result<(), FinderError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "DELETE FROM user_attributes WHERE user_id = ?1",
                rusqlite::params![user_id],
            )
            .map_err(|e| FinderError::Storage(format!("Failed to delete attributes: {}", e)))?;
            Ok(())
        })
    }
}
