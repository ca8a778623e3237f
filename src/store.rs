//! Sqlite-backed persistence for budget feedback.
//!
//! The core depends on exactly two operations: insert one record and fetch
//! the most recent record for a user. Budget snapshots are stored as JSON
//! in the shape they travel on the wire.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::budget::BudgetCriteria;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS budget_feedback (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    budget_data TEXT NOT NULL,
    feedback_text TEXT NOT NULL,
    rating INTEGER,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_budget_feedback_user
    ON budget_feedback (user_id, created_at);
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("corrupt budget snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("corrupt record id: {0}")]
    Id(#[from] uuid::Error),

    #[error("corrupt timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// One persisted feedback entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub user_id: String,
    /// Criteria snapshot taken when the feedback was given.
    pub budget_data: BudgetCriteria,
    pub feedback_text: String,
    pub rating: Option<i64>,
    pub created_at: DateTime<Utc>,
}

pub struct FeedbackStore {
    conn: Mutex<Connection>,
}

impl FeedbackStore {
    /// Open (or create) the database at `path` and apply the schema.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        tracing::info!(path = %path.display(), "feedback store opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Persist one feedback entry and return the stored record.
    pub fn insert(
        &self,
        user_id: &str,
        criteria: &BudgetCriteria,
        feedback_text: &str,
        rating: Option<i64>,
    ) -> Result<FeedbackRecord, StoreError> {
        let record = FeedbackRecord {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            budget_data: criteria.clone(),
            feedback_text: feedback_text.to_string(),
            rating,
            created_at: Utc::now(),
        };
        let snapshot = serde_json::to_string(&record.budget_data)?;

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO budget_feedback (id, user_id, budget_data, feedback_text, rating, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id.to_string(),
                record.user_id,
                snapshot,
                record.feedback_text,
                record.rating,
                record.created_at.to_rfc3339(),
            ],
        )?;
        Ok(record)
    }

    /// Fetch the most recent record for a user, if any.
    pub fn latest_for_user(&self, user_id: &str) -> Result<Option<FeedbackRecord>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let row: Option<(String, String, String, String, Option<i64>, String)> = conn
            .query_row(
                "SELECT id, user_id, budget_data, feedback_text, rating, created_at
                 FROM budget_feedback
                 WHERE user_id = ?1
                 ORDER BY created_at DESC, rowid DESC
                 LIMIT 1",
                params![user_id],
                |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, user_id, snapshot, feedback_text, rating, created_at)) = row else {
            return Ok(None);
        };

        Ok(Some(FeedbackRecord {
            id: Uuid::parse_str(&id)?,
            user_id,
            budget_data: serde_json::from_str(&snapshot)?,
            feedback_text,
            rating,
            created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
        }))
    }
}
