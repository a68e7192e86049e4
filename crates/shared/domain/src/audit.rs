//! Audit metadata carried by every entity.
//!
//! These timestamps belong to the persistence layer. Admission never reads or
//! writes them; the helpers below are for whoever stores the entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation, update and soft-delete timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl AuditFields {
    /// Record creation at `now`.
    pub fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = Some(now);
        self.updated_at = Some(now);
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}
