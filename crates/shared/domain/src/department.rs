//! Department entity.

use serde::{Deserialize, Serialize};

use crate::audit::AuditFields;
use crate::constants::MAX_DEPARTMENT_NAME_SIZE;
use crate::error::{DomainError, DomainResult};
use crate::validation::char_len;
use crate::EntityId;

/// A department of a company. Members are back references, not owned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub company_id: EntityId,
    #[serde(default)]
    pub member_ids: Vec<EntityId>,
    #[serde(default, flatten)]
    pub audit: AuditFields,
}

impl Department {
    pub fn new(name: impl Into<String>, company_id: EntityId) -> Self {
        Self {
            name: name.into(),
            company_id,
            member_ids: Vec::new(),
            audit: AuditFields::default(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if char_len(&self.name) > MAX_DEPARTMENT_NAME_SIZE {
            return Err(DomainError::validation(
                "name",
                format!("department name '{}' too long", self.name),
            ));
        }
        Ok(())
    }
}
