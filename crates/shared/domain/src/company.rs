//! Company entity.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::audit::AuditFields;
use crate::department::Department;
use crate::error::DomainResult;

/// A company owning one address and an ordered list of departments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub alias: String,
    pub address: Address,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default, flatten)]
    pub audit: AuditFields,
}

impl Company {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            alias: String::new(),
            address,
            departments: Vec::new(),
            audit: AuditFields::default(),
        }
    }

    /// Validate name then address. Departments are admitted separately.
    pub fn validate(&self) -> DomainResult<()> {
        self.validate_name()?;
        self.address.validate()
    }

    // No name rules yet.
    fn validate_name(&self) -> DomainResult<()> {
        Ok(())
    }
}
