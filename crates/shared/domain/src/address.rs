//! Address entity.

use serde::{Deserialize, Serialize};

use crate::audit::AuditFields;
use crate::constants::{
    MAX_CITY_SIZE, MAX_STATE_SIZE, MAX_STREET_NAME_SIZE, MAX_STREET_NUMBER_SIZE, MAX_SUITE_SIZE,
    MAX_ZIP_SIZE,
};
use crate::error::DomainResult;
use crate::validation::{at_most, require};

/// Postal address owned by a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street_number: String,
    pub street_name: String,
    #[serde(default)]
    pub suite: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default, flatten)]
    pub audit: AuditFields,
}

impl Address {
    /// Validate the address, stopping at the first failing rule.
    ///
    /// Street name and suite are checked first. City, state and zip code are
    /// then checked for presence before any of their lengths, so an empty
    /// state is reported ahead of a too-long city. Street number comes last.
    pub fn validate(&self) -> DomainResult<()> {
        require("street_name", &self.street_name, "must provide a street name")?;
        at_most(
            "street_name",
            &self.street_name,
            MAX_STREET_NAME_SIZE,
            "street name too long",
        )?;

        at_most("suite", &self.suite, MAX_SUITE_SIZE, "suite too long")?;

        require("city", &self.city, "must provide a city")?;
        require("state", &self.state, "must provide a state")?;
        require("zip_code", &self.zip_code, "must provide a zipcode")?;

        at_most("city", &self.city, MAX_CITY_SIZE, "invalid city")?;
        at_most("state", &self.state, MAX_STATE_SIZE, "invalid state")?;
        at_most("zip_code", &self.zip_code, MAX_ZIP_SIZE, "invalid zip code")?;

        at_most(
            "street_number",
            &self.street_number,
            MAX_STREET_NUMBER_SIZE,
            "street number too long",
        )
    }
}
