//! Entity admission - the single entry point run before an entity is stored.
//!
//! Addresses, companies and departments are validated only. Users go through
//! validate → normalize → hash; the candidate is borrowed, so a rejection at
//! any step leaves it exactly as the caller built it.

use std::sync::Arc;

use crate::address::Address;
use crate::audit::AuditFields;
use crate::company::Company;
use crate::department::Department;
use crate::error::DomainResult;
use crate::normalize::{normalize_names, strip_phone};
use crate::password::{Argon2Hasher, CredentialHasher, Password};
use crate::user::{NewUser, User};

/// Admission service. Holds no mutable state and can be shared across threads.
#[derive(Clone)]
pub struct Admission {
    hasher: Arc<dyn CredentialHasher>,
}

impl Default for Admission {
    fn default() -> Self {
        Self::new(Arc::new(Argon2Hasher::default()))
    }
}

impl Admission {
    /// Create new admission service with a credential hasher
    pub fn new(hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { hasher }
    }

    pub fn validate_address(&self, address: &Address) -> DomainResult<()> {
        outcome("address", address.validate())
    }

    /// Validates the owned address too. Departments are not cascaded.
    pub fn validate_company(&self, company: &Company) -> DomainResult<()> {
        outcome("company", company.validate())
    }

    pub fn validate_department(&self, department: &Department) -> DomainResult<()> {
        outcome("department", department.validate())
    }

    /// Admit a user candidate.
    ///
    /// Runs exactly once per raw password: the returned user carries the hash
    /// and must not be fed back through admission.
    pub fn admit_user(&self, candidate: &NewUser) -> DomainResult<User> {
        let phone = strip_phone(&candidate.phone);
        outcome("user", candidate.validate_with_phone(&phone))?;

        let (first_name, last_name) = normalize_names(&candidate.first_name, &candidate.last_name);

        let password = self.hasher.hash(&candidate.password).map_err(|e| {
            tracing::error!(entity = "user", error = %e, "Password hashing failed");
            e
        })?;

        tracing::debug!(username = %candidate.username, "User admitted");

        Ok(User {
            first_name,
            last_name,
            middle_initials: candidate.middle_initials.clone(),
            username: candidate.username.clone(),
            password_hash: password.into_string(),
            email: candidate.email.clone(),
            phone,
            role: candidate.role.clone(),
            company_id: candidate.company_id,
            department_id: candidate.department_id,
            audit: AuditFields::default(),
        })
    }

    /// Check a candidate password against a stored hash.
    pub fn verify_credential(&self, stored_hash: &str, candidate: &str) -> bool {
        self.hasher
            .verify(&Password::from_hash(stored_hash.to_string()), candidate)
    }
}

fn outcome(entity: &'static str, result: DomainResult<()>) -> DomainResult<()> {
    match &result {
        Ok(()) => tracing::debug!(entity, "Validation passed"),
        Err(e) => tracing::warn!(entity, field = e.field(), reason = %e, "Entity rejected"),
    }
    result
}
