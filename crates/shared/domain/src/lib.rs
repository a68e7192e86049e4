//! Domain layer - organization entities and their admission rules.
//!
//! This crate contains pure domain logic with no I/O: field and entity
//! validation, normalization, and one-way password hashing.

pub mod address;
pub mod admission;
pub mod audit;
pub mod company;
pub mod constants;
pub mod department;
pub mod error;
pub mod normalize;
pub mod password;
pub mod user;
pub mod validation;

/// Identifier assigned by storage and passed through by the caller
pub type EntityId = u64;

pub use address::Address;
pub use admission::Admission;
pub use audit::AuditFields;
pub use company::Company;
pub use constants::*;
pub use department::Department;
pub use error::{DomainError, DomainResult};
pub use password::{verify_credential, Argon2Hasher, CredentialHasher, HashCost, Password};
pub use user::{NewUser, Role, User};
