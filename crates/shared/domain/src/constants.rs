//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Roles
// =============================================================================

/// Default role label assigned to new users
pub const ROLE_USER: &str = "user";

// =============================================================================
// Address
// =============================================================================

/// Maximum street number length
pub const MAX_STREET_NUMBER_SIZE: usize = 8;

/// Maximum street name length
pub const MAX_STREET_NAME_SIZE: usize = 120;

/// Maximum suite length (shares the street name bound)
pub const MAX_SUITE_SIZE: usize = MAX_STREET_NAME_SIZE;

/// Maximum city length
pub const MAX_CITY_SIZE: usize = 32;

/// Maximum state length
pub const MAX_STATE_SIZE: usize = 32;

/// Maximum zip code length
pub const MAX_ZIP_SIZE: usize = 5;

// =============================================================================
// Department
// =============================================================================

/// Maximum department name length
pub const MAX_DEPARTMENT_NAME_SIZE: usize = 255;

// =============================================================================
// User
// =============================================================================

pub const MIN_FIRST_NAME_SIZE: usize = 2;
pub const MAX_FIRST_NAME_SIZE: usize = 50;

pub const MIN_LAST_NAME_SIZE: usize = 2;
pub const MAX_LAST_NAME_SIZE: usize = 50;

pub const MAX_INITIALS_SIZE: usize = 2;

pub const MIN_USERNAME_SIZE: usize = 6;
pub const MAX_USERNAME_SIZE: usize = 16;

/// Raw password bounds, checked before hashing
pub const MIN_PASSWORD_SIZE: usize = 8;
pub const MAX_PASSWORD_SIZE: usize = 16;

/// Anchored, case-sensitive email pattern
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Separators removed from phone numbers before the digit check
pub const PHONE_SEPARATORS: &[char] = &['-', '(', ')', ' '];
