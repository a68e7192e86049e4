//! User entity: the candidate submitted for admission and the admitted user.

use serde::{Deserialize, Serialize};

use crate::audit::AuditFields;
use crate::constants::{
    MAX_FIRST_NAME_SIZE, MAX_INITIALS_SIZE, MAX_LAST_NAME_SIZE, MAX_PASSWORD_SIZE,
    MAX_USERNAME_SIZE, MIN_FIRST_NAME_SIZE, MIN_LAST_NAME_SIZE, MIN_PASSWORD_SIZE,
    MIN_USERNAME_SIZE, ROLE_USER,
};
use crate::error::{DomainError, DomainResult};
use crate::password::Password;
use crate::validation::{bounded, char_len, email, phone_digits, require};
use crate::EntityId;

/// Role label attached to a user. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::new(ROLE_USER)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// User candidate carrying the raw password.
#[derive(Clone, Default, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_initials: String,
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Role,
    pub company_id: EntityId,
    pub department_id: EntityId,
}

// Raw password never reaches logs.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("middle_initials", &self.middle_initials)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .field("company_id", &self.company_id)
            .field("department_id", &self.department_id)
            .finish()
    }
}

impl NewUser {
    /// Validate every field in order, checking `phone` as the already
    /// stripped phone number. Stops at the first failure.
    pub fn validate_with_phone(&self, phone: &str) -> DomainResult<()> {
        self.validate_first_name()?;
        self.validate_last_name()?;
        self.validate_middle_initials()?;
        self.validate_username()?;
        self.validate_password()?;
        email("email", &self.email)?;
        phone_digits("phone", phone)
    }

    fn validate_first_name(&self) -> DomainResult<()> {
        require("first_name", &self.first_name, "user must provide a first name")?;
        bounded(
            "first_name",
            "user first name",
            &self.first_name,
            MIN_FIRST_NAME_SIZE,
            MAX_FIRST_NAME_SIZE,
        )
    }

    fn validate_last_name(&self) -> DomainResult<()> {
        require("last_name", &self.last_name, "user must provide a last name")?;
        bounded(
            "last_name",
            "user last name",
            &self.last_name,
            MIN_LAST_NAME_SIZE,
            MAX_LAST_NAME_SIZE,
        )
    }

    fn validate_middle_initials(&self) -> DomainResult<()> {
        let size = char_len(&self.middle_initials);
        if size > MAX_INITIALS_SIZE {
            return Err(DomainError::validation(
                "middle_initials",
                format!(
                    "user middle initials of size {} is greater than max size {}",
                    size, MAX_INITIALS_SIZE
                ),
            ));
        }
        Ok(())
    }

    fn validate_username(&self) -> DomainResult<()> {
        require("username", &self.username, "user must provide a username")?;
        bounded(
            "username",
            "username",
            &self.username,
            MIN_USERNAME_SIZE,
            MAX_USERNAME_SIZE,
        )
    }

    fn validate_password(&self) -> DomainResult<()> {
        require("password", &self.password, "user must provide a password")?;
        bounded(
            "password",
            "user password",
            &self.password,
            MIN_PASSWORD_SIZE,
            MAX_PASSWORD_SIZE,
        )
    }
}

/// Admitted user, ready for storage. Holds the password hash only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub middle_initials: String,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub company_id: EntityId,
    pub department_id: EntityId,
    #[serde(default, flatten)]
    pub audit: AuditFields,
}

impl User {
    /// Check a candidate password against the stored hash.
    pub fn check_password(&self, candidate: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> NewUser {
        NewUser {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            username: "tuser003".to_string(),
            password: "hello world!!".to_string(),
            email: "test@example.com".to_string(),
            company_id: 1,
            department_id: 2,
            ..Default::default()
        }
    }

    fn field_of(user: &NewUser) -> Option<&'static str> {
        user.validate_with_phone(&user.phone).unwrap_err().field()
    }

    #[test]
    fn test_valid_candidate() {
        assert!(candidate().validate_with_phone("").is_ok());
    }

    #[test]
    fn test_username_bounds() {
        for (len, ok) in [(5, false), (6, true), (16, true), (17, false)] {
            let user = NewUser {
                username: "u".repeat(len),
                ..candidate()
            };
            assert_eq!(user.validate_with_phone("").is_ok(), ok, "length {}", len);
        }
    }

    #[test]
    fn test_field_bounds() {
        type Setter = fn(&mut NewUser, String);
        let fields: [(&str, usize, usize, Setter); 4] = [
            (
                "first_name",
                MIN_FIRST_NAME_SIZE,
                MAX_FIRST_NAME_SIZE,
                |u, v| u.first_name = v,
            ),
            (
                "last_name",
                MIN_LAST_NAME_SIZE,
                MAX_LAST_NAME_SIZE,
                |u, v| u.last_name = v,
            ),
            (
                "username",
                MIN_USERNAME_SIZE,
                MAX_USERNAME_SIZE,
                |u, v| u.username = v,
            ),
            (
                "password",
                MIN_PASSWORD_SIZE,
                MAX_PASSWORD_SIZE,
                |u, v| u.password = v,
            ),
        ];

        for (field, min, max, set) in fields {
            for (len, ok) in [(min - 1, false), (min, true), (max, true), (max + 1, false)] {
                let mut user = candidate();
                set(&mut user, "x".repeat(len));
                let result = user.validate_with_phone("");
                assert_eq!(result.is_ok(), ok, "{} of length {}", field, len);
                if let Err(err) = result {
                    assert_eq!(err.field(), Some(field));
                }
            }
        }
    }

    #[test]
    fn test_password_bounds_use_raw_length() {
        let user = NewUser {
            password: "short".to_string(),
            ..candidate()
        };
        assert_eq!(
            user.validate_with_phone("").unwrap_err().to_string(),
            "user password of size 5 is too short"
        );

        let user = NewUser {
            password: "p".repeat(MAX_PASSWORD_SIZE + 1),
            ..candidate()
        };
        assert_eq!(field_of(&user), Some("password"));
    }

    #[test]
    fn test_names() {
        let user = NewUser {
            first_name: String::new(),
            ..candidate()
        };
        assert_eq!(
            user.validate_with_phone("").unwrap_err().to_string(),
            "user must provide a first name"
        );

        let user = NewUser {
            last_name: "X".to_string(),
            ..candidate()
        };
        assert_eq!(
            user.validate_with_phone("").unwrap_err().to_string(),
            "user last name of size 1 is too short"
        );
    }

    #[test]
    fn test_middle_initials() {
        let user = NewUser {
            middle_initials: "AB".to_string(),
            ..candidate()
        };
        assert!(user.validate_with_phone("").is_ok());

        let user = NewUser {
            middle_initials: "ABC".to_string(),
            ..candidate()
        };
        assert_eq!(field_of(&user), Some("middle_initials"));
    }

    #[test]
    fn test_evaluation_order() {
        let user = NewUser {
            username: "abc".to_string(),
            email: "broken".to_string(),
            ..candidate()
        };
        assert_eq!(field_of(&user), Some("username"));

        let user = NewUser {
            email: "broken".to_string(),
            phone: "CALL".to_string(),
            ..candidate()
        };
        assert_eq!(field_of(&user), Some("email"));
    }

    #[test]
    fn test_phone_checked_as_given() {
        assert!(candidate().validate_with_phone("5551234567").is_ok());
        let err = candidate().validate_with_phone("555CALLNOW").unwrap_err();
        assert_eq!(err.field(), Some("phone"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let out = format!("{:?}", candidate());
        assert!(!out.contains("hello world!!"));
        assert!(out.contains("[REDACTED]"));
    }

    #[test]
    fn test_default_role() {
        assert_eq!(Role::default().to_string(), ROLE_USER);
    }
}
