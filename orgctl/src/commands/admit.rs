//! Admit command - run one candidate entity through admission.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use common::AppResult;
use domain::{Address, Admission, Company, Department, NewUser};

use crate::cli::{AdmitArgs, EntityKind};

/// Execute admit command
pub fn execute(args: AdmitArgs, admission: &Admission) -> AppResult<Value> {
    let reader = open_input(&args.input)?;
    admit(args.kind, reader, admission)
}

/// Decode a candidate of `kind` from `reader` and admit it.
///
/// Returns the admitted entity as JSON; users come back normalized and hashed.
pub fn admit<R: Read>(kind: EntityKind, reader: R, admission: &Admission) -> AppResult<Value> {
    tracing::info!(?kind, "Admitting candidate");

    let admitted = match kind {
        EntityKind::Address => {
            let address: Address = decode(reader)?;
            admission.validate_address(&address)?;
            serde_json::to_value(address)?
        }
        EntityKind::Company => {
            let company: Company = decode(reader)?;
            admission.validate_company(&company)?;
            serde_json::to_value(company)?
        }
        EntityKind::Department => {
            let department: Department = decode(reader)?;
            admission.validate_department(&department)?;
            serde_json::to_value(department)?
        }
        EntityKind::User => {
            let candidate: NewUser = decode(reader)?;
            serde_json::to_value(admission.admit_user(&candidate)?)?
        }
    };

    Ok(admitted)
}

fn decode<T: DeserializeOwned, R: Read>(reader: R) -> AppResult<T> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

fn open_input(path: &Path) -> AppResult<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    Ok(Box::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    fn admission() -> Admission {
        let config = common::ServiceConfig {
            hash_cost: domain::HashCost {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
            ..Default::default()
        };
        crate::build_admission(&config).unwrap()
    }

    #[test]
    fn test_admit_address() {
        let json = r#"{"street_name":"Aspen St.","city":"Washington","state":"DC","zip_code":"20030"}"#;
        let value = admit(EntityKind::Address, json.as_bytes(), &admission()).unwrap();
        assert_eq!(value["city"], "Washington");
    }

    #[test]
    fn test_rejected_address_reports_reason() {
        let json = r#"{"street_name":"Aspen St.","city":"","state":"DC","zip_code":"20030"}"#;
        let err = admit(EntityKind::Address, json.as_bytes(), &admission()).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "must provide a city"));
    }

    #[test]
    fn test_malformed_json() {
        let err = admit(EntityKind::Department, "{".as_bytes(), &admission()).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_admit_user_hides_raw_password() {
        let json = r#"{
            "first_name": "test",
            "last_name": "user",
            "username": "tuser003",
            "password": "hello world!!",
            "email": "tuser003@example.com",
            "phone": "(555) 123-4567",
            "company_id": 1,
            "department_id": 1
        }"#;
        let value = admit(EntityKind::User, json.as_bytes(), &admission()).unwrap();

        assert_eq!(value["first_name"], "Test");
        assert_eq!(value["phone"], "5551234567");
        assert!(!value.to_string().contains("hello world!!"));
    }
}
