//! Seed command tests.

use common::ServiceConfig;
use domain::HashCost;
use orgctl_lib::build_admission;
use orgctl_lib::commands::seed::{self, SEED_DEPARTMENTS};

fn config() -> ServiceConfig {
    ServiceConfig {
        hash_cost: HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
        ..Default::default()
    }
}

#[test]
fn test_seed_password_checks() {
    let admission = build_admission(&config()).unwrap();
    let report = seed::execute(&admission).unwrap();

    assert!(!report.valid_pass_check1);
    assert!(!report.valid_pass_check2);
    assert!(report.valid_pass_check3);
    assert_ne!(report.user.password_hash, "hello world!!");
}

#[test]
fn test_seed_entities() {
    let admission = build_admission(&config()).unwrap();
    let report = seed::execute(&admission).unwrap();

    assert_eq!(report.company.departments.len(), SEED_DEPARTMENTS.len());
    assert_eq!(report.department_ids, vec![2, 3, 4, 5]);
    assert_eq!(report.user.company_id, report.company_id);
    assert_eq!(report.user.department_id, 2);
    assert!(report.company.audit.created_at.is_some());
    assert!(report.user.audit.created_at.is_some());
    assert!(report.user.audit.is_active());
}

#[test]
fn test_invalid_hash_cost_is_config_error() {
    let config = ServiceConfig {
        hash_cost: HashCost {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        },
        ..Default::default()
    };
    let err = build_admission(&config).err().unwrap();
    assert_eq!(err.code(), "CONFIG_ERROR");
}

#[test]
fn test_report_serializes_without_raw_password() {
    let admission = build_admission(&config()).unwrap();
    let report = seed::execute(&admission).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"valid_pass_check3\":true"));
    assert!(!json.contains("\"password\""));
}
