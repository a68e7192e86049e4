//! Seed command - admit the demo company, its departments and one user.
//!
//! Stands in for the storage layer: identifiers are handed out in insertion
//! order and creation timestamps are stamped after each admission.

use chrono::Utc;
use serde::Serialize;

use common::{AppError, AppResult};
use domain::{Address, Admission, Company, Department, EntityId, NewUser, Role, User};

/// Departments created with the demo company, in order
pub const SEED_DEPARTMENTS: &[&str] = &["Human Resources", "Legal", "IT", "Facilities"];

const SEED_PASSWORD: &str = "hello world!!";

/// Result of a seed run
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub company_id: EntityId,
    pub department_ids: Vec<EntityId>,
    pub company: Company,
    pub user: User,
    pub valid_pass_check1: bool,
    pub valid_pass_check2: bool,
    pub valid_pass_check3: bool,
}

/// Execute seed command
pub fn execute(admission: &Admission) -> AppResult<SeedReport> {
    let mut next_id: EntityId = 0;
    let mut assign_id = || {
        next_id += 1;
        next_id
    };

    let mut company = Company::new("The Company", seed_address());
    admission.validate_company(&company)?;
    company.audit.stamp_created(Utc::now());
    let company_id = assign_id();
    tracing::info!(company_id, name = %company.name, "Company admitted");

    let mut department_ids = Vec::with_capacity(SEED_DEPARTMENTS.len());
    for name in SEED_DEPARTMENTS {
        let mut department = Department::new(*name, company_id);
        admission.validate_department(&department)?;
        department.audit.stamp_created(Utc::now());
        department_ids.push(assign_id());
        company.departments.push(department);
    }
    tracing::info!(count = department_ids.len(), "Departments admitted");

    // The user joins the first department
    let Some(&department_id) = department_ids.first() else {
        return Err(AppError::internal("no departments seeded"));
    };
    let candidate = NewUser {
        first_name: "Test".to_string(),
        last_name: "User3".to_string(),
        username: "tuser003".to_string(),
        password: SEED_PASSWORD.to_string(),
        email: "tuser003@example.com".to_string(),
        role: Role::default(),
        company_id,
        department_id,
        ..Default::default()
    };

    let mut user = admission.admit_user(&candidate)?;
    user.audit.stamp_created(Utc::now());
    tracing::info!(username = %user.username, "User admitted");

    let check = |candidate: &str| admission.verify_credential(&user.password_hash, candidate);
    let (check1, check2, check3) = (
        check("hello world"),
        check("hello world!"),
        check(SEED_PASSWORD),
    );

    Ok(SeedReport {
        company_id,
        department_ids,
        company,
        valid_pass_check1: check1,
        valid_pass_check2: check2,
        valid_pass_check3: check3,
        user,
    })
}

fn seed_address() -> Address {
    Address {
        street_number: "34".to_string(),
        street_name: "Aspen St.".to_string(),
        suite: "300".to_string(),
        city: "Washington".to_string(),
        state: "DC".to_string(),
        zip_code: "20030".to_string(),
        ..Default::default()
    }
}
