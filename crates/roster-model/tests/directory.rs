//! Tests for the slice-backed `EmployeeDirectory`.

use chrono::NaiveDate;

use roster_model::{Department, Employee, EmployeeDirectory, EmployeeDraft, EmployeeId, Position};

fn employee(id: &str, email: &str, phone: &str) -> Employee {
    Employee::from_draft(
        EmployeeId::new(id),
        EmployeeDraft {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            date_of_employment: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            phone: phone.to_string(),
            email: email.to_string(),
            department: Department::Other("IT".to_string()),
            position: Position::Other("Developer".to_string()),
        },
    )
}

fn staff() -> Vec<Employee> {
    vec![
        employee("test-id-1", "john@example.com", "1111111111"),
        employee("test-id-2", "jane@example.com", "2222222222"),
    ]
}

#[test]
fn find_by_id_returns_match() {
    let staff = staff();
    let found = staff.as_slice().find_by_id(&EmployeeId::new("test-id-2"));
    assert_eq!(found.map(|e| e.email.as_str()), Some("jane@example.com"));
    assert!(staff.find_by_id(&EmployeeId::new("missing")).is_none());
}

#[test]
fn email_lookup_ignores_case() {
    let staff = staff();
    assert!(staff.email_exists("JOHN@Example.com", None));
    assert!(!staff.email_exists("nobody@example.com", None));
}

#[test]
fn email_lookup_skips_excepted_owner() {
    let staff = staff();
    let owner = EmployeeId::new("test-id-1");
    assert!(!staff.email_exists("john@example.com", Some(&owner)));

    let other = EmployeeId::new("test-id-2");
    assert!(staff.email_exists("john@example.com", Some(&other)));
}

#[test]
fn phone_lookup_is_exact() {
    let staff = staff();
    assert!(staff.phone_exists("1111111111", None));
    assert!(!staff.phone_exists("111 111 1111", None));
    assert!(!staff.phone_exists("1111111111", Some(&EmployeeId::new("test-id-1"))));
}
