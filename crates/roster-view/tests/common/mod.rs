//! Shared fixtures.

use chrono::NaiveDate;
use roster_model::{Department, Employee, EmployeeId, Position};

pub fn employee(id: &str, first: &str, last: &str, department: &str) -> Employee {
    Employee {
        id: EmployeeId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
        date_of_employment: NaiveDate::from_ymd_opt(2020, 9, 1).unwrap(),
        phone: format!("+90 555 000 {id:0>4}"),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        department: Department::from(department.to_string()),
        position: Position::Junior,
    }
}

/// `count` employees with ids `0..count`.
pub fn roster(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| employee(&i.to_string(), "Person", &format!("N{i}"), "Tech"))
        .collect()
}
