//! Search filtering.

use roster_model::Employee;

/// Text a query is matched against: name, email, department and position.
pub fn search_text(employee: &Employee) -> String {
    format!(
        "{} {} {} {} {}",
        employee.first_name,
        employee.last_name,
        employee.email,
        employee.department,
        employee.position
    )
    .to_lowercase()
}

/// Whether `employee` matches an already trimmed, lowercased query.
pub fn matches_query(employee: &Employee, needle: &str) -> bool {
    needle.is_empty() || search_text(employee).contains(needle)
}

/// Employees whose search text contains `query`, case-insensitively.
///
/// A blank query returns every employee, in order.
pub fn filter_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return employees.iter().collect();
    }
    employees
        .iter()
        .filter(|employee| matches_query(employee, &needle))
        .collect()
}
