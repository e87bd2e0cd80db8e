//! Email and phone checks.
//!
//! Syntax checks are deliberately minimal. Uniqueness is case-insensitive
//! for email and exact for phone, mirroring [`EmployeeDirectory`].

use roster_model::{EmployeeDirectory, EmployeeForm, EmployeeId};

use crate::issue::Issue;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Digits of `phone` with all formatting removed.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn check<D>(form: &EmployeeForm, editing: Option<&EmployeeId>, directory: &D) -> Vec<Issue>
where
    D: EmployeeDirectory + ?Sized,
{
    let mut issues = Vec::new();

    let email = form.email.trim();
    if !(email.contains('@') && email.contains('.')) {
        issues.push(Issue::InvalidEmail {
            email: email.to_string(),
        });
    }
    if directory.email_exists(email, editing) {
        issues.push(Issue::DuplicateEmail {
            email: email.to_string(),
        });
    }

    let phone = form.phone.trim();
    let digits = phone_digits(phone).len();
    if digits < MIN_PHONE_DIGITS {
        issues.push(Issue::InvalidPhone { digits });
    }
    if directory.phone_exists(phone, editing) {
        issues.push(Issue::DuplicatePhone {
            phone: phone.to_string(),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_digits_strips_formatting() {
        assert_eq!(phone_digits("+90 (555) 111-22 33"), "905551112233");
        assert_eq!(phone_digits("n/a"), "");
    }
}
