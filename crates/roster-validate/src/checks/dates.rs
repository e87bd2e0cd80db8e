//! Age and date-order checks.
//!
//! An unreadable date fails every check that needs it.

use chrono::NaiveDate;

use roster_model::{EmployeeForm, parse_date};

use crate::issue::Issue;

/// Minimum age at submission.
pub const MIN_AGE_YEARS: f64 = 18.0;

const DAYS_PER_YEAR: f64 = 365.25;

/// Age in fractional years: elapsed days divided by 365.25.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> f64 {
    (today - date_of_birth).num_days() as f64 / DAYS_PER_YEAR
}

pub fn check(form: &EmployeeForm, today: NaiveDate) -> Vec<Issue> {
    let mut issues = Vec::new();
    let date_of_birth = parse_date(&form.date_of_birth);
    let date_of_employment = parse_date(&form.date_of_employment);

    let adult = date_of_birth.is_some_and(|dob| age_in_years(dob, today) >= MIN_AGE_YEARS);
    if !adult {
        issues.push(Issue::Underage);
    }

    let ordered = matches!(
        (date_of_birth, date_of_employment),
        (Some(dob), Some(doe)) if doe > dob
    );
    if !ordered {
        issues.push(Issue::EmploymentBeforeBirth);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_leap_days_fractionally() {
        let age = age_in_years(ymd(2000, 1, 1), ymd(2018, 1, 1));
        // 6575 days / 365.25
        assert!((age - 18.001_368_9).abs() < 1e-6);
    }

    #[test]
    fn future_birth_date_is_negative_age() {
        assert!(age_in_years(ymd(2030, 1, 1), ymd(2026, 1, 1)) < 0.0);
    }
}
