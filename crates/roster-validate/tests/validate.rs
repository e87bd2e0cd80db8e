//! Tests for form validation.

use chrono::NaiveDate;

use roster_model::{Employee, EmployeeForm, EmployeeId, FormField, Locale};
use roster_store::{MemoryStorage, Seed, Store, create_employee};
use roster_validate::{Issue, messages, validate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn form(email: &str, phone: &str) -> EmployeeForm {
    EmployeeForm {
        first_name: "Zeynep".to_string(),
        last_name: "Arslan".to_string(),
        date_of_birth: "1995-04-10".to_string(),
        date_of_employment: "2021-02-01".to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        department: "Analytics".to_string(),
        position: "Medior".to_string(),
    }
}

fn store_with(forms: &[EmployeeForm]) -> (Store<MemoryStorage>, Vec<Employee>) {
    let mut store = Store::open(MemoryStorage::new(), "validate-test", Seed::Empty).unwrap();
    let created = forms
        .iter()
        .map(|f| create_employee(&mut store, f.to_draft().unwrap()).unwrap())
        .collect();
    (store, created)
}

#[test]
fn valid_form_has_no_issues() {
    let (store, _) = store_with(&[]);
    let issues = validate(&form("zeynep@example.com", "+90 555 123 4567"), None, &store, today());
    assert!(issues.is_empty(), "{issues:?}");
}

#[test]
fn malformed_email_is_reported_without_touching_store() {
    let (store, _) = store_with(&[]);
    let issues = validate(&form("not-an-email", "+90 555 123 4567"), None, &store, today());

    assert_eq!(
        issues,
        vec![Issue::InvalidEmail {
            email: "not-an-email".to_string()
        }]
    );
    assert!(
        messages(&issues, Locale::En).contains(&"Invalid email address".to_string())
    );
    assert!(store.is_empty());
}

#[test]
fn email_needs_both_at_and_dot() {
    let (store, _) = store_with(&[]);
    for email in ["a@b", "a.b", "ab"] {
        let issues = validate(&form(email, "5551234567"), None, &store, today());
        assert!(matches!(issues.as_slice(), [Issue::InvalidEmail { .. }]), "{email}");
    }
}

#[test]
fn shared_phone_is_rejected_for_a_different_employee() {
    let (store, _) = store_with(&[form("ayse@example.com", "+90 555 111 2233")]);

    let issues = validate(&form("other@example.com", "+90 555 111 2233"), None, &store, today());
    assert_eq!(
        issues,
        vec![Issue::DuplicatePhone {
            phone: "+90 555 111 2233".to_string()
        }]
    );
}

#[test]
fn phone_uniqueness_is_format_sensitive() {
    let (store, _) = store_with(&[form("ayse@example.com", "+90 555 111 2233")]);
    let issues = validate(&form("other@example.com", "+905551112233"), None, &store, today());
    assert!(issues.is_empty(), "{issues:?}");
}

#[test]
fn email_uniqueness_ignores_case() {
    let (store, _) = store_with(&[form("ayse@example.com", "+90 555 111 2233")]);
    let issues = validate(&form("AYSE@example.com", "+90 555 999 0000"), None, &store, today());
    assert_eq!(
        issues,
        vec![Issue::DuplicateEmail {
            email: "AYSE@example.com".to_string()
        }]
    );
}

#[test]
fn editing_does_not_collide_with_own_contact_details() {
    let existing = form("ayse@example.com", "+90 555 111 2233");
    let (store, created) = store_with(&[existing.clone()]);
    let id = &created[0].id;

    assert!(validate(&existing, Some(id), &store, today()).is_empty());

    let stranger = EmployeeId::new("someone-else");
    assert_eq!(validate(&existing, Some(&stranger), &store, today()).len(), 2);
}

#[test]
fn short_phone_reports_digit_count() {
    let (store, _) = store_with(&[]);
    let issues = validate(&form("z@example.com", "+90 (555) 12"), None, &store, today());
    assert_eq!(issues, vec![Issue::InvalidPhone { digits: 7 }]);
}

#[test]
fn underage_and_date_order_are_both_reported() {
    let (store, _) = store_with(&[]);
    let mut minor = form("z@example.com", "5551234567");
    minor.date_of_birth = "2010-01-01".to_string();
    minor.date_of_employment = "2009-12-31".to_string();

    let issues = validate(&minor, None, &store, today());
    assert_eq!(issues, vec![Issue::Underage, Issue::EmploymentBeforeBirth]);
}

#[test]
fn employment_on_birth_date_is_rejected() {
    let (store, _) = store_with(&[]);
    let mut same_day = form("z@example.com", "5551234567");
    same_day.date_of_employment = same_day.date_of_birth.clone();

    let issues = validate(&same_day, None, &store, today());
    assert_eq!(issues, vec![Issue::EmploymentBeforeBirth]);
}

#[test]
fn all_checks_run_and_accumulate() {
    let employees: Vec<Employee> = Vec::new();
    let blank = EmployeeForm::default();

    let issues = validate(&blank, None, employees.as_slice(), today());

    let required: Vec<FormField> = issues
        .iter()
        .filter_map(|issue| match issue {
            Issue::Required { field } => Some(*field),
            _ => None,
        })
        .collect();
    assert_eq!(required, FormField::ALL.to_vec());
    assert!(issues.contains(&Issue::InvalidEmail {
        email: String::new()
    }));
    assert!(issues.contains(&Issue::InvalidPhone { digits: 0 }));
    assert!(issues.contains(&Issue::Underage));
    assert!(issues.contains(&Issue::EmploymentBeforeBirth));
    assert_eq!(issues.len(), 8 + 4);
}

#[test]
fn messages_render_in_turkish() {
    let employees: Vec<Employee> = Vec::new();
    let mut bad = form("zeynep@example.com", "5551234567");
    bad.date_of_birth = "2015-01-01".to_string();

    let issues = validate(&bad, None, employees.as_slice(), today());
    assert_eq!(
        messages(&issues, Locale::Tr),
        vec!["Yaş 18'den küçük olamaz".to_string()]
    );
}

#[test]
fn issues_serialize_for_machine_readable_output() {
    let issues = vec![
        Issue::Required {
            field: FormField::LastName,
        },
        Issue::InvalidPhone { digits: 7 },
        Issue::Underage,
    ];
    assert_eq!(
        serde_json::to_value(&issues).unwrap(),
        serde_json::json!([
            { "Required": { "field": "LastName" } },
            { "InvalidPhone": { "digits": 7 } },
            "Underage"
        ])
    );
}
