//! Demo seed data.
//!
//! Used only when storage holds nothing for the store's key. The random
//! batch has a fixed size but random content.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use roster_model::{Department, Employee, EmployeeDraft, EmployeeId, Position};

/// Size of the random batch in [`Seed::demo`].
pub const DEFAULT_RANDOM_COUNT: usize = 50;

const DEPARTMENTS: [&str; 7] = [
    "Tech",
    "Analytics",
    "HR",
    "Marketing",
    "Sales",
    "Finance",
    "Operations",
];
const POSITIONS: [&str; 5] = ["Junior", "Medior", "Senior", "Lead", "Manager"];
const FIRST_NAMES: [&str; 40] = [
    "Ayşe", "Mehmet", "Elif", "Ahmet", "Fatma", "Mustafa", "Zeynep", "Ali", "Emine", "Hasan",
    "Hatice", "İbrahim", "Zeliha", "Ömer", "Sevgi", "Yusuf", "Merve", "Osman", "Büşra", "Emre",
    "Seda", "Kemal", "Gül", "Serkan", "Pınar", "Burak", "Deniz", "Cem", "Aslı", "Tolga", "Esra",
    "Murat", "Cansu", "Erhan", "Sibel", "Onur", "Gamze", "Barış", "Özge", "Kaan",
];
const LAST_NAMES: [&str; 30] = [
    "Yılmaz", "Demir", "Kaya", "Şahin", "Çelik", "Özkan", "Aydın", "Özdemir", "Arslan", "Doğan",
    "Kılıç", "Aslan", "Çetin", "Kara", "Koç", "Kurt", "Özturk", "Şen", "Duman", "Bakır", "Güneş",
    "Erdoğan", "Yıldız", "Polat", "Bulut", "Demirci", "Korkmaz", "Çakır", "Uysal", "Güler",
];

/// What a store starts with when its storage key is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Start with no employees.
    Empty,
    /// The fixed sample employees followed by `random_count` generated ones.
    Demo { random_count: usize },
    /// Start with exactly these employees.
    Employees(Vec<Employee>),
}

impl Default for Seed {
    fn default() -> Self {
        Self::demo()
    }
}

impl Seed {
    /// Demo seed with the default random batch size.
    pub fn demo() -> Self {
        Self::Demo {
            random_count: DEFAULT_RANDOM_COUNT,
        }
    }

    pub(crate) fn into_employees(self) -> Vec<Employee> {
        match self {
            Self::Empty => Vec::new(),
            Self::Demo { random_count } => {
                let mut employees = sample_employees();
                employees.extend(generate_sample_employees(
                    random_count,
                    &mut rand::thread_rng(),
                ));
                employees
            }
            Self::Employees(employees) => employees,
        }
    }
}

/// The three fixed sample employees, with fresh identifiers.
pub fn sample_employees() -> Vec<Employee> {
    [
        (
            "Ayşe",
            "Yılmaz",
            (1994, 5, 12),
            (2020, 3, 1),
            "+90 555 111 2233",
            "ayse.yilmaz@example.com",
            Department::Analytics,
            Position::Senior,
        ),
        (
            "Mehmet",
            "Demir",
            (1990, 11, 2),
            (2019, 7, 15),
            "+90 555 222 3344",
            "mehmet.demir@example.com",
            Department::Tech,
            Position::Medior,
        ),
        (
            "Elif",
            "Kaya",
            (1998, 1, 22),
            (2022, 9, 5),
            "+90 555 333 4455",
            "elif.kaya@example.com",
            Department::Tech,
            Position::Junior,
        ),
    ]
    .into_iter()
    .map(|(first, last, dob, doe, phone, email, department, position)| {
        Employee::from_draft(
            EmployeeId::generate(),
            EmployeeDraft {
                first_name: first.to_string(),
                last_name: last.to_string(),
                date_of_birth: ymd(dob),
                date_of_employment: ymd(doe),
                phone: phone.to_string(),
                email: email.to_string(),
                department,
                position,
            },
        )
    })
    .collect()
}

/// Generate `count` random employees.
///
/// Emails carry the batch index so they are unique within a batch; phones
/// are random and may collide.
pub fn generate_sample_employees<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let first = pick(&FIRST_NAMES, rng);
            let last = pick(&LAST_NAMES, rng);
            let date_of_birth = random_date(ymd((1980, 1, 1)), ymd((2000, 12, 31)), rng);
            let date_of_employment = random_date(ymd((2015, 1, 1)), ymd((2024, 12, 31)), rng);
            Employee::from_draft(
                EmployeeId::generate(),
                EmployeeDraft {
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    date_of_birth,
                    date_of_employment,
                    phone: random_phone(rng),
                    email: format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), i),
                    department: pick(&DEPARTMENTS, rng).into(),
                    position: pick(&POSITIONS, rng).into(),
                },
            )
        })
        .collect()
}

fn pick<'a, R: Rng + ?Sized>(items: &[&'a str], rng: &mut R) -> &'a str {
    // Pools are non-empty constants.
    items.choose(rng).copied().unwrap_or_default()
}

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn random_date<R: Rng + ?Sized>(start: NaiveDate, end: NaiveDate, rng: &mut R) -> NaiveDate {
    let span = (end - start).num_days().max(0) as u64;
    start
        .checked_add_days(Days::new(rng.gen_range(0..=span)))
        .unwrap_or(start)
}

/// `+90 555 AAA BBCC` with a three-digit area part and four digits built
/// from the leading pairs of two random numbers.
fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area: u32 = rng.gen_range(100..1000);
    let first: u32 = rng.gen_range(100..1000);
    let second: u32 = rng.gen_range(1000..10000);
    format!(
        "+90 555 {area} {}{}",
        &first.to_string()[..2],
        &second.to_string()[..2]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample_employees_are_fixed() {
        let employees = sample_employees();
        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0].phone, "+90 555 111 2233");
        assert_eq!(employees[2].email, "elif.kaya@example.com");
    }

    #[test]
    fn generated_batch_has_requested_size_and_valid_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let employees = generate_sample_employees(25, &mut rng);
        assert_eq!(employees.len(), 25);

        for (i, employee) in employees.iter().enumerate() {
            assert!(employee.email.ends_with(&format!("{i}@example.com")));
            let digits = employee.phone.chars().filter(char::is_ascii_digit).count();
            assert_eq!(digits, 12);
            assert!(employee.date_of_birth >= ymd((1980, 1, 1)));
            assert!(employee.date_of_birth <= ymd((2000, 12, 31)));
            assert!(employee.date_of_employment >= ymd((2015, 1, 1)));
            assert!(!matches!(employee.department, Department::Other(_)));
            assert!(!matches!(employee.position, Position::Other(_)));
        }
    }

    #[test]
    fn demo_seed_includes_samples_and_batch() {
        let employees = Seed::Demo { random_count: 4 }.into_employees();
        assert_eq!(employees.len(), 7);
        assert_eq!(employees[1].last_name, "Demir");
    }
}
