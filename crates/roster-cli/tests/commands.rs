//! End-to-end tests for the CLI commands against a temporary data directory.

use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use roster_cli::cli::Cli;
use roster_cli::commands;
use roster_model::{Employee, EmployeeDirectory, EmployeeId};
use roster_store::{DEFAULT_STORAGE_KEY, FileStorage, PersistedState, StorageBackend};

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Empty data directory; the first command seeds the three fixed samples.
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.toml"), "[seed]\nrandom_count = 0\n").unwrap();
        Self { dir }
    }

    /// Workspace whose data file already holds the three samples.
    fn seeded() -> Self {
        let ws = Self::new();
        ws.run(&["list"]).unwrap();
        ws
    }

    fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Run `roster <args>` and return the exit code and stdout.
    fn run(&self, args: &[&str]) -> anyhow::Result<(i32, String)> {
        let data_dir = self.data_dir().to_str().unwrap().to_string();
        let config = self.dir.path().join("settings.toml");
        let config = config.to_str().unwrap().to_string();
        let mut argv = vec![
            "roster",
            "--data-dir",
            data_dir.as_str(),
            "--config",
            config.as_str(),
            "--locale",
            "en",
        ];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut out = Vec::new();
        let code = commands::run(&cli, &mut out)?;
        Ok((code, String::from_utf8(out).unwrap()))
    }

    /// Stored employees, read from the data file without opening a `Store`
    /// (opening writes a seeded document).
    fn employees(&self) -> Vec<Employee> {
        let content = FileStorage::new(self.data_dir())
            .read(DEFAULT_STORAGE_KEY)
            .unwrap()
            .unwrap_or_default();
        if content.is_empty() {
            return Vec::new();
        }
        serde_json::from_str::<PersistedState>(&content)
            .unwrap()
            .employees
    }
}

const NEW_HIRE: [&str; 17] = [
    "add",
    "--first-name",
    "Zeynep",
    "--last-name",
    "Arslan",
    "--dob",
    "1995-04-10",
    "--doe",
    "2021-02-01",
    "--phone",
    "+90 555 321 9876",
    "--email",
    "zeynep.arslan@example.com",
    "--department",
    "Tech",
    "--position",
    "Senior",
];

#[test]
fn list_shows_seeded_samples() {
    let ws = Workspace::new();
    let (code, out) = ws.run(&["list"]).unwrap();

    assert_eq!(code, 0);
    assert!(out.starts_with("Employee List\n"));
    assert!(out.contains("Ayşe"));
    assert!(out.contains("Mehmet"));
    assert!(out.contains("Page 1/1 (3)"));
    assert!(ws.data_dir().join("employee-manager.json").exists());
}

#[test]
fn list_search_without_matches_says_so() {
    let ws = Workspace::new();
    let (code, out) = ws.run(&["list", "--search", "nobody-here"]).unwrap();

    assert_eq!(code, 0);
    insta::assert_snapshot!(out.trim_end(), @r"
    Employee List
    No results found
    ");
}

#[test]
fn reading_data_before_any_command_keeps_samples() {
    let ws = Workspace::new();
    assert!(ws.employees().is_empty());

    let (code, out) = ws.run(&["list"]).unwrap();

    assert_eq!(code, 0);
    assert!(out.contains("Page 1/1 (3)"));
    assert_eq!(ws.employees().len(), 3);
}

#[test]
fn list_clamps_page() {
    let ws = Workspace::new();
    let (_, out) = ws.run(&["list", "--per-page", "2", "--page", "9"]).unwrap();
    assert!(out.contains("Page 2/2 (3)"));
}

#[test]
fn add_with_yes_stores_employee() {
    let ws = Workspace::new();
    let mut args = NEW_HIRE.to_vec();
    args.push("--yes");

    let (code, out) = ws.run(&args).unwrap();

    assert_eq!(code, 0);
    assert!(out.contains("Zeynep"));
    let employees = ws.employees();
    assert_eq!(employees.len(), 4);
    assert!(employees.email_exists("zeynep.arslan@example.com", None));
}

#[test]
fn add_with_invalid_email_is_rejected() {
    let ws = Workspace::new();
    let mut args = NEW_HIRE.to_vec();
    args[12] = "not-an-email";
    args.push("--yes");

    let (code, _) = ws.run(&args).unwrap();

    assert_eq!(code, 1);
    assert_eq!(ws.employees().len(), 3);
}

#[test]
fn edit_changes_only_given_fields() {
    let ws = Workspace::seeded();
    let before = ws.employees();
    let target = &before[2];

    let (code, _) = ws
        .run(&["edit", target.id.as_str(), "--position", "Lead", "--yes"])
        .unwrap();

    assert_eq!(code, 0);
    let after = ws.employees();
    let edited = after.find_by_id(&target.id).unwrap();
    assert_eq!(edited.position.as_str(), "Lead");
    assert_eq!(edited.email, target.email);
    assert_eq!(after.len(), 3);
}

#[test]
fn delete_many_with_yes() {
    let ws = Workspace::seeded();
    let before = ws.employees();

    let (code, out) = ws
        .run(&["delete", before[0].id.as_str(), before[1].id.as_str(), "--yes"])
        .unwrap();

    assert_eq!(code, 0);
    assert!(out.contains("Delete: 2"));
    let after = ws.employees();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, before[2].id);
}

#[test]
fn show_unknown_id_is_an_error() {
    let ws = Workspace::new();
    let err = ws.run(&["show", "missing"]).unwrap_err();
    assert!(err.to_string().contains("missing"));
}

#[test]
fn show_prints_every_field() {
    let ws = Workspace::seeded();
    let first = ws.employees()[0].clone();
    let (code, out) = ws.run(&["show", first.id.as_str()]).unwrap();

    assert_eq!(code, 0);
    assert!(out.contains(&first.first_name));
    assert!(out.contains("12/05/1994"));
}

#[test]
fn reset_empty_clears_everything() {
    let ws = Workspace::new();
    let (code, out) = ws.run(&["reset", "--empty", "--yes"]).unwrap();

    assert_eq!(code, 0);
    assert_eq!(out.trim(), "0 employees");
    assert!(ws.employees().is_empty());
    assert!(ws.employees().find_by_id(&EmployeeId::new("anything")).is_none());
}

#[test]
fn reset_with_count_generates_random_employees() {
    let ws = Workspace::new();
    ws.run(&["reset", "--count", "4", "--yes"]).unwrap();
    assert_eq!(ws.employees().len(), 7);
}

#[test]
fn config_init_writes_settings() {
    let ws = Workspace::new();
    std::fs::remove_file(ws.dir.path().join("settings.toml")).unwrap();

    let (code, out) = ws.run(&["config", "--init"]).unwrap();

    assert_eq!(code, 0);
    assert!(out.contains("per_page = 6"));
    let written = std::fs::read_to_string(ws.dir.path().join("settings.toml")).unwrap();
    assert!(written.contains("[display]"));
    assert!(written.contains("locale = \"en\""));
}
