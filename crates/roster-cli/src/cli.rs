//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_model::{EmployeeForm, FormField, Locale};
use roster_view::Layout;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster - manage an employee list from the terminal",
    long_about = "Add, edit, delete, search and page through employees.\n\n\
                  Data is kept as JSON in the data directory and every change\n\
                  is validated and confirmed before it is written."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the employee data (overrides settings).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage key; data is kept in <DATA_DIR>/<KEY>.json.
    #[arg(long = "key", value_name = "KEY", global = true)]
    pub key: Option<String>,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Interface language: en or tr (default: settings, then $LANG).
    #[arg(long = "locale", value_name = "LANG", global = true)]
    pub locale: Option<Locale>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List employees, one page at a time.
    List(ListArgs),

    /// Show every field of one employee.
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Add an employee.
    Add(FormArgs),

    /// Change fields of an existing employee.
    Edit(EditArgs),

    /// Delete one or more employees.
    Delete(DeleteArgs),

    /// Replace all data with fresh sample employees.
    Reset(ResetArgs),

    /// Show the effective settings.
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show employees whose name, email, department or position contains this text.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Page to show (clamped to the last page).
    #[arg(long = "page", short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides settings).
    #[arg(long = "per-page", value_name = "N")]
    pub per_page: Option<usize>,

    /// Table rows or one card per employee (overrides settings).
    #[arg(long = "layout", value_name = "LAYOUT")]
    pub layout: Option<Layout>,
}

/// Employee fields. Omitted fields are left blank when adding and unchanged
/// when editing.
#[derive(Args, Default)]
pub struct FormArgs {
    #[arg(long = "first-name", value_name = "NAME")]
    pub first_name: Option<String>,

    #[arg(long = "last-name", value_name = "NAME")]
    pub last_name: Option<String>,

    /// Date of employment (YYYY-MM-DD).
    #[arg(long = "doe", value_name = "DATE")]
    pub date_of_employment: Option<String>,

    /// Date of birth (YYYY-MM-DD).
    #[arg(long = "dob", value_name = "DATE")]
    pub date_of_birth: Option<String>,

    #[arg(long = "phone", value_name = "PHONE")]
    pub phone: Option<String>,

    #[arg(long = "email", value_name = "EMAIL")]
    pub email: Option<String>,

    /// Department (Analytics, Tech, or any other name).
    #[arg(long = "department", value_name = "NAME")]
    pub department: Option<String>,

    /// Position (Junior, Medior, Senior, or any other title).
    #[arg(long = "position", value_name = "TITLE")]
    pub position: Option<String>,

    /// Save without asking for confirmation.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

impl FormArgs {
    fn value(&self, field: FormField) -> Option<&String> {
        match field {
            FormField::FirstName => self.first_name.as_ref(),
            FormField::LastName => self.last_name.as_ref(),
            FormField::DateOfEmployment => self.date_of_employment.as_ref(),
            FormField::DateOfBirth => self.date_of_birth.as_ref(),
            FormField::Phone => self.phone.as_ref(),
            FormField::Email => self.email.as_ref(),
            FormField::Department => self.department.as_ref(),
            FormField::Position => self.position.as_ref(),
        }
    }

    /// Overwrite the fields of `form` that were given on the command line.
    pub fn apply_to(&self, form: &mut EmployeeForm) {
        for field in FormField::ALL {
            if let Some(value) = self.value(field) {
                form.value_mut(field).clone_from(value);
            }
        }
    }
}

#[derive(Args)]
pub struct EditArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Employees to delete; more than one asks a single confirmation.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Delete without asking for confirmation.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Number of random employees after the three fixed samples (default: settings).
    #[arg(long = "count", value_name = "N", conflicts_with = "empty")]
    pub count: Option<usize>,

    /// Start with no employees at all.
    #[arg(long = "empty")]
    pub empty: bool,

    /// Reset without asking for confirmation.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the effective settings to the settings file.
    #[arg(long = "init")]
    pub init: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
