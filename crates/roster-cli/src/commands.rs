//! Command implementations.
//!
//! Each command writes its normal output to `out` and returns the process
//! exit code. Errors are returned to `main` for reporting.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::{debug, info, warn};

use roster_core::{Outcome, bulk_delete, request_delete, submit_form};
use roster_model::{EmployeeDirectory, EmployeeForm, EmployeeId, Locale, Message};
use roster_store::{FileStorage, Seed, Store};
use roster_view::{ConfirmPrompt, ConfirmationGate, Decision, ListView, Selection};

use crate::cli::{Cli, Command, ConfigArgs, DeleteArgs, EditArgs, FormArgs, ListArgs, ResetArgs};
use crate::prompt::TerminalGate;
use crate::render::{employee_detail, issue_table, list_output};
use crate::settings::Settings;

/// Settings merged with command-line overrides.
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub key: String,
    pub locale: Locale,
}

impl Session {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(Settings::config_path);
        let mut settings = Settings::load_from(&config_path)?;
        if let Some(dir) = &cli.data_dir {
            settings.storage.data_dir = Some(dir.clone());
        }
        if let Some(key) = &cli.key {
            settings.storage.key.clone_from(key);
        }
        if let Some(locale) = cli.locale {
            settings.display.locale = Some(locale);
        }

        let lang = std::env::var("LANG").ok();
        Ok(Self {
            data_dir: settings.data_dir(),
            key: settings.storage.key.clone(),
            locale: settings.locale(lang.as_deref()),
            config_path,
            settings,
        })
    }

    pub fn open_store(&self) -> Result<Store<FileStorage>> {
        debug!("Opening store {} in {}", self.key, self.data_dir.display());
        Store::open(
            FileStorage::new(&self.data_dir),
            self.key.as_str(),
            self.settings.seed.to_seed(),
        )
        .with_context(|| format!("open employee data in {}", self.data_dir.display()))
    }

    /// `--yes` answers every prompt; otherwise ask on the terminal.
    fn gate(&self, yes: bool) -> Box<dyn ConfirmationGate> {
        if yes {
            Box::new(Decision::Confirmed)
        } else {
            Box::new(TerminalGate::stdio(self.locale))
        }
    }
}

/// Run the parsed command.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<i32> {
    let session = Session::from_cli(cli)?;
    match &cli.command {
        Command::List(args) => run_list(&session, args, out),
        Command::Show { id } => run_show(&session, id, out),
        Command::Add(args) => run_add(&session, args, out),
        Command::Edit(args) => run_edit(&session, args, out),
        Command::Delete(args) => run_delete(&session, args, out),
        Command::Reset(args) => run_reset(&session, args, out),
        Command::Config(args) => run_config(&session, args, out),
    }
}

pub fn run_list(session: &Session, args: &ListArgs, out: &mut dyn Write) -> Result<i32> {
    let store = session.open_store()?;
    let mut view = ListView::new(args.per_page.unwrap_or(session.settings.display.per_page));
    view.set_layout(args.layout.unwrap_or(session.settings.display.layout));
    if let Some(search) = &args.search {
        view.set_query(search.as_str());
    }
    view.go_to(args.page);

    let page = view.render(store.employees());
    if page.page != args.page {
        warn!("Page {} does not exist, showing page {}", args.page, page.page);
    }
    write!(out, "{}", list_output(&page, view.layout(), session.locale))?;
    Ok(0)
}

pub fn run_show(session: &Session, id: &str, out: &mut dyn Write) -> Result<i32> {
    let store = session.open_store()?;
    let Some(employee) = store.find_by_id(&EmployeeId::new(id)) else {
        bail!("no employee with id {id}");
    };
    writeln!(out, "{}", employee_detail(employee, session.locale))?;
    Ok(0)
}

pub fn run_add(session: &Session, args: &FormArgs, out: &mut dyn Write) -> Result<i32> {
    let mut store = session.open_store()?;
    let mut form = EmployeeForm::default();
    args.apply_to(&mut form);

    let mut gate = session.gate(args.yes);
    let today = Local::now().date_naive();
    let outcome = submit_form(&mut store, &form, None, gate.as_mut(), session.locale, today)?;
    report(session, outcome, out)
}

pub fn run_edit(session: &Session, args: &EditArgs, out: &mut dyn Write) -> Result<i32> {
    let mut store = session.open_store()?;
    let id = EmployeeId::new(args.id.as_str());
    let Some(employee) = store.find_by_id(&id) else {
        bail!("no employee with id {id}");
    };
    let mut form = EmployeeForm::from_employee(employee);
    args.form.apply_to(&mut form);

    let mut gate = session.gate(args.form.yes);
    let today = Local::now().date_naive();
    let outcome = submit_form(&mut store, &form, Some(&id), gate.as_mut(), session.locale, today)?;
    report(session, outcome, out)
}

pub fn run_delete(session: &Session, args: &DeleteArgs, out: &mut dyn Write) -> Result<i32> {
    let mut store = session.open_store()?;
    let mut gate = session.gate(args.yes);

    let outcome = match args.ids.as_slice() {
        [id] => request_delete(&mut store, &EmployeeId::new(id.as_str()), gate.as_mut(), session.locale)?,
        ids => {
            let mut selection: Selection = ids.iter().map(|id| EmployeeId::new(id.as_str())).collect();
            let before = selection.len();
            if selection.prune(store.employees()) > 0 {
                warn!(
                    "{} of {} ids do not match any employee",
                    before - selection.len(),
                    before
                );
            }
            bulk_delete(&mut store, &mut selection, gate.as_mut(), session.locale)?
        }
    };
    report(session, outcome, out)
}

pub fn run_reset(session: &Session, args: &ResetArgs, out: &mut dyn Write) -> Result<i32> {
    let mut store = session.open_store()?;
    let seed = if args.empty {
        Seed::Empty
    } else {
        Seed::Demo {
            random_count: args.count.unwrap_or(session.settings.seed.random_count),
        }
    };

    let prompt = ConfirmPrompt::delete(format!(
        "{} {}",
        store.len(),
        session.locale.translate(Message::ConfirmDeleteSelected)
    ));
    if !session.gate(args.yes).confirm(&prompt).is_confirmed() {
        return report(session, Outcome::Cancelled, out);
    }

    store.reset(seed)?;
    info!("Reset {} to {} employees", session.key, store.len());
    writeln!(out, "{} employees", store.len())?;
    Ok(0)
}

pub fn run_config(session: &Session, args: &ConfigArgs, out: &mut dyn Write) -> Result<i32> {
    if args.init {
        session.settings.save_to(&session.config_path)?;
        info!("Wrote settings to {}", session.config_path.display());
    }
    writeln!(out, "# {}", session.config_path.display())?;
    writeln!(out, "# data: {}", session.data_dir.join(format!("{}.json", session.key)).display())?;
    write!(out, "{}", toml::to_string_pretty(&session.settings).context("serialize settings")?)?;
    Ok(0)
}

/// Print what a workflow did. Saved and deleted are success; anything that
/// left the data untouched is exit code 1.
fn report(session: &Session, outcome: Outcome, out: &mut dyn Write) -> Result<i32> {
    match outcome {
        Outcome::Saved(employee) => {
            writeln!(out, "{}", employee_detail(&employee, session.locale))?;
            Ok(0)
        }
        Outcome::Deleted(count) => {
            writeln!(out, "{}: {count}", session.locale.translate(Message::Delete))?;
            Ok(0)
        }
        Outcome::Rejected(issues) => {
            eprintln!("{}", issue_table(&issues, session.locale));
            Ok(1)
        }
        Outcome::Cancelled => {
            eprintln!("{}", session.locale.translate(Message::Cancel));
            Ok(1)
        }
        Outcome::NotFound(id) => {
            eprintln!("no employee with id {id}");
            Ok(1)
        }
    }
}
