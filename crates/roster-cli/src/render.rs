//! Terminal output built on `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use chrono::NaiveDate;
use roster_model::{Employee, Locale, Message};
use roster_validate::Issue;
use roster_view::{Layout, ListPage};

/// How dates are shown (stored dates use ISO format).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

const TABLE_WIDTH: u16 = 140;

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Employees as one row each, in list order.
pub fn employee_table(rows: &[&Employee], locale: Locale) -> Table {
    let t = |message| locale.translate(message);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(t(Message::FirstName)),
        header_cell(t(Message::LastName)),
        header_cell(t(Message::DateOfEmployment)),
        header_cell(t(Message::DateOfBirth)),
        header_cell(t(Message::Phone)),
        header_cell(t(Message::Email)),
        header_cell(t(Message::Department)),
        header_cell(t(Message::Position)),
        header_cell("ID"),
    ]);
    apply_table_style(&mut table);
    for employee in rows {
        table.add_row(vec![
            Cell::new(&employee.first_name),
            Cell::new(&employee.last_name),
            Cell::new(format_date(employee.date_of_employment)),
            Cell::new(format_date(employee.date_of_birth)),
            Cell::new(&employee.phone),
            Cell::new(&employee.email),
            Cell::new(employee.department.label(locale)),
            Cell::new(employee.position.label(locale)),
            dim_cell(&employee.id),
        ]);
    }
    table
}

/// One employee as a two-column card, fields side by side the way the
/// card view pairs them.
pub fn employee_card(employee: &Employee, locale: Locale) -> Table {
    let t = |message| locale.translate(message);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&employee.full_name()),
        Cell::new(""),
        dim_cell(&employee.id),
        Cell::new(""),
    ]);
    apply_table_style(&mut table);
    let pairs = [
        (
            (Message::FirstName, employee.first_name.clone()),
            (Message::LastName, employee.last_name.clone()),
        ),
        (
            (Message::DateOfEmployment, format_date(employee.date_of_employment)),
            (Message::DateOfBirth, format_date(employee.date_of_birth)),
        ),
        (
            (Message::Phone, employee.phone.clone()),
            (Message::Email, employee.email.clone()),
        ),
        (
            (Message::Department, employee.department.label(locale)),
            (Message::Position, employee.position.label(locale)),
        ),
    ];
    for ((left_label, left), (right_label, right)) in pairs {
        table.add_row(vec![
            label_cell(t(left_label)),
            Cell::new(left),
            label_cell(t(right_label)),
            Cell::new(right),
        ]);
    }
    table
}

/// Every field of one employee, one per line.
pub fn employee_detail(employee: &Employee, locale: Locale) -> Table {
    let t = |message| locale.translate(message);
    let mut table = Table::new();
    apply_table_style(&mut table);
    let fields = [
        ("ID".to_string(), employee.id.to_string()),
        (t(Message::FirstName).to_string(), employee.first_name.clone()),
        (t(Message::LastName).to_string(), employee.last_name.clone()),
        (
            t(Message::DateOfEmployment).to_string(),
            format_date(employee.date_of_employment),
        ),
        (
            t(Message::DateOfBirth).to_string(),
            format_date(employee.date_of_birth),
        ),
        (t(Message::Phone).to_string(), employee.phone.clone()),
        (t(Message::Email).to_string(), employee.email.clone()),
        (
            t(Message::Department).to_string(),
            employee.department.label(locale),
        ),
        (
            t(Message::Position).to_string(),
            employee.position.label(locale),
        ),
    ];
    for (label, value) in fields {
        table.add_row(vec![header_cell(&label), Cell::new(value)]);
    }
    table
}

/// Validation issues with the field they belong to.
pub fn issue_table(issues: &[Issue], locale: Locale) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for issue in issues {
        let field = locale.translate(issue.field().label());
        table.add_row(vec![
            Cell::new(field).add_attribute(Attribute::Bold),
            Cell::new(issue.message(locale)).fg(Color::Red),
        ]);
    }
    table
}

/// Page status line, e.g. `Page 2/3 (13)  1 [2] 3`.
pub fn page_footer(page: &ListPage<'_>) -> String {
    format!(
        "Page {}/{} ({})  {}",
        page.page,
        page.total_pages,
        page.total_matches,
        page.pager_text()
    )
}

/// Everything `roster list` prints for one page.
pub fn list_output(page: &ListPage<'_>, layout: Layout, locale: Locale) -> String {
    let mut out = String::new();
    out.push_str(locale.translate(Message::EmployeeList));
    out.push('\n');
    if page.is_empty() {
        out.push_str(locale.translate(Message::NoResults));
        out.push('\n');
        return out;
    }
    match layout {
        Layout::Table => {
            out.push_str(&employee_table(&page.rows, locale).to_string());
            out.push('\n');
        }
        Layout::Cards => {
            for employee in &page.rows {
                out.push_str(&employee_card(employee, locale).to_string());
                out.push('\n');
            }
        }
    }
    out.push_str(&page_footer(page));
    out.push('\n');
    out
}
