//! List screen state.

use std::fmt;
use std::str::FromStr;

use roster_model::{Employee, EmployeeId};
use serde::{Deserialize, Serialize};

use crate::filter::filter_employees;
use crate::pager::{PageItem, page_list};
use crate::pagination::{DEFAULT_PER_PAGE, clamp_page, page_range, total_pages};
use crate::selection::Selection;

/// How rows are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Table,
    Cards,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Cards => "cards",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "cards" | "list" => Ok(Self::Cards),
            other => Err(format!("unknown layout '{other}' (expected table or cards)")),
        }
    }
}

/// Transient state of the employee list: search text, current page,
/// layout and selection.
///
/// The current page is only a request; [`ListView::render`] clamps it
/// against the filtered result and stores the clamped value back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    query: String,
    page: usize,
    per_page: usize,
    layout: Layout,
    selection: Selection,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl ListView {
    pub fn new(per_page: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            per_page: per_page.max(1),
            layout: Layout::default(),
            selection: Selection::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search text. Jumps back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Request a page. Values below 1 become 1; values past the end are
    /// clamped on the next render.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = clamp_page(self.page + 1, total_pages);
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Compute the visible page from the current collection.
    pub fn render<'a>(&mut self, employees: &'a [Employee]) -> ListPage<'a> {
        let matches = filter_employees(employees, &self.query);
        let total = total_pages(matches.len(), self.per_page);
        let page = clamp_page(self.page, total);
        if page != self.page {
            tracing::debug!(requested = self.page, clamped = page, "page out of range");
            self.page = page;
        }

        let range = page_range(page, self.per_page, matches.len());
        let total_matches = matches.len();
        let rows = matches[range].to_vec();

        ListPage {
            rows,
            page,
            total_pages: total,
            total_matches,
            pager: page_list(total, page),
        }
    }

    /// Header checkbox over the rows of `page`.
    pub fn toggle_all(&mut self, page: &ListPage<'_>, checked: bool) {
        self.selection.toggle_all(page.visible_ids(), checked);
    }
}

/// One rendered page of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<'a> {
    pub rows: Vec<&'a Employee>,
    /// 1-based, already clamped.
    pub page: usize,
    pub total_pages: usize,
    /// Rows across all pages that match the search.
    pub total_matches: usize,
    pub pager: Vec<PageItem>,
}

impl ListPage<'_> {
    /// Nothing matched the search.
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = &EmployeeId> {
        self.rows.iter().map(|employee| &employee.id)
    }

    /// Pager rendered as text, e.g. `1 … 4 5 6 … 10` with the current page
    /// in brackets.
    pub fn pager_text(&self) -> String {
        self.pager
            .iter()
            .map(|item| match item {
                PageItem::Page(page) if *page == self.page => format!("[{page}]"),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
