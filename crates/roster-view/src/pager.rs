//! Compact page-number list.

use std::fmt;

/// Pages shown in full when there are at most this many.
const SHOW_ALL_UP_TO: usize = 7;

/// One slot of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Pages to show for `current` out of `total`.
///
/// Up to seven pages are listed in full. Beyond that the first and last
/// pages are always shown, with the pages next to `current` in between and
/// an ellipsis standing in for each skipped run.
pub fn page_list(total: usize, current: usize) -> Vec<PageItem> {
    if total <= SHOW_ALL_UP_TO {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut out = vec![PageItem::Page(1)];
    if current > 4 {
        out.push(PageItem::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    out.extend((start..=end).map(PageItem::Page));
    if current.saturating_add(3) < total {
        out.push(PageItem::Ellipsis);
    }
    out.push(PageItem::Page(total));
    out
}
