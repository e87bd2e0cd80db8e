//! 1-based page arithmetic.

use std::ops::Range;

/// Rows per page on the list screen.
pub const DEFAULT_PER_PAGE: usize = 6;

/// Number of pages for `count` rows. Never less than one, so an empty
/// result still has a page to show.
pub fn total_pages(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page.max(1)).max(1)
}

/// Pull `page` back into `1..=total`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Index range of `page` within `count` rows: `[(page-1)*per_page, page*per_page)`,
/// cut off at `count`.
pub fn page_range(page: usize, per_page: usize, count: usize) -> Range<usize> {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(count);
    let end = start.saturating_add(per_page).min(count);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }

    #[test]
    fn last_page_holds_remainder() {
        assert_eq!(page_range(3, 6, 13), 12..13);
        assert_eq!(page_range(1, 6, 13), 0..6);
    }

    #[test]
    fn out_of_range_page_is_empty_not_panicking() {
        assert!(page_range(9, 6, 13).is_empty());
        assert_eq!(page_range(0, 6, 13), 0..6);
    }

    #[test]
    fn clamp_keeps_page_in_bounds() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
