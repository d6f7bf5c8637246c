//! Page-number window for pagination controls.

use std::fmt;

/// Number of pages shown in full before the window starts eliding.
pub const WINDOW_SIZE: usize = 5;

/// One entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number (1-based).
    Page(usize),
    /// A gap of one or more hidden pages.
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str("…"),
        }
    }
}

/// Builds the page-number window for `current` out of `total` pages.
///
/// - `total <= 5`: every page.
/// - `current <= 3`: `1 2 3 4 5 … total`.
/// - `current >= total - 2`: `1 … total-4 … total`.
/// - otherwise: `1 … current-1 current current+1 … total`.
///
/// `current` is clamped into `1..=total` first.
///
/// # Example
///
/// ```
/// use quote_table::table::{page_window, PageItem::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_window(5, 10),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= WINDOW_SIZE {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut items = Vec::with_capacity(WINDOW_SIZE + 2);

    if current <= 3 {
        items.extend((1..=WINDOW_SIZE).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if current >= total - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total - 4..=total).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::PageItem::Ellipsis;
    use super::PageItem::Page;
    use super::*;

    fn render(items: &[PageItem]) -> String {
        items.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_small_totals_show_every_page() {
        assert!(page_window(1, 0).is_empty());
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        for current in 1..=4 {
            assert_eq!(page_window(current, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
        }
        assert_eq!(render(&page_window(3, 5)), "1 2 3 4 5");
    }

    #[test]
    fn test_head_of_range() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(render(&page_window(3, 10)), "1 2 3 4 5 … 10");
    }

    #[test]
    fn test_middle_of_range() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(render(&page_window(4, 10)), "1 … 3 4 5 … 10");
        assert_eq!(render(&page_window(7, 10)), "1 … 6 7 8 … 10");
    }

    #[test]
    fn test_tail_of_range() {
        assert_eq!(
            page_window(9, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(render(&page_window(8, 10)), "1 … 6 7 8 9 10");
        assert_eq!(render(&page_window(10, 10)), "1 … 6 7 8 9 10");
    }

    #[test]
    fn test_six_pages_follow_the_rule_literally() {
        assert_eq!(render(&page_window(3, 6)), "1 2 3 4 5 … 6");
        assert_eq!(render(&page_window(4, 6)), "1 … 2 3 4 5 6");
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 10), page_window(1, 10));
        assert_eq!(page_window(99, 10), page_window(10, 10));
    }
}
