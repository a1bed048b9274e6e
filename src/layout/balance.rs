//! Post-pass that keeps the trailing page from looking abandoned

use crate::layout::paginate::Page;

/// Move one row from the end of the second-to-last page to the front of
/// the last page when the last page holds fewer than `min_last_page_rows`
/// rows.
///
/// Runs once per pagination, not in a loop: one borrowed row is a visual
/// nudge, never a rebalancing. Partitions with fewer than two pages are
/// left untouched. The donor page may itself drop below the minimum, or
/// even empty out when it held a single row; the move happens regardless.
pub fn balance_last_page(pages: &mut Vec<Page>, min_last_page_rows: usize) {
    if pages.len() < 2 {
        return;
    }
    let last = pages.len() - 1;
    if pages[last].row_count() >= min_last_page_rows {
        return;
    }
    if let Some(row) = pages[last - 1].rows.pop() {
        pages[last].rows.insert(0, row);
    }
}
