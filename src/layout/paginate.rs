//! Greedy packing of rows into pages

use crate::document::LineItem;
use crate::layout::capacity::{Extras, PageCapacities, PagePosition, PagerConfig};
use crate::layout::estimate::estimate_row_height_px;
use smallvec::SmallVec;

/// One page of the partition: the original indices of the rows placed on
/// it, contiguous and ascending. Pages never reorder rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Original row indices, in input order
    pub rows: SmallVec<[usize; 16]>,
}

impl Page {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows on this page
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the page holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First original row index on this page
    pub fn first_row(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    /// Last original row index on this page
    pub fn last_row(&self) -> Option<usize> {
        self.rows.last().copied()
    }
}

/// Missing or impossible heights never abort a run; they take no room
fn normalize_height(height: f32) -> f32 {
    if height.is_finite() {
        height.max(0.0)
    } else {
        0.0
    }
}

/// Shared forward scan. `capacity_of` is keyed by the index of the page
/// currently being filled. A page closes only when the next row would
/// overflow it AND it already holds at least one row, so a row taller
/// than any capacity still lands alone on its own page instead of
/// looping forever.
fn pack<F>(heights: &[f32], capacity_of: F) -> Vec<Page>
where
    F: Fn(usize) -> f32,
{
    let mut pages = Vec::new();
    let mut current = Page::new();
    let mut used = 0.0f32;

    for (index, &height) in heights.iter().enumerate() {
        let height = normalize_height(height);
        let capacity = capacity_of(pages.len());

        if used + height > capacity && !current.is_empty() {
            pages.push(std::mem::take(&mut current));
            used = 0.0;
        }

        current.rows.push(index);
        used += height;
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}

/// Pack rows into pages against a single uniform capacity.
///
/// Negative capacities are treated as zero, which degenerates to one row
/// per page. Empty input yields an empty partition.
pub fn paginate_by_heights(heights: &[f32], capacity_px: f32) -> Vec<Page> {
    let capacity_px = capacity_px.max(0.0);
    pack(heights, |_| capacity_px)
}

/// Pack rows with per-position budgets derived from measured extras.
///
/// The forward scan cannot know which page will end up last, so it only
/// ever applies the first- and middle-page budgets; the last-page budget
/// matters to the caller placing the bottom blocks, not to the scan.
pub fn paginate_by_heights_with_extras(
    heights: &[f32],
    config: &PagerConfig,
    extras: Extras,
) -> Vec<Page> {
    let capacities = PageCapacities::with_extras(config, extras);
    pack(heights, |page_index| {
        capacities.for_position(PagePosition::during_scan(page_index))
    })
}

/// Pack items using estimated heights, for when no measurement is
/// available yet. Capacity is the uniform page budget from the config.
pub fn paginate_items(items: &[LineItem], config: &PagerConfig) -> Vec<Page> {
    let heights: Vec<f32> = items
        .iter()
        .map(|item| estimate_row_height_px(item.wrap_text()))
        .collect();
    paginate_by_heights(&heights, config.uniform_capacity_px())
}

/// Chunk `row_count` rows into pages of exactly `per_page`, remainder on
/// the final page. Heights play no part. A `per_page` of zero is read as
/// one row per page.
pub fn paginate_fixed(row_count: usize, per_page: usize) -> Vec<Page> {
    let per_page = per_page.max(1);
    let mut pages = Vec::with_capacity(row_count.div_ceil(per_page));
    let mut start = 0;
    while start < row_count {
        let end = (start + per_page).min(row_count);
        let mut page = Page::new();
        page.rows.extend(start..end);
        pages.push(page);
        start = end;
    }
    pages
}
