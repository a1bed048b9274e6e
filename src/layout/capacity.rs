//! Capacity budgets for first, middle and last pages

use crate::layout::units::{mm_to_px, A4_HEIGHT_MM};
use serde::{Deserialize, Serialize};

/// Fixed top + bottom content padding of every page, in pixels
pub const PAGE_PADDING_PX: f32 = 48.0;

/// Room reserved on the last page for the closing footer line
pub const PAGE_FOOTER_RESERVE_PX: f32 = 40.0;

/// Share of the measured top extra charged against the first page;
/// address panels rarely fill their full layout box
pub const EXTRA_TOP_DAMPING: f32 = 0.6;

/// Safety margin added on top of the measured bottom blocks
pub const EXTRA_BOTTOM_MARGIN_PX: f32 = 10.0;

/// Page geometry for a pagination run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerConfig {
    /// Physical page height in millimetres
    pub page_height_mm: f32,
    /// Nominal header height in millimetres
    pub header_height_mm: f32,
    /// Nominal footer height in millimetres
    pub footer_height_mm: f32,
    /// Smallest acceptable row count on a trailing page (see the
    /// last-page balancer)
    pub min_last_page_rows: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_height_mm: A4_HEIGHT_MM,
            header_height_mm: 25.0,
            footer_height_mm: 20.0,
            min_last_page_rows: 2,
        }
    }
}

impl PagerConfig {
    /// Page height in pixels
    pub fn page_height_px(&self) -> f32 {
        mm_to_px(self.page_height_mm)
    }

    /// Usable content height when no measured extras are in play:
    /// page height minus the nominal header and footer
    pub fn uniform_capacity_px(&self) -> f32 {
        (self.page_height_px() - mm_to_px(self.header_height_mm) - mm_to_px(self.footer_height_mm))
            .max(0.0)
    }
}

/// Measured pixel reservations that shrink the first and last pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    /// Height taken by the address panels above the table on page one
    pub top_px: f32,
    /// Height the totals and payment blocks need below the table on the
    /// final page
    pub bottom_px: f32,
}

impl Extras {
    /// No reservations at all
    pub const NONE: Extras = Extras {
        top_px: 0.0,
        bottom_px: 0.0,
    };

    /// Create extras from raw pixel heights
    pub fn new(top_px: f32, bottom_px: f32) -> Self {
        Self { top_px, bottom_px }
    }
}

/// Position of a page within the partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePosition {
    First,
    Middle,
    Last,
}

impl PagePosition {
    /// Classification available during the forward packing scan, where
    /// the last page cannot be known yet: page 0 is `First`, every page
    /// after it is `Middle`.
    pub fn during_scan(page_index: usize) -> Self {
        if page_index == 0 {
            PagePosition::First
        } else {
            PagePosition::Middle
        }
    }

    /// Full classification once the page count is known. A sole page
    /// classifies as `First`; callers placing bottom blocks should also
    /// check `page_index + 1 == page_count` themselves.
    pub fn classify(page_index: usize, page_count: usize) -> Self {
        if page_index == 0 {
            PagePosition::First
        } else if page_index + 1 >= page_count {
            PagePosition::Last
        } else {
            PagePosition::Middle
        }
    }
}

/// Usable content-height budgets, one per page position.
/// All three are clamped at zero so pathological geometry can never
/// produce a negative budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCapacities {
    /// Budget for page 0, after the damped top extra
    pub first: f32,
    /// Budget for every page between the first and the last
    pub middle: f32,
    /// Budget the last page is left with once the bottom blocks land on it
    pub last: f32,
}

impl PageCapacities {
    /// Compute the three budgets from page geometry and measured extras
    pub fn with_extras(config: &PagerConfig, extras: Extras) -> Self {
        let page_px = config.page_height_px();
        Self {
            first: (page_px - PAGE_PADDING_PX - extras.top_px * EXTRA_TOP_DAMPING).max(0.0),
            middle: (page_px - PAGE_PADDING_PX).max(0.0),
            last: (page_px - PAGE_PADDING_PX - PAGE_FOOTER_RESERVE_PX - extras.bottom_px).max(0.0),
        }
    }

    /// Budget for a page position
    pub fn for_position(&self, position: PagePosition) -> f32 {
        match position {
            PagePosition::First => self.first,
            PagePosition::Middle => self.middle,
            PagePosition::Last => self.last,
        }
    }
}
