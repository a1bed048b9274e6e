//! Pagination core
//!
//! Pure functions from row heights and page geometry to a page partition.
//! Nothing in here touches the DOM; measured heights arrive through the
//! `measure` module.

mod balance;
mod capacity;
mod estimate;
mod paginate;
mod units;

pub use balance::balance_last_page;
pub use capacity::{
    Extras, PageCapacities, PagePosition, PagerConfig, EXTRA_BOTTOM_MARGIN_PX, EXTRA_TOP_DAMPING,
    PAGE_FOOTER_RESERVE_PX, PAGE_PADDING_PX,
};
pub use estimate::{
    estimate_row_height_px, ROW_BASE_HEIGHT_PX, ROW_CHARS_PER_LINE, ROW_LINE_HEIGHT_PX,
};
pub use paginate::{
    paginate_by_heights, paginate_by_heights_with_extras, paginate_fixed, paginate_items, Page,
};
pub use units::{mm_to_px, A4_HEIGHT_MM, A4_WIDTH_MM, PX_PER_MM};
