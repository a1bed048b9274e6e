//! Invoice-Pager: a pagination core for printable invoice documents
//!
//! This crate decides which line items land on which A4 page:
//! - Greedy capacity-budgeted packing (rows are never split across pages)
//! - Distinct budgets for first, middle and last pages
//! - Measured mode fed by real rendered heights, and a fixed
//!   rows-per-page mode that bypasses measurement entirely
//! - A last-page balancer that keeps the final page from holding a
//!   stranded row or two

pub mod document;
pub mod layout;
pub mod measure;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPager;

// Re-export primary types
pub use document::LineItem;
pub use layout::{
    balance_last_page, estimate_row_height_px, mm_to_px, paginate_by_heights,
    paginate_by_heights_with_extras, paginate_fixed, paginate_items, Extras, Page,
    PageCapacities, PagePosition, PagerConfig,
};
pub use measure::{ApplyOutcome, FixtureMeasurements, MeasurementSnapshot, MeasurementSource};

/// How the partition is derived from the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Real rendered heights, fed back by a measurement pass
    #[default]
    Measured,
    /// A caller-chosen row count per page; heights and measurement are
    /// bypassed entirely
    Fixed { per_page: usize },
}

impl PaginationMode {
    /// Mode flag as exchanged with the host
    pub fn as_str(&self) -> &'static str {
        match self {
            PaginationMode::Measured => "measured",
            PaginationMode::Fixed { .. } => "fixed",
        }
    }

    /// Whether this mode consumes measurement snapshots
    pub fn uses_measurement(&self) -> bool {
        matches!(self, PaginationMode::Measured)
    }
}

/// The pagination orchestrator: owns the inputs, versions them, and
/// rebuilds the partition from scratch whenever any of them change.
pub struct Pager {
    items: Vec<LineItem>,
    config: PagerConfig,
    mode: PaginationMode,
    doc_version: u64,
    snapshot: Option<MeasurementSnapshot>,
    pages: Vec<Page>,
    partition_dirty: bool,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PagerConfig::default())
    }
}

impl Pager {
    /// Create a pager with no items
    pub fn new(config: PagerConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
            mode: PaginationMode::Measured,
            doc_version: 0,
            snapshot: None,
            pages: Vec::new(),
            partition_dirty: true,
        }
    }

    /// Create a pager over an initial item list
    pub fn with_items(items: Vec<LineItem>, config: PagerConfig) -> Self {
        let mut pager = Self::new(config);
        pager.set_items(items);
        pager
    }

    /// Replace the item list. Any previously applied measurement no
    /// longer matches; the partition is rebuilt on the next
    /// [`update`](Self::update).
    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
        self.bump_version();
    }

    /// Replace the page geometry
    pub fn set_config(&mut self, config: PagerConfig) {
        self.config = config;
        self.bump_version();
    }

    /// Switch pagination mode. A no-op when the mode is unchanged.
    pub fn set_mode(&mut self, mode: PaginationMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.bump_version();
    }

    fn bump_version(&mut self) {
        self.doc_version += 1;
        self.partition_dirty = true;
    }

    fn has_current_snapshot(&self) -> bool {
        self.snapshot
            .as_ref()
            .map(|s| s.doc_version == self.doc_version)
            .unwrap_or(false)
    }

    /// Whether the host should run a measurement pass before the
    /// partition can use real heights. Always false in fixed mode.
    pub fn needs_measurement(&self) -> bool {
        self.mode.uses_measurement() && !self.has_current_snapshot()
    }

    /// Feed a measurement snapshot back into the pager.
    ///
    /// A snapshot measured against inputs that have since changed, or
    /// one arriving while fixed mode is active, is discarded.
    pub fn apply_measurements(&mut self, snapshot: MeasurementSnapshot) -> ApplyOutcome {
        if !self.mode.uses_measurement() || snapshot.doc_version != self.doc_version {
            return ApplyOutcome::Stale;
        }
        self.snapshot = Some(snapshot);
        self.partition_dirty = true;
        ApplyOutcome::Applied
    }

    /// Pull-style measurement for hosts that can measure synchronously
    pub fn measure_with(&mut self, source: &mut impl MeasurementSource) -> ApplyOutcome {
        if !self.mode.uses_measurement() {
            return ApplyOutcome::Stale;
        }
        match source.snapshot(&self.items, self.doc_version) {
            Some(snapshot) => self.apply_measurements(snapshot),
            None => ApplyOutcome::Stale,
        }
    }

    /// Rebuild the partition if any input changed since the last build.
    ///
    /// Every rebuild starts from scratch; pages are never patched
    /// incrementally. Returns whether a rebuild happened.
    pub fn update(&mut self) -> bool {
        if !self.partition_dirty {
            return false;
        }

        let mut pages = match self.mode {
            PaginationMode::Fixed { per_page } => paginate_fixed(self.items.len(), per_page),
            PaginationMode::Measured => match &self.snapshot {
                Some(snapshot) if snapshot.doc_version == self.doc_version => {
                    let heights: Vec<f32> = (0..self.items.len())
                        .map(|index| snapshot.row_height(index))
                        .collect();
                    paginate_by_heights_with_extras(&heights, &self.config, snapshot.extras())
                }
                // no settled measurement yet: estimate, so something
                // sensible renders before the first feedback pass
                _ => paginate_items(&self.items, &self.config),
            },
        };

        balance_last_page(&mut pages, self.config.min_last_page_rows);

        self.pages = pages;
        self.partition_dirty = false;
        true
    }

    /// The current partition
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages in the current partition
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Items of one page, in row order. Out-of-range pages read as empty.
    pub fn page_items(&self, page_index: usize) -> Vec<&LineItem> {
        self.pages
            .get(page_index)
            .map(|page| {
                page.rows
                    .iter()
                    .filter_map(|&row| self.items.get(row))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Position of a page within the current partition
    pub fn page_position(&self, page_index: usize) -> PagePosition {
        PagePosition::classify(page_index, self.pages.len())
    }

    /// The item list
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The page geometry
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// The active pagination mode
    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    /// Version of the current inputs; measurement snapshots must echo it
    pub fn doc_version(&self) -> u64 {
        self.doc_version
    }

    /// Measured notes height, when a current snapshot holds one. The
    /// caller flows the notes block against the last page's leftover
    /// space.
    pub fn notes_height_px(&self) -> Option<f32> {
        self.snapshot
            .as_ref()
            .filter(|s| s.doc_version == self.doc_version)
            .map(|s| s.notes_block_px)
    }
}
