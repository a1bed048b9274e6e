//! WASM bindings for the pager

use crate::layout::PagerConfig;
use crate::measure::MeasurementSnapshot;
use crate::{LineItem, Pager, PaginationMode};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed pager wrapper
#[wasm_bindgen]
pub struct WasmPager {
    pager: Pager,
}

#[wasm_bindgen]
impl WasmPager {
    /// Create a pager with the default A4 geometry
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut pager = Pager::new(PagerConfig::default());
        // Initialize the partition for the empty item list
        pager.update();

        Self { pager }
    }

    /// Create a pager from a JSON config (camelCase `PagerConfig` keys:
    /// pageHeightMm, headerHeightMm, footerHeightMm, minLastPageRows).
    /// Falls back to the A4 default when the JSON does not parse.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Self {
        let config: PagerConfig = serde_json::from_str(config_json).unwrap_or_default();

        let mut pager = Pager::new(config);
        pager.update();

        Self { pager }
    }

    /// Replace the line items from a JSON array of camelCase `LineItem`
    /// objects. Returns false and leaves the items untouched when the
    /// JSON does not parse.
    #[wasm_bindgen(js_name = setItems)]
    pub fn set_items(&mut self, items_json: &str) -> bool {
        match serde_json::from_str::<Vec<LineItem>>(items_json) {
            Ok(items) => {
                self.pager.set_items(items);
                self.pager.update();
                true
            }
            Err(_) => false,
        }
    }

    /// Switch to measured mode (the default)
    #[wasm_bindgen(js_name = setMeasuredMode)]
    pub fn set_measured_mode(&mut self) {
        self.pager.set_mode(PaginationMode::Measured);
        self.pager.update();
    }

    /// Switch to fixed-count mode with the given rows per page
    #[wasm_bindgen(js_name = setFixedMode)]
    pub fn set_fixed_mode(&mut self, per_page: usize) {
        self.pager.set_mode(PaginationMode::Fixed { per_page });
        self.pager.update();
    }

    /// Whether the host should run a measurement pass: render the
    /// off-screen copy, wait for layout to settle, read the heights
    #[wasm_bindgen(js_name = needsMeasurement)]
    pub fn needs_measurement(&self) -> bool {
        self.pager.needs_measurement()
    }

    /// Feed a measurement snapshot as JSON (camelCase
    /// `MeasurementSnapshot` fields, `docVersion` echoing
    /// [`get_doc_version`](Self::get_doc_version)). Returns false when
    /// the JSON does not parse or the snapshot is stale.
    #[wasm_bindgen(js_name = applyMeasurements)]
    pub fn apply_measurements(&mut self, snapshot_json: &str) -> bool {
        match serde_json::from_str::<MeasurementSnapshot>(snapshot_json) {
            Ok(snapshot) => {
                let applied = self.pager.apply_measurements(snapshot).is_applied();
                if applied {
                    self.pager.update();
                }
                applied
            }
            Err(_) => false,
        }
    }

    /// Recompute the partition if inputs changed since the last build
    pub fn update(&mut self) -> bool {
        self.pager.update()
    }

    /// Version of the current inputs; echo it back in measurement
    /// snapshots
    #[wasm_bindgen(js_name = getDocVersion)]
    pub fn get_doc_version(&self) -> f64 {
        self.pager.doc_version() as f64
    }

    /// Active mode flag: "measured" or "fixed"
    #[wasm_bindgen(js_name = getMode)]
    pub fn get_mode(&self) -> String {
        self.pager.mode().as_str().to_string()
    }

    /// Get page count
    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.pager.page_count()
    }

    /// Row indices of one page as a typed array; empty for an
    /// out-of-range page
    #[wasm_bindgen(js_name = getPageRows)]
    pub fn get_page_rows(&self, page_index: usize) -> js_sys::Uint32Array {
        match self.pager.pages().get(page_index) {
            Some(page) => {
                let rows: Vec<u32> = page.rows.iter().map(|&row| row as u32).collect();
                js_sys::Uint32Array::from(rows.as_slice())
            }
            None => js_sys::Uint32Array::new_with_length(0),
        }
    }

    /// Full partition as JSON (`PartitionData`)
    #[wasm_bindgen(js_name = getPartition)]
    pub fn get_partition(&self) -> String {
        let partition = PartitionData::from_pager(&self.pager);
        serde_json::to_string(&partition).unwrap_or_else(|_| "null".to_string())
    }
}

impl Default for WasmPager {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable partition for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionData {
    pub doc_version: u64,
    pub mode: String,
    pub page_count: usize,
    pub pages: Vec<PageData>,
    pub notes_height_px: Option<f32>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub page_index: usize,
    pub rows: Vec<usize>,
}

impl PartitionData {
    fn from_pager(pager: &Pager) -> Self {
        let pages = pager
            .pages()
            .iter()
            .enumerate()
            .map(|(page_index, page)| PageData {
                page_index,
                rows: page.rows.iter().copied().collect(),
            })
            .collect();

        PartitionData {
            doc_version: pager.doc_version(),
            mode: pager.mode().as_str().to_string(),
            page_count: pager.page_count(),
            pages,
            notes_height_px: pager.notes_height_px(),
        }
    }
}
