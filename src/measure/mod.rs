//! Measurement contract between the pager and its host
//!
//! The packing algorithm is pure; everything DOM-shaped sits behind this
//! boundary. A host renders an off-screen copy of the document at the
//! real target width, waits for layout to settle (browsers defer past two
//! nested animation frames), reads the heights and hands them over as one
//! snapshot.

use crate::document::LineItem;
use crate::layout::{Extras, EXTRA_BOTTOM_MARGIN_PX};
use serde::{Deserialize, Serialize};

/// A settled-layout reading of the rendered document.
///
/// `doc_version` ties the snapshot to the exact inputs it was measured
/// from. The pager discards snapshots whose version no longer matches,
/// so a slow, out-of-order measurement can never clobber a newer
/// partition. Staleness is decided by input identity alone, never by
/// wall-clock age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSnapshot {
    /// Version of the item list and mode this snapshot was measured against
    pub doc_version: u64,
    /// Rendered height of each row, in row order
    pub row_heights: Vec<f32>,
    /// Combined height of the address panels above the table on page one
    #[serde(default)]
    pub header_block_px: f32,
    /// Height of the totals summary block
    #[serde(default)]
    pub totals_block_px: f32,
    /// Height of the payment-details block
    #[serde(default)]
    pub payment_block_px: f32,
    /// Height of the notes block, reported to the caller but kept out of
    /// the bottom reservation
    #[serde(default)]
    pub notes_block_px: f32,
    /// Capture time in milliseconds, diagnostic only
    #[serde(default)]
    pub taken_at_ms: u64,
}

impl MeasurementSnapshot {
    /// Snapshot with all block heights at zero
    pub fn new(doc_version: u64, row_heights: Vec<f32>) -> Self {
        Self {
            doc_version,
            row_heights,
            header_block_px: 0.0,
            totals_block_px: 0.0,
            payment_block_px: 0.0,
            notes_block_px: 0.0,
            taken_at_ms: current_timestamp(),
        }
    }

    /// Height of row `index`. Missing or non-finite readings take no room.
    pub fn row_height(&self, index: usize) -> f32 {
        match self.row_heights.get(index) {
            Some(height) if height.is_finite() => height.max(0.0),
            _ => 0.0,
        }
    }

    /// Compose the capacity reservations this snapshot implies.
    ///
    /// The top extra is handed over undamped (damping is capacity policy,
    /// not measurement). The bottom extra is totals plus payment plus a
    /// small safety margin; notes stay out of it and flow against the
    /// last page's leftover space instead.
    pub fn extras(&self) -> Extras {
        Extras {
            top_px: self.header_block_px.max(0.0),
            bottom_px: self.totals_block_px.max(0.0)
                + self.payment_block_px.max(0.0)
                + EXTRA_BOTTOM_MARGIN_PX,
        }
    }
}

/// What became of a snapshot fed to the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The snapshot matched the pager's current inputs and was stored
    Applied,
    /// The snapshot was measured against inputs that have since changed,
    /// or arrived while measurement is bypassed, and was discarded
    Stale,
}

impl ApplyOutcome {
    /// Whether the snapshot was stored
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied)
    }
}

/// A host capability that produces settled-layout measurements.
///
/// Implementations must only return a snapshot once layout has stabilized
/// for the given items. Browser hosts defer past the next two animation
/// frames before reading; headless renderers may measure synchronously.
/// `None` means no settled reading is available yet.
pub trait MeasurementSource {
    /// Measure the rendered items, tagging the snapshot with `doc_version`
    fn snapshot(&mut self, items: &[LineItem], doc_version: u64) -> Option<MeasurementSnapshot>;
}

/// Canned measurements for tests and headless hosts
#[derive(Debug, Clone, Default)]
pub struct FixtureMeasurements {
    /// Per-row heights handed out as-is
    pub row_heights: Vec<f32>,
    /// Address panel height
    pub header_block_px: f32,
    /// Totals block height
    pub totals_block_px: f32,
    /// Payment block height
    pub payment_block_px: f32,
    /// Notes block height
    pub notes_block_px: f32,
}

impl FixtureMeasurements {
    /// Fixture where every one of `rows` rows measures the same height
    pub fn uniform(row_height_px: f32, rows: usize) -> Self {
        Self {
            row_heights: vec![row_height_px; rows],
            ..Default::default()
        }
    }
}

impl MeasurementSource for FixtureMeasurements {
    fn snapshot(&mut self, _items: &[LineItem], doc_version: u64) -> Option<MeasurementSnapshot> {
        let mut snapshot = MeasurementSnapshot::new(doc_version, self.row_heights.clone());
        snapshot.header_block_px = self.header_block_px;
        snapshot.totals_block_px = self.totals_block_px;
        snapshot.payment_block_px = self.payment_block_px;
        snapshot.notes_block_px = self.notes_block_px;
        Some(snapshot)
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_height_normalization() {
        let snapshot = MeasurementSnapshot::new(1, vec![30.0, f32::NAN, -5.0]);
        assert_eq!(snapshot.row_height(0), 30.0);
        assert_eq!(snapshot.row_height(1), 0.0);
        assert_eq!(snapshot.row_height(2), 0.0);
        // out of range reads as zero
        assert_eq!(snapshot.row_height(99), 0.0);
    }

    #[test]
    fn test_extras_composition() {
        let mut snapshot = MeasurementSnapshot::new(1, vec![]);
        snapshot.header_block_px = 120.0;
        snapshot.totals_block_px = 80.0;
        snapshot.payment_block_px = 60.0;
        snapshot.notes_block_px = 200.0;
        let extras = snapshot.extras();
        // top passes through undamped
        assert_eq!(extras.top_px, 120.0);
        // bottom = totals + payment + margin; notes excluded
        assert_eq!(extras.bottom_px, 80.0 + 60.0 + EXTRA_BOTTOM_MARGIN_PX);
    }

    #[test]
    fn test_extras_negative_blocks_read_as_zero() {
        let mut snapshot = MeasurementSnapshot::new(1, vec![]);
        snapshot.header_block_px = -40.0;
        snapshot.totals_block_px = -1.0;
        let extras = snapshot.extras();
        assert_eq!(extras.top_px, 0.0);
        assert_eq!(extras.bottom_px, EXTRA_BOTTOM_MARGIN_PX);
    }

    #[test]
    fn test_fixture_source_tags_version() {
        let mut fixture = FixtureMeasurements::uniform(32.0, 4);
        fixture.totals_block_px = 90.0;
        let snapshot = fixture.snapshot(&[], 7).unwrap();
        assert_eq!(snapshot.doc_version, 7);
        assert_eq!(snapshot.row_heights, vec![32.0; 4]);
        assert_eq!(snapshot.totals_block_px, 90.0);
    }

    #[test]
    fn test_snapshot_serde_camel_case() {
        let json = r#"{
            "docVersion": 3,
            "rowHeights": [28.0, 44.0],
            "headerBlockPx": 150.5,
            "totalsBlockPx": 72.0,
            "paymentBlockPx": 48.0,
            "notesBlockPx": 0.0
        }"#;
        let snapshot: MeasurementSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.doc_version, 3);
        assert_eq!(snapshot.row_heights.len(), 2);
        assert_eq!(snapshot.header_block_px, 150.5);
        // taken_at_ms defaults when the host omits it
        assert_eq!(snapshot.taken_at_ms, 0);
    }

    #[test]
    fn test_apply_outcome_flag() {
        assert!(ApplyOutcome::Applied.is_applied());
        assert!(!ApplyOutcome::Stale.is_applied());
    }
}
