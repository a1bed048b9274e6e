//! Line-item rows of the printable document

use serde::{Deserialize, Serialize};

/// One invoice line item: a row of the printable table.
///
/// The pager treats rows as opaque blocks that are never split across
/// pages. Quantity and unit price ride along for the render layer and
/// play no part in pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Display description; also the text the wrap heuristic measures
    pub description: String,
    /// Quantity in whatever unit the business layer uses
    #[serde(default)]
    pub quantity: f64,
    /// Price per unit, currency-agnostic
    #[serde(default)]
    pub unit_price: f64,
}

impl LineItem {
    /// Create an item with quantity and price left at zero
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            quantity: 0.0,
            unit_price: 0.0,
        }
    }

    /// Create a fully specified item
    pub fn with_amounts(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Text the row height estimator wraps
    pub fn wrap_text(&self) -> &str {
        &self.description
    }

    /// Quantity times unit price, for the totals column
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}
