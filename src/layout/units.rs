//! Millimetre to CSS-pixel conversion

/// CSS reference pixels per millimetre (96 px/inch over 25.4 mm/inch)
pub const PX_PER_MM: f32 = 96.0 / 25.4;

/// A4 page height in millimetres
pub const A4_HEIGHT_MM: f32 = 297.0;

/// A4 page width in millimetres
pub const A4_WIDTH_MM: f32 = 210.0;

/// Convert a physical length in millimetres to CSS pixels.
///
/// Defined for every finite input, including zero and negative values;
/// page geometry callers are expected to pass non-negative lengths.
pub fn mm_to_px(mm: f32) -> f32 {
    mm * PX_PER_MM
}
