//! Unit conversion utilities.
//!
//! DrawingML measures every position and extent in English Metric Units (EMU).
//! Deck code works in inches and points and converts at the call site.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMUs, truncating toward zero.
///
/// # Examples
///
/// ```rust
/// use pipeline_decks::common::unit::inches;
///
/// assert_eq!(inches(1.0), 914_400);
/// assert_eq!(inches(7.5), 6_858_000);
/// ```
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64) as i64
}

/// Convert points to EMUs, truncating toward zero.
#[inline]
pub fn pt(value: f64) -> i64 {
    (value * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Font size in points to the hundredths-of-a-point value used by `a:rPr/@sz`.
#[inline]
pub fn font_size_to_centipoints(size: f64) -> u32 {
    (size * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(0.5), 457_200);
        // 13.33 * 914400 is not exactly representable; truncated
        assert_eq!(inches(13.33), (13.33_f64 * 914_400.0) as i64);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt(1.0), 12_700);
        assert_eq!(pt(1.25), 15_875);
        assert_eq!(pt(2.0), 25_400);
        assert_eq!(emu_to_pt(pt(14.0)), 14.0);
    }

    #[test]
    fn test_round_trip_inches() {
        assert_eq!(emu_to_inches(inches(2.0)), 2.0);
    }

    #[test]
    fn test_font_size() {
        assert_eq!(font_size_to_centipoints(24.0), 2400);
        assert_eq!(font_size_to_centipoints(12.5), 1250);
    }
}
