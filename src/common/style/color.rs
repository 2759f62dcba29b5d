use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// DrawingML writes it as `<a:srgbClr val="RRGGBB"/>`.
///
/// # Examples
///
/// ```rust
/// use pipeline_decks::common::RGBColor;
///
/// let lavender = RGBColor::new(235, 232, 255);
/// assert_eq!(lavender.to_hex(), "EBE8FF");
///
/// let blue = RGBColor::from_hex("#0b63ce").unwrap();
/// assert_eq!(blue, RGBColor::new(0x0b, 0x63, 0xce));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `RRGGBB` with or without a leading `#`, in either case.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an upper-case hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(
            RGBColor::from_hex("70e2f8"),
            Some(RGBColor::new(0x70, 0xe2, 0xf8))
        );
        assert_eq!(RGBColor::from_hex("#FFFFFF"), Some(RGBColor::WHITE));
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("ÿÿÿ"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::new(90, 90, 90).to_string(), "#5A5A5A");
    }
}
