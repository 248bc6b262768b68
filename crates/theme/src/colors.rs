use plotters::style::{RGBAColor, RGBColor};

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE:    Self = Self { r: 0xff, g: 0xff, b: 0xff, a: 0xff }; // #ffffff
    pub const DARK:     Self = Self { r: 0x26, g: 0x26, b: 0x26, a: 0xff }; // #262626
    pub const BLUE:     Self = Self { r: 0x1f, g: 0x77, b: 0xb4, a: 0xff }; // #1f77b4
    pub const ORANGE:   Self = Self { r: 0xff, g: 0x7f, b: 0x0e, a: 0xff }; // #ff7f0e

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: 0xff,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    /// Opaque [`RGBColor`] for plotters, dropping alpha.
    #[inline]
    pub fn to_rgb(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }

    /// [`RGBAColor`] for plotters, alpha scaled to `[0, 1]`.
    #[inline]
    pub fn to_rgba(self) -> RGBAColor {
        RGBAColor(self.r, self.g, self.b, self.a as f64 / 255.0)
    }

    /// Return a copy with the alpha channel set to `alpha` (`0.0 – 1.0`).
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#1f77b4"), Some(Color::BLUE));
        assert_eq!(
            Color::from_hex("ff7f0e80"),
            Some(Color { a: 0x80, ..Color::ORANGE })
        );
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn half_alpha() {
        let c = Color::BLUE.with_alpha(0.5);
        assert_eq!(c.a, 128);
        assert!((c.to_rgba().3 - 128.0 / 255.0).abs() < 1e-9);
    }
}
