//! Colour type and shading.

use std::fmt;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Darken by a percentage of the current HSL lightness.
    pub fn darken(self, percent: f32) -> Self {
        use palette::{Hsl, IntoColor, Srgb};

        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );

        let mut hsl: Hsl = rgb.into_color();
        hsl.lightness -= hsl.lightness * (percent / 100.0);
        hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

        let rgb_out: Srgb<f32> = hsl.into_color();
        Self::new(
            (rgb_out.red * 255.0).round() as u8,
            (rgb_out.green * 255.0).round() as u8,
            (rgb_out.blue * 255.0).round() as u8,
            self.a,
        )
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#FF000080");
    }

    #[test]
    fn test_darken() {
        let grey = Colour::rgb(200, 200, 200);
        let darker = grey.darken(50.0);

        assert!(darker.r < grey.r);
        assert_eq!(darker.r, darker.g);
        assert_eq!(darker.a, 255);
    }

    #[test]
    fn test_darken_keeps_black_and_alpha() {
        assert_eq!(Colour::BLACK.darken(40.0), Colour::BLACK);
        assert_eq!(Colour::new(255, 0, 0, 10).darken(0.0), Colour::new(255, 0, 0, 10));
    }

    #[test]
    fn test_constants() {
        assert!(Colour::TRANSPARENT.is_transparent());
        assert_eq!(Colour::WHITE.to_rgba(), [255, 255, 255, 255]);
    }
}
