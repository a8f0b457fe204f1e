//! Color handling for diagram edges and node fills
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate and renders it in the `#rrggbb` form Graphviz expects.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

use crate::error::DiagramError;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"darkgreen"`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidColor`] when the string is not a valid
    /// CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use cloudsketch_core::color::Color;
    ///
    /// let blue = Color::new("blue").unwrap();
    /// assert_eq!(blue.to_hex(), "#0000ff");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, DiagramError> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| DiagramError::InvalidColor {
                value: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// Returns the color as a Graphviz-compatible hex string.
    ///
    /// Opaque colors render as `#rrggbb`; translucent colors carry a fourth
    /// alpha byte (`#rrggbbaa`).
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(matches!(
            invalid,
            Err(DiagramError::InvalidColor { ref value, .. }) if value == "not-a-color"
        ));
    }

    #[test]
    fn test_named_colors_to_hex() {
        assert_eq!(Color::new("blue").unwrap().to_hex(), "#0000ff");
        assert_eq!(Color::new("darkgreen").unwrap().to_hex(), "#006400");
        assert_eq!(Color::new("gray").unwrap().to_hex(), "#808080");
        assert_eq!(Color::new("orange").unwrap().to_hex(), "#ffa500");
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(Color::new("#7b8894").unwrap().to_hex(), "#7b8894");
    }

    #[test]
    fn test_translucent_color_keeps_alpha() {
        let color = Color::new("rgba(255, 0, 0, 0)").unwrap();
        assert_eq!(color.to_hex(), "#ff000000");
    }

    #[test]
    fn test_color_default_and_display() {
        let color = Color::default();
        assert_eq!(color.to_string(), "#000000");
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2: Color = "red".parse().unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
