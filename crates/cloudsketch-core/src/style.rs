//! Edge line styles and diagram flow direction.
//!
//! Both map one-to-one onto Graphviz keywords:
//!
//! | Rust value | Graphviz attribute |
//! |------------|--------------------|
//! | [`LineStyle::Bold`] | `style=bold` |
//! | [`LineStyle::Dashed`] | `style=dashed` |
//! | [`LineStyle::Dotted`] | `style=dotted` |
//! | [`Direction::LeftRight`] | `rankdir=LR` |

use std::fmt;

/// Visual pattern of an edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Plain continuous line (default)
    #[default]
    Solid,
    /// Thicker continuous line
    Bold,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Returns the Graphviz `style` value, or `None` for a plain solid line.
    pub fn to_dot_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Bold => Some("bold"),
            Self::Dashed => Some("dashed"),
            Self::Dotted => Some("dotted"),
        }
    }
}

/// Direction in which ranks of a diagram are laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    TopBottom,
    BottomTop,
    LeftRight,
    RightLeft,
}

impl Direction {
    /// Returns the Graphviz `rankdir` value.
    pub fn to_dot_value(self) -> &'static str {
        match self {
            Self::TopBottom => "TB",
            Self::BottomTop => "BT",
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_dot_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_dot_value() {
        assert_eq!(LineStyle::default().to_dot_value(), None);
        assert_eq!(LineStyle::Bold.to_dot_value(), Some("bold"));
        assert_eq!(LineStyle::Dashed.to_dot_value(), Some("dashed"));
        assert_eq!(LineStyle::Dotted.to_dot_value(), Some("dotted"));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::default().to_string(), "TB");
        assert_eq!(Direction::RightLeft.to_string(), "RL");
    }
}
