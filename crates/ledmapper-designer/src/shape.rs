//! Shape modes and the small direction enums used by actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Active automatic-mapping strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    /// Manual mapping only
    #[default]
    None,
    /// Ring of cells around the grid center
    Circle,
    /// Grid perimeter
    Square,
    /// Outline traced from an image
    Custom,
}

impl fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Circle => write!(f, "Circle"),
            Self::Square => write!(f, "Square"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

impl FromStr for ShapeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "manual" => Ok(Self::None),
            "circle" | "ring" => Ok(Self::Circle),
            "square" | "rectangle" => Ok(Self::Square),
            "custom" | "traced" => Ok(Self::Custom),
            _ => Err(format!("Unknown shape mode: {}", s)),
        }
    }
}

/// Direction for shifting the LED sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Head LED moves to the tail
    Clockwise,
    /// Tail LED moves to the head
    AntiClockwise,
}

/// Arrow-key step for the threshold input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Up,
    Down,
}
