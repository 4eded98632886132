//! Named colors and hex validation
//!
//! A [`ColorItem`] pairs a user-facing label with a `#RRGGBB` hex code.
//! Two items are the *same color* when their hex codes match
//! case-insensitively, and the *same entry* when both fields match exactly
//! (plain `==`).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named color as persisted in the palette and recency lists
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorItem {
    pub name: String,
    pub color: String,
}

impl ColorItem {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Check whether both items carry the same hex code, ignoring case
    pub fn same_color(&self, other: &ColorItem) -> bool {
        self.has_color(&other.color)
    }

    /// Check whether this item's hex code equals `hex`, ignoring case
    pub fn has_color(&self, hex: &str) -> bool {
        self.color.eq_ignore_ascii_case(hex)
    }

    /// Reject empty names and malformed hex codes
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::Validation("Color name cannot be empty".to_string()));
        }
        if !is_valid_hex(&self.color) {
            return Err(Error::Validation(format!(
                "Enter a valid hex color code (e.g., #007ACC), got: {}",
                self.color
            )));
        }
        Ok(())
    }

    /// Brightness bucket for display grouping
    pub fn brightness(&self) -> Option<Brightness> {
        classify_brightness(&self.color)
    }
}

impl std::fmt::Display for ColorItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

/// True iff `s` is `#` followed by exactly six hex digits
pub fn is_valid_hex(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

/// Display-only brightness bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brightness {
    Dark,
    Medium,
    Bright,
}

impl std::fmt::Display for Brightness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Brightness::Dark => write!(f, "Dark"),
            Brightness::Medium => write!(f, "Medium"),
            Brightness::Bright => write!(f, "Bright"),
        }
    }
}

/// Classify a hex code by luma `(299R + 587G + 114B) / 1000`
///
/// Dark below 100, bright from 180 up, medium in between. Returns `None`
/// for anything that is not a valid `#RRGGBB` code.
pub fn classify_brightness(hex: &str) -> Option<Brightness> {
    let (r, g, b) = parse_rgb(hex)?;

    // Scaled by 1000 so the thresholds compare exactly
    let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;

    Some(if luma < 100_000 {
        Brightness::Dark
    } else if luma < 180_000 {
        Brightness::Medium
    } else {
        Brightness::Bright
    })
}

/// Decode a valid `#RRGGBB` code into its channels
pub fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if !is_valid_hex(hex) {
        return None;
    }
    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
    Some((r, g, b))
}
