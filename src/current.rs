//! Derives the currently applied color from workspace state
//!
//! Nothing here is stored on its own: the hex comes from the workspace
//! customization map and the display name from the two color lists. Read
//! failures of any kind fold into "no color" rather than surfacing.

use serde_json::Value;

use crate::color::ColorItem;
use crate::store::{self, Store, PREDEFINED_COLORS, RECENT_COLORS, TITLE_BAR_ACTIVE_BACKGROUND};

/// Label shown when the workspace has no title bar color
pub const DEFAULT_COLOR_NAME: &str = "Default";

/// Title bar state of the workspace
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColorState {
    #[default]
    NoColorSet,
    ColorSet(String),
}

impl ColorState {
    pub fn hex(&self) -> Option<&str> {
        match self {
            ColorState::NoColorSet => None,
            ColorState::ColorSet(hex) => Some(hex.as_str()),
        }
    }
}

impl From<Option<String>> for ColorState {
    fn from(hex: Option<String>) -> Self {
        match hex {
            Some(hex) => ColorState::ColorSet(hex),
            None => ColorState::NoColorSet,
        }
    }
}

/// Snapshot handed back to UI surfaces after every operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentColor {
    pub hex: Option<String>,
    pub name: String,
}

impl CurrentColor {
    /// Read the current hex and resolve its display name
    pub async fn resolve<S: Store + ?Sized>(store: &S) -> Self {
        let hex = current_color(store).await;
        let name = match &hex {
            Some(hex) => {
                let recent = read_or_empty(store, RECENT_COLORS).await;
                let palette = read_or_empty(store, PREDEFINED_COLORS).await;
                name_for(hex, &palette, &recent)
            }
            None => DEFAULT_COLOR_NAME.to_string(),
        };
        Self { hex, name }
    }

    pub fn state(&self) -> ColorState {
        ColorState::from(self.hex.clone())
    }
}

/// Hex stored in the workspace title bar entry, if any
pub async fn current_color<S: Store + ?Sized>(store: &S) -> Option<String> {
    if !store.has_workspace() {
        return None;
    }

    let map = match store::read_customizations(store).await {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!("could not read workspace colors: {}", e);
            return None;
        }
    };

    match map.get(TITLE_BAR_ACTIVE_BACKGROUND) {
        Some(Value::String(hex)) if !hex.is_empty() => Some(hex.clone()),
        _ => None,
    }
}

/// Display name of the current color, or [`DEFAULT_COLOR_NAME`]
pub async fn current_color_name<S: Store + ?Sized>(store: &S) -> String {
    CurrentColor::resolve(store).await.name
}

/// Name of the first entry matching `hex`, recent list first
///
/// Falls back to the raw hex when neither list knows the color.
pub fn name_for(hex: &str, palette: &[ColorItem], recent: &[ColorItem]) -> String {
    recent
        .iter()
        .chain(palette)
        .find(|item| item.has_color(hex))
        .map(|item| item.name.clone())
        .unwrap_or_else(|| hex.to_string())
}

async fn read_or_empty<S: Store + ?Sized>(store: &S, key: &str) -> Vec<ColorItem> {
    store::read_colors(store, key).await.unwrap_or_else(|e| {
        tracing::warn!(key, "could not read color list: {}", e);
        Vec::new()
    })
}
