//! Persistent settings store
//!
//! The core never touches files directly: every operation is handed a
//! [`Store`] and reads the lists it needs fresh at the start. Writes are
//! plain read-modify-write with no compare-and-swap, so two surfaces racing
//! on the same key resolve as last-write-wins.

mod file;
mod memory;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::color::ColorItem;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Global key holding the user-curated palette
pub const PREDEFINED_COLORS: &str = "predefinedColors";

/// Global key holding the most-recently-used list
pub const RECENT_COLORS: &str = "recentColors";

/// Workspace key holding the color customization map
pub const COLOR_CUSTOMIZATIONS: &str = "workbench.colorCustomizations";

/// Entry inside the customization map that colors the title bar
pub const TITLE_BAR_ACTIVE_BACKGROUND: &str = "titleBar.activeBackground";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Settings file is not a JSON object: {0}")]
    NotAnObject(String),
    #[error("Unexpected value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("No workspace settings available")]
    NoWorkspace,
}

/// Configuration scope a key lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// User-level settings shared by every workspace
    Global,
    /// Settings of the currently open workspace
    Workspace,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Workspace => write!(f, "workspace"),
        }
    }
}

/// Key-value settings store injected into every core operation
#[async_trait]
pub trait Store: Send + Sync {
    /// Read a key. `Ok(None)` when the key is not set.
    async fn get(&self, scope: Scope, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write a key. `None` removes the key entirely.
    async fn set(&self, scope: Scope, key: &str, value: Option<Value>) -> Result<(), StoreError>;

    /// Whether a workspace is open for [`Scope::Workspace`] access
    fn has_workspace(&self) -> bool;
}

/// Read a global color list, treating an unset key as empty
pub async fn read_colors<S: Store + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Vec<ColorItem>, StoreError> {
    match store.get(Scope::Global, key).await? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value).map_err(|e| StoreError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Persist a global color list
pub async fn write_colors<S: Store + ?Sized>(
    store: &S,
    key: &str,
    colors: &[ColorItem],
) -> Result<(), StoreError> {
    let value = serde_json::to_value(colors)?;
    tracing::debug!(key, count = colors.len(), "writing color list");
    store.set(Scope::Global, key, Some(value)).await
}

/// Read the workspace color customization map, empty when unset
pub async fn read_customizations<S: Store + ?Sized>(
    store: &S,
) -> Result<Map<String, Value>, StoreError> {
    match store.get(Scope::Workspace, COLOR_CUSTOMIZATIONS).await? {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(StoreError::InvalidValue {
            key: COLOR_CUSTOMIZATIONS.to_string(),
            reason: format!("expected an object, found {}", other),
        }),
    }
}

/// Persist the workspace color customization map
///
/// An empty map removes the key instead of storing `{}`.
pub async fn write_customizations<S: Store + ?Sized>(
    store: &S,
    map: Map<String, Value>,
) -> Result<(), StoreError> {
    let value = if map.is_empty() {
        None
    } else {
        Some(Value::Object(map))
    };
    store.set(Scope::Workspace, COLOR_CUSTOMIZATIONS, value).await
}
