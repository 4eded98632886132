use serde_json::Value;

use crate::color::ColorItem;
use crate::current::ColorState;
use crate::error::{Error, Result};
use crate::recent::RecentManager;
use crate::store::{self, Store, TITLE_BAR_ACTIVE_BACKGROUND};

/// Outcome of a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The title bar entry was removed
    Cleared,
    /// Nothing was set; no write happened
    AlreadyDefault,
}

/// Applies and clears the workspace title bar color
pub struct TitleBar<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> TitleBar<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Write `item.color` into the workspace customization map
    ///
    /// Sibling entries in the map are kept. Once the write lands the item is
    /// pushed onto the recency list; a failure there is logged and does not
    /// undo the apply.
    pub async fn apply(&self, item: &ColorItem) -> Result<ColorState> {
        if !self.store.has_workspace() {
            return Err(Error::NoWorkspace);
        }

        let mut map = store::read_customizations(self.store).await?;
        map.insert(
            TITLE_BAR_ACTIVE_BACKGROUND.to_string(),
            Value::String(item.color.clone()),
        );
        store::write_customizations(self.store, map).await?;
        tracing::info!(name = %item.name, color = %item.color, "applied title bar color");

        if let Err(e) = RecentManager::new(self.store).record_use(item).await {
            tracing::warn!(item = %item, "failed to update recent colors: {}", e);
        }

        Ok(ColorState::ColorSet(item.color.clone()))
    }

    /// Remove the title bar entry, dropping the whole map once it is empty
    pub async fn reset(&self) -> Result<ResetOutcome> {
        if !self.store.has_workspace() {
            return Err(Error::NoWorkspace);
        }

        let mut map = store::read_customizations(self.store).await?;
        let had_color = match map.remove(TITLE_BAR_ACTIVE_BACKGROUND) {
            Some(Value::String(hex)) => !hex.is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        };

        if !had_color {
            return Ok(ResetOutcome::AlreadyDefault);
        }

        store::write_customizations(self.store, map).await?;
        tracing::info!("reset title bar color");
        Ok(ResetOutcome::Cleared)
    }
}
