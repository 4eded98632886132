use crate::color::ColorItem;
use crate::error::Result;
use crate::palette::{remove_entries, replace_entry};
use crate::store::{self, Store, RECENT_COLORS};

/// Maximum number of entries kept in the recency list
pub const MAX_RECENT_COLORS: usize = 10;

/// Newest-first list of applied colors, unique by hex
pub struct RecentManager<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> RecentManager<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Current recency list, newest first
    pub async fn list(&self) -> Result<Vec<ColorItem>> {
        Ok(store::read_colors(self.store, RECENT_COLORS).await?)
    }

    /// Move `item` to the front, dropping any entry with the same hex
    pub async fn record_use(&self, item: &ColorItem) -> Result<()> {
        let mut colors = self.list().await?;
        push_front(&mut colors, item.clone());
        store::write_colors(self.store, RECENT_COLORS, &colors).await?;
        tracing::debug!(item = %item, len = colors.len(), "recorded recent color");
        Ok(())
    }

    /// Replace the entry exactly matching `original` in place
    pub async fn edit(&self, original: &ColorItem, updated: ColorItem) -> Result<()> {
        let mut colors = self.list().await?;
        replace_entry(&mut colors, original, updated)?;
        store::write_colors(self.store, RECENT_COLORS, &colors).await?;
        tracing::info!(original = %original, "edited recent color");
        Ok(())
    }

    /// Remove every entry exactly matching `item`
    pub async fn delete(&self, item: &ColorItem) -> Result<usize> {
        let mut colors = self.list().await?;
        let removed = remove_entries(&mut colors, item)?;
        store::write_colors(self.store, RECENT_COLORS, &colors).await?;
        tracing::info!(item = %item, removed, "deleted recent color");
        Ok(removed)
    }

    /// Empty the recency list
    pub async fn clear(&self) -> Result<()> {
        store::write_colors(self.store, RECENT_COLORS, &[]).await?;
        tracing::info!("cleared recent colors");
        Ok(())
    }
}

fn push_front(colors: &mut Vec<ColorItem>, item: ColorItem) {
    colors.retain(|existing| !existing.same_color(&item));
    colors.insert(0, item);
    colors.truncate(MAX_RECENT_COLORS);
}
