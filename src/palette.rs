use crate::color::ColorItem;
use crate::error::{Error, Result};
use crate::store::{self, Store, PREDEFINED_COLORS};

/// CRUD over the user-curated palette
pub struct PaletteManager<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> PaletteManager<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Current palette, in insertion order
    pub async fn list(&self) -> Result<Vec<ColorItem>> {
        Ok(store::read_colors(self.store, PREDEFINED_COLORS).await?)
    }

    /// Append a new color
    ///
    /// Rejected when the name is empty, the hex is malformed, or an entry
    /// already uses the same name or the same hex (either is enough).
    pub async fn add(&self, name: &str, hex: &str) -> Result<ColorItem> {
        let item = ColorItem::new(name, hex);
        item.validate()?;

        let mut colors = self.list().await?;
        if colors
            .iter()
            .any(|existing| existing.same_color(&item) || existing.name == item.name)
        {
            return Err(Error::Duplicate {
                name: item.name,
                color: item.color,
            });
        }

        colors.push(item.clone());
        store::write_colors(self.store, PREDEFINED_COLORS, &colors).await?;
        tracing::info!(name = %item.name, color = %item.color, "added palette color");
        Ok(item)
    }

    /// Replace the entry exactly matching `original` in place
    ///
    /// No duplicate check runs against the other entries.
    pub async fn edit(&self, original: &ColorItem, updated: ColorItem) -> Result<()> {
        let mut colors = self.list().await?;
        replace_entry(&mut colors, original, updated)?;
        store::write_colors(self.store, PREDEFINED_COLORS, &colors).await?;
        tracing::info!(original = %original, "edited palette color");
        Ok(())
    }

    /// Remove every entry exactly matching `item`
    ///
    /// Callers confirm with the user first; this deletes unconditionally.
    pub async fn delete(&self, item: &ColorItem) -> Result<usize> {
        let mut colors = self.list().await?;
        let removed = remove_entries(&mut colors, item)?;
        store::write_colors(self.store, PREDEFINED_COLORS, &colors).await?;
        tracing::info!(item = %item, removed, "deleted palette color");
        Ok(removed)
    }
}

/// Swap the first exact `(name, color)` match for `updated`, keeping its index
///
/// `updated` must itself be a valid item.
pub(crate) fn replace_entry(
    colors: &mut [ColorItem],
    original: &ColorItem,
    updated: ColorItem,
) -> Result<()> {
    updated.validate()?;
    let slot = colors
        .iter_mut()
        .find(|existing| **existing == *original)
        .ok_or_else(|| Error::NotFound(original.clone()))?;
    *slot = updated;
    Ok(())
}

/// Drop all exact `(name, color)` matches, returning how many went
pub(crate) fn remove_entries(colors: &mut Vec<ColorItem>, item: &ColorItem) -> Result<usize> {
    let before = colors.len();
    colors.retain(|existing| existing != item);
    match before - colors.len() {
        0 => Err(Error::NotFound(item.clone())),
        removed => Ok(removed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<ColorItem> {
        vec![
            ColorItem::new("Ocean", "#1E90FF"),
            ColorItem::new("Forest", "#228B22"),
            ColorItem::new("Ocean", "#1E90FF"),
        ]
    }

    #[test]
    fn test_replace_entry_keeps_index() {
        let mut colors = items();
        replace_entry(
            &mut colors,
            &ColorItem::new("Forest", "#228B22"),
            ColorItem::new("Pine", "#01796F"),
        )
        .unwrap();
        assert_eq!(colors[1], ColorItem::new("Pine", "#01796F"));
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_replace_entry_requires_exact_match() {
        let mut colors = items();
        let result = replace_entry(
            &mut colors,
            &ColorItem::new("Forest", "#228b22"),
            ColorItem::new("Pine", "#01796F"),
        );
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(colors, items());
    }

    #[test]
    fn test_replace_entry_rejects_invalid_update() {
        let mut colors = items();
        for updated in [
            ColorItem::new("", "#01796F"),
            ColorItem::new("Pine", "01796F"),
        ] {
            let result = replace_entry(&mut colors, &ColorItem::new("Forest", "#228B22"), updated);
            assert!(matches!(result, Err(Error::Validation(_))));
        }
        assert_eq!(colors, items());
    }

    #[test]
    fn test_remove_entries_removes_all_exact_copies() {
        let mut colors = items();
        let removed = remove_entries(&mut colors, &ColorItem::new("Ocean", "#1E90FF")).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(colors, vec![ColorItem::new("Forest", "#228B22")]);
    }

    #[test]
    fn test_remove_entries_missing() {
        let mut colors = items();
        let result = remove_entries(&mut colors, &ColorItem::new("Ocean", "#000000"));
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(colors.len(), 3);
    }
}
