//! Quick-pick menu model
//!
//! Builds the entries a picker shows; drawing them is up to the caller.

use crate::color::{Brightness, ColorItem};

pub const RECENT_SECTION: &str = "Recent Colors";
pub const PREDEFINED_SECTION: &str = "Predefined Colors";

/// One row of the quick pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickPickItem {
    OpenPanel,
    CreateColor,
    ResetToDefault,
    Separator(&'static str),
    Recent(ColorItem),
    ClearRecent,
    Predefined(ColorItem),
}

impl QuickPickItem {
    pub fn label(&self) -> String {
        match self {
            QuickPickItem::OpenPanel => "Open Visual Interface".to_string(),
            QuickPickItem::CreateColor => "Create New Color".to_string(),
            QuickPickItem::ResetToDefault => "Reset to Default".to_string(),
            QuickPickItem::Separator(title) => title.to_string(),
            QuickPickItem::Recent(item) | QuickPickItem::Predefined(item) => item.name.clone(),
            QuickPickItem::ClearRecent => "Clear Recent Colors".to_string(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            QuickPickItem::OpenPanel => "Fullscreen interface with palette",
            QuickPickItem::CreateColor => "Add custom color",
            QuickPickItem::ResetToDefault => "Remove color settings",
            QuickPickItem::Separator(_) => "",
            QuickPickItem::Recent(item) | QuickPickItem::Predefined(item) => item.color.as_str(),
            QuickPickItem::ClearRecent => "Remove all saved colors",
        }
    }

    /// The color this row applies, if it is a color row
    pub fn color(&self) -> Option<&ColorItem> {
        match self {
            QuickPickItem::Recent(item) | QuickPickItem::Predefined(item) => Some(item),
            _ => None,
        }
    }
}

/// Rows in display order
///
/// The recent section, and its clear action, only appear when the list is
/// non-empty. The predefined section header is always shown.
pub fn quick_pick_items(palette: &[ColorItem], recent: &[ColorItem]) -> Vec<QuickPickItem> {
    let mut items = vec![
        QuickPickItem::OpenPanel,
        QuickPickItem::CreateColor,
        QuickPickItem::ResetToDefault,
    ];

    if !recent.is_empty() {
        items.push(QuickPickItem::Separator(RECENT_SECTION));
        items.extend(recent.iter().cloned().map(QuickPickItem::Recent));
        items.push(QuickPickItem::ClearRecent);
    }

    items.push(QuickPickItem::Separator(PREDEFINED_SECTION));
    items.extend(palette.iter().cloned().map(QuickPickItem::Predefined));

    items
}

/// First color called `name`, recent list first
pub fn find_by_name<'a>(
    palette: &'a [ColorItem],
    recent: &'a [ColorItem],
    name: &str,
) -> Option<&'a ColorItem> {
    recent.iter().chain(palette).find(|item| item.name == name)
}

/// Palette split into dark, medium and bright, order preserved
///
/// Entries whose hex cannot be parsed are left out of every group.
pub fn group_by_brightness(
    palette: &[ColorItem],
) -> (Vec<&ColorItem>, Vec<&ColorItem>, Vec<&ColorItem>) {
    let mut dark = Vec::new();
    let mut medium = Vec::new();
    let mut bright = Vec::new();

    for item in palette {
        match item.brightness() {
            Some(Brightness::Dark) => dark.push(item),
            Some(Brightness::Medium) => medium.push(item),
            Some(Brightness::Bright) => bright.push(item),
            None => {}
        }
    }

    (dark, medium, bright)
}
