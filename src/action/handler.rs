use crate::apply::{ResetOutcome, TitleBar};
use crate::current::CurrentColor;
use crate::error::{Error, Result};
use crate::palette::PaletteManager;
use crate::prompt::{Confirm, Prompt};
use crate::recent::RecentManager;
use crate::store::Store;

use super::{Notification, Request, Response};

/// Runs requests against the store and reports back
///
/// Errors never escape `handle`: each one becomes a [`Notification`], and
/// the response always carries the freshly derived current color.
pub struct RequestHandler<'a, S: Store + ?Sized, C: Confirm + ?Sized> {
    store: &'a S,
    confirm: &'a C,
}

impl<'a, S: Store + ?Sized, C: Confirm + ?Sized> RequestHandler<'a, S, C> {
    pub fn new(store: &'a S, confirm: &'a C) -> Self {
        Self { store, confirm }
    }

    /// Handle a request
    pub async fn handle(&self, request: Request) -> Response {
        tracing::debug!(?request, "handling request");

        let confirmed = match prompt_for(&request) {
            Some(prompt) => {
                let confirmed = self.confirm.confirm(&prompt).await;
                if !confirmed {
                    tracing::debug!(message = %prompt.message, "confirmation declined");
                }
                confirmed
            }
            None => true,
        };

        let notification = if confirmed {
            let is_reset = matches!(request, Request::Reset);
            match self.execute(request).await {
                Ok(notification) => notification,
                Err(e) => Some(failure(e, is_reset)),
            }
        } else {
            None
        };

        Response {
            notification,
            current: CurrentColor::resolve(self.store).await,
        }
    }

    async fn execute(&self, request: Request) -> Result<Option<Notification>> {
        let palette = PaletteManager::new(self.store);
        let recent = RecentManager::new(self.store);

        let notification = match request {
            // Workspace color
            Request::Apply(item) => {
                TitleBar::new(self.store).apply(&item).await?;
                Notification::info(format!("Project color changed to \"{}\"", item.name))
            }
            Request::Reset => match TitleBar::new(self.store).reset().await? {
                ResetOutcome::Cleared => Notification::info("Color reset to default"),
                ResetOutcome::AlreadyDefault => {
                    Notification::info("Color is already set to default")
                }
            },

            // Palette
            Request::Add { name, color } => {
                let item = palette.add(&name, &color).await?;
                Notification::info(format!("Added new color: \"{}\"", item.name))
            }
            Request::Edit { original, updated } => {
                let message = format!(
                    "Color updated: \"{}\" → \"{}\"",
                    original.name, updated.name
                );
                palette.edit(&original, updated).await?;
                Notification::info(message)
            }
            Request::Delete(item) => {
                palette.delete(&item).await?;
                Notification::info(format!("Deleted color: \"{}\"", item.name))
            }

            // Recent colors
            Request::EditRecent { original, updated } => {
                let message = format!(
                    "Saved color updated: \"{}\" → \"{}\"",
                    original.name, updated.name
                );
                recent.edit(&original, updated).await?;
                Notification::info(message)
            }
            Request::DeleteRecent(item) => {
                recent.delete(&item).await?;
                Notification::info(format!("Deleted saved color: \"{}\"", item.name))
            }
            Request::ClearRecent => {
                recent.clear().await?;
                Notification::info("Saved colors cleared")
            }

            Request::Refresh => return Ok(None),
        };

        Ok(Some(notification))
    }
}

/// Confirmation required before running `request`, if any
pub fn prompt_for(request: &Request) -> Option<Prompt> {
    if !request.is_destructive() {
        return None;
    }
    match request {
        Request::Delete(item) => Some(Prompt::delete_color(&item.name)),
        Request::DeleteRecent(item) => Some(Prompt::delete_recent(&item.name)),
        Request::ClearRecent => Some(Prompt::clear_recent()),
        Request::Reset => Some(Prompt::reset()),
        Request::Apply(_)
        | Request::Add { .. }
        | Request::Edit { .. }
        | Request::EditRecent { .. }
        | Request::Refresh => None,
    }
}

fn failure(err: Error, is_reset: bool) -> Notification {
    match err {
        Error::Duplicate { .. } | Error::NotFound(_) | Error::UnknownColor(_) => {
            Notification::warning(err.to_string())
        }
        Error::Validation(_) | Error::NoWorkspace => Notification::error(err.to_string()),
        _ => {
            tracing::error!("failed to update settings: {}", err);
            if is_reset {
                Notification::error(format!("Error resetting settings: {}", err))
            } else {
                Notification::error("Error saving settings")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorItem;
    use crate::store::StoreError;

    #[test]
    fn test_prompt_matches_destructive_requests() {
        let item = ColorItem::new("Ocean", "#1E90FF");
        let requests = [
            Request::Apply(item.clone()),
            Request::Reset,
            Request::Delete(item.clone()),
            Request::DeleteRecent(item),
            Request::ClearRecent,
            Request::Refresh,
        ];
        for request in requests {
            assert_eq!(prompt_for(&request).is_some(), request.is_destructive());
        }
    }

    #[test]
    fn test_failure_duplicate_is_warning() {
        let n = failure(
            Error::Duplicate {
                name: "Ocean".to_string(),
                color: "#1E90FF".to_string(),
            },
            false,
        );
        assert_eq!(n, Notification::warning("Color with this name or code already exists"));
    }

    #[test]
    fn test_failure_store_error_is_generic() {
        let err = Error::Store(StoreError::NoWorkspace);
        assert_eq!(failure(err, false), Notification::error("Error saving settings"));
    }

    #[test]
    fn test_failure_store_error_on_reset_includes_cause() {
        let err = Error::Store(StoreError::NotAnObject("settings.json".to_string()));
        let n = failure(err, true);
        assert!(n.message.starts_with("Error resetting settings: "));
        assert!(n.message.contains("settings.json"));
    }
}
