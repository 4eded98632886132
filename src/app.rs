use std::path::{Path, PathBuf};

use crate::action::{RequestHandler, Request, Response};
use crate::color::ColorItem;
use crate::config::{self, Config};
use crate::current::CurrentColor;
use crate::error::{Error, Result};
use crate::menu;
use crate::palette::PaletteManager;
use crate::prompt::{AssumeYes, Confirm, TerminalPrompt};
use crate::recent::RecentManager;
use crate::store::FileStore;
use crate::workspace;

/// Overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub workspace: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub assume_yes: bool,
}

/// Wires configuration, the settings files and the prompt together
pub struct App {
    store: FileStore,
    confirm: Box<dyn Confirm>,
}

impl App {
    /// Load configuration around `cwd` and build the application from it
    pub fn load(options: AppOptions, cwd: &Path) -> Result<Self> {
        let config = config::load_config_from(cwd)?;
        Self::new(&config, options, cwd)
    }

    /// Create a new application instance rooted at `cwd`
    pub fn new(config: &Config, options: AppOptions, cwd: &Path) -> Result<Self> {
        let global_path = options
            .store
            .or_else(|| config.store_path())
            .ok_or(Error::NoStorePath)?;

        let workspace_path = workspace::resolve(options.workspace.as_deref(), cwd)
            .map(|root| root.join(config.settings_file()));

        tracing::debug!(
            global = %global_path.display(),
            workspace = ?workspace_path,
            "using settings files"
        );

        let confirm: Box<dyn Confirm> = if options.assume_yes || !config.confirm() {
            Box::new(AssumeYes)
        } else {
            Box::new(TerminalPrompt)
        };

        Ok(Self {
            store: FileStore::new(global_path, workspace_path),
            confirm,
        })
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Handle a request
    pub async fn handle(&self, request: Request) -> Response {
        RequestHandler::new(&self.store, self.confirm.as_ref())
            .handle(request)
            .await
    }

    pub async fn current(&self) -> CurrentColor {
        CurrentColor::resolve(&self.store).await
    }

    pub async fn palette(&self) -> Result<Vec<ColorItem>> {
        PaletteManager::new(&self.store).list().await
    }

    pub async fn recent(&self) -> Result<Vec<ColorItem>> {
        RecentManager::new(&self.store).list().await
    }

    /// Look up a saved color by exact name, recent colors first
    pub async fn find_saved(&self, name: &str) -> Result<ColorItem> {
        let palette = self.palette().await?;
        let recent = self.recent().await?;
        menu::find_by_name(&palette, &recent, name)
            .cloned()
            .ok_or_else(|| Error::UnknownColor(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(dir: &TempDir) -> AppOptions {
        AppOptions {
            workspace: Some(dir.path().to_path_buf()),
            store: Some(dir.path().join("global.json")),
            assume_yes: true,
        }
    }

    #[test]
    fn test_settings_file_under_workspace() {
        let dir = TempDir::new().unwrap();
        let app = App::new(&Config::default(), options(&dir), dir.path()).unwrap();
        assert_eq!(
            app.store().workspace_path(),
            Some(dir.path().join(".vscode").join("settings.json").as_path())
        );
        assert_eq!(app.store().global_path(), dir.path().join("global.json"));
    }

    #[test]
    fn test_custom_settings_file() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            settings_file: Some("colors.json".to_string()),
            ..Default::default()
        };
        let app = App::new(&config, options(&dir), dir.path()).unwrap();
        assert_eq!(
            app.store().workspace_path(),
            Some(dir.path().join("colors.json").as_path())
        );
    }

    #[test]
    fn test_load_applies_local_config() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".projcolor");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "settings_file = \"colors.json\"\n",
        )
        .unwrap();

        let app = App::load(options(&dir), dir.path()).unwrap();
        assert_eq!(
            app.store().workspace_path(),
            Some(dir.path().join("colors.json").as_path())
        );
    }

    #[test]
    fn test_load_reports_bad_config() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".projcolor");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "confirm = \"maybe\"").unwrap();

        let result = App::load(options(&dir), dir.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_find_saved_unknown() {
        let dir = TempDir::new().unwrap();
        let app = App::new(&Config::default(), options(&dir), dir.path()).unwrap();
        let result = app.find_saved("Nope").await;
        assert!(matches!(result, Err(Error::UnknownColor(_))));
    }
}
