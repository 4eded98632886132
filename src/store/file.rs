use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Scope, Store, StoreError};

/// Store backed by two JSON settings files
///
/// The global scope lives in a user-level file, the workspace scope in the
/// workspace's own settings file (`.vscode/settings.json` by default). Each
/// write rewrites the whole object so sibling keys survive untouched.
///
/// Files are parsed as strict JSON. A settings file with comments or
/// trailing commas fails with [`StoreError::Json`] and is never rewritten,
/// since a rewrite would drop the comments.
#[derive(Debug, Clone)]
pub struct FileStore {
    global_path: PathBuf,
    workspace_path: Option<PathBuf>,
}

impl FileStore {
    pub fn new(global_path: impl Into<PathBuf>, workspace_path: Option<PathBuf>) -> Self {
        Self {
            global_path: global_path.into(),
            workspace_path,
        }
    }

    /// Path of the user-level settings file
    pub fn global_path(&self) -> &Path {
        &self.global_path
    }

    /// Path of the workspace settings file, if a workspace is open
    pub fn workspace_path(&self) -> Option<&Path> {
        self.workspace_path.as_deref()
    }

    fn path(&self, scope: Scope) -> Result<&Path, StoreError> {
        match scope {
            Scope::Global => Ok(&self.global_path),
            Scope::Workspace => self.workspace_path.as_deref().ok_or(StoreError::NoWorkspace),
        }
    }
}

async fn read_object(path: &Path) -> Result<Map<String, Value>, StoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str(&content)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject(path.display().to_string())),
    }
}

async fn write_object(path: &Path, map: &Map<String, Value>) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let mut content = serde_json::to_string_pretty(map)?;
    content.push('\n');
    tokio::fs::write(path, content).await?;
    Ok(())
}

#[async_trait]
impl Store for FileStore {
    async fn get(&self, scope: Scope, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path(scope)?;
        tracing::debug!(%scope, key, path = %path.display(), "reading setting");
        let mut map = read_object(path).await?;
        Ok(map.remove(key))
    }

    async fn set(&self, scope: Scope, key: &str, value: Option<Value>) -> Result<(), StoreError> {
        let path = self.path(scope)?;
        let mut map = read_object(path).await?;

        match value {
            Some(value) => {
                map.insert(key.to_string(), value);
            }
            None => {
                if map.remove(key).is_none() {
                    return Ok(());
                }
            }
        }

        tracing::debug!(%scope, key, path = %path.display(), "writing setting");
        write_object(path, &map).await
    }

    fn has_workspace(&self) -> bool {
        self.workspace_path.is_some()
    }
}
