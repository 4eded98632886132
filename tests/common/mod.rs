//! Common test utilities

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use projcolor::prompt::{Confirm, Prompt};
use projcolor::store::{FileStore, Scope, Store, StoreError};
use serde_json::Value;
use tempfile::TempDir;

/// Temporary git repository acting as an open workspace
pub struct TestWorkspace {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new workspace with an empty git repository
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("project");
        std::fs::create_dir_all(&path).expect("Failed to create workspace dir");
        git2::Repository::init(&path).expect("Failed to init repo");
        Self { dir, path }
    }

    /// Workspace settings file
    pub fn settings_path(&self) -> PathBuf {
        self.path.join(".vscode").join("settings.json")
    }

    /// Global settings file, kept outside the workspace
    pub fn global_path(&self) -> PathBuf {
        self.dir.path().join("global").join("settings.json")
    }

    /// File store over both settings files
    pub fn store(&self) -> FileStore {
        FileStore::new(self.global_path(), Some(self.settings_path()))
    }

    pub fn write_settings(&self, value: &Value) {
        write_json(&self.settings_path(), value);
    }

    pub fn read_settings(&self) -> Value {
        read_json(&self.settings_path())
    }

    pub fn read_global(&self) -> Value {
        read_json(&self.global_path())
    }

    /// Get the workspace path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn write_json(path: &Path, value: &Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read_json(path: &Path) -> Value {
    let content = std::fs::read_to_string(path).expect("settings file should exist");
    serde_json::from_str(&content).unwrap()
}

/// Answers every prompt the same way and remembers what was asked
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.answer
    }
}

/// Store whose global scope rejects writes
pub struct ReadOnlyGlobal<S> {
    pub inner: S,
}

#[async_trait]
impl<S: Store> Store for ReadOnlyGlobal<S> {
    async fn get(&self, scope: Scope, key: &str) -> Result<Option<Value>, StoreError> {
        self.inner.get(scope, key).await
    }

    async fn set(&self, scope: Scope, key: &str, value: Option<Value>) -> Result<(), StoreError> {
        match scope {
            Scope::Global => Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "global settings are read-only",
            ))),
            Scope::Workspace => self.inner.set(scope, key, value).await,
        }
    }

    fn has_workspace(&self) -> bool {
        self.inner.has_workspace()
    }
}
