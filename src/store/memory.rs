use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{Scope, Store, StoreError};

/// In-process store, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    global: Mutex<HashMap<String, Value>>,
    workspace: Option<Mutex<HashMap<String, Value>>>,
}

impl MemoryStore {
    /// Store without an open workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with an empty workspace scope
    pub fn with_workspace() -> Self {
        Self {
            global: Mutex::default(),
            workspace: Some(Mutex::default()),
        }
    }

    fn scope(&self, scope: Scope) -> Result<&Mutex<HashMap<String, Value>>, StoreError> {
        match scope {
            Scope::Global => Ok(&self.global),
            Scope::Workspace => self.workspace.as_ref().ok_or(StoreError::NoWorkspace),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, scope: Scope, key: &str) -> Result<Option<Value>, StoreError> {
        let map = self.scope(scope)?.lock().unwrap_or_else(|e| e.into_inner());
        Ok(map.get(key).cloned())
    }

    async fn set(&self, scope: Scope, key: &str, value: Option<Value>) -> Result<(), StoreError> {
        let mut map = self.scope(scope)?.lock().unwrap_or_else(|e| e.into_inner());
        match value {
            Some(value) => {
                map.insert(key.to_string(), value);
            }
            None => {
                map.remove(key);
            }
        }
        Ok(())
    }

    fn has_workspace(&self) -> bool {
        self.workspace.is_some()
    }
}
