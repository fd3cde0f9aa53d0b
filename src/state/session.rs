//! Session context and the key/value store it clears on logout

use super::account::Session;
use anyhow::Result;
use directories::ProjectDirs;
use serde_json::{Map, Value};
#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Persisted key holding the auth token
pub const TOKEN_KEY: &str = "token";
/// Persisted key holding the serialized user
pub const USER_KEY: &str = "user";

/// String key/value storage that outlives the process
#[allow(dead_code)]
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// JSON file in the platform data directory
pub struct FileSessionStore {
    path: Option<PathBuf>,
}

impl FileSessionStore {
    pub fn new() -> Self {
        Self {
            path: ProjectDirs::from("io", "neurofleetx", "neurofleetx-tui")
                .map(|dirs| dirs.data_dir().join("session.json")),
        }
    }

    #[cfg(test)]
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Entries of the session file. Values other apps wrote may be any JSON.
    fn read(&self) -> Result<Map<String, Value>> {
        match &self.path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
            _ => Ok(Map::new()),
        }
    }

    fn write(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(entries)?)?;
        }
        Ok(())
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.remove(key).map(|value| match value {
            Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write(&entries)
    }

    /// Remove `key`. A file that is not a JSON object is deleted outright.
    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = match self.read() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {e}");
                if let Some(path) = self.path.as_ref().filter(|p| p.exists()) {
                    fs::remove_file(path)?;
                }
                return Ok(());
            }
        };
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}

/// In-process store
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Owns the signed-in session for the lifetime of the app
pub struct SessionContext {
    store: Box<dyn SessionStore>,
    current: Option<Session>,
}

impl SessionContext {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Hold a freshly issued session in memory
    pub fn begin(&mut self, session: Session) {
        tracing::info!(user = %session.user.email, "session started");
        self.current = Some(session);
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Drop the in-memory session and remove both persisted keys.
    ///
    /// Both removals are attempted; the first failure is returned.
    pub fn logout(&mut self) -> Result<()> {
        self.current = None;
        let token = self.store.remove(TOKEN_KEY);
        let user = self.store.remove(USER_KEY);
        token.and(user)
    }
}
