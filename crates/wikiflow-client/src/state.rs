//! Application state shared across all commands.
//!
//! The store is synchronous and single-writer from the UI thread; only the
//! assistant calls suspend the issuing flow.

use std::path::Path;

use wikiflow_ai::Assistant;
use wikiflow_store::{Store, StoreError, UserDirectory};

/// Central application state handed to every command.
pub struct AppState {
    /// Handle to the local key-value store.
    pub store: Store,

    /// Fixed persona directory standing in for real authentication.
    pub directory: UserDirectory,

    /// Gateway to the hosted model.
    pub assistant: Assistant,
}

impl AppState {
    /// Open the default store with the builtin personas and the
    /// environment-configured assistant.
    pub fn new() -> Result<Self, StoreError> {
        Ok(Self {
            store: Store::new()?,
            directory: UserDirectory::builtin(),
            assistant: Assistant::from_env(),
        })
    }

    /// Open the store at an explicit path (tests, portable installs).
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            store: Store::open_at(path)?,
            directory: UserDirectory::builtin(),
            assistant: Assistant::from_env(),
        })
    }

    /// Replace the assistant.  Tests inject a scripted transport here.
    pub fn with_assistant(mut self, assistant: Assistant) -> Self {
        self.assistant = assistant;
        self
    }
}
