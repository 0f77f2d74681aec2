//! Persona selection commands.

use wikiflow_store::{StoreError, User};

use crate::state::AppState;

/// The active persona, defaulting to the first configured one.
pub fn current_user(state: &AppState) -> Result<User, StoreError> {
    state.store.current_user(&state.directory)
}

/// Switch the active persona and persist the choice.
pub fn switch_user(state: &AppState, id: &str) -> Result<User, StoreError> {
    state.store.switch_user(&state.directory, id)
}

/// All selectable personas, unfiltered.
pub fn available_users(state: &AppState) -> Vec<User> {
    state.directory.users().to_vec()
}
