//! Command handlers invoked by the UI layer.
//!
//! Each sub-module groups related commands by domain.  Commands take the
//! shared [`AppState`](crate::state::AppState) and return plain data the
//! view renders directly.

pub mod assistant;
pub mod documents;
pub mod projects;
pub mod users;
