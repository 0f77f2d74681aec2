//! # wikiflow-store
//!
//! Client-local persistence for the WikiFlow workspace: a keyed JSON blob
//! store over SQLite plus the repositories built on it (documents with
//! version history, projects with embedded kanban tasks, and the
//! current-user pointer).  Collections are read and written whole; there
//! are no partial updates and no cross-key transactions.

pub mod database;
pub mod documents;
pub mod migrations;
pub mod models;
pub mod projects;
pub mod seed;
pub mod users;

mod error;

pub use database::Store;
pub use error::StoreError;
pub use models::*;
pub use users::UserDirectory;
