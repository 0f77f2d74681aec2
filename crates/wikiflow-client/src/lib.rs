//! # wikiflow-client
//!
//! Application command layer invoked by the UI.  Commands orchestrate the
//! local store, the user directory and the assistant gateway; rendering,
//! navigation and file pickers live entirely in the UI layer.

pub mod commands;
pub mod state;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise structured logging for the client process.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("wikiflow_client=debug,wikiflow_store=info,wikiflow_ai=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("starting WikiFlow client");
}
