//! # wikiflow-ai
//!
//! Stateless gateway around the hosted generative-model endpoint.  Requests
//! are best-effort: no retries, no caching, no cancellation.  Failures and
//! a missing credential resolve to fixed user-facing strings instead of
//! errors, and nothing here ever writes to the store.

pub mod assistant;
pub mod transport;

mod error;

pub use assistant::{Assistant, MetadataSuggestion};
pub use error::AiError;
pub use transport::{GenerateRequest, HttpTransport, ModelTransport};
