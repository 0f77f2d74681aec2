/// Application name
pub const APP_NAME: &str = "WikiFlow";

/// Maximum inline attachment size in bytes (500 KiB)
pub const MAX_ATTACHMENT_SIZE: usize = 500 * 1024;

/// Character budget for document content sent with a metadata-suggestion request
pub const METADATA_CONTENT_BUDGET: usize = 5_000;

/// Per-document character budget when assembling the Q&A corpus context
pub const CORPUS_DOC_BUDGET: usize = 1_000;

/// Category assigned to documents created without one
pub const DEFAULT_CATEGORY: &str = "General";
