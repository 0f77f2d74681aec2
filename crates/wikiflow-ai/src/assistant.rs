//! The assistant gateway: metadata suggestions and corpus Q&A.
//!
//! Both operations are best-effort and never fail to the caller: a missing
//! credential or a remote error resolves to a fixed fallback string.
//! Neither operation mutates any repository, and there is no conversation
//! memory beyond what the caller chooses to resend.

use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use wikiflow_shared::constants::{CORPUS_DOC_BUDGET, METADATA_CONTENT_BUDGET};
use wikiflow_store::Document;

use crate::transport::{GenerateRequest, HttpTransport, ModelTransport};

/// Environment variable holding the model credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Summary placeholder when no credential is configured.
pub const NO_KEY_SUMMARY: &str = "AI suggestions are unavailable: no API key is configured.";

/// Summary placeholder when the remote call fails.
pub const FAILED_SUMMARY: &str = "AI suggestion failed. Please try again later.";

/// Answer returned when no credential is configured.
pub const NO_KEY_ANSWER: &str =
    "Configure a Gemini API key to use the AI knowledge-base assistant.";

/// Answer returned on remote failure.
pub const FAILED_ANSWER: &str =
    "The AI service is temporarily unavailable. Please try again later.";

/// Summary and tag suggestions for a document draft.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MetadataSuggestion {
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MetadataSuggestion {
    fn fallback(summary: &str) -> Self {
        Self {
            summary: summary.into(),
            tags: Vec::new(),
        }
    }
}

/// Stateless request/response façade around the hosted model.
pub struct Assistant {
    api_key: Option<String>,
    transport: Arc<dyn ModelTransport>,
}

impl Assistant {
    /// Build an assistant with the HTTPS transport and the credential from
    /// the environment, if set.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Self::new(api_key, Arc::new(HttpTransport::new()))
    }

    pub fn new(api_key: Option<String>, transport: Arc<dyn ModelTransport>) -> Self {
        Self { api_key, transport }
    }

    /// Whether a credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Suggest a short summary and up to five tags for a document draft.
    ///
    /// The content is clipped to [`METADATA_CONTENT_BUDGET`] characters
    /// before it is sent.  Without a credential the transport is never
    /// touched.
    pub async fn suggest_metadata(&self, title: &str, content: &str) -> MetadataSuggestion {
        let Some(ref api_key) = self.api_key else {
            return MetadataSuggestion::fallback(NO_KEY_SUMMARY);
        };

        let request = GenerateRequest {
            prompt: metadata_prompt(title, content),
            json_response: true,
        };

        match self.transport.generate(api_key, &request).await {
            Ok(text) => match serde_json::from_str::<MetadataSuggestion>(&text) {
                Ok(suggestion) => suggestion,
                Err(e) => {
                    warn!(error = %e, "model returned non-JSON metadata");
                    MetadataSuggestion::fallback(FAILED_SUMMARY)
                }
            },
            Err(e) => {
                warn!(error = %e, "metadata suggestion failed");
                MetadataSuggestion::fallback(FAILED_SUMMARY)
            }
        }
    }

    /// Answer a question grounded in the supplied documents.
    ///
    /// Each document contributes at most [`CORPUS_DOC_BUDGET`] characters of
    /// content to the context.
    pub async fn answer_from_corpus(&self, query: &str, documents: &[Document]) -> String {
        let Some(ref api_key) = self.api_key else {
            return NO_KEY_ANSWER.into();
        };

        let request = GenerateRequest {
            prompt: corpus_prompt(query, documents),
            json_response: false,
        };

        match self.transport.generate(api_key, &request).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "corpus answer failed");
                FAILED_ANSWER.into()
            }
        }
    }
}

/// Clip `text` to at most `budget` characters.
fn clip(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn metadata_prompt(title: &str, content: &str) -> String {
    format!(
        "Analyze the following document content.\n\
         1. Provide a concise summary (max 2 sentences).\n\
         2. Suggest up to 5 relevant tags (keywords).\n\n\
         Output JSON format:\n\
         {{\n  \"summary\": \"string\",\n  \"tags\": [\"tag1\", \"tag2\"]\n}}\n\n\
         Title: {}\n\
         Content: {}",
        title,
        clip(content, METADATA_CONTENT_BUDGET),
    )
}

fn corpus_prompt(query: &str, documents: &[Document]) -> String {
    let context: String = documents
        .iter()
        .map(|d| {
            format!(
                "---\nTitle: {}\nID: {}\nContent: {}...\n---\n",
                d.title,
                d.id,
                clip(&d.content, CORPUS_DOC_BUDGET)
            )
        })
        .collect();

    format!(
        "You are a helpful knowledge-management assistant for a small company.\n\
         Use the provided context documents below to answer the user's question.\n\
         If the answer is not in the documents, say that you don't know based on \
         the internal knowledge base.\n\
         Cite the document title if you use information from it.\n\n\
         Context:\n{context}\n\n\
         User Question: {query}"
    )
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;
    use wikiflow_shared::types::UserRole;
    use wikiflow_store::Document;

    use super::*;
    use crate::error::{AiError, Result};

    /// Transport that counts calls and replies with a canned payload.
    #[derive(Default)]
    struct ScriptedTransport {
        calls: AtomicUsize,
        reply: Option<String>,
    }

    impl ScriptedTransport {
        fn replying(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Some(text.into()),
            }
        }
    }

    #[async_trait]
    impl ModelTransport for ScriptedTransport {
        async fn generate(&self, _api_key: &str, _request: &GenerateRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(AiError::Malformed("scripted failure".into())),
            }
        }
    }

    fn doc_with_content(content: &str) -> Document {
        Document {
            id: Uuid::new_v4(),
            title: "Handbook".into(),
            content: content.into(),
            tags: Vec::new(),
            category: "General".into(),
            created_by: "Olivia Chen".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            access_level: UserRole::Viewer,
            history: Vec::new(),
            attachments: Vec::new(),
        }
    }

    #[tokio::test]
    async fn missing_credential_short_circuits() {
        let transport = Arc::new(ScriptedTransport::default());
        let assistant = Assistant::new(None, transport.clone());

        let suggestion = assistant.suggest_metadata("Title", "Body").await;
        assert_eq!(suggestion.summary, NO_KEY_SUMMARY);
        assert!(suggestion.tags.is_empty());

        let answer = assistant.answer_from_corpus("who owns onboarding?", &[]).await;
        assert_eq!(answer, NO_KEY_ANSWER);

        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn metadata_parses_model_json() {
        let transport = Arc::new(ScriptedTransport::replying(
            r#"{"summary":"A two-sentence summary.","tags":["hr","onboarding"]}"#,
        ));
        let assistant = Assistant::new(Some("key".into()), transport.clone());

        let suggestion = assistant.suggest_metadata("Guide", "Welcome aboard").await;
        assert_eq!(suggestion.summary, "A two-sentence summary.");
        assert_eq!(suggestion.tags, vec!["hr".to_string(), "onboarding".to_string()]);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_json_metadata_falls_back() {
        let transport = Arc::new(ScriptedTransport::replying("sorry, plain prose"));
        let assistant = Assistant::new(Some("key".into()), transport);

        let suggestion = assistant.suggest_metadata("Guide", "Welcome").await;
        assert_eq!(suggestion.summary, FAILED_SUMMARY);
        assert!(suggestion.tags.is_empty());
    }

    #[tokio::test]
    async fn remote_failure_yields_fixed_strings() {
        let transport = Arc::new(ScriptedTransport::default());
        let assistant = Assistant::new(Some("key".into()), transport.clone());

        let suggestion = assistant.suggest_metadata("Guide", "Welcome").await;
        assert_eq!(suggestion.summary, FAILED_SUMMARY);

        let answer = assistant.answer_from_corpus("q", &[]).await;
        assert_eq!(answer, FAILED_ANSWER);

        // One failed attempt per operation, no automatic retry.
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn corpus_prompt_clips_each_document() {
        let doc = doc_with_content(&"x".repeat(CORPUS_DOC_BUDGET * 2));
        let prompt = corpus_prompt("anything", std::slice::from_ref(&doc));

        assert!(prompt.contains(&"x".repeat(CORPUS_DOC_BUDGET)));
        assert!(!prompt.contains(&"x".repeat(CORPUS_DOC_BUDGET + 1)));
        assert!(prompt.contains("Title: Handbook"));
    }

    #[test]
    fn metadata_prompt_clips_content() {
        let prompt = metadata_prompt("T", &"y".repeat(METADATA_CONTENT_BUDGET + 50));
        assert!(prompt.contains(&"y".repeat(METADATA_CONTENT_BUDGET)));
        assert!(!prompt.contains(&"y".repeat(METADATA_CONTENT_BUDGET + 1)));
    }
}
