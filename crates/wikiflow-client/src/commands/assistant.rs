//! Assistant commands: metadata suggestions and knowledge-base Q&A.

use wikiflow_ai::MetadataSuggestion;
use wikiflow_store::StoreError;

use crate::state::AppState;

/// Suggest a summary and tags for an in-progress draft.
pub async fn suggest_metadata(state: &AppState, title: &str, content: &str) -> MetadataSuggestion {
    state.assistant.suggest_metadata(title, content).await
}

/// Union of existing and suggested tags; first occurrence wins, duplicates
/// dropped.  The editor applies this when the user accepts a suggestion.
pub fn merge_tags(existing: &[String], suggested: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = existing.to_vec();
    for tag in suggested {
        if !merged.contains(tag) {
            merged.push(tag.clone());
        }
    }
    merged
}

/// Answer a question against the whole document collection.
///
/// The collection is read fresh on every call; the assistant itself never
/// touches the store.
pub async fn ask(state: &AppState, query: &str) -> Result<String, StoreError> {
    let documents = state.store.list_documents()?;
    Ok(state.assistant.answer_from_corpus(query, &documents).await)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use wikiflow_ai::assistant::NO_KEY_ANSWER;
    use wikiflow_ai::{AiError, Assistant, GenerateRequest, ModelTransport};

    use super::*;
    use crate::state::AppState;

    /// Counts calls so tests can prove the wire was never touched.
    #[derive(Default)]
    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ModelTransport for CountingTransport {
        async fn generate(
            &self,
            _api_key: &str,
            _request: &GenerateRequest,
        ) -> Result<String, AiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("grounded answer".into())
        }
    }

    fn open_state(api_key: Option<String>, transport: Arc<CountingTransport>) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::open_at(&dir.path().join("app.db"))
            .unwrap()
            .with_assistant(Assistant::new(api_key, transport));
        (dir, state)
    }

    #[test]
    fn merge_tags_unions_without_duplicates() {
        let existing = vec!["HR".to_string(), "SOP".to_string()];
        let suggested = vec!["SOP".to_string(), "Onboarding".to_string()];

        assert_eq!(
            merge_tags(&existing, &suggested),
            vec!["HR".to_string(), "SOP".to_string(), "Onboarding".to_string()]
        );
    }

    #[tokio::test]
    async fn ask_without_credential_never_calls_the_wire() {
        let transport = Arc::new(CountingTransport::default());
        let (_dir, state) = open_state(None, transport.clone());

        let answer = ask(&state, "who owns onboarding?").await.unwrap();
        assert_eq!(answer, NO_KEY_ANSWER);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ask_reads_the_collection_and_returns_the_answer() {
        let transport = Arc::new(CountingTransport::default());
        let (_dir, state) = open_state(Some("key".into()), transport.clone());

        let answer = ask(&state, "what ships in Q1?").await.unwrap();
        assert_eq!(answer, "grounded answer");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);

        // Asking never mutates the store.
        assert_eq!(state.store.list_documents().unwrap().len(), 2);
    }
}
