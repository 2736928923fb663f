//! Session-scoped document state
//!
//! Each uploaded document gets one session: the extracted pages plus the
//! most recent answer. Sessions are independent; uploading a new document
//! creates a fresh session and never touches an existing one.
//!
//! # Thread Safety
//!
//! The store uses `tokio::sync::RwLock` for async-safe access. Pages are
//! wrapped in `Arc` so reads hand out cheap clones of immutable data.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::pdf::PageCollection;

/// Most recent answer for a session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// The query the answer responds to
    pub query: String,
    /// Answer text, or the formatted upstream error string
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// State held for one uploaded document
#[derive(Debug, Clone)]
pub struct DocumentSession {
    pub id: Uuid,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    /// Extracted pages; immutable after creation
    pub pages: Arc<PageCollection>,
    /// Single slot, replaced on every new ask
    pub last_answer: Option<Answer>,
}

/// In-memory store of live sessions
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, DocumentSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for freshly extracted pages
    pub async fn create(&self, file_name: String, pages: PageCollection) -> DocumentSession {
        let session = DocumentSession {
            id: Uuid::new_v4(),
            file_name,
            uploaded_at: Utc::now(),
            pages: Arc::new(pages),
            last_answer: None,
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<DocumentSession> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).cloned()
    }

    /// Replace the stored answer. Returns false if the session is gone.
    pub async fn set_answer(&self, id: Uuid, answer: Answer) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&id) {
            Some(session) => {
                session.last_answer = Some(answer);
                true
            }
            None => false,
        }
    }

    /// Discard a session. Returns false if it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        let sessions = self.sessions.read().await;
        sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::Page;

    fn pages() -> PageCollection {
        PageCollection::new(vec![Page {
            page_number: 1,
            content: "Revenue grew 10%".to_string(),
        }])
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let store = SessionStore::new();
        assert!(store.is_empty().await);

        let session = store.create("report.pdf".to_string(), pages()).await;
        assert_eq!(store.len().await, 1);

        let loaded = store.get(session.id).await.expect("session exists");
        assert_eq!(loaded.file_name, "report.pdf");
        assert_eq!(loaded.pages.len(), 1);
        assert!(loaded.last_answer.is_none());
    }

    #[tokio::test]
    async fn new_answer_replaces_the_previous_one() {
        let store = SessionStore::new();
        let session = store.create("report.pdf".to_string(), pages()).await;

        for text in ["first answer", "second answer"] {
            let stored = store
                .set_answer(
                    session.id,
                    Answer {
                        query: "revenue".to_string(),
                        text: text.to_string(),
                        created_at: Utc::now(),
                    },
                )
                .await;
            assert!(stored);
        }

        let loaded = store.get(session.id).await.expect("session exists");
        assert_eq!(loaded.last_answer.expect("answer set").text, "second answer");
    }

    #[tokio::test]
    async fn uploads_create_independent_sessions() {
        let store = SessionStore::new();
        let first = store.create("a.pdf".to_string(), pages()).await;
        let second = store.create("b.pdf".to_string(), pages()).await;

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(first.id).await.expect("kept").file_name, "a.pdf");
    }

    #[tokio::test]
    async fn remove_discards_the_session() {
        let store = SessionStore::new();
        let session = store.create("report.pdf".to_string(), pages()).await;

        assert!(store.remove(session.id).await);
        assert!(!store.remove(session.id).await);
        assert!(store.get(session.id).await.is_none());
        assert!(!store
            .set_answer(
                session.id,
                Answer {
                    query: "q".to_string(),
                    text: "a".to_string(),
                    created_at: Utc::now(),
                },
            )
            .await);
    }
}
