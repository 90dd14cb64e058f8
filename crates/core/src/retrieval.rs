//! Retriever trait — optional document grounding for replies.
//!
//! A retriever maps a user query to an optional background snippet. It
//! is deliberately infallible: an empty corpus or a miss yields `None`,
//! never an error, so grounding can be wired in or out freely.

use async_trait::async_trait;

/// Looks up background text relevant to a user query.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Return the best-matching context snippet, or `None` when nothing
    /// relevant is found. Must not fail for empty corpora.
    async fn retrieve(&self, query: &str) -> Option<String>;
}

/// A retriever that never finds anything. Used when no document corpus
/// is configured, and in tests.
pub struct NoopRetriever;

#[async_trait]
impl Retriever for NoopRetriever {
    async fn retrieve(&self, _query: &str) -> Option<String> {
        None
    }
}
