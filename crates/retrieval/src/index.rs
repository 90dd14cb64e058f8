//! Word-overlap document index.

use async_trait::async_trait;
use solace_core::retrieval::Retriever;
use std::collections::HashSet;
use std::path::Path;

/// Documents shorter than this are too thin to ground a reply.
const MIN_DOCUMENT_LEN: usize = 50;

/// An in-memory corpus of plain-text documents.
pub struct DocumentIndex {
    documents: Vec<String>,
}

impl DocumentIndex {
    /// Load every `.txt` file under `dir`. A missing or unreadable
    /// directory yields an empty index — retrieval must never fail the
    /// request path.
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut documents = Vec::new();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "document dir unavailable, grounding disabled");
                return Self { documents };
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "txt") {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let text = text.trim();
                    if text.len() > MIN_DOCUMENT_LEN {
                        documents.push(text.to_string());
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable document");
                }
            }
        }

        tracing::info!(dir = %dir.display(), count = documents.len(), "document index loaded");
        Self { documents }
    }

    /// Build an index from in-memory documents. Used by tests and by
    /// deployments that embed their corpus.
    pub fn from_documents(documents: Vec<String>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Best-scoring document for the query, if any scores above zero.
    fn top_context(&self, query: &str) -> Option<&str> {
        self.documents
            .iter()
            .map(|doc| (doc, word_overlap_score(doc, query)))
            .filter(|(_, score)| *score > 0.0)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(doc, _)| doc.as_str())
    }
}

#[async_trait]
impl Retriever for DocumentIndex {
    async fn retrieve(&self, query: &str) -> Option<String> {
        if query.trim().is_empty() {
            return None;
        }
        self.top_context(query).map(String::from)
    }
}

/// Cosine-style similarity over lowercase word sets:
/// `|A ∩ B| / sqrt(|A| * |B| + 1)`.
fn word_overlap_score(a: &str, b: &str) -> f32 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    let a_set: HashSet<&str> = a_lower.split_whitespace().collect();
    let b_set: HashSet<&str> = b_lower.split_whitespace().collect();
    let intersection = a_set.intersection(&b_set).count() as f32;
    intersection / ((a_set.len() * b_set.len()) as f32 + 1.0).sqrt()
}
