//! Document grounding lookup for Solace.
//!
//! A deliberately small retrieval helper: plain-text documents scored by
//! word overlap against the query. The best match becomes hidden
//! background context for the dialogue engine — it is never shown to the
//! end user. No vector index, no embeddings; the corpus is a handful of
//! curated support documents.

pub mod index;

pub use index::DocumentIndex;
