//! Conversation history storage for Solace.
//!
//! One [`SessionStore`] is owned by the composition root and injected
//! into the dialogue engine — there is no ambient global session map.

pub mod store;

pub use store::SessionStore;
