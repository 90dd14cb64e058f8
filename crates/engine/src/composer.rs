//! Context composition.
//!
//! Merges retrieved background text into the outbound user message as
//! hidden grounding. The composed string goes to the model only — the
//! visible reply must never contain the raw retrieved text, which is
//! why the template frames it as advisory background rather than a
//! document to quote.

/// Compose the outbound user content.
///
/// Retrieved context shorter than `min_context_len` (after trim) is too
/// thin to be useful and is dropped; the user text passes through
/// unchanged.
pub fn compose(user_text: &str, retrieved: Option<&str>, min_context_len: usize) -> String {
    match retrieved.map(str::trim) {
        Some(context) if context.len() > min_context_len => {
            format!(
                "User question: {user_text}\n\n\
                 Background info (use this to inform your response, \
                 but keep your answer SHORT and do not quote it): {context}"
            )
        }
        _ => user_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_context_passes_through() {
        assert_eq!(compose("What is anxiety?", None, 10), "What is anxiety?");
    }

    #[test]
    fn short_context_is_dropped() {
        assert_eq!(compose("What is anxiety?", Some("tiny"), 10), "What is anxiety?");
        assert_eq!(compose("q", Some("          "), 10), "q");
    }

    #[test]
    fn useful_context_is_embedded() {
        let out = compose(
            "What is anxiety?",
            Some("Anxiety is a feeling of worry or unease."),
            10,
        );
        assert!(out.contains("What is anxiety?"));
        assert!(out.contains("Anxiety is a feeling of worry or unease."));
        assert!(out.contains("Background info"));
    }

    #[test]
    fn threshold_is_exclusive() {
        // Exactly min_context_len chars is still below the bar
        assert_eq!(compose("q", Some("0123456789"), 10), "q");
        assert!(compose("q", Some("0123456789a"), 10).contains("Background info"));
    }
}
