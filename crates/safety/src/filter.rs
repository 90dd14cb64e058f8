//! The crisis keyword filter.

/// Phrases that short-circuit normal dialogue. Matched case-insensitively,
/// anywhere in the text.
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicidal",
    "suicide",
    "kill myself",
    "want to die",
    "hopeless",
    "worthless",
    "can't go on",
    "give up",
    "ending it all",
    "no reason to live",
    "alone",
    "depressed",
    "depression",
    "overwhelmed",
    "self-harm",
    "hurt myself",
    "numb",
    "pain",
    "destroy myself",
    "die",
    "hopelessness",
    "failure",
    "useless",
    "life not worth living",
    "burden",
    "suffering",
    "exhausted",
    "trapped",
    "escape",
    "end it",
    "can't handle it",
    "worthless life",
    "tired of living",
];

/// Returns `true` if any crisis phrase occurs anywhere in the text.
///
/// Pure function over static data; cannot fail.
pub fn contains_crisis_keywords(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|kw| text_lower.contains(kw))
}
