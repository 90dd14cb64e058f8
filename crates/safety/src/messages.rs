//! The safety-message pool.
//!
//! Selection is uniform random with no anti-repeat guarantee. The random
//! choice goes through an injectable [`Selector`] so tests can force a
//! deterministic pick.

use rand::Rng;

/// The helpline contact embedded in every safety message.
pub const HELPLINE_CONTACT: &str = "(+975) 02 332862, enquiry@thepema.gov.bt";

const SAFETY_MESSAGES: &[&str] = &[
    "It sounds like you're going through a really tough time. \
     You're not alone, and there are people who want to help you. \
     Please consider reaching out to a mental health professional or contacting a helpline:\n\n\
     (+975) 02 332862, enquiry@thepema.gov.bt\n\
     You matter.",
    "I'm really concerned about you. Remember, asking for help is a sign of strength. \
     You can call a trained professional for support:\n\n\
     (+975) 02 332862, enquiry@thepema.gov.bt\n\
     You are important and loved.",
    "It sounds like you're feeling overwhelmed. \
     Please reach out to someone you trust or a mental health professional immediately:\n\n\
     (+975) 02 332862, enquiry@thepema.gov.bt\n\
     Your life is valuable.",
    "Even in tough times, you are not alone. \
     Talking to a trained listener can help:\n\n\
     (+975) 02 332862, enquiry@thepema.gov.bt\n\
     You are not a burden.",
];

/// Picks an index into a pool of the given size.
pub type Selector = Box<dyn Fn(usize) -> usize + Send + Sync>;

/// The pool of pre-written crisis responses.
pub struct SafetyMessages {
    selector: Selector,
}

impl SafetyMessages {
    /// Pool with uniform random selection.
    pub fn new() -> Self {
        Self {
            selector: Box::new(|len| rand::rng().random_range(0..len)),
        }
    }

    /// Pool with a caller-supplied selector. Out-of-range picks are
    /// clamped into the pool rather than panicking.
    pub fn with_selector(selector: Selector) -> Self {
        Self { selector }
    }

    /// Pick a safety message.
    pub fn pick(&self) -> &'static str {
        let idx = (self.selector)(SAFETY_MESSAGES.len()).min(SAFETY_MESSAGES.len() - 1);
        SAFETY_MESSAGES[idx]
    }

    /// Number of messages in the pool.
    pub fn len(&self) -> usize {
        SAFETY_MESSAGES.len()
    }

    pub fn is_empty(&self) -> bool {
        SAFETY_MESSAGES.is_empty()
    }

    /// The full pool, for tests asserting membership.
    pub fn all(&self) -> &'static [&'static str] {
        SAFETY_MESSAGES
    }
}

impl Default for SafetyMessages {
    fn default() -> Self {
        Self::new()
    }
}
