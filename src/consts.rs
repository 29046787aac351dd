//! Project-wide constants.

/// Default Groq model when none is specified.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// OpenAI-compatible base URL of the Groq API.
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Environment variable holding the Groq API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Maximum number of prior transcript turns replayed to the collaborator.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TOP_P: f32 = 1.0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Seeded bot greeting when a collaborator is available.
pub const GREETING: &str =
    "👋 Hi! I'm your AI-powered customer support assistant. How can I help you today?";

/// Seeded bot greeting for the rule-only mode.
pub const OFFLINE_GREETING: &str =
    "👋 Hi! I'm your customer support assistant. How can I help you today?";

/// Quick actions: (command, label, phrase submitted on the user's behalf).
pub const QUICK_ACTIONS: &[(&str, &str, &str)] = &[
    ("/track", "📦 Track Order", "Track my order #12345"),
    ("/returns", "🔄 Returns", "How do I return an item?"),
    ("/payment", "💳 Payment", "Payment methods"),
    ("/contact", "📞 Contact", "Contact support"),
];

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
