// === Honeypot ===
pub const HONEYPOT_FIELD: &str = "website";

// === Heuristic thresholds (overridable via HeuristicConfig) ===
pub const MIN_FILL_SECS: f64 = 3.0;
pub const MIN_INTERACTIONS: u32 = 4;
pub const MAX_LINKS: usize = 2;

/// Matched as lower-case substrings of the message body, reported in this order.
pub const SPAM_KEYWORDS: &[&str] = &[
    "viagra",
    "cialis",
    "lottery",
    "winner",
    "prize",
    "click here",
    "buy now",
    "limited offer",
    "act now",
    "make money fast",
    "work from home",
    "free money",
];

// === Scoring ===
pub const ISSUE_WEIGHT: f64 = 1.0;
pub const WARNING_WEIGHT: f64 = 0.5;

// === Spam log ===
pub const SPAM_LOG_CAPACITY: usize = 50;
pub const SPAM_LOG_FILE: &str = "spam_log.json";
pub const CONFIG_FILE: &str = "config.json";
