//! Spam checks -- trait + built-in checks.

use std::sync::LazyLock;

use regex::Regex;

use super::{SessionState, SpamSignal};
use crate::config::HeuristicConfig;
use crate::field::FieldId;
use crate::snapshot::FormSnapshot;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://\S+").expect("url pattern compiles")
});

/// Inputs shared across all checks for one evaluation.
pub struct CheckContext<'a> {
    pub session: &'a SessionState,
    pub snapshot: &'a FormSnapshot,
    pub config: &'a HeuristicConfig,
    pub elapsed_secs: f64,
}

impl CheckContext<'_> {
    /// Message body, lower-cased. Missing message reads as empty.
    pub fn message_lower(&self) -> String {
        self.snapshot.get_or_empty(FieldId::Message.as_str()).to_lowercase()
    }
}

pub trait SpamCheck: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, ctx: &CheckContext<'_>) -> Option<SpamSignal>;
}

/// Built-in checks in evaluation order.
pub fn default_checks() -> Vec<Box<dyn SpamCheck>> {
    vec![
        Box::new(HoneypotCheck),
        Box::new(FillTimeCheck),
        Box::new(MouseMovementCheck),
        Box::new(InteractionCheck),
        Box::new(KeywordCheck),
        Box::new(LinkCheck),
    ]
}

pub struct HoneypotCheck;

impl SpamCheck for HoneypotCheck {
    fn name(&self) -> &'static str {
        "honeypot"
    }
    fn check(&self, ctx: &CheckContext<'_>) -> Option<SpamSignal> {
        let filled = ctx
            .snapshot
            .decoy_value()
            .is_some_and(|v| !v.trim().is_empty());
        filled.then(|| SpamSignal::issue("Honeypot field was filled (bot detected)"))
    }
}

pub struct FillTimeCheck;

impl SpamCheck for FillTimeCheck {
    fn name(&self) -> &'static str {
        "fill_time"
    }
    fn check(&self, ctx: &CheckContext<'_>) -> Option<SpamSignal> {
        (ctx.elapsed_secs < ctx.config.min_fill_secs).then(|| {
            SpamSignal::issue(format!("Form submitted too quickly ({:.1}s)", ctx.elapsed_secs))
        })
    }
}

/// Warning only: keyboard-only users never move the mouse.
pub struct MouseMovementCheck;

impl SpamCheck for MouseMovementCheck {
    fn name(&self) -> &'static str {
        "mouse_movement"
    }
    fn check(&self, ctx: &CheckContext<'_>) -> Option<SpamSignal> {
        (!ctx.session.mouse_moved).then(|| SpamSignal::warning("No mouse movement detected"))
    }
}

pub struct InteractionCheck;

impl SpamCheck for InteractionCheck {
    fn name(&self) -> &'static str {
        "interactions"
    }
    fn check(&self, ctx: &CheckContext<'_>) -> Option<SpamSignal> {
        let count = ctx.session.interaction_count;
        (count < ctx.config.min_interactions)
            .then(|| SpamSignal::warning(format!("Low interaction count ({})", count)))
    }
}

/// One issue listing every matched keyword, in configured order.
pub struct KeywordCheck;

impl SpamCheck for KeywordCheck {
    fn name(&self) -> &'static str {
        "keywords"
    }
    fn check(&self, ctx: &CheckContext<'_>) -> Option<SpamSignal> {
        let message = ctx.message_lower();
        let found: Vec<&str> = ctx
            .config
            .keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .filter(|k| message.contains(k.to_lowercase().as_str()))
            .map(String::as_str)
            .collect();
        if found.is_empty() {
            return None;
        }
        Some(SpamSignal::issue(format!(
            "Spam keywords detected: {}",
            found.join(", ")
        )))
    }
}

pub struct LinkCheck;

impl LinkCheck {
    pub fn count_links(text: &str) -> usize {
        URL_PATTERN.find_iter(text).count()
    }
}

impl SpamCheck for LinkCheck {
    fn name(&self) -> &'static str {
        "links"
    }
    fn check(&self, ctx: &CheckContext<'_>) -> Option<SpamSignal> {
        let links = Self::count_links(&ctx.message_lower());
        (links > ctx.config.max_links)
            .then(|| SpamSignal::warning(format!("Excessive links ({})", links)))
    }
}
