//! Spam screening -- per-page session signals plus content heuristics.
//!
//! | # | Check          | Signal                         | Kind    |
//! |---|----------------|--------------------------------|---------|
//! | 1 | Honeypot       | decoy field non-empty          | issue   |
//! | 2 | FillTime       | submitted < min_fill_secs      | issue   |
//! | 3 | MouseMovement  | no mouse movement seen         | warning |
//! | 4 | Interactions   | < min_interactions input events| warning |
//! | 5 | Keywords       | known spam phrases in message  | issue   |
//! | 6 | Links          | > max_links URLs in message    | warning |

pub mod checks;
pub mod heuristic;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use heuristic::SubmissionHeuristic;

/// Behavioral state for one page load.
///
/// Mutated only through the two event taps; the heuristic reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub opened_at: DateTime<Utc>,
    pub interaction_count: u32,
    pub mouse_moved: bool,
}

impl SessionState {
    /// Session opened now.
    pub fn new() -> Self {
        Self::opened_at(crate::time_utils::now())
    }

    pub fn opened_at(ts: DateTime<Utc>) -> Self {
        Self {
            opened_at: ts,
            interaction_count: 0,
            mouse_moved: false,
        }
    }

    /// First mouse movement latches the flag. Returns true only on that first call.
    pub fn record_mouse_move(&mut self) -> bool {
        if self.mouse_moved {
            return false;
        }
        self.mouse_moved = true;
        true
    }

    /// One input-change event on the form.
    pub fn record_interaction(&mut self) {
        self.interaction_count = self.interaction_count.saturating_add(1);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Disqualifying.
    Issue,
    /// Counts toward the score only.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamSignal {
    pub kind: SignalKind,
    pub description: String,
}

impl SpamSignal {
    pub fn issue(description: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Issue,
            description: description.into(),
        }
    }

    pub fn warning(description: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Warning,
            description: description.into(),
        }
    }
}

/// Always-present diagnostics, recorded whether or not a signal fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamDetails {
    /// "filled" or "empty"
    pub honeypot: String,
    /// Elapsed fill time, e.g. "4.2s"
    pub time_taken: String,
    pub mouse_moved: bool,
    pub interactions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamVerdict {
    pub is_spam: bool,
    pub score: f64,
    pub issues: Vec<SpamSignal>,
    pub warnings: Vec<SpamSignal>,
    pub details: SpamDetails,
}

impl SpamVerdict {
    /// Split signals by kind and derive `is_spam` and `score`.
    pub fn from_signals(signals: Vec<SpamSignal>, details: SpamDetails) -> Self {
        let (issues, warnings): (Vec<_>, Vec<_>) = signals
            .into_iter()
            .partition(|s| s.kind == SignalKind::Issue);
        let score = issues.len() as f64 * crate::constants::ISSUE_WEIGHT
            + warnings.len() as f64 * crate::constants::WARNING_WEIGHT;
        Self {
            is_spam: !issues.is_empty(),
            score,
            issues,
            warnings,
            details,
        }
    }

    pub fn has_signals(&self) -> bool {
        !self.issues.is_empty() || !self.warnings.is_empty()
    }
}
