//! Submission heuristic -- runs every check and folds the signals into a verdict.

use chrono::{DateTime, Utc};

use super::checks::{default_checks, CheckContext, SpamCheck};
use super::{SessionState, SpamDetails, SpamVerdict};
use crate::config::HeuristicConfig;
use crate::snapshot::FormSnapshot;
use crate::time_utils;

pub struct SubmissionHeuristic {
    config: HeuristicConfig,
    checks: Vec<Box<dyn SpamCheck>>,
}

impl SubmissionHeuristic {
    pub fn new(config: HeuristicConfig) -> Self {
        Self {
            config,
            checks: default_checks(),
        }
    }

    /// Evaluate against the wall clock.
    pub fn evaluate(&self, session: &SessionState, snapshot: &FormSnapshot) -> SpamVerdict {
        self.evaluate_at(session, snapshot, time_utils::now())
    }

    /// Evaluate as if submitted at `now`. All checks run; nothing short-circuits.
    pub fn evaluate_at(
        &self,
        session: &SessionState,
        snapshot: &FormSnapshot,
        now: DateTime<Utc>,
    ) -> SpamVerdict {
        let elapsed_secs = time_utils::elapsed_secs(&session.opened_at, &now);
        let ctx = CheckContext {
            session,
            snapshot,
            config: &self.config,
            elapsed_secs,
        };

        let signals = self
            .checks
            .iter()
            .filter_map(|c| {
                let signal = c.check(&ctx);
                if let Some(s) = &signal {
                    tracing::debug!(check = c.name(), kind = ?s.kind, "Spam check fired");
                }
                signal
            })
            .collect();

        let details = SpamDetails {
            honeypot: match snapshot.decoy_value() {
                Some(v) if !v.is_empty() => "filled",
                _ => "empty",
            }
            .to_string(),
            time_taken: format!("{:.1}s", elapsed_secs),
            mouse_moved: session.mouse_moved,
            interactions: session.interaction_count,
        };

        let verdict = SpamVerdict::from_signals(signals, details);
        if verdict.has_signals() {
            let issues: Vec<&str> = verdict.issues.iter().map(|s| s.description.as_str()).collect();
            let warnings: Vec<&str> = verdict.warnings.iter().map(|s| s.description.as_str()).collect();
            tracing::warn!(
                is_spam = verdict.is_spam,
                score = verdict.score,
                ?issues,
                ?warnings,
                "Spam detection report"
            );
        }
        verdict
    }
}

impl Default for SubmissionHeuristic {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}
