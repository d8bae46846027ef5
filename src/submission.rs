//! Submission flow: validate, screen for spam, then hand off to a transport.
//!
//! One attempt per submit. A blocked submission gets the same generic status
//! line as any server-side refusal, so the submitter learns nothing about why.

use thiserror::Error;

use crate::config::HeuristicConfig;
use crate::snapshot::FormSnapshot;
use crate::spam::{SessionState, SpamVerdict, SubmissionHeuristic};
use crate::storage::spam_log::SpamLog;
use crate::validator::{FieldValidator, FormValidation};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint answered but refused the payload.
    #[error("rejected: {0}")]
    Rejected(String),
    /// The endpoint could not be reached.
    #[error("network: {0}")]
    Network(String),
}

/// Delivers an accepted snapshot to the form-processing endpoint.
pub trait Transport {
    fn send(&self, snapshot: &FormSnapshot) -> Result<(), TransportError>;
}

/// Outcome of the local checks, before any transport call.
#[derive(Debug, Clone)]
pub enum Decision {
    Invalid(FormValidation),
    Blocked(SpamVerdict),
    /// Clean verdict; warnings may still be present.
    Ready(SpamVerdict),
}

#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Invalid(FormValidation),
    Blocked(SpamVerdict),
    Sent,
    Failed(TransportError),
}

impl SubmissionOutcome {
    /// Status line shown to the submitter.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Invalid(_) => "Please fix the errors above",
            Self::Blocked(_) => "Unable to submit form. Please try again later.",
            Self::Sent => "Message sent successfully! We'll respond within 24 hours.",
            Self::Failed(TransportError::Rejected(_)) => "Failed to send message. Please try again.",
            Self::Failed(TransportError::Network(_)) => {
                "Network error. Please check your connection and try again."
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

pub struct ContactForm {
    validator: FieldValidator,
    heuristic: SubmissionHeuristic,
    log: Option<SpamLog>,
}

impl ContactForm {
    pub fn new(validator: FieldValidator, heuristic: SubmissionHeuristic) -> Self {
        Self {
            validator,
            heuristic,
            log: None,
        }
    }

    /// Default rule table and the given heuristic config.
    pub fn from_config(config: HeuristicConfig) -> Self {
        let log_capacity = config.log_capacity;
        Self::new(FieldValidator::default(), SubmissionHeuristic::new(config))
            .with_log(SpamLog::open_default().with_capacity(log_capacity))
    }

    pub fn with_log(mut self, log: SpamLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn without_log(mut self) -> Self {
        self.log = None;
        self
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    /// Validation first; spam screening only for valid forms.
    /// Blocked verdicts are logged best-effort.
    pub fn prepare(&self, session: &SessionState, snapshot: &FormSnapshot) -> Decision {
        let validation = self.validator.validate_form(snapshot);
        if !validation.is_valid {
            tracing::debug!(
                failing = validation.errors().count(),
                "Submission has invalid fields"
            );
            return Decision::Invalid(validation);
        }

        let verdict = self.heuristic.evaluate(session, snapshot);
        if verdict.is_spam {
            if let Some(log) = &self.log {
                log.log_spam_attempt(&verdict);
            }
            tracing::warn!(score = verdict.score, "Spam submission blocked");
            return Decision::Blocked(verdict);
        }
        Decision::Ready(verdict)
    }

    pub fn submit(
        &self,
        session: &SessionState,
        snapshot: &FormSnapshot,
        transport: &dyn Transport,
    ) -> SubmissionOutcome {
        match self.prepare(session, snapshot) {
            Decision::Invalid(v) => SubmissionOutcome::Invalid(v),
            Decision::Blocked(v) => SubmissionOutcome::Blocked(v),
            Decision::Ready(_) => match transport.send(snapshot) {
                Ok(()) => {
                    tracing::info!(fields = snapshot.len(), "Submission delivered");
                    SubmissionOutcome::Sent
                }
                Err(e) => {
                    tracing::error!(error = %e, "Submission delivery failed");
                    SubmissionOutcome::Failed(e)
                }
            },
        }
    }
}
