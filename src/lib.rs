//! Contact Guard -- field validation and spam screening for contact forms.
//!
//! Single-crate library: a fixed field rule table, a per-session spam
//! heuristic, a bounded local spam log, and the submission flow tying
//! them to a pluggable transport.

// Foundation
pub mod constants;
pub mod error;
pub mod time_utils;
pub mod config;

// Core
pub mod field;
pub mod snapshot;
pub mod validator;
pub mod spam;

// Sub-systems
pub mod storage;
pub mod submission;
pub mod tracing_init;

// Re-exports for convenience
pub use config::HeuristicConfig;
pub use error::{GuardError, GuardResult};
pub use field::{FieldId, FieldResult, FieldRule};
pub use snapshot::FormSnapshot;
pub use spam::{SessionState, SpamVerdict, SubmissionHeuristic};
pub use storage::spam_log::SpamLog;
pub use submission::{ContactForm, SubmissionOutcome, Transport, TransportError};
pub use validator::{FieldValidator, FormValidation};
