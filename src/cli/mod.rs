pub mod check;
pub mod config;
pub mod log;
pub mod submit;
pub mod validate;

use std::io::Read;

use anyhow::{Context, Result};
use chrono::Duration;
use contact_guard::{FormSnapshot, SessionState};

/// Longest fill time accepted from the command line (about 31 years).
const MAX_ELAPSED_SECS: f64 = 1e9;

/// Session signals supplied on the command line.
pub struct SessionInput {
    pub elapsed_secs: f64,
    pub interactions: u32,
    pub mouse_moved: bool,
}

impl SessionInput {
    /// Reconstruct a session that opened `elapsed_secs` ago.
    /// Out-of-range or NaN values are clamped into `[0, MAX_ELAPSED_SECS]`.
    pub fn to_session(&self) -> SessionState {
        let secs = if self.elapsed_secs.is_nan() {
            0.0
        } else {
            self.elapsed_secs.clamp(0.0, MAX_ELAPSED_SECS)
        };
        let opened = contact_guard::time_utils::now() - Duration::milliseconds((secs * 1000.0) as i64);
        let mut session = SessionState::opened_at(opened);
        if self.mouse_moved {
            session.record_mouse_move();
        }
        for _ in 0..self.interactions {
            session.record_interaction();
        }
        session
    }
}

/// Read a snapshot from a file path, or stdin for "-".
pub fn read_snapshot(source: &str, honeypot_field: &str) -> Result<FormSnapshot> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))?
    };
    FormSnapshot::from_json(&content, honeypot_field)
        .with_context(|| format!("Invalid snapshot in {}", source))
}
