use std::path::Path;

use anyhow::Result;
use contact_guard::{ContactForm, FormSnapshot, HeuristicConfig, SubmissionOutcome, Transport, TransportError};

use super::SessionInput;

/// Prints the accepted payload as JSON instead of posting it anywhere.
pub struct StdoutTransport;

impl Transport for StdoutTransport {
    fn send(&self, snapshot: &FormSnapshot) -> Result<(), TransportError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| TransportError::Rejected(e.to_string()))?;
        println!("{}", json);
        Ok(())
    }
}

/// `submit <snapshot>` -- full flow: validate, screen, deliver.
pub fn run(config_path: &Path, source: &str, session: SessionInput) -> Result<()> {
    let config = HeuristicConfig::load(config_path);
    let snapshot = super::read_snapshot(source, &config.honeypot_field)?;
    let form = ContactForm::from_config(config);

    let outcome = form.submit(&session.to_session(), &snapshot, &StdoutTransport);
    if let SubmissionOutcome::Invalid(validation) = &outcome {
        for (field, error) in validation.errors() {
            eprintln!("  {}: {}", field, error);
        }
    }
    eprintln!("{}", outcome.status());
    if !outcome.is_success() {
        std::process::exit(2);
    }
    Ok(())
}
