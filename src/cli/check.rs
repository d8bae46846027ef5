use std::path::Path;

use anyhow::Result;
use contact_guard::submission::Decision;
use contact_guard::{ContactForm, HeuristicConfig};

use super::SessionInput;

/// `check <snapshot>` -- report validation and spam verdict as JSON.
///
/// The spam verdict is only computed for valid snapshots, matching the
/// submission flow.
pub fn run(config_path: &Path, source: &str, session: SessionInput, log: bool) -> Result<()> {
    let config = HeuristicConfig::load(config_path);
    let snapshot = super::read_snapshot(source, &config.honeypot_field)?;
    let form = ContactForm::from_config(config);
    let form = if log { form } else { form.without_log() };

    let report = match form.prepare(&session.to_session(), &snapshot) {
        Decision::Invalid(validation) => serde_json::json!({
            "validation": validation,
            "spam": null,
        }),
        Decision::Blocked(verdict) | Decision::Ready(verdict) => serde_json::json!({
            "validation": form.validator().validate_form(&snapshot),
            "spam": verdict,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
