use anyhow::{Context, Result};
use contact_guard::SpamLog;

/// `log show` -- print logged verdicts, oldest first.
pub fn show(last: Option<usize>) -> Result<()> {
    let log = SpamLog::open_default();
    let entries = log.entries();
    let skip = last.map_or(0, |n| entries.len().saturating_sub(n));
    let shown = &entries[skip..];

    if shown.is_empty() {
        println!("No spam attempts logged ({})", log.path().display());
        return Ok(());
    }
    for entry in shown {
        let v = &entry.verdict;
        println!(
            "{}  score={:.1}  issues={}  warnings={}  time={}  interactions={}",
            entry.timestamp,
            v.score,
            v.issues.len(),
            v.warnings.len(),
            v.details.time_taken,
            v.details.interactions,
        );
        for s in v.issues.iter().chain(v.warnings.iter()) {
            println!("    [{:?}] {}", s.kind, s.description);
        }
    }
    println!("{} of {} entries", shown.len(), entries.len());
    Ok(())
}

/// `log clear` -- delete the spam log file.
pub fn clear() -> Result<()> {
    let log = SpamLog::open_default();
    log.clear()
        .with_context(|| format!("Failed to remove {}", log.path().display()))?;
    println!("Spam log cleared");
    Ok(())
}
