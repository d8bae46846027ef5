use std::path::PathBuf;

/// Cross-platform data directory.
/// Linux: ~/.config/contact-guard/
/// macOS: ~/Library/Application Support/contact-guard/
/// Windows: %APPDATA%/contact-guard/
///
/// `CONTACT_GUARD_HOME` overrides the location.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CONTACT_GUARD_HOME") {
        if !dir.is_empty() {
            return PathBuf::from(expand_tilde(&dir));
        }
    }
    let base = dirs::config_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    });
    base.join("contact-guard")
}

/// {data_dir}/spam_log.json
pub fn spam_log_path() -> PathBuf {
    data_dir().join(crate::constants::SPAM_LOG_FILE)
}

/// {data_dir}/config.json
pub fn config_path() -> PathBuf {
    data_dir().join(crate::constants::CONFIG_FILE)
}

/// Expand ~ to home directory in paths.
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") || path == "~" {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
