use std::path::Path;

use anyhow::{bail, Context, Result};
use contact_guard::HeuristicConfig;

/// `config show` -- display the effective config (file merged over defaults).
pub fn run_show(config_path: &Path) -> Result<()> {
    let config = HeuristicConfig::load(config_path);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// `config get <key>` -- display a single config value.
pub fn run_get(config_path: &Path, key: &str) -> Result<()> {
    let config = serde_json::to_value(HeuristicConfig::load(config_path))?;
    match config.get(key) {
        Some(v) => println!("{}", serde_json::to_string_pretty(v)?),
        None => bail!("Key not found: {}", key),
    }
    Ok(())
}

/// `config set <key> <value>` -- set a config value.
///
/// Value is parsed as JSON (number, bool, array), falling back to string.
/// The result must still deserialize as a valid config before it is written.
pub fn run_set(config_path: &Path, key: &str, value: &str) -> Result<()> {
    let defaults = serde_json::to_value(HeuristicConfig::default())?;
    if defaults.get(key).is_none() {
        bail!("Unknown config key: {}", key);
    }

    let mut config = match std::fs::read_to_string(config_path) {
        Ok(content) => serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&content)
            .unwrap_or_default(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => serde_json::Map::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", config_path.display()))
        }
    };

    let parsed: serde_json::Value = serde_json::from_str(value)
        .unwrap_or(serde_json::Value::String(value.to_string()));
    config.insert(key.to_string(), parsed.clone());

    let config = serde_json::Value::Object(config);
    serde_json::from_value::<HeuristicConfig>(config.clone())
        .with_context(|| format!("Invalid value for {}: {}", key, value))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, serde_json::to_string_pretty(&config)?)?;

    println!("{} = {}", key, serde_json::to_string(&parsed)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        run_set(&path, "min_fill_secs", "5.5").unwrap();
        run_set(&path, "honeypot_field", "url").unwrap();
        let c = HeuristicConfig::load(&path);
        assert_eq!(c.min_fill_secs, 5.5);
        assert_eq!(c.honeypot_field, "url");
        assert_eq!(c.max_links, 2);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(run_set(&path, "nope", "1").is_err());
        assert!(run_set(&path, "max_links", "\"many\"").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_set_keeps_other_keys_and_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "[not an object]").unwrap();
        run_set(&path, "max_links", "5").unwrap();
        run_set(&path, "keywords", r#"["crypto"]"#).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({"max_links": 5, "keywords": ["crypto"]}));
    }

    #[test]
    fn test_get_rejects_nested_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(run_get(&path, "min_fill_secs").is_ok());
        assert!(run_get(&path, "keywords.0").is_err());
    }
}
