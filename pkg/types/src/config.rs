use serde::{Deserialize, Serialize};

/// `sactl` configuration file (YAML).
///
/// Example `config.yaml`:
/// ```yaml
/// sso: https://sso.example.com/auth/
/// token: eyJhbGciOi...
/// per-page: 20
/// timeout-secs: 30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfigFile {
    #[serde(default)]
    pub sso: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, alias = "per-page")]
    pub per_page: Option<u64>,
    #[serde(default, alias = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    // An empty file parses as YAML null; treat it like a missing one.
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}
