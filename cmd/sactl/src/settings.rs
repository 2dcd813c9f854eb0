use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use pkg_constants::api::{DEFAULT_SSO_URL, SSO_ENV, TOKEN_ENV};
use pkg_constants::paging::DEFAULT_PER_PAGE;
use pkg_constants::paths::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use pkg_types::config::{CliConfigFile, load_config_file};
use tracing::{debug, info};

use crate::cli::Cli;

/// Effective settings after merging CLI args > environment > config file > defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub sso: String,
    token: Option<String>,
    pub per_page: u64,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let path = match &cli.config {
            Some(p) => PathBuf::from(p),
            None => default_config_path(),
        };
        let file_cfg: CliConfigFile = load_config_file(&path.to_string_lossy())
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        debug!("Config file: {}", path.display());

        Ok(Self::merge(
            cli.sso.clone(),
            cli.token.clone(),
            std::env::var(SSO_ENV).ok(),
            std::env::var(TOKEN_ENV).ok(),
            file_cfg,
        ))
    }

    fn merge(
        flag_sso: Option<String>,
        flag_token: Option<String>,
        env_sso: Option<String>,
        env_token: Option<String>,
        file_cfg: CliConfigFile,
    ) -> Self {
        let sso = flag_sso
            .or(env_sso)
            .or(file_cfg.sso)
            .unwrap_or_else(|| DEFAULT_SSO_URL.to_string());
        let token = flag_token
            .or(env_token)
            .or(file_cfg.token)
            .filter(|t| !t.is_empty());
        let per_page = file_cfg.per_page.unwrap_or(DEFAULT_PER_PAGE);
        let timeout = file_cfg.timeout_secs.map(Duration::from_secs);

        info!("SSO: {}", sso);
        Self {
            sso,
            token,
            per_page,
            timeout,
        }
    }

    /// The bearer token; API commands cannot run without one.
    pub fn token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(t) => Ok(t),
            None => bail!("no token configured: pass --token, set {} or add `token:` to the config file", TOKEN_ENV),
        }
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(sso: &str, token: &str) -> CliConfigFile {
        CliConfigFile {
            sso: Some(sso.to_string()),
            token: Some(token.to_string()),
            per_page: Some(20),
            timeout_secs: Some(10),
        }
    }

    #[test]
    fn flags_win_over_env_and_file() {
        let s = Settings::merge(
            Some("https://flag/".to_string()),
            Some("flag-token".to_string()),
            Some("https://env/".to_string()),
            Some("env-token".to_string()),
            file("https://file/", "file-token"),
        );
        assert_eq!(s.sso, "https://flag/");
        assert_eq!(s.token().unwrap(), "flag-token");
        assert_eq!(s.per_page, 20);
        assert_eq!(s.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn env_wins_over_file() {
        let s = Settings::merge(
            None,
            None,
            Some("https://env/".to_string()),
            Some("env-token".to_string()),
            file("https://file/", "file-token"),
        );
        assert_eq!(s.sso, "https://env/");
        assert_eq!(s.token().unwrap(), "env-token");
    }

    #[test]
    fn defaults_without_any_source() {
        let s = Settings::merge(None, None, None, None, CliConfigFile::default());
        assert_eq!(s.sso, DEFAULT_SSO_URL);
        assert_eq!(s.per_page, DEFAULT_PER_PAGE);
        assert!(s.timeout.is_none());
        assert!(s.token().is_err());
    }
}
