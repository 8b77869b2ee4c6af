use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const DEFAULT_PORT: u16 = 3000;
pub const DOTENV_FILE: &str = ".env";

/// Settings read from the environment and `.env` once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub port: u16,
    pub anthropic_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_env_file(Path::new(DOTENV_FILE), |name| std::env::var(name).ok())
    }

    /// Layer a dotenv file under `env`. Variables `env` knows about win;
    /// a missing file is the same as an empty one.
    pub fn from_env_file<F>(path: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = read_dotenv(path)?;
        Self::from_lookup(|name| env(name).or_else(|| file.get(name).cloned()))
    }

    /// Build from any variable lookup, so tests need not touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("ANTHROPIC_API_KEY is not set in the environment or .env")?;

        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let anthropic_base_url = lookup("ANTHROPIC_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| counsel::llm::DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            port,
            anthropic_base_url,
        })
    }
}

fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open {}", path.display()));
        }
    };

    iter.collect::<Result<HashMap<_, _>, _>>()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .field("anthropic_base_url", &self.anthropic_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("ANTHROPIC_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn defaults_apply() {
        let config = AppConfig::from_lookup(lookup(&[("ANTHROPIC_API_KEY", "sk-ant")])).unwrap();
        assert_eq!(config.api_key, "sk-ant");
        assert_eq!(config.port, 3000);
        assert_eq!(config.anthropic_base_url, "https://api.anthropic.com");
    }

    #[test]
    fn port_and_base_url_can_be_overridden() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ANTHROPIC_API_KEY", "sk-ant"),
            ("PORT", "8080"),
            ("ANTHROPIC_BASE_URL", "http://localhost:1234"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.anthropic_base_url, "http://localhost:1234");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("ANTHROPIC_API_KEY", "sk-ant"),
            ("PORT", "http"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    fn write_dotenv(contents: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DOTENV_FILE), contents).unwrap();
        dir
    }

    #[test]
    fn dotenv_file_supplies_key_and_port() {
        let dir = write_dotenv("ANTHROPIC_API_KEY=sk-from-file\nPORT=4000\n");
        let config =
            AppConfig::from_env_file(&dir.path().join(DOTENV_FILE), lookup(&[])).unwrap();
        assert_eq!(config.api_key, "sk-from-file");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn environment_wins_over_dotenv_file() {
        let dir = write_dotenv("ANTHROPIC_API_KEY=sk-from-file\nPORT=4000\n");
        let config = AppConfig::from_env_file(
            &dir.path().join(DOTENV_FILE),
            lookup(&[("ANTHROPIC_API_KEY", "sk-from-env")]),
        )
        .unwrap();
        assert_eq!(config.api_key, "sk-from-env");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn missing_dotenv_file_falls_back_to_environment() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_env_file(
            &dir.path().join(DOTENV_FILE),
            lookup(&[("ANTHROPIC_API_KEY", "sk-ant")]),
        )
        .unwrap();
        assert_eq!(config.api_key, "sk-ant");

        let err =
            AppConfig::from_env_file(&dir.path().join(DOTENV_FILE), lookup(&[])).unwrap_err();
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn debug_hides_the_key() {
        let config = AppConfig::from_lookup(lookup(&[("ANTHROPIC_API_KEY", "sk-secret")])).unwrap();
        let shown = format!("{:?}", config);
        assert!(!shown.contains("sk-secret"));
        assert!(shown.contains("<redacted>"));
    }
}
