use anyhow::Result;
use serde::Deserialize;

pub const ENV_DB_URL: &str = "CONTACTS_DB_URL";
pub const ENV_STORAGE_URL: &str = "CONTACTS_STORAGE_URL";
pub const ENV_LOG_LEVEL: &str = "CONTACTS_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "CONTACTS_LOG_FORMAT";

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_min_level")]
    pub min_level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            format: default_format(),
        }
    }
}

fn default_min_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "full".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()
    }

    pub fn load_from_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Config = serde_yaml::from_slice(bytes)?;
        config.validate()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(db_url) = lookup(ENV_DB_URL) else {
            anyhow::bail!("{} is not set", ENV_DB_URL);
        };
        let Some(storage_url) = lookup(ENV_STORAGE_URL) else {
            anyhow::bail!("{} is not set", ENV_STORAGE_URL);
        };

        let config = Config {
            database: DatabaseConfig { url: db_url },
            storage: StorageConfig {
                base_url: storage_url,
            },
            logging: LoggingConfig {
                min_level: lookup(ENV_LOG_LEVEL).unwrap_or_else(default_min_level),
                format: lookup(ENV_LOG_FORMAT).unwrap_or_else(default_format),
            },
        };
        config.validate()
    }

    fn validate(mut self) -> Result<Self> {
        self.database.url = check_url("database.url", &self.database.url)?;
        self.storage.base_url = check_url("storage.base_url", &self.storage.base_url)?;
        Ok(self)
    }
}

fn check_url(name: &str, url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        anyhow::bail!("{} is empty", name);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must be an http(s) URL, got {}", name, url);
    }
    Ok(url.to_string())
}
