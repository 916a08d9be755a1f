//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;
use crate::infrastructure::llm::GeminiConfig;

/// Assistant configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AssistantConfig {
    pub name: String,
    pub default_lang: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assistant: AssistantConfig::default(),
            server: ServerConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "DeepSphere".to_string(),
            default_lang: "en".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`. Unparseable numeric values are
    /// logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.gemini.api_key = Some(key);
        }

        if let Some(endpoint) = lookup("GEMINI_ENDPOINT") {
            self.gemini.endpoint = endpoint;
        }

        if let Some(timeout) = lookup("GEMINI_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.gemini.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid GEMINI_TIMEOUT_SECS: {}", timeout),
            }
        }

        if let Some(bind) = lookup("DEEPSPHERE_BIND") {
            self.server.bind_addr = bind;
        }

        if let Some(port) = lookup("DEEPSPHERE_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid DEEPSPHERE_PORT: {}", port),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("gemini.endpoint".to_string()));
        }
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "gemini.timeout-secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
