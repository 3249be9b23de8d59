use serde::{Deserialize, Serialize};

/// Provider configuration, read from an optional `planner.toml` in the
/// working directory and then overridden by environment variables.
///
/// `.env` loading is the binary's job (dotenvy at startup), so by the time
/// this runs the process environment already reflects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: Option<String>,
}

const CONFIG_FILE_PATH: &str = "planner.toml";

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();

        //detect the config file exists
        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                match toml::from_str::<Config>(&content) {
                    Ok(file_config) => config = file_config,
                    Err(err) => {
                        log::warn!("ignoring malformed {CONFIG_FILE_PATH}: {err}");
                    }
                }
            }
        }

        config.apply_env_overrides(|name| std::env::var(name).ok());
        config
    }

    /// Override file values with environment variables when they are set.
    /// The API key honors `GROQ_API_KEY` first and the legacy `key` second.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("GROQ_API_KEY").or_else(|| lookup("key")) {
            self.api_key = Some(api_key);
        }
        if let Some(api_base) = lookup("GROQ_API_BASE") {
            self.api_base = Some(api_base);
        }
        if let Some(model) = lookup("GROQ_MODEL") {
            self.model = Some(model);
        }
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}
