//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies the `STUDYMATE_LOG_LEVEL` env override. API keys are only
//! ever sourced from the environment (`LLM_API_KEY`, `WEATHER_API_KEY`),
//! never from TOML.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::error::AppError;

/// Assistant-level settings.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Display name used in logs and the console banner.
    pub name: String,
    pub log_level: String,
    /// Inbound messages longer than this are rejected before any processing.
    pub max_input_chars: usize,
}

/// OpenAI / OpenAI-compatible provider configuration.
/// Populated from `[llm.openai]` in the TOML.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature (ignored for models that forbid it).
    pub temperature: f32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM provider selection.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (e.g. `"dummy"`, `"openai"`).
    /// Maps to `default` in `[llm]` TOML.
    pub provider: String,
    pub openai: OpenAiConfig,
}

/// Weather augmentation settings (`[weather]`).
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Defaults to `false`: the augmentation must be explicitly enabled.
    pub enabled: bool,
    /// Current-conditions endpoint URL (no query string).
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub llm: LlmConfig,
    pub weather: WeatherConfig,
    /// API key from `LLM_API_KEY` env — `None` only works for the dummy provider.
    pub llm_api_key: Option<String>,
    /// API key from `WEATHER_API_KEY` env — required when weather is enabled.
    pub weather_api_key: Option<String>,
}

impl Config {
    /// Check that every secret the active configuration needs is present.
    /// Called once at startup; a missing secret is fatal.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.llm.provider != "dummy" && self.llm_api_key.is_none() {
            return Err(AppError::Config(format!(
                "LLM_API_KEY is not set (required for provider '{}')",
                self.llm.provider
            )));
        }
        if self.weather.enabled && self.weather_api_key.is_none() {
            return Err(AppError::Config(
                "WEATHER_API_KEY is not set (required when [weather] is enabled)".into(),
            ));
        }
        Ok(())
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    assistant: RawAssistant,
    #[serde(default)]
    llm: RawLlm,
    #[serde(default)]
    weather: RawWeather,
}

#[derive(Deserialize)]
struct RawAssistant {
    name: String,
    log_level: String,
    #[serde(default = "default_max_input_chars")]
    max_input_chars: usize,
}

#[derive(Deserialize)]
struct RawLlm {
    /// Maps to `default = "..."` in `[llm]`.
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
    #[serde(default)]
    openai: RawOpenAiConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider(), openai: RawOpenAiConfig::default() }
    }
}

#[derive(Deserialize)]
struct RawOpenAiConfig {
    #[serde(default = "default_openai_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_openai_model")]
    model: String,
    #[serde(default = "default_openai_temperature")]
    temperature: f32,
    #[serde(default = "default_openai_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawOpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_openai_api_base_url(),
            model: default_openai_model(),
            temperature: default_openai_temperature(),
            timeout_seconds: default_openai_timeout_seconds(),
        }
    }
}

#[derive(Deserialize)]
struct RawWeather {
    #[serde(default = "default_false")]
    enabled: bool,
    #[serde(default = "default_weather_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_weather_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawWeather {
    fn default() -> Self {
        Self {
            enabled: false,
            api_base_url: default_weather_api_base_url(),
            timeout_seconds: default_weather_timeout_seconds(),
        }
    }
}

fn default_max_input_chars() -> usize { 1000 }
fn default_llm_provider() -> String { "dummy".to_string() }
fn default_openai_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions".to_string()
}
fn default_openai_model() -> String { "gemini-1.5-flash".to_string() }
fn default_openai_temperature() -> f32 { 0.2 }
fn default_openai_timeout_seconds() -> u64 { 60 }
fn default_weather_api_base_url() -> String {
    "http://api.weatherapi.com/v1/current.json".to_string()
}
fn default_weather_timeout_seconds() -> u64 { 10 }

fn default_false() -> bool { false }

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let log_level_override = env::var("STUDYMATE_LOG_LEVEL").ok();
    load_from(
        Path::new("config/default.toml"),
        log_level_override.as_deref(),
        env::var("LLM_API_KEY").ok(),
        env::var("WEATHER_API_KEY").ok(),
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    log_level_override: Option<&str>,
    llm_api_key: Option<String>,
    weather_api_key: Option<String>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let log_level = log_level_override
        .unwrap_or(&parsed.assistant.log_level)
        .to_string();

    Ok(Config {
        assistant: AssistantConfig {
            name: parsed.assistant.name,
            log_level,
            max_input_chars: parsed.assistant.max_input_chars,
        },
        llm: LlmConfig {
            provider: parsed.llm.provider,
            openai: OpenAiConfig {
                api_base_url: parsed.llm.openai.api_base_url,
                model: parsed.llm.openai.model,
                temperature: parsed.llm.openai.temperature,
                timeout_seconds: parsed.llm.openai.timeout_seconds,
            },
        },
        weather: WeatherConfig {
            enabled: parsed.weather.enabled,
            api_base_url: parsed.weather.api_base_url,
            timeout_seconds: parsed.weather.timeout_seconds,
        },
        llm_api_key,
        weather_api_key,
    })
}

// ── test helpers ──────────────────────────────────────────────────────────────

/// Safe `Config` for unit tests — dummy LLM, no API keys, no external calls.
#[cfg(test)]
impl Config {
    pub fn test_default() -> Self {
        Self {
            assistant: AssistantConfig {
                name: "test".into(),
                log_level: "info".into(),
                max_input_chars: default_max_input_chars(),
            },
            llm: LlmConfig {
                provider: "dummy".into(),
                openai: OpenAiConfig {
                    api_base_url: "http://localhost:0/v1/chat/completions".into(),
                    model: "test-model".into(),
                    temperature: 0.0,
                    timeout_seconds: 1,
                },
            },
            weather: WeatherConfig {
                enabled: false,
                api_base_url: "http://localhost:0/current.json".into(),
                timeout_seconds: 1,
            },
            llm_api_key: None,
            weather_api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
[assistant]
name = "test-bot"
log_level = "info"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_basic_config() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, None, None).unwrap();
        assert_eq!(cfg.assistant.name, "test-bot");
        assert_eq!(cfg.assistant.log_level, "info");
        assert_eq!(cfg.assistant.max_input_chars, 1000);
        assert_eq!(cfg.llm.provider, "dummy");
        assert!(!cfg.weather.enabled);
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None, None, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("config error"));
    }

    #[test]
    fn log_level_override_applies() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), Some("debug"), None, None).unwrap();
        assert_eq!(cfg.assistant.log_level, "debug");
    }

    #[test]
    fn openai_section_parses() {
        let toml = r#"
[assistant]
name = "test-bot"
log_level = "info"
max_input_chars = 500

[llm]
default = "openai"

[llm.openai]
api_base_url = "http://localhost:9999/v1/chat/completions"
model = "some-model"
temperature = 0.7
timeout_seconds = 5
"#;
        let f = write_toml(toml);
        let cfg = load_from(f.path(), None, Some("k".into()), None).unwrap();
        assert_eq!(cfg.assistant.max_input_chars, 500);
        assert_eq!(cfg.llm.provider, "openai");
        assert_eq!(cfg.llm.openai.model, "some-model");
        assert_eq!(cfg.llm.openai.timeout_seconds, 5);
    }

    #[test]
    fn validate_requires_llm_key_for_real_provider() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "openai".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("LLM_API_KEY"));

        cfg.llm_api_key = Some("key".into());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_dummy_provider_needs_no_key() {
        let cfg = Config::test_default();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_requires_weather_key_when_enabled() {
        let mut cfg = Config::test_default();
        cfg.weather.enabled = true;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("WEATHER_API_KEY"));

        cfg.weather_api_key = Some("key".into());
        assert!(cfg.validate().is_ok());
    }
}
