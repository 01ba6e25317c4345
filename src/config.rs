use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub groq_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub llm_timeout_secs: u64,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:5000"),
            database_url: get_env_or("DATABASE_URL", "sqlite://database.sqlite"),
            groq_api_key: get_env("GROQ_API_KEY")?,
            llm_api_url: get_env_or("LLM_API_URL", DEFAULT_LLM_API_URL),
            llm_model: get_env_or("LLM_MODEL", DEFAULT_LLM_MODEL),
            llm_temperature: get_env_parse_or("LLM_TEMPERATURE", 0.1)?,
            llm_max_tokens: get_env_parse_or("LLM_MAX_TOKENS", 500)?,
            llm_timeout_secs: get_env_parse_or("LLM_TIMEOUT_SECS", 60)?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => parse_value(name, &raw),
        _ => Ok(default),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_trims_input() {
        let parsed: u32 = parse_value("LLM_MAX_TOKENS", " 250 ").unwrap();
        assert_eq!(parsed, 250);
    }

    #[test]
    fn parse_value_reports_variable_name() {
        let err = parse_value::<u64>("LLM_TIMEOUT_SECS", "soon").unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("LLM_TIMEOUT_SECS")));
    }

    #[test]
    fn unset_variable_falls_back_to_default() {
        let value: f32 = get_env_parse_or("JOB_BOARD_TEST_UNSET_TEMPERATURE", 0.1).unwrap();
        assert_eq!(value, 0.1);
        assert_eq!(
            get_env_or("JOB_BOARD_TEST_UNSET_ADDRESS", "0.0.0.0:5000"),
            "0.0.0.0:5000"
        );
    }
}
