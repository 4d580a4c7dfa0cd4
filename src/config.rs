use std::env;

use log::{debug, error, info, warn};
use poise::serenity_prelude::UserId;

use crate::error::{BotError, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub owner_id: Option<UserId>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Only `DISCORD_TOKEN` is required. A missing Gemini key or owner id
    /// degrades the matching feature instead of failing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .ok_or(env::VarError::NotPresent)
            .map_err(|e| {
                error!("Failed to load DISCORD_TOKEN from environment: {e}");
                e
            })?
            .trim()
            .to_string();
        if discord_token.is_empty() {
            error!("DISCORD_TOKEN is set but empty");
            return Err(BotError::Config("DISCORD_TOKEN is empty".to_string()));
        }

        let gemini_api_key = non_empty(lookup("GEMINI_API_KEY"));
        if gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; AI replies are disabled");
        }

        let gemini_model = non_empty(lookup("GEMINI_MODEL"))
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let owner_id = match non_empty(lookup("OWNER_ID")) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(id) if id != 0 => Some(UserId::new(id)),
                _ => {
                    warn!("OWNER_ID '{raw}' is not a valid Discord user id; toggle commands are disabled");
                    None
                }
            },
            None => {
                warn!("OWNER_ID is not set; toggle commands are disabled");
                None
            }
        };

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!("Gemini model: {gemini_model}");
        debug!("Owner id: {owner_id:?}");

        Ok(Self {
            discord_token,
            gemini_api_key,
            gemini_model,
            owner_id,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn missing_discord_token_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "key")]));
        assert!(matches!(result, Err(BotError::EnvVar(_))));
    }

    #[test]
    fn blank_discord_token_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "   ")]));
        assert!(matches!(result, Err(BotError::Config(_))));
    }

    #[test]
    fn optional_values_default_to_absent() -> Result<()> {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "token")]))?;
        assert_eq!(config.discord_token, "token");
        assert!(config.gemini_api_key.is_none());
        assert!(config.owner_id.is_none());
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        Ok(())
    }

    #[test]
    fn reads_all_values() -> Result<()> {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("OWNER_ID", "123456789012345678"),
        ]))?;
        assert_eq!(config.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.owner_id, Some(UserId::new(123_456_789_012_345_678)));
        Ok(())
    }

    #[test]
    fn invalid_owner_id_disables_toggles() -> Result<()> {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("OWNER_ID", "not-a-snowflake"),
        ]))?;
        assert!(config.owner_id.is_none());

        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("OWNER_ID", "0"),
        ]))?;
        assert!(config.owner_id.is_none());
        Ok(())
    }

    #[test]
    fn empty_api_key_counts_as_missing() -> Result<()> {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("GEMINI_API_KEY", ""),
        ]))?;
        assert!(config.gemini_api_key.is_none());
        Ok(())
    }
}
