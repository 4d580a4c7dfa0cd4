use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Serenity error: {0}")]
    Serenity(Box<poise::serenity_prelude::Error>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Gemini API error ({status}): {message}")]
    GeminiApi {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Gemini response error: {0}")]
    GeminiResponse(String),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl From<poise::serenity_prelude::Error> for BotError {
    fn from(err: poise::serenity_prelude::Error) -> Self {
        BotError::Serenity(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serenity_errors_are_boxed() {
        let err = BotError::from(poise::serenity_prelude::Error::Other("gateway closed"));
        assert!(matches!(err, BotError::Serenity(_)));
    }

    #[test]
    fn api_error_display_includes_status() {
        let err = BotError::GeminiApi {
            status: reqwest::StatusCode::FORBIDDEN,
            message: "bad key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Gemini API error (403 Forbidden): bad key"
        );
    }
}
