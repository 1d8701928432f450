use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field}: {message}")]
    InvalidInput { field: &'static str, message: String },
}

impl InputError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        InputError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            InputError::InvalidInput { field, .. } => field,
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to encode estimate: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Invalid submission")]
    Rejected,

    #[error(transparent)]
    Invalid(#[from] InputError),

    #[error("Lead storage error: {0}")]
    Storage(String),
}

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Webhook responded with {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
