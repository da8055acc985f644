use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExposeError {
    #[error("Attribute '{field}' not found on model '{model}'")]
    AttributeNotFound { model: String, field: String },

    #[error("Computed fields of model '{model}' must be an object, got {found}")]
    MalformedComputed { model: String, found: &'static str },

    #[error("Unknown model: {model}")]
    UnknownModel { model: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Model,
    Input,
    System,
}

impl ExposeError {
    pub fn attribute_not_found(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            model: model.into(),
            field: field.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AttributeNotFound { .. }
            | Self::MalformedComputed { .. }
            | Self::UnknownModel { .. } => ErrorCategory::Model,
            Self::InvalidInput { .. } | Self::SerializationError(_) => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::System,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::AttributeNotFound { model, field } => format!(
                "Remove '{}' from the exposable fields of '{}' or add the attribute to the model",
                field, model
            ),
            Self::MalformedComputed { model, .. } => format!(
                "Return an object (or nothing) from the computed fields hook of '{}'",
                model
            ),
            Self::UnknownModel { model } => {
                format!("Declare a [models.{}] section in the configuration", model)
            }
            Self::InvalidInput { .. } => {
                "Provide a JSON object or an array of JSON objects".to_string()
            }
            Self::SerializationError(_) => "Check that the input is valid JSON".to_string(),
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Fix the configuration file and try again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExposeError>;
