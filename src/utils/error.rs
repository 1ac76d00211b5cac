use thiserror::Error;

pub const MISSING_PARAMS_MESSAGE: &str = "Missing pincode or productId";
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Error fetching inventory";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Upstream returned an error (status {status}): {detail}")]
    UpstreamError {
        status: u16,
        detail: serde_json::Value,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Upstream response is missing field: {field}")]
    MissingFieldError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，對應呼叫端看到的 HTTP 狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Upstream,
    Unexpected,
}

impl CheckError {
    pub fn missing_params() -> Self {
        CheckError::ValidationError {
            message: MISSING_PARAMS_MESSAGE.to_string(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        CheckError::MissingFieldError {
            field: field.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::ValidationError { .. } => ErrorKind::Validation,
            CheckError::UpstreamError { .. } => ErrorKind::Upstream,
            _ => ErrorKind::Unexpected,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::Upstream | ErrorKind::Unexpected => 500,
        }
    }

    /// The value placed under `"error"` in the response body.
    /// Unexpected errors never leak their detail.
    pub fn response_detail(&self) -> serde_json::Value {
        match self {
            CheckError::ValidationError { message } => serde_json::Value::String(message.clone()),
            CheckError::UpstreamError { detail, .. } => detail.clone(),
            _ => serde_json::Value::String(SERVER_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::ValidationError { .. } => {
                "Resubmit the request with both pincode and productId"
            }
            CheckError::UpstreamError { .. } => {
                "Check the product id and the access token permissions on the store"
            }
            CheckError::ApiError(_) => "Check network connectivity to the store API",
            CheckError::SerializationError(_) | CheckError::MissingFieldError { .. } => {
                "The store returned an unexpected response shape; verify the product exists"
            }
            CheckError::IoError(_) => "Check that the configuration file exists and is readable",
            CheckError::ConfigError { .. } | CheckError::InvalidConfigValueError { .. } => {
                "Check SHOPIFY_API_KEY / SHOPIFY_API_URL or the configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
