use reqwest::StatusCode;

pub const NO_RESPONSE_MESSAGE: &str = "could not reach server";
pub const REQUEST_FAILED_MESSAGE: &str = "request failed";
pub const INVALID_PAYLOAD_MESSAGE: &str = "invalid server response";

// Classified failure of a single gateway call.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    // The server answered with a non-2xx status.
    #[error("server responded with {status}")]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },
    // The request went out but no response came back.
    #[error("no response from server: {0}")]
    NoResponse(#[source] reqwest::Error),
    // The request could not be built or sent.
    #[error("failed to build request: {0}")]
    RequestConstruction(String),
    // 2xx response whose body does not match the expected payload.
    #[error("failed to decode response payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

impl GatewayError {
    /// Text shown to the user in the error modal.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            GatewayError::Server {
                status,
                detail: None,
            } => format!("server error: status {}", status.as_u16()),
            GatewayError::NoResponse(_) => NO_RESPONSE_MESSAGE.to_string(),
            GatewayError::RequestConstruction(message) if message.trim().is_empty() => {
                REQUEST_FAILED_MESSAGE.to_string()
            }
            GatewayError::RequestConstruction(message) => message.clone(),
            GatewayError::InvalidPayload(_) => INVALID_PAYLOAD_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Failures of the durable token storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode storage file: {0}")]
    Encode(#[from] toml::ser::Error),
}
