use serde::{Deserialize, Serialize};

/// Failure envelope returned by every backend endpoint.
///
/// Success responses carry the requested payload; failures carry at
/// minimum `{ "message": ... }`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_parses_minimal_body() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"message":"Invalid username or password"}"#).unwrap();
        assert_eq!(parsed, ErrorResponse::new("Invalid username or password"));
        assert_eq!(parsed.to_string(), "Invalid username or password");
    }
}
