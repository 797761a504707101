use serde::{Deserialize, Serialize};

/// Result of a UseCase execution
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// UseCase error, also used as the JSON body of failed API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub const VALIDATION_ERROR: &'static str = "VALIDATION_ERROR";
    pub const NOT_CONFIGURED: &'static str = "NOT_CONFIGURED";
    pub const GENERATION_FAILED: &'static str = "GENERATION_FAILED";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(Self::VALIDATION_ERROR, message)
    }

    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::new(Self::NOT_CONFIGURED, message)
    }

    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::new(Self::GENERATION_FAILED, message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_details() {
        let err = UseCaseError::validation("bad input").with_details("core_answer");
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] bad input: core_answer");
    }

    #[test]
    fn serializes_as_flat_json() {
        let err = UseCaseError::generation_failed("Failed to get a response from the AI model.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "GENERATION_FAILED");
        assert!(json["details"].is_null());
    }
}
