use thiserror::Error;

/// Failures surfaced by token extraction.
///
/// Everything else (absent optional fields, a malformed `expires_in`) is
/// recovered locally and shows up as `None` on the token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("token response body is empty, can't extract a token from it")]
    EmptyResponse,
    #[error("token response has no '{field}' (pattern '{pattern}'): '{response}'")]
    MissingField {
        field: &'static str,
        pattern: String,
        /// the response body, verbatim
        response: String,
    },
}

impl ExtractionError {
    pub fn missing_field(field: &'static str, pattern: &str, response: &str) -> Self {
        ExtractionError::MissingField {
            field,
            pattern: pattern.to_owned(),
            response: response.to_owned(),
        }
    }
}
