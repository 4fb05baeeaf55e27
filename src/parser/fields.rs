use tracing::{debug, warn};

use crate::parser::error::ExtractionError;
use crate::parser::patterns::{self, FieldPattern};

/// The five raw values located in a token response.
///
/// Produced only by [`extract_fields`], so `access_token` is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenFields {
    pub(crate) access_token: String,
    pub(crate) token_type: Option<String>,
    pub(crate) expires_in: Option<u32>,
    pub(crate) refresh_token: Option<String>,
    pub(crate) scope: Option<String>,
}

impl TokenFields {
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    pub fn expires_in(&self) -> Option<u32> {
        self.expires_in
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

/// Locate a single field in the response.
///
/// An absent optional field is `Ok(None)`; an absent required field fails
/// with `MissingField`. An empty capture is returned as declared, except
/// for a required field where it counts as missing.
pub fn extract_parameter(
    response: &str,
    pattern: &FieldPattern,
    required: bool,
) -> Result<Option<String>, ExtractionError> {
    match pattern.find(response) {
        Some(value) if !required || !value.is_empty() => Ok(Some(value.to_owned())),
        _ if required => {
            warn!(field = pattern.name, body_len = response.len(), "required field not found in token response");
            Err(ExtractionError::missing_field(pattern.name, pattern.as_str(), response))
        }
        _ => Ok(None),
    }
}

/// Parse the raw fields out of a token response body.
pub fn extract_fields(response: &str) -> Result<TokenFields, ExtractionError> {
    if response.trim().is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }

    let access_token = extract_parameter(response, &patterns::ACCESS_TOKEN, true)?
        .unwrap_or_default();
    let token_type = extract_parameter(response, &patterns::TOKEN_TYPE, false)?;
    let expires_in = parse_expires_in(patterns::EXPIRES_IN.find(response));
    let refresh_token = extract_parameter(response, &patterns::REFRESH_TOKEN, false)?;
    let scope = extract_parameter(response, &patterns::SCOPE, false)?;

    debug!(
        has_token_type = token_type.is_some(),
        has_expires_in = expires_in.is_some(),
        has_refresh_token = refresh_token.is_some(),
        has_scope = scope.is_some(),
        "token response parsed"
    );

    Ok(TokenFields {
        access_token,
        token_type,
        expires_in,
        refresh_token,
        scope,
    })
}

// lenient: anything outside 0..=i32::MAX is treated as absent
fn parse_expires_in(raw: Option<&str>) -> Option<u32> {
    let raw = raw?;
    raw.parse::<i32>()
        .inspect_err(|e| warn!(value = raw, error = %e, "ignoring unparsable expires_in"))
        .ok()
        .and_then(|secs| u32::try_from(secs).ok())
}
