use once_cell::sync::Lazy;

use crate::parser::error::ExtractionError;
use crate::parser::fields::{extract_fields, extract_parameter, TokenFields};
use crate::parser::patterns;
use crate::token::access_token::AccessToken;
use crate::token::openid_token::OpenIdAccessToken;

/// Builds the final token from the extracted fields.
///
/// Variant token formats plug in here and reuse the field parsing as is.
pub trait TokenBuilder {
    type Token;

    fn build(&self, fields: TokenFields, response: &str) -> Result<Self::Token, ExtractionError>;
}

impl<F, T> TokenBuilder for F
where
    F: Fn(TokenFields, &str) -> Result<T, ExtractionError>,
{
    type Token = T;

    fn build(&self, fields: TokenFields, response: &str) -> Result<T, ExtractionError> {
        self(fields, response)
    }
}

/// Plain OAuth2 tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessTokenBuilder;

impl TokenBuilder for AccessTokenBuilder {
    type Token = AccessToken;

    fn build(&self, fields: TokenFields, response: &str) -> Result<AccessToken, ExtractionError> {
        Ok(AccessToken::from_fields(fields, response))
    }
}

/// OpenID Connect tokens, with the optional `id_token`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenIdTokenBuilder;

impl TokenBuilder for OpenIdTokenBuilder {
    type Token = OpenIdAccessToken;

    fn build(&self, fields: TokenFields, response: &str) -> Result<OpenIdAccessToken, ExtractionError> {
        let id_token = extract_parameter(response, &patterns::ID_TOKEN, false)?;
        Ok(OpenIdAccessToken::new(AccessToken::from_fields(fields, response), id_token))
    }
}

/// Stateless extractor for JSON token-endpoint responses.
///
/// Holds only its builder, so one instance may be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenExtractor<B = AccessTokenBuilder> {
    builder: B,
}

impl TokenExtractor {
    pub fn new() -> Self {
        Self { builder: AccessTokenBuilder }
    }
}

impl<B: TokenBuilder> TokenExtractor<B> {
    pub fn with_builder(builder: B) -> Self {
        Self { builder }
    }

    /// Extract a token from a raw response body.
    ///
    /// Fails with `EmptyResponse` on an empty or whitespace-only body and
    /// with `MissingField` when no non-empty `access_token` is found.
    pub fn extract(&self, response: &str) -> Result<B::Token, ExtractionError> {
        let fields = extract_fields(response)?;
        self.builder.build(fields, response)
    }
}

static JSON_EXTRACTOR: Lazy<TokenExtractor> = Lazy::new(TokenExtractor::new);
static OPENID_EXTRACTOR: Lazy<TokenExtractor<OpenIdTokenBuilder>> =
    Lazy::new(|| TokenExtractor::with_builder(OpenIdTokenBuilder));

/// Process-wide extractor producing [`AccessToken`].
pub fn json_extractor() -> &'static TokenExtractor {
    &JSON_EXTRACTOR
}

/// Process-wide extractor producing [`OpenIdAccessToken`].
pub fn openid_extractor() -> &'static TokenExtractor<OpenIdTokenBuilder> {
    &OPENID_EXTRACTOR
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_keeps_raw_response() {
        let body = r#"{"access_token":"AT1","token_type":"bearer"}"#;
        let token = TokenExtractor::new().extract(body).unwrap();
        assert_eq!(token.access_token(), "AT1");
        assert_eq!(token.token_type(), Some("bearer"));
        assert_eq!(token.raw_response(), body);
    }

    #[test]
    fn openid_builder_reads_id_token() {
        let body = r#"{"access_token":"AT1","id_token":"eyJhbGciOi.eyJzdWIiOi.sig","expires_in":60}"#;
        let token = openid_extractor().extract(body).unwrap();
        assert_eq!(token.id_token(), Some("eyJhbGciOi.eyJzdWIiOi.sig"));
        assert_eq!(token.access_token().expires_in(), Some(60));
    }

    #[test]
    fn openid_builder_without_id_token() {
        let token = openid_extractor().extract(r#"{"access_token":"AT1"}"#).unwrap();
        assert_eq!(token.id_token(), None);
        assert_eq!(token.into_access_token().access_token(), "AT1");
    }

    #[test]
    fn closure_builder_reuses_field_parsing() {
        let extractor = TokenExtractor::with_builder(|fields: TokenFields, _: &str| -> Result<String, ExtractionError> {
            Ok(format!("{} {}", fields.token_type().unwrap_or("Bearer"), fields.access_token()))
        });
        let header = extractor.extract(r#"{"access_token":"AT1","token_type":"mac"}"#).unwrap();
        assert_eq!(header, "mac AT1");
    }

    #[test]
    fn builder_is_not_called_on_failure() {
        let extractor = TokenExtractor::with_builder(|_: TokenFields, _: &str| -> Result<(), ExtractionError> {
            panic!("builder must not run")
        });
        assert_eq!(extractor.extract("").unwrap_err(), ExtractionError::EmptyResponse);
        assert!(extractor.extract(r#"{"scope":"x"}"#).is_err());
    }

    #[test]
    fn shared_instance_is_reused() {
        assert!(std::ptr::eq(json_extractor(), json_extractor()));
    }
}
