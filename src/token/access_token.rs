use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::parser::fields::TokenFields;

/// OAuth2 access token as declared by the authorization server.
///
/// Immutable once built. `access_token` is never empty; every other field
/// is independently present or absent. The raw body is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AccessToken {
    access_token: String,
    token_type: Option<String>,
    expires_in: Option<u32>, // seconds, relative to issue time
    refresh_token: Option<String>,
    scope: Option<String>,
    raw_response: String,
}

impl AccessToken {
    pub fn from_fields(fields: TokenFields, raw_response: &str) -> Self {
        let TokenFields { access_token, token_type, expires_in, refresh_token, scope } = fields;
        Self {
            access_token,
            token_type,
            expires_in,
            refresh_token,
            scope,
            raw_response: raw_response.to_owned(),
        }
    }

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

    pub fn raw_response(&self) -> &str {
        &self.raw_response
    }

    /// Individual entries of the space-delimited scope list.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.as_deref().unwrap_or_default().split_whitespace()
    }

    /// Absolute expiry, given when the token was issued.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.expires_in
            .map(|secs| issued_at + Duration::seconds(i64::from(secs)))
    }
}


#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::parser::fields::extract_fields;
    use super::*;

    fn token(body: &str) -> AccessToken {
        AccessToken::from_fields(extract_fields(body).unwrap(), body)
    }

    #[test]
    fn scopes_split_on_whitespace() {
        let t = token(r#"{"access_token":"AT1","scope":"read  write admin"}"#);
        assert_eq!(t.scopes().collect::<Vec<_>>(), vec!["read", "write", "admin"]);
    }

    #[test]
    fn no_scope_yields_no_scopes() {
        let t = token(r#"{"access_token":"AT1"}"#);
        assert_eq!(t.scopes().count(), 0);
    }

    #[test]
    fn expires_at_adds_lifetime() {
        let issued = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let t = token(r#"{"access_token":"AT1","expires_in":3600}"#);
        assert_eq!(t.expires_at(issued), Some(Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap()));

        let t = token(r#"{"access_token":"AT1"}"#);
        assert_eq!(t.expires_at(issued), None);
    }

    #[test]
    fn serializes_declared_fields() {
        let t = token(r#"{"access_token":"AT1","token_type":"bearer"}"#);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["access_token"], "AT1");
        assert_eq!(v["token_type"], "bearer");
        assert!(v["expires_in"].is_null());
    }
}
