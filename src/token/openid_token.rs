use serde::Serialize;

use crate::token::access_token::AccessToken;

/// Access token issued by an OpenID Connect provider, carrying the optional
/// `id_token` alongside the usual OAuth2 fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OpenIdAccessToken {
    #[serde(flatten)]
    token: AccessToken,
    id_token: Option<String>,
}

impl OpenIdAccessToken {
    pub fn new(token: AccessToken, id_token: Option<String>) -> Self {
        Self { token, id_token }
    }

    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.token
    }

    pub fn into_access_token(self) -> AccessToken {
        self.token
    }
}
