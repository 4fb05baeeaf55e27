//! # Token Extractor Library
//!
//! Turns the raw body of an OAuth2 token-endpoint response into a typed
//! access token. Extraction is pattern based, so near-JSON and nested
//! bodies are handled too.
//!
//! Modules:
//! - `parser` — field patterns, the extractor and its token builders
//! - `token` — `AccessToken` and `OpenIdAccessToken` value objects
//! - `config` — YAML settings for the embedding application
//! - `utils` — logging initialisation

pub mod config;
pub mod parser;
pub mod token;
pub mod utils;


pub use crate::parser::error::ExtractionError;
pub use crate::parser::extractor::{json_extractor, openid_extractor, AccessTokenBuilder, OpenIdTokenBuilder, TokenBuilder, TokenExtractor};
pub use crate::parser::fields::TokenFields;
pub use crate::token::access_token::AccessToken;
pub use crate::token::openid_token::OpenIdAccessToken;
