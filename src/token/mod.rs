pub mod access_token;
pub mod openid_token;
