//! `Authorization` header parsing.

use std::fmt;

use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Scheme expected in the `Authorization` header.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or an empty one
    NoAuthHeader,
    /// Header present but not of the form `ApiKey <token>`
    MalformedHeader,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAuthHeader => write!(f, "no authorization header included"),
            Self::MalformedHeader => write!(f, "malformed authorization header"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Extract the API key from `Authorization: ApiKey <token>`.
///
/// The header value is split on its first whitespace character. The scheme
/// must be exactly `ApiKey`; the token is returned as-is.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeader),
    };

    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let (scheme, token) = value
        .split_once(char::is_whitespace)
        .ok_or(AuthError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME || token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token.to_string())
}
