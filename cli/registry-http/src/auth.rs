//! Basic-Auth header value encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode an API key as a Basic authorization header value.
///
/// The key is the username and the password is empty, so the encoded
/// credential is `{api_key}:`. The key is passed through uninterpreted;
/// rejecting a malformed or revoked key is the server's job.
pub fn encode(api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{api_key}:")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_key_with_trailing_colon() {
        assert_eq!(encode("my-api-key"), "Basic bXktYXBpLWtleTo=");
    }

    #[test]
    fn empty_key_still_encodes() {
        assert_eq!(encode(""), "Basic Og==");
    }
}
