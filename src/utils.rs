//! Small helpers shared across the crate.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode a `user:password` credential into a `Proxy-Authorization` header
/// value: the literal `Basic ` followed by the standard base64 encoding.
pub(crate) fn basic_auth_value(credential: &str) -> String {
    format!("Basic {}", STANDARD.encode(credential.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_value() {
        assert_eq!(basic_auth_value("user:pass"), "Basic dXNlcjpwYXNz");
    }
}
