use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Number of random bytes behind a short code.
pub const CODE_BYTES: usize = 3;

/// Length of the hex-encoded short code.
pub const CODE_LENGTH: usize = CODE_BYTES * 2;

/// A validated short code identifier for a shortened URL.
///
/// Short codes are exactly six lowercase hexadecimal characters,
/// i.e. three bytes rendered as hex.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Encodes raw bytes as a lowercase hex short code.
    pub fn from_bytes(bytes: [u8; CODE_BYTES]) -> Self {
        let mut code = String::with_capacity(CODE_LENGTH);
        for byte in bytes {
            // writing into a String cannot fail
            let _ = write!(code, "{byte:02x}");
        }
        Self(code)
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), CoreError> {
        if code.len() != CODE_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be {}, got {}",
                CODE_LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only lowercase hexadecimal characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl TryFrom<String> for ShortCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortCode> for String {
    fn from(value: ShortCode) -> Self {
        value.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("000000").is_ok());
        assert!(ShortCode::new("ab12cd").is_ok());
        assert!(ShortCode::new("ffffff").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortCode::new("").is_err());
        assert!(ShortCode::new("abc").is_err());
        assert!(ShortCode::new("abcdef0").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("ABCDEF").is_err());
        assert!(ShortCode::new("abcdeg").is_err());
        assert!(ShortCode::new("ab/cde").is_err());
    }

    #[test]
    fn from_bytes_is_lowercase_hex() {
        assert_eq!(ShortCode::from_bytes([0xab, 0x12, 0xcd]).as_str(), "ab12cd");
        assert_eq!(ShortCode::from_bytes([0, 0, 0]).as_str(), "000000");
        assert_eq!(ShortCode::from_bytes([0xff, 0x0f, 0xa0]).as_str(), "ff0fa0");
    }

    #[test]
    fn to_url() {
        let code = ShortCode::new("ab12cd").unwrap();
        assert_eq!(code.to_url("https://short.ly/"), "https://short.ly/ab12cd");
        assert_eq!(code.to_url("https://short.ly"), "https://short.ly/ab12cd");
    }

    #[test]
    fn deserialize_validates() {
        let code: ShortCode = serde_json::from_str("\"ab12cd\"").unwrap();
        assert_eq!(code.as_str(), "ab12cd");
        assert!(serde_json::from_str::<ShortCode>("\"nope\"").is_err());
    }
}
