use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored short link.
///
/// Records are written once and never updated; a later `put` with the
/// same code replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkRecord {
    /// The lookup key.
    pub short_code: ShortCode,
    /// The URL the short code redirects to.
    pub long_url: String,
    /// When the record was inserted.
    pub created_at: Timestamp,
}

impl ShortLinkRecord {
    /// Creates a record stamped with the current time.
    pub fn new(short_code: ShortCode, long_url: impl Into<String>) -> Self {
        Self {
            short_code,
            long_url: long_url.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores a record under its short code.
    ///
    /// There is no existence check: an existing record with the same code
    /// is overwritten.
    async fn put(&self, record: ShortLinkRecord) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let record = ShortLinkRecord {
            short_code: ShortCode::new("ab12cd").unwrap(),
            long_url: "https://example.com/page".to_string(),
            created_at: "2024-05-01T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["shortCode"], "ab12cd");
        assert_eq!(json["longUrl"], "https://example.com/page");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");

        let back: ShortLinkRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn new_stamps_creation_time() {
        let before = Timestamp::now();
        let record = ShortLinkRecord::new(ShortCode::new("000001").unwrap(), "https://a.example");
        assert!(record.created_at >= before);
        assert!(record.created_at <= Timestamp::now());
    }
}
