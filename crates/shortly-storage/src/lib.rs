//! Storage backends for short link records.
//!
//! Every backend implements [`Repository`] with the same contract: `put`
//! stores a record under its code without checking for an existing one,
//! and `get` returns `None` for unknown codes.

pub mod dynamodb;
pub mod memory;
pub mod mysql;

pub use dynamodb::DynamoDbRepository;
pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use shortly_core::{ReadRepository, Repository, ShortLinkRecord, StorageError};

/// Table name used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "URLShortenerTable";

/// Checks that a table name is a plain identifier.
///
/// SQL backends interpolate the table name into statements, so only
/// `[A-Za-z0-9_]` (DynamoDB additionally allows `-` and `.`) is accepted.
pub(crate) fn validate_table_name(
    table: &str,
    extra: &[char],
) -> Result<(), StorageError> {
    if table.is_empty() || table.len() > 255 {
        return Err(StorageError::InvalidConfig(format!(
            "table name must be 1-255 characters, got {}",
            table.len()
        )));
    }

    if !table
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || extra.contains(&c))
    {
        return Err(StorageError::InvalidConfig(format!(
            "table name contains unsupported characters: '{}'",
            table
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_table_name;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(validate_table_name("URLShortenerTable", &[]).is_ok());
        assert!(validate_table_name("short_links_v2", &[]).is_ok());
        assert!(validate_table_name("links-prod.eu", &['-', '.']).is_ok());
    }

    #[test]
    fn rejects_empty_and_injected_names() {
        assert!(validate_table_name("", &[]).is_err());
        assert!(validate_table_name("links; DROP TABLE users", &[]).is_err());
        assert!(validate_table_name("links-prod", &[]).is_err());
    }
}
