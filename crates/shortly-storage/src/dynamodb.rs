use crate::validate_table_name;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use jiff::Timestamp;
use shortly_core::repository::Result;
use shortly_core::{ReadRepository, Repository, ShortCode, ShortLinkRecord, StorageError};
use std::collections::HashMap;
use tracing::trace;

const SHORT_CODE_ATTR: &str = "shortCode";
const LONG_URL_ATTR: &str = "longUrl";
const CREATED_AT_ATTR: &str = "createdAt";

/// DynamoDB implementation of the repository contract.
///
/// Items carry three string attributes: `shortCode` (partition key),
/// `longUrl` and `createdAt` (RFC 3339). Writes are unconditional
/// `PutItem` calls, so a colliding code replaces the previous item.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table: String,
}

impl DynamoDbRepository {
    /// Creates a repository from an existing client.
    pub fn new(client: Client, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        validate_table_name(&table, &['-', '.'])?;
        Ok(Self { client, table })
    }

    /// Creates a repository using the default AWS configuration chain.
    pub async fn from_env(table: impl Into<String>) -> Result<Self> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table)
    }

    /// Creates the backing table with on-demand billing.
    pub async fn create_table(&self) -> Result<()> {
        let key_attribute = AttributeDefinition::builder()
            .attribute_name(SHORT_CODE_ATTR)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| StorageError::InvalidConfig(e.to_string()))?;
        let key_schema = KeySchemaElement::builder()
            .attribute_name(SHORT_CODE_ATTR)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| StorageError::InvalidConfig(e.to_string()))?;

        self.client
            .create_table()
            .table_name(&self.table)
            .attribute_definitions(key_attribute)
            .key_schema(key_schema)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    /// Returns the configured table name.
    pub fn table(&self) -> &str {
        &self.table
    }
}

fn map_sdk_error<E, R>(err: SdkError<E, R>) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    match &err {
        SdkError::TimeoutError(_) => StorageError::Timeout(message),
        SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            StorageError::Unavailable(message)
        }
        SdkError::ConstructionFailure(_) => StorageError::InvalidConfig(message),
        SdkError::ServiceError(context) => match context.err().code() {
            Some("ResourceNotFoundException") => StorageError::InvalidConfig(message),
            Some(
                "ProvisionedThroughputExceededException"
                | "ThrottlingException"
                | "RequestLimitExceeded",
            ) => StorageError::Unavailable(message),
            _ => StorageError::Query(message),
        },
        _ => StorageError::Operation(message),
    }
}

fn string_attr<'a>(item: &'a HashMap<String, AttributeValue>, name: &str) -> Result<&'a str> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .map(String::as_str)
        .ok_or_else(|| StorageError::InvalidData(format!("missing string attribute '{name}'")))
}

fn into_record(code: &ShortCode, item: &HashMap<String, AttributeValue>) -> Result<ShortLinkRecord> {
    let long_url = string_attr(item, LONG_URL_ATTR)?.to_owned();
    let created_at_raw = string_attr(item, CREATED_AT_ATTR)?;
    let created_at = created_at_raw.parse::<Timestamp>().map_err(|e| {
        StorageError::InvalidData(format!(
            "invalid createdAt timestamp '{}': {e}",
            created_at_raw
        ))
    })?;

    Ok(ShortLinkRecord {
        short_code: code.clone(),
        long_url,
        created_at,
    })
}

#[async_trait]
impl ReadRepository for DynamoDbRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>> {
        trace!(code = %code, table = %self.table, "dynamodb get");

        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(SHORT_CODE_ATTR, AttributeValue::S(code.to_string()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        output
            .item()
            .map(|item| into_record(code, item))
            .transpose()
    }
}

#[async_trait]
impl Repository for DynamoDbRepository {
    async fn put(&self, record: ShortLinkRecord) -> Result<()> {
        trace!(code = %record.short_code, table = %self.table, "dynamodb put");

        self.client
            .put_item()
            .table_name(&self.table)
            .item(SHORT_CODE_ATTR, AttributeValue::S(record.short_code.into()))
            .item(LONG_URL_ATTR, AttributeValue::S(record.long_url))
            .item(
                CREATED_AT_ATTR,
                AttributeValue::S(record.created_at.to_string()),
            )
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(pairs: &[(&str, &str)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), AttributeValue::S(v.to_string())))
            .collect()
    }

    #[test]
    fn item_converts_into_record() {
        let code = ShortCode::new("ab12cd").unwrap();
        let item = item(&[
            ("shortCode", "ab12cd"),
            ("longUrl", "https://example.com/page"),
            ("createdAt", "2024-05-01T12:00:00.123Z"),
        ]);

        let record = into_record(&code, &item).unwrap();
        assert_eq!(record.short_code, code);
        assert_eq!(record.long_url, "https://example.com/page");
        assert_eq!(record.created_at.to_string(), "2024-05-01T12:00:00.123Z");
    }

    #[test]
    fn item_without_long_url_is_invalid() {
        let code = ShortCode::new("ab12cd").unwrap();
        let item = item(&[("shortCode", "ab12cd"), ("createdAt", "2024-05-01T12:00:00Z")]);

        assert!(matches!(
            into_record(&code, &item),
            Err(StorageError::InvalidData(_))
        ));
    }

    #[test]
    fn item_with_bad_timestamp_is_invalid() {
        let code = ShortCode::new("ab12cd").unwrap();
        let item = item(&[
            ("shortCode", "ab12cd"),
            ("longUrl", "https://example.com"),
            ("createdAt", "yesterday"),
        ]);

        assert!(matches!(
            into_record(&code, &item),
            Err(StorageError::InvalidData(_))
        ));
    }

    #[test]
    fn numeric_long_url_is_invalid() {
        let code = ShortCode::new("ab12cd").unwrap();
        let mut item = item(&[("createdAt", "2024-05-01T12:00:00Z")]);
        item.insert("longUrl".to_string(), AttributeValue::N("42".to_string()));

        assert!(into_record(&code, &item).is_err());
    }
}
