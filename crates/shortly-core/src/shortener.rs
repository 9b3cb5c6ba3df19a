use crate::repository::ShortLinkRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a short link for `long_url` and returns the stored record.
    async fn shorten(&self, long_url: String) -> Result<ShortLinkRecord>;

    /// Resolves a short code to its stored record.
    /// Returns `None` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>>;
}
