use async_trait::async_trait;
use shortly_core::{Repository, ShortCode, ShortLinkRecord, Shortener, ShortenerError};
use shortly_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator`. Generated codes are
/// written without an existence check, so a collision replaces the
/// earlier record.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_shared_repository(Arc::new(repository), generator)
    }

    /// Creates a service on top of a repository that is also used elsewhere.
    pub fn with_shared_repository(repository: Arc<R>, generator: G) -> Self {
        Self {
            repository,
            generator: Arc::new(generator),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn generate_code(&self) -> ShortCode {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, long_url: String) -> Result<ShortLinkRecord, ShortenerError> {
        if long_url.is_empty() {
            return Err(ShortenerError::EmptyUrl);
        }

        let record = ShortLinkRecord::new(self.generate_code(), long_url);
        self.repository.put(record.clone()).await?;

        debug!(code = %record.short_code, url = %record.long_url, "stored short link");
        Ok(record)
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<ShortLinkRecord>, ShortenerError> {
        trace!(code = %code, "resolving short code");
        Ok(self.repository.get(code).await?)
    }
}
