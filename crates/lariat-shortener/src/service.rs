use crate::error::{Result, ShortenerError};
use crate::generator::CodeGenerator;
use crate::repository::{UrlRecord, UrlRepository};
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use std::sync::Arc;

/// A freshly created short link.
#[derive(Debug, Clone)]
pub struct ShortenedUrl {
    pub code: ShortCode,
    pub original_url: String,
    pub created_at: Timestamp,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates and stores a URL, returning the newly issued short link.
    async fn shorten(&self, original_url: String) -> Result<ShortenedUrl>;

    /// Looks up the record behind a short code.
    /// Returns `None` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Counts one click against a short code.
    /// Returns `false` if the code does not exist.
    async fn record_click(&self, code: &ShortCode) -> Result<bool>;
}

/// A concrete implementation of the `Shortener` trait.
///
/// Wraps a `UrlRepository` and a `CodeGenerator` to handle URL validation,
/// code generation and storage. The generator guarantees uniqueness of the
/// codes it hands out, so no collision retry is performed.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: UrlRepository, G: CodeGenerator> ShortenerService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    /// Validates that the URL has an http(s) scheme and a host.
    fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl("URL cannot be empty".to_string()));
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a scheme and host: {}",
                url
            )));
        };

        if rest.is_empty() {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL is missing a host: {}",
                url
            )));
        }

        let scheme = scheme.to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {}",
                scheme
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<R: UrlRepository, G: CodeGenerator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: String) -> Result<ShortenedUrl> {
        Self::validate_url(&original_url)?;

        let code = self.generator.generate()?;
        let created_at = Timestamp::now();

        let record = UrlRecord {
            original_url: original_url.clone(),
            clicks: 0,
            created_at,
        };
        self.repository.insert(&code, record).await?;

        Ok(ShortenedUrl {
            code,
            original_url,
            created_at,
        })
    }

    async fn resolve(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        self.repository.get(code).await
    }

    async fn record_click(&self, code: &ShortCode) -> Result<bool> {
        self.repository.record_click(code).await
    }
}
