use crate::error::Result;
use crate::repository::{UrlRecord, UrlRepository};
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use dashmap::DashMap;

/// In-memory implementation of the repository using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, UrlRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl UrlRepository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        self.storage.insert(code.as_str().to_owned(), record);
        Ok(())
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self.storage.get(code.as_str()).map(|entry| entry.clone()))
    }

    async fn record_click(&self, code: &ShortCode) -> Result<bool> {
        match self.storage.get_mut(code.as_str()) {
            Some(mut entry) => {
                entry.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn code(s: &str) -> ShortCode {
        ShortCode::new(s)
    }

    fn record(url: &str) -> UrlRecord {
        UrlRecord {
            original_url: url.to_string(),
            clicks: 0,
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
        assert_eq!(result.clicks, 0);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.get(&code("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn record_click_increments_counter() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        assert!(repo.record_click(&code("abc123")).await.unwrap());
        assert!(repo.record_click(&code("abc123")).await.unwrap());

        let result = repo.get(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.clicks, 2);
    }

    #[tokio::test]
    async fn record_click_on_unknown_code() {
        let repo = InMemoryRepository::new();

        assert!(!repo.record_click(&code("nope")).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new(format!("code-{:03}", i));
                repo.insert(&c, record(&format!("https://example{}.com", i)))
                    .await
                    .unwrap();
            });
            handles.push(handle);
        }

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            let handle = tokio::spawn(async move {
                let c = ShortCode::new(format!("code-{:03}", i));
                let _ = repo.record_click(&c).await;
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let c = ShortCode::new(format!("code-{:03}", i));
            let result = repo.get(&c).await.unwrap().unwrap();
            assert_eq!(result.original_url, format!("https://example{}.com", i));
        }
    }
}
