use crate::domain::model::JobPosting;
use crate::domain::ports::JobSource;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_RETRY_ATTEMPTS: u32 = 2;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// 失敗時整個重新呼叫來源，最多 `attempts` 次，回傳最後一次的錯誤
#[derive(Debug, Clone)]
pub struct RetryingSource<S> {
    inner: S,
    attempts: u32,
    delay: Duration,
}

impl<S: JobSource> RetryingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            attempts: DEFAULT_RETRY_ATTEMPTS,
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[async_trait]
impl<S: JobSource> JobSource for RetryingSource<S> {
    async fn fetch_jobs(&self, keyword: &str) -> Result<Vec<JobPosting>, FetchError> {
        let mut attempt = 1;
        loop {
            match self.inner.fetch_jobs(keyword).await {
                Ok(jobs) => return Ok(jobs),
                Err(e) if attempt >= self.attempts => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        "⚠️ Attempt {}/{} failed: {}. Retrying in {:?}",
                        attempt,
                        self.attempts,
                        e,
                        self.delay
                    );
                    attempt += 1;
                    tokio::time::sleep(self.delay).await;
                }
            }
        }
    }
}
