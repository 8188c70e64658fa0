use crate::domain::model::JobPosting;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// 依關鍵字取得職缺清單的來源（遠端爬蟲服務或測試替身）
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self, keyword: &str) -> Result<Vec<JobPosting>, FetchError>;
}

#[async_trait]
impl<T: JobSource + ?Sized> JobSource for Box<T> {
    async fn fetch_jobs(&self, keyword: &str) -> Result<Vec<JobPosting>, FetchError> {
        (**self).fetch_jobs(keyword).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn retry_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn page_size(&self) -> usize;
}
