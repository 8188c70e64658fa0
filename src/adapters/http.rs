use crate::domain::model::{JobPosting, ScrapeResponse};
use crate::domain::ports::{ConfigProvider, JobSource};
use crate::utils::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://assingment-dexyai.onrender.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// 爬蟲服務客戶端：`GET {base_url}/scrape/{keyword}`
#[derive(Debug, Clone)]
pub struct ScraperClient {
    client: Client,
    base_url: Url,
}

impl ScraperClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            FetchError::RequestSetupError(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::RequestSetupError(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestSetupError(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self, FetchError> {
        Self::new(config.base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 關鍵字作為單一路徑片段加入，特殊字元會被百分比編碼
    pub fn search_url(&self, keyword: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                FetchError::RequestSetupError(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("scrape")
            .push(keyword);
        Ok(url)
    }
}

/// 解析成功回應；缺少 `jobs` 或清單為空都視為查無結果
pub fn parse_jobs(body: &[u8]) -> Result<Vec<JobPosting>, FetchError> {
    let response: ScrapeResponse = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Unrecognised response body: {}", e);
        FetchError::EmptyResult
    })?;

    if let Some(reason) = &response.error {
        tracing::debug!("Scraper reported: {}", reason);
    }

    match response.jobs {
        Some(jobs) if !jobs.is_empty() => {
            Ok(jobs.into_iter().map(|raw| raw.sanitize()).collect())
        }
        _ => Err(FetchError::EmptyResult),
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ScrapeResponse>(body)
        .ok()
        .and_then(|r| r.message)
}

#[async_trait]
impl JobSource for ScraperClient {
    async fn fetch_jobs(&self, keyword: &str) -> Result<Vec<JobPosting>, FetchError> {
        if keyword.trim().is_empty() {
            return Err(FetchError::InvalidInput);
        }

        let url = self.search_url(keyword)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(&e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(status.as_u16(), error_message(&body)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_transport(&e))?;
        let jobs = parse_jobs(&body)?;

        tracing::info!("Fetched {} jobs for '{}'", jobs.len(), keyword);
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{COMPANY_NOT_SPECIFIED, NULL_LINK};

    #[test]
    fn test_search_url_encodes_keyword_as_one_segment() {
        let client = ScraperClient::new("https://jobs.example.com", DEFAULT_TIMEOUT).unwrap();

        assert_eq!(
            client.search_url("javascript-developer").unwrap().as_str(),
            "https://jobs.example.com/scrape/javascript-developer"
        );
        assert_eq!(
            client.search_url("data scientist").unwrap().as_str(),
            "https://jobs.example.com/scrape/data%20scientist"
        );
        assert_eq!(
            client.search_url("c#/.net").unwrap().as_str(),
            "https://jobs.example.com/scrape/c%23%2F.net"
        );
    }

    #[test]
    fn test_search_url_keeps_base_path() {
        let client = ScraperClient::new("http://localhost:8000/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.search_url("ruby-developer").unwrap().as_str(),
            "http://localhost:8000/api/scrape/ruby-developer"
        );
    }

    #[test]
    fn test_invalid_base_url_is_setup_error() {
        assert!(matches!(
            ScraperClient::new("not a url", DEFAULT_TIMEOUT),
            Err(FetchError::RequestSetupError(_))
        ));
        assert!(matches!(
            ScraperClient::new("mailto:jobs@example.com", DEFAULT_TIMEOUT),
            Err(FetchError::RequestSetupError(_))
        ));
    }

    #[test]
    fn test_parse_jobs_sanitizes_records() {
        let body = serde_json::json!({
            "jobs": [
                {"title": "Frontend Engineer", "company": null, "experience": "2-3 years"},
                {}
            ]
        });

        let jobs = parse_jobs(body.to_string().as_bytes()).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Frontend Engineer");
        assert_eq!(jobs[0].company, COMPANY_NOT_SPECIFIED);
        assert_eq!(jobs[1].link, NULL_LINK);
    }

    #[test]
    fn test_parse_jobs_rejects_unrecognised_bodies() {
        assert_eq!(parse_jobs(br#"{"jobs": []}"#), Err(FetchError::EmptyResult));
        assert_eq!(
            parse_jobs(br#"{"error": "No jobs found or scraping failed"}"#),
            Err(FetchError::EmptyResult)
        );
        assert_eq!(parse_jobs(b"<html></html>"), Err(FetchError::EmptyResult));
        assert_eq!(parse_jobs(b"[1, 2]"), Err(FetchError::EmptyResult));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message": "rate limited"}"#),
            Some("rate limited".to_string())
        );
        assert_eq!(error_message("Bad Gateway"), None);
    }

    #[tokio::test]
    async fn test_blank_keyword_is_rejected_without_request() {
        let client = ScraperClient::new("http://127.0.0.1:9", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            client.fetch_jobs("   ").await,
            Err(FetchError::InvalidInput)
        );
    }
}
