#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::adapters::retry::{DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY};
use crate::core::normalize::{KeywordNormalizer, DEFAULT_SUFFIX, DEFAULT_TERMS};
use crate::core::pagination::DEFAULT_PAGE_SIZE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use std::collections::BTreeMap;
use std::time::Duration;

/// 合併預設值、設定檔與命令列後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub retry_attempts: u32,
    pub retry_delay_seconds: u64,
    pub page_size: usize,
    pub terms: Vec<String>,
    pub suffix: String,
    pub aliases: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay_seconds: DEFAULT_RETRY_DELAY.as_secs(),
            page_size: DEFAULT_PAGE_SIZE,
            terms: DEFAULT_TERMS.iter().map(|t| t.to_string()).collect(),
            suffix: DEFAULT_SUFFIX.to_string(),
            aliases: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn normalizer(&self) -> KeywordNormalizer {
        self.aliases.iter().fold(
            KeywordNormalizer::from_terms(&self.terms, &self.suffix),
            |normalizer, (term, slug)| normalizer.with_slug(term, slug),
        )
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("source.base_url", &self.base_url)?;
        validate_positive_number("source.timeout_seconds", self.timeout_seconds, 1)?;
        validate_positive_number("source.retry_attempts", self.retry_attempts, 1)?;
        validate_positive_number("view.page_size", self.page_size, 1)?;
        for term in &self.terms {
            validate_non_empty_string("normalization.terms", term)?;
        }
        for (term, slug) in &self.aliases {
            validate_non_empty_string("normalization.aliases", term)?;
            validate_non_empty_string(&format!("normalization.aliases.{}", term), slug)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert_eq!(settings.retry_attempts(), 2);
        assert_eq!(settings.page_size(), 5);
        assert_eq!(settings.normalizer(), KeywordNormalizer::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let settings = Settings {
            page_size: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            terms: vec!["react".to_string(), " ".to_string()],
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            base_url: "ftp://jobs.example.com".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_aliases_extend_normalizer() {
        let mut settings = Settings::default();
        settings
            .aliases
            .insert("golang".to_string(), "go-developer".to_string());

        let normalizer = settings.normalizer();
        assert_eq!(normalizer.normalize("golang developer"), "go-developer");
        assert_eq!(normalizer.normalize("react"), "react-developer");
    }
}
