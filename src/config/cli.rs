use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::ExperienceFilter;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "job-search")]
#[command(about = "Search scraped job listings from the terminal")]
pub struct CliConfig {
    /// Keyword to search for; starts the interactive prompt when omitted
    pub keyword: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Retry failed searches
    #[arg(long)]
    pub retry: bool,

    #[arg(long)]
    pub retry_attempts: Option<u32>,

    /// Experience level, e.g. "2-3 years" or "all"
    #[arg(long, default_value = "All Experience")]
    pub experience: ExperienceFilter,

    /// Result page to print in one-shot mode
    #[arg(long, default_value = "1")]
    pub page: usize,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 依序套用預設值、設定檔與命令列參數，並驗證結果
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?.into_settings()
            }
            None => Settings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            settings.timeout_seconds = timeout;
        }
        if let Some(attempts) = self.retry_attempts {
            settings.retry_attempts = attempts;
        }

        validate_positive_number("page", self.page, 1)?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExperienceBucket;
    use crate::utils::error::AppError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_one_shot_arguments() {
        let cli = CliConfig::parse_from([
            "job-search",
            "react developer",
            "--experience",
            "3-5 years",
            "--page",
            "2",
            "--retry",
        ]);

        assert_eq!(cli.keyword.as_deref(), Some("react developer"));
        assert_eq!(
            cli.experience,
            ExperienceFilter::Bucket(ExperienceBucket::ThreeToFive)
        );
        assert_eq!(cli.page, 2);
        assert!(cli.retry);
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = CliConfig::parse_from(["job-search"]);
        assert!(cli.keyword.is_none());
        assert_eq!(cli.experience, ExperienceFilter::All);
        assert_eq!(cli.page, 1);
        assert_eq!(cli.resolve().unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_experience_is_rejected() {
        assert!(CliConfig::try_parse_from(["job-search", "--experience", "ten years"]).is_err());
    }

    #[test]
    fn test_command_line_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\nbase_url = \"http://file.example\"\ntimeout_seconds = 20\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "job-search",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--base-url",
            "http://flag.example",
        ]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.base_url, "http://flag.example");
        assert_eq!(settings.timeout_seconds, 20);
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig::parse_from(["job-search", "--timeout-secs", "0"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let cli = CliConfig::parse_from(["job-search", "python", "--page", "0"]);
        match cli.resolve() {
            Err(AppError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "page");
                assert_eq!(value, "0");
            }
            other => panic!("expected page validation error, got {:?}", other),
        }

        let cli = CliConfig::parse_from(["job-search", "python", "--page", "3"]);
        assert!(cli.resolve().is_ok());
    }
}
