use crate::config::Settings;
use crate::utils::error::{AppError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern"));

/// 設定檔內容；未填的欄位沿用 `Settings` 預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub view: ViewConfig,
    pub normalization: NormalizationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    pub suffix: Option<String>,
    pub terms: Option<Vec<String>>,
    pub aliases: BTreeMap<String, String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCRAPER_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.source.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.source.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Some(attempts) = self.source.retry_attempts {
            settings.retry_attempts = attempts;
        }
        if let Some(delay) = self.source.retry_delay_seconds {
            settings.retry_delay_seconds = delay;
        }
        if let Some(page_size) = self.view.page_size {
            settings.page_size = page_size;
        }
        if let Some(suffix) = &self.normalization.suffix {
            settings.suffix = suffix.clone();
        }
        if let Some(terms) = &self.normalization.terms {
            settings.terms = terms.clone();
        }
        settings.aliases.extend(
            self.normalization
                .aliases
                .iter()
                .map(|(term, slug)| (term.clone(), slug.clone())),
        );
    }

    pub fn into_settings(self) -> Settings {
        let mut settings = Settings::default();
        self.apply_to(&mut settings);
        settings
    }
}
