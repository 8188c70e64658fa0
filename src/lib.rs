pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{toml_config::TomlConfig, Settings};

pub use adapters::{RetryingSource, ScraperClient};
pub use app::{SearchController, SearchState, ViewStatus};
pub use crate::core::KeywordNormalizer;
pub use domain::model::{ExperienceBucket, ExperienceFilter, JobPosting};
pub use domain::ports::JobSource;
pub use utils::error::{AppError, FetchError, Result};
