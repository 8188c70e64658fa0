pub mod filter;
pub mod normalize;
pub mod pagination;

pub use crate::domain::model::{ExperienceBucket, ExperienceFilter, JobPosting};
pub use crate::domain::ports::{ConfigProvider, JobSource};
pub use filter::{apply_filter, matches_experience};
pub use normalize::KeywordNormalizer;
pub use pagination::{page_range, total_pages};
