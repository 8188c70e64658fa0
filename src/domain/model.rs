use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const UNTITLED_JOB: &str = "Untitled Job";
pub const COMPANY_NOT_SPECIFIED: &str = "Company Not Specified";
pub const LOCATION_NOT_SPECIFIED: &str = "Location Not Specified";
pub const EXPERIENCE_NOT_SPECIFIED: &str = "Experience Not Specified";
pub const NO_DESCRIPTION: &str = "No description available";
pub const NULL_LINK: &str = "#";

/// 清理過的職缺，所有欄位保證存在且非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub description: String,
    pub link: String,
}

/// 爬蟲服務回傳的原始職缺，每個欄位都可能缺少或為 null
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJobPosting {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder.to_string(),
    }
}

impl RawJobPosting {
    pub fn sanitize(self) -> JobPosting {
        JobPosting {
            title: or_placeholder(self.title, UNTITLED_JOB),
            company: or_placeholder(self.company, COMPANY_NOT_SPECIFIED),
            location: or_placeholder(self.location, LOCATION_NOT_SPECIFIED),
            experience: or_placeholder(self.experience, EXPERIENCE_NOT_SPECIFIED),
            description: or_placeholder(self.description, NO_DESCRIPTION),
            link: or_placeholder(self.link, NULL_LINK),
        }
    }
}

/// `GET /scrape/{keyword}` 的回應本體
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeResponse {
    pub jobs: Option<Vec<RawJobPosting>>,
    pub error: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceBucket {
    ZeroToOne,
    OneToTwo,
    TwoToThree,
    ThreeToFive,
    FivePlus,
}

impl ExperienceBucket {
    pub const ALL: [ExperienceBucket; 5] = [
        ExperienceBucket::ZeroToOne,
        ExperienceBucket::OneToTwo,
        ExperienceBucket::TwoToThree,
        ExperienceBucket::ThreeToFive,
        ExperienceBucket::FivePlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBucket::ZeroToOne => "0-1 year",
            ExperienceBucket::OneToTwo => "1-2 years",
            ExperienceBucket::TwoToThree => "2-3 years",
            ExperienceBucket::ThreeToFive => "3-5 years",
            ExperienceBucket::FivePlus => "5+ years",
        }
    }
}

/// 下拉選單的六個選項；未選擇時與 `All` 行為相同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExperienceFilter {
    #[default]
    All,
    Bucket(ExperienceBucket),
}

pub const ALL_EXPERIENCE_LABEL: &str = "All Experience";

impl ExperienceFilter {
    pub fn options() -> Vec<ExperienceFilter> {
        std::iter::once(ExperienceFilter::All)
            .chain(ExperienceBucket::ALL.into_iter().map(ExperienceFilter::Bucket))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceFilter::All => ALL_EXPERIENCE_LABEL,
            ExperienceFilter::Bucket(bucket) => bucket.label(),
        }
    }
}

impl fmt::Display for ExperienceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExperienceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted.is_empty() || wanted == "all" {
            return Ok(ExperienceFilter::All);
        }
        ExperienceFilter::options()
            .into_iter()
            .find(|option| option.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                let labels: Vec<&str> = ExperienceFilter::options()
                    .iter()
                    .map(|o| o.label())
                    .collect();
                format!(
                    "Unknown experience level '{}'. Valid options: {}",
                    s.trim(),
                    labels.join(", ")
                )
            })
    }
}
