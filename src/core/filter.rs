use crate::domain::model::{ExperienceBucket, ExperienceFilter, JobPosting};

/// 各區間比對的子字串
///
/// Buckets overlap: an experience text of `"5"` satisfies both
/// `3-5 years` and `5+ years`.
pub fn bucket_needles(bucket: ExperienceBucket) -> &'static [&'static str] {
    match bucket {
        ExperienceBucket::ZeroToOne => &["0-1", "0", "1"],
        ExperienceBucket::OneToTwo => &["1-2", "2"],
        ExperienceBucket::TwoToThree => &["2-3", "3"],
        ExperienceBucket::ThreeToFive => &["3-5", "4", "5"],
        ExperienceBucket::FivePlus => &["5+", "5", "6"],
    }
}

pub fn matches_experience(job: &JobPosting, bucket: ExperienceBucket) -> bool {
    let experience = job.experience.to_lowercase();
    bucket_needles(bucket)
        .iter()
        .any(|needle| experience.contains(needle))
}

/// 保留原始順序的子序列；`All` 時回傳完整清單
pub fn apply_filter(jobs: &[JobPosting], filter: ExperienceFilter) -> Vec<JobPosting> {
    match filter {
        ExperienceFilter::All => jobs.to_vec(),
        ExperienceFilter::Bucket(bucket) => jobs
            .iter()
            .filter(|job| matches_experience(job, bucket))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawJobPosting;

    fn job(title: &str, experience: &str) -> JobPosting {
        RawJobPosting {
            title: Some(title.to_string()),
            experience: Some(experience.to_string()),
            ..Default::default()
        }
        .sanitize()
    }

    #[test]
    fn test_bucket_table() {
        assert!(matches_experience(&job("a", "0-1 years"), ExperienceBucket::ZeroToOne));
        assert!(matches_experience(&job("a", "1 year"), ExperienceBucket::ZeroToOne));
        assert!(matches_experience(&job("a", "2 years"), ExperienceBucket::OneToTwo));
        assert!(matches_experience(&job("a", "3 years"), ExperienceBucket::TwoToThree));
        assert!(matches_experience(&job("a", "4 years"), ExperienceBucket::ThreeToFive));
        assert!(matches_experience(&job("a", "6+ years"), ExperienceBucket::FivePlus));
        assert!(!matches_experience(&job("a", "senior"), ExperienceBucket::FivePlus));
        assert!(!matches_experience(
            &job("a", "Experience Not Specified"),
            ExperienceBucket::ZeroToOne
        ));
    }

    #[test]
    fn test_buckets_overlap_on_shared_digits() {
        let five = job("a", "5");
        let hits: Vec<ExperienceBucket> = ExperienceBucket::ALL
            .into_iter()
            .filter(|b| matches_experience(&five, *b))
            .collect();
        assert_eq!(
            hits,
            vec![ExperienceBucket::ThreeToFive, ExperienceBucket::FivePlus]
        );

        // "10" 含有 "0" 與 "1"
        assert!(matches_experience(&job("a", "10+ years"), ExperienceBucket::ZeroToOne));
    }

    #[test]
    fn test_apply_filter_preserves_order() {
        let jobs = vec![
            job("first", "2-3 years"),
            job("second", "7 years"),
            job("third", "3 years"),
            job("fourth", "1 year"),
        ];

        let filtered = apply_filter(&jobs, ExperienceFilter::Bucket(ExperienceBucket::TwoToThree));
        let titles: Vec<&str> = filtered.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third"]);

        assert_eq!(apply_filter(&jobs, ExperienceFilter::All), jobs);
        assert!(apply_filter(&[], ExperienceFilter::Bucket(ExperienceBucket::FivePlus)).is_empty());
    }
}
