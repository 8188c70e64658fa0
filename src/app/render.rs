use crate::app::controller::SearchState;
use crate::domain::model::{JobPosting, NULL_LINK};
use std::fmt;

pub const TITLE: &str = "Job Search via WellFound";
pub const NO_RESULTS: &str = "No jobs found. Try a different keyword or experience level.";

fn write_job(f: &mut fmt::Formatter<'_>, index: usize, job: &JobPosting) -> fmt::Result {
    writeln!(f, "{:>3}. 💼 {}", index, job.title)?;
    writeln!(f, "     🏢 {} | 📍 {}", job.company, job.location)?;
    writeln!(f, "     Experience: {}", job.experience)?;
    if job.link != NULL_LINK {
        writeln!(f, "     🔗 {}", job.link)?;
    }
    Ok(())
}

/// 狀態的終端機畫面
pub struct View<'a>(pub &'a SearchState);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "Filter: {}", state.experience())?;

        if let Some(error) = state.error() {
            writeln!(f, "❌ {}", error)?;
        }

        if state.is_loading() {
            return writeln!(f, "⏳ Searching...");
        }

        let view = state.page_view();
        if view.total_results == 0 {
            // 錯誤已顯示在上方的橫幅
            if state.error().is_none() {
                writeln!(f, "{}", NO_RESULTS)?;
            }
            return Ok(());
        }

        writeln!(f, "{} Jobs Found", view.total_results)?;
        let first_index = view
            .current_page
            .saturating_sub(1)
            .saturating_mul(state.page_size())
            .saturating_add(1);
        for (offset, job) in view.items.iter().enumerate() {
            write_job(f, first_index + offset, job)?;
        }

        let prev = if view.has_previous { "◀ Prev" } else { "  " };
        let next = if view.has_next { "Next ▶" } else { "  " };
        writeln!(
            f,
            "{}  Page {} of {}  {}",
            prev, view.current_page, view.total_pages, next
        )
    }
}

/// 將目前狀態畫成終端機文字
pub fn render(state: &SearchState) -> String {
    View(state).to_string()
}
