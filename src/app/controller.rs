use crate::core::filter::apply_filter;
use crate::core::normalize::KeywordNormalizer;
use crate::core::pagination::{page_range, total_pages, DEFAULT_PAGE_SIZE};
use crate::domain::model::{ExperienceFilter, JobPosting};
use crate::domain::ports::JobSource;
use crate::utils::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// 一次已開始的搜尋；完成時憑 `generation` 判斷結果是否過期
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub keyword: String,
}

/// 目前頁面的唯讀視圖
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub items: &'a [JobPosting],
    pub current_page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// 畫面的全部狀態。所有變更都透過下列轉換函式進行。
#[derive(Debug, Clone)]
pub struct SearchState {
    keyword: String,
    normalized_keyword: Option<String>,
    jobs: Vec<JobPosting>,
    filtered: Vec<JobPosting>,
    experience: ExperienceFilter,
    current_page: usize,
    page_size: usize,
    status: ViewStatus,
    error: Option<String>,
    failure: Option<FetchError>,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SearchState {
    pub fn new(page_size: usize) -> Self {
        Self {
            keyword: String::new(),
            normalized_keyword: None,
            jobs: Vec::new(),
            filtered: Vec::new(),
            experience: ExperienceFilter::All,
            current_page: 1,
            page_size: page_size.max(1),
            status: ViewStatus::Idle,
            error: None,
            failure: None,
            generation: 0,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn normalized_keyword(&self) -> Option<&str> {
        self.normalized_keyword.as_deref()
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn filtered(&self) -> &[JobPosting] {
        &self.filtered
    }

    pub fn experience(&self) -> ExperienceFilter {
        self.experience
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn failure(&self) -> Option<&FetchError> {
        self.failure.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// 空白關鍵字不發出請求，只設定錯誤訊息
    pub fn begin_search(&mut self, normalizer: &KeywordNormalizer) -> Option<SearchTicket> {
        if self.keyword.trim().is_empty() {
            tracing::debug!("Ignoring search with blank keyword");
            self.fail(FetchError::InvalidInput);
            return None;
        }

        if self.status == ViewStatus::Loading {
            tracing::debug!(
                "Search {} superseded before completion",
                self.generation
            );
        }

        let normalized = normalizer.normalize(&self.keyword);
        self.generation += 1;
        self.status = ViewStatus::Loading;
        self.error = None;
        self.failure = None;
        self.current_page = 1;
        self.normalized_keyword = Some(normalized.clone());

        tracing::debug!(
            "Search {} started: '{}' -> '{}'",
            self.generation,
            self.keyword,
            normalized
        );

        Some(SearchTicket {
            generation: self.generation,
            keyword: normalized,
        })
    }

    /// 套用搜尋結果；過期的結果會被丟棄並回傳 `false`
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<JobPosting>, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::warn!(
                "Discarding stale result for search {} (latest is {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        let result = match result {
            Ok(jobs) if jobs.is_empty() => Err(FetchError::EmptyResult),
            other => other,
        };

        match result {
            Ok(jobs) => {
                self.jobs = jobs;
                self.refilter();
                self.status = ViewStatus::Success;
                tracing::debug!(
                    "Search {} succeeded: {} jobs, {} after filter",
                    ticket.generation,
                    self.jobs.len(),
                    self.filtered.len()
                );
            }
            Err(e) => {
                self.jobs.clear();
                self.filtered.clear();
                self.current_page = 1;
                self.status = ViewStatus::Error;
                tracing::debug!("Search {} failed: {}", ticket.generation, e);
                self.fail(e);
            }
        }
        true
    }

    /// 只重新篩選現有結果，不重新抓取；搜尋進行中時拒絕並回傳 `false`
    pub fn select_experience(&mut self, filter: ExperienceFilter) -> bool {
        if self.is_loading() {
            tracing::debug!("Ignoring experience change to '{}' while loading", filter);
            return false;
        }
        self.experience = filter;
        self.refilter();
        true
    }

    /// 直接跳到第 `page` 頁，不做範圍檢查
    pub fn paginate(&mut self, page: usize) {
        self.current_page = page;
    }

    /// `page` 是否落在 `[1, total_pages]`；沒有結果時第 1 頁仍有效
    pub fn page_in_range(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages().max(1)
    }

    /// 有範圍檢查的跳頁，對應畫面上的頁碼控制
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !self.page_in_range(page) {
            return false;
        }
        self.paginate(page);
        true
    }

    pub fn next_page(&mut self) -> bool {
        if self.page_view().has_next {
            self.paginate(self.current_page + 1);
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page_view().has_previous {
            self.paginate(self.current_page - 1);
            true
        } else {
            false
        }
    }

    pub fn page_view(&self) -> PageView<'_> {
        let total_pages = self.total_pages();
        let range = page_range(self.current_page, self.page_size, self.filtered.len());
        PageView {
            items: &self.filtered[range],
            current_page: self.current_page,
            total_pages,
            total_results: self.filtered.len(),
            has_previous: self.current_page > 1,
            has_next: self.current_page < total_pages,
        }
    }

    fn fail(&mut self, e: FetchError) {
        self.error = Some(e.to_string());
        self.failure = Some(e);
    }

    fn refilter(&mut self) {
        self.filtered = apply_filter(&self.jobs, self.experience);
        self.current_page = 1;
    }
}

/// 將使用者動作接到抓取來源與狀態轉換上
pub struct SearchController<S: JobSource> {
    source: S,
    normalizer: KeywordNormalizer,
    state: SearchState,
}

impl<S: JobSource> SearchController<S> {
    pub fn new(source: S, normalizer: KeywordNormalizer, page_size: usize) -> Self {
        Self {
            source,
            normalizer,
            state: SearchState::new(page_size),
        }
    }

    pub fn with_defaults(source: S) -> Self {
        Self::new(source, KeywordNormalizer::default(), DEFAULT_PAGE_SIZE)
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.state.set_keyword(keyword);
    }

    /// 以目前關鍵字搜尋並回傳結束後的狀態
    pub async fn search(&mut self) -> ViewStatus {
        let Some(ticket) = self.state.begin_search(&self.normalizer) else {
            return self.state.status();
        };

        let result = self.source.fetch_jobs(&ticket.keyword).await;
        self.state.complete_search(&ticket, result);
        self.state.status()
    }

    pub async fn search_for(&mut self, keyword: impl Into<String>) -> ViewStatus {
        self.set_keyword(keyword);
        self.search().await
    }

    pub fn select_experience(&mut self, filter: ExperienceFilter) -> bool {
        self.state.select_experience(filter)
    }

    pub fn paginate(&mut self, page: usize) {
        self.state.paginate(page);
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.state.go_to_page(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.state.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.state.previous_page()
    }
}
