//! Rewrites free-text search input into the slug the scraping service expects.
//!
//! `"React"`, `"react developer"` and `"reactdeveloper"` all become
//! `"react-developer"`. Anything outside the term table passes through verbatim.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_TERMS: [&str; 9] = [
    "react",
    "python",
    "java",
    "javascript",
    "node",
    "angular",
    "vue",
    "ruby",
    "software",
];

pub const DEFAULT_SUFFIX: &str = "-developer";

static SPACED_DEVELOPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+developer$").expect("static pattern"));
static JOINED_DEVELOPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)developer$").expect("static pattern"));

/// 技術詞 -> slug 對照表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordNormalizer {
    slugs: HashMap<String, String>,
}

impl Default for KeywordNormalizer {
    fn default() -> Self {
        Self::from_terms(DEFAULT_TERMS, DEFAULT_SUFFIX)
    }
}

impl KeywordNormalizer {
    pub fn empty() -> Self {
        Self {
            slugs: HashMap::new(),
        }
    }

    /// 每個詞對應到 `<term><suffix>`
    pub fn from_terms<I, S>(terms: I, suffix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalizer = Self::empty();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() {
                continue;
            }
            let slug = format!("{}{}", term, suffix);
            normalizer.slugs.insert(term, slug);
        }
        normalizer
    }

    /// 新增或覆寫單一詞的 slug
    pub fn with_slug(mut self, term: &str, slug: &str) -> Self {
        self.slugs
            .insert(term.trim().to_lowercase(), slug.trim().to_string());
        self
    }

    pub fn slug_for(&self, term: &str) -> Option<&str> {
        self.slugs.get(term).map(String::as_str)
    }

    pub fn normalize(&self, input: &str) -> String {
        let lowered = input.trim().to_lowercase();

        if let Some(slug) = self.slug_for(&lowered) {
            return slug.to_string();
        }

        for pattern in [&*SPACED_DEVELOPER, &*JOINED_DEVELOPER] {
            if let Some(term) = pattern.captures(&lowered).and_then(|caps| caps.get(1)) {
                if let Some(slug) = self.slug_for(term.as_str()) {
                    return slug.to_string();
                }
            }
        }

        input.to_string()
    }
}
