use std::fmt;

/// Provider-side news category. The set is fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    Technology,
    Health,
    Business,
    Cryptocurrency,
}

impl NewsCategory {
    /// The category string in the provider's vocabulary.
    pub fn provider_name(&self) -> &'static str {
        match self {
            NewsCategory::Technology => "technology",
            NewsCategory::Health => "health",
            NewsCategory::Business => "business",
            NewsCategory::Cryptocurrency => "cryptocurrency",
        }
    }

    /// Cryptocurrency is not in the provider's standard top-headlines set, so
    /// it goes through the keyword-search endpoint instead.
    pub fn uses_keyword_search(&self) -> bool {
        matches!(self, NewsCategory::Cryptocurrency)
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.provider_name())
    }
}
