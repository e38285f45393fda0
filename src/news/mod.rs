mod category;
mod fetcher;

pub use category::NewsCategory;
pub use fetcher::{format_headlines, NewsFetcher, MAX_HEADLINES};
