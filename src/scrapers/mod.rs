//! Article source scrapers.
//!
//! Each scraper follows the same two-phase pattern:
//!
//! 1. **Indexing**: discover `(title, link)` pairs on a section listing page
//! 2. **Fetching**: download each article page and extract date and text
//!
//! | Source | Module | Notes |
//! |--------|--------|-------|
//! | Investir / Les Echos | [`investir`] | Selectors come from [`SourceConfig`](crate::config::SourceConfig) |
//!
//! Fetching never fails the batch: an article page that cannot be retrieved
//! becomes the "No Date" / "Failed to retrieve the article" record.

pub mod investir;
