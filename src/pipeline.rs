//! The article-processing pipeline.
//!
//! For each configured section: index → fetch → normalize → summarize →
//! classify, one article at a time. The primary section is kept whole, the
//! secondary section is subsampled with the configured stride, and the
//! concatenation is deduplicated by title.

use crate::config::{PipelineConfig, SourceConfig};
use crate::dedupe::{dedupe, stride_merge};
use crate::error::{PipelineError, SummarizeError};
use crate::http::Fetch;
use crate::models::{ArticleRecord, RawArticle};
use crate::nlp::normalize;
use crate::scrapers::investir;
use crate::sentiment::SentimentClassifier;
use crate::summarizer::Summarizer;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, instrument, warn};

/// Owns the fetcher and the language resources for one run.
#[derive(Debug)]
pub struct Pipeline<F> {
    fetcher: F,
    config: PipelineConfig,
    summarizer: Summarizer,
    classifier: SentimentClassifier,
}

impl<F: Fetch> Pipeline<F> {
    pub fn new(
        fetcher: F,
        config: PipelineConfig,
        summarizer: Summarizer,
        classifier: SentimentClassifier,
    ) -> Self {
        Self {
            fetcher,
            config,
            summarizer,
            classifier,
        }
    }

    /// Run both sections and return the final, deduplicated sequence.
    #[instrument(level = "info", skip_all)]
    pub async fn run(&self) -> Result<Vec<ArticleRecord>, PipelineError> {
        let primary = self.collect(&self.config.primary).await?;
        let secondary = self.collect(&self.config.secondary).await?;
        let (primary_count, secondary_count) = (primary.len(), secondary.len());

        let merged = stride_merge(primary, secondary, self.config.secondary_stride);
        let merged_count = merged.len();
        let articles = dedupe(merged, |a| a.title.clone());
        info!(
            primary = primary_count,
            secondary = secondary_count,
            stride = self.config.secondary_stride.get(),
            merged = merged_count,
            kept = articles.len(),
            "Merged and deduplicated sections"
        );
        Ok(articles)
    }

    /// Index one section and process its articles in listing order.
    #[instrument(level = "info", skip_all, fields(source = %source.name))]
    async fn collect(&self, source: &SourceConfig) -> Result<Vec<ArticleRecord>, PipelineError> {
        let entries = investir::index_articles(&self.fetcher, source).await?;

        let records: Vec<ArticleRecord> = stream::iter(entries)
            .then(|entry| async move {
                let raw = investir::fetch_article(&self.fetcher, entry, source).await?;
                self.process(raw)
            })
            .try_collect()
            .await?;

        let unavailable = records.iter().filter(|r| r.is_unavailable()).count();
        info!(count = records.len(), unavailable, "Processed section");
        Ok(records)
    }

    /// Normalize, summarize and classify one article.
    ///
    /// A document without scorable tokens gets an empty summary; any other
    /// failure aborts the run and names the article.
    #[instrument(level = "debug", skip_all, fields(url = %raw.link))]
    pub fn process(&self, raw: RawArticle) -> Result<ArticleRecord, PipelineError> {
        let normalized = normalize(&raw.raw_text);

        let summary = match self
            .summarizer
            .summarize(&normalized, self.config.summary_ratio)
        {
            Ok(summary) => summary,
            Err(SummarizeError::EmptyDocument) => {
                warn!("No scorable tokens; using an empty summary");
                String::new()
            }
            Err(source) => {
                return Err(PipelineError::Summarize {
                    url: raw.link.clone(),
                    source,
                });
            }
        };

        let sentiment =
            self.classifier
                .classify(&normalized)
                .map_err(|source| PipelineError::Sentiment {
                    url: raw.link.clone(),
                    source,
                })?;

        debug!(
            label = %sentiment.label,
            summary = %truncate_for_log(&summary, 120),
            "Processed article"
        );
        Ok(ArticleRecord::new(raw, summary, sentiment))
    }
}
