//! Sentiment labelling over a lexicon that is loaded on first use.

use super::Lexicon;
use crate::error::SentimentError;
use crate::models::Sentiment;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing::{error, info, instrument};

/// Where the lexicon comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    Embedded,
    File(PathBuf),
}

impl LexiconSource {
    pub fn name(&self) -> String {
        match self {
            LexiconSource::Embedded => "<embedded>".to_string(),
            LexiconSource::File(path) => path.display().to_string(),
        }
    }

    fn load(&self) -> Result<Lexicon, SentimentError> {
        let loaded = match self {
            LexiconSource::Embedded => Lexicon::embedded(),
            LexiconSource::File(path) => Lexicon::load(path),
        };
        loaded.map_err(|source| SentimentError::LexiconUnavailable {
            source_name: self.name(),
            source,
        })
    }
}

/// Labels text as positive, neutral or negative.
///
/// The lexicon is read the first time a text is scored and reused for the
/// lifetime of the classifier. Initialization runs at most once even when the
/// classifier is shared between threads. A failed load is not cached, so the
/// error surfaces on every call until the resource becomes readable.
#[derive(Debug)]
pub struct SentimentClassifier {
    source: LexiconSource,
    lexicon: OnceCell<Lexicon>,
}

impl SentimentClassifier {
    pub fn new(source: LexiconSource) -> Self {
        Self {
            source,
            lexicon: OnceCell::new(),
        }
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.lexicon.get().is_some()
    }

    fn lexicon(&self) -> Result<&Lexicon, SentimentError> {
        self.lexicon.get_or_try_init(|| {
            let lexicon = self
                .source
                .load()
                .inspect_err(|e| error!(error = %e, "Lexicon load failed"))?;
            info!(
                source = %self.source.name(),
                entries = lexicon.len(),
                "Loaded sentiment lexicon"
            );
            Ok(lexicon)
        })
    }

    pub fn compound(&self, text: &str) -> Result<f64, SentimentError> {
        Ok(self.lexicon()?.compound(text))
    }

    #[instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn classify(&self, text: &str) -> Result<Sentiment, SentimentError> {
        self.compound(text).map(Sentiment::from_compound)
    }
}
