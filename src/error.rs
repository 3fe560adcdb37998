//! Error types for each stage of the digest pipeline.
//!
//! Each stage owns its error enum; [`PipelineError`] is what the orchestrator
//! surfaces to `main` and always names the url it was working on.

use std::error::Error as StdError;
use thiserror::Error;

/// Failure at the fetch boundary.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    #[error("could not build request for {url}")]
    InvalidRequest {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl FetchError {
    /// Transport errors are worth retrying; a request that cannot be built never succeeds.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SummarizeError {
    #[error("document has no scorable tokens")]
    EmptyDocument,
    #[error("summary ratio must be in (0, 1], got {0}")]
    InvalidRatio(f64),
}

/// A lexicon file that cannot be used.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("could not read lexicon: {0}")]
    Read(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("lexicon has no entries")]
    Empty,
}

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("sentiment lexicon {source_name} unavailable: {source}")]
    LexiconUnavailable {
        source_name: String,
        #[source]
        source: LexiconError,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Fatal errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("could not fetch listing page {url}")]
    Listing {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("could not fetch article {url}")]
    Article {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("malformed article url {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
    #[error("sentiment classification failed for {url}")]
    Sentiment {
        url: String,
        #[source]
        source: SentimentError,
    },
    #[error("summarization failed for {url}")]
    Summarize {
        url: String,
        #[source]
        source: SummarizeError,
    },
}

/// Failure while writing an edition to disk.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("could not serialize front page")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
