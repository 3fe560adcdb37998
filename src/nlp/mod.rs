//! Text processing shared by the summarizer and the sentiment classifier.
//!
//! - [`normalize`]: lowercasing, reference-marker removal, whitespace folding
//! - [`segment`]: sentence and token segmentation with stop-word tagging

pub mod normalize;
pub mod segment;

pub use normalize::normalize;
pub use segment::{Segmenter, Sentence, StopWords};
