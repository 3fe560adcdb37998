//! Rule-based sentiment classification.
//!
//! - [`lexicon`]: the word valences and the compound scoring rules
//! - [`classifier`]: threshold labelling over a lazily loaded lexicon

pub mod classifier;
pub mod lexicon;

pub use classifier::{LexiconSource, SentimentClassifier};
pub use lexicon::Lexicon;
