//! Frequency-weighted extractive summarization.
//!
//! Every non-stop, non-punctuation token is counted and its count divided by
//! the highest count in the document, so the most frequent word weighs 1.0.
//! A sentence scores the sum of its tokens' weights, and the summary is the
//! `floor(sentences × ratio)` best sentences concatenated with no separator,
//! highest score first. Equal scores keep document order.

use crate::error::SummarizeError;
use crate::nlp::{Segmenter, Sentence};
use itertools::Itertools;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Per-document token weights in `(0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFrequencyTable {
    weights: HashMap<String, f64>,
}

impl WordFrequencyTable {
    /// Count scoring tokens across `sentences` and normalize by the maximum.
    ///
    /// Fails with [`SummarizeError::EmptyDocument`] when no token scores.
    pub fn build(
        segmenter: &Segmenter,
        sentences: &[Sentence<'_>],
    ) -> Result<Self, SummarizeError> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in sentences.iter().flat_map(|s| s.tokens.iter()) {
            if segmenter.is_scoring(token) {
                *counts.entry(token.to_lowercase()).or_insert(0) += 1;
            }
        }

        let max = counts
            .values()
            .copied()
            .max()
            .ok_or(SummarizeError::EmptyDocument)?;

        let weights = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max as f64))
            .collect();
        Ok(Self { weights })
    }

    pub fn weight(&self, token: &str) -> Option<f64> {
        self.weights.get(&token.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }
}

/// A scored sentence, by position in the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    pub index: usize,
    pub score: f64,
}

/// Scores of the sentences holding at least one weighted token, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScoreTable {
    scores: Vec<SentenceScore>,
}

impl SentenceScoreTable {
    pub fn build(frequencies: &WordFrequencyTable, sentences: &[Sentence<'_>]) -> Self {
        let scores = sentences
            .iter()
            .filter_map(|sentence| {
                let weights: Vec<f64> = sentence
                    .tokens
                    .iter()
                    .filter_map(|token| frequencies.weight(token))
                    .collect();
                (!weights.is_empty()).then(|| SentenceScore {
                    index: sentence.index,
                    score: weights.iter().sum(),
                })
            })
            .collect();
        Self { scores }
    }

    #[cfg(test)]
    pub fn score(&self, index: usize) -> Option<f64> {
        self.scores.iter().find(|s| s.index == index).map(|s| s.score)
    }

    /// The `n` best sentences, highest score first; ties go to the earlier sentence.
    pub fn top(&self, n: usize) -> Vec<SentenceScore> {
        self.scores
            .iter()
            .copied()
            .k_smallest_by(n, |a, b| {
                b.score.total_cmp(&a.score).then(a.index.cmp(&b.index))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }
}

/// Extractive summarizer over an injected [`Segmenter`].
#[derive(Debug, Clone)]
pub struct Summarizer {
    segmenter: Segmenter,
}

impl Summarizer {
    pub fn new(segmenter: Segmenter) -> Self {
        Self { segmenter }
    }

    /// Summarize already normalized text, keeping `floor(sentences × ratio)` sentences.
    ///
    /// # Errors
    ///
    /// - [`SummarizeError::InvalidRatio`] when `ratio` is outside `(0, 1]`
    /// - [`SummarizeError::EmptyDocument`] when no token is scorable
    #[instrument(level = "debug", skip_all, fields(bytes = normalized_text.len(), ratio = ratio))]
    pub fn summarize(&self, normalized_text: &str, ratio: f64) -> Result<String, SummarizeError> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(SummarizeError::InvalidRatio(ratio));
        }

        let sentences = self.segmenter.segment(normalized_text);
        let frequencies = WordFrequencyTable::build(&self.segmenter, &sentences)?;
        let scores = SentenceScoreTable::build(&frequencies, &sentences);

        let select = (sentences.len() as f64 * ratio).floor() as usize;
        let selected = scores.top(select);
        debug!(
            sentences = sentences.len(),
            vocabulary = frequencies.len(),
            scored = scores.len(),
            selected = selected.len(),
            "Summarized document"
        );

        Ok(selected
            .iter()
            .map(|s| sentences[s.index].text)
            .collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::StopWords;

    fn summarizer(stop_words: &[&str]) -> Summarizer {
        Summarizer::new(Segmenter::new(StopWords::from_list(stop_words)))
    }

    #[test]
    fn test_single_repeated_token_weighs_one() {
        let seg = Segmenter::new(StopWords::from_list(&["le"]));
        let sentences = seg.segment("gold gold le gold.");
        let table = WordFrequencyTable::build(&seg, &sentences).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.weight("gold"), Some(1.0));
        assert_eq!(table.weight("GOLD"), Some(1.0));
    }

    #[test]
    fn test_weights_normalized_by_max() {
        let seg = Segmenter::new(StopWords::from_list(&[]));
        let sentences = seg.segment("stocks rally. stocks rally again. bonds.");
        let table = WordFrequencyTable::build(&seg, &sentences).unwrap();
        assert_eq!(table.weight("stocks"), Some(1.0));
        assert_eq!(table.weight("again"), Some(0.5));
        assert_eq!(table.weight("."), None);

        let scores = SentenceScoreTable::build(&table, &sentences);
        assert_eq!(scores.score(0), Some(2.0));
        assert_eq!(scores.score(1), Some(2.5));
        assert_eq!(scores.score(2), Some(0.5));
    }

    #[test]
    fn test_sentence_without_scoring_tokens_is_absent() {
        let seg = Segmenter::new(StopWords::from_list(&["le", "la"]));
        let sentences = seg.segment("marché ferme. le la. marché.");
        let table = WordFrequencyTable::build(&seg, &sentences).unwrap();
        let scores = SentenceScoreTable::build(&table, &sentences);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.score(1), None);
    }

    #[test]
    fn test_summary_in_score_order_not_document_order() {
        let s = summarizer(&[]);
        let summary = s
            .summarize("stocks rally. stocks rally again. bonds.", 0.7)
            .unwrap();
        assert_eq!(summary, "stocks rally again.stocks rally.");
    }

    #[test]
    fn test_ties_go_to_earlier_sentence() {
        let s = summarizer(&[]);
        let summary = s.summarize("apple. banana. cherry.", 0.7).unwrap();
        assert_eq!(summary, "apple.banana.");
    }

    #[test]
    fn test_selection_count_is_floor_of_ratio() {
        let s = summarizer(&[]);
        let text = (0..10)
            .map(|i| format!("word{i} common."))
            .collect::<Vec<_>>()
            .join(" ");

        let summary = s.summarize(&text, 0.2).unwrap();
        assert_eq!(summary.matches('.').count(), 2);

        let summary = s.summarize(&text, 0.35).unwrap();
        assert_eq!(summary.matches('.').count(), 3);

        let summary = s.summarize(&text, 1.0).unwrap();
        assert_eq!(summary.matches('.').count(), 10);
    }

    #[test]
    fn test_ratio_rounding_to_zero_gives_empty_summary() {
        let s = summarizer(&[]);
        assert_eq!(s.summarize("one sentence only.", 0.2).unwrap(), "");
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let s = summarizer(&["le", "la"]);
        assert_eq!(s.summarize("", 0.2), Err(SummarizeError::EmptyDocument));
        assert_eq!(
            s.summarize("le la. la, le !", 0.5),
            Err(SummarizeError::EmptyDocument)
        );
    }

    #[test]
    fn test_invalid_ratio() {
        let s = summarizer(&[]);
        assert_eq!(s.summarize("a b.", 0.0), Err(SummarizeError::InvalidRatio(0.0)));
        assert_eq!(s.summarize("a b.", 1.5), Err(SummarizeError::InvalidRatio(1.5)));
        assert!(matches!(
            s.summarize("a b.", f64::NAN),
            Err(SummarizeError::InvalidRatio(_))
        ));
    }

    #[test]
    fn test_summary_is_deterministic() {
        let s = Summarizer::new(Segmenter::new(StopWords::french()));
        let text = "le cac 40 progresse. les banques progressent. le pétrole recule. \
                    les banques et le cac 40 progressent encore. rien de neuf.";
        let first = s.summarize(text, 0.4).unwrap();
        for _ in 0..5 {
            assert_eq!(s.summarize(text, 0.4).unwrap(), first);
        }
        assert_eq!(first, "les banques et le cac 40 progressent encore.le cac 40 progresse.");
    }
}
