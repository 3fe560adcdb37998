//! Data models for scraped articles and their processed representations.
//!
//! - [`ListingEntry`]: a title/link pair discovered on a section listing page
//! - [`RawArticle`]: what the scraper hands to the pipeline
//! - [`ArticleRecord`]: the enriched record with summary and sentiment
//! - [`FrontPage`]: the final, deduplicated sequence handed to presentation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Date used when the article page carries no publication date.
pub const NO_DATE: &str = "No Date";

/// Body used when an article page could not be retrieved.
pub const FETCH_FAILED_TEXT: &str = "Failed to retrieve the article";

/// A title/link pair discovered on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub link: String,
}

/// An article as scraped, before any text processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    /// Publication date as printed on the page, or [`NO_DATE`].
    pub date: String,
    pub title: String,
    pub link: String,
    pub raw_text: String,
}

impl RawArticle {
    /// The record produced when an article page cannot be retrieved.
    pub fn unavailable(entry: ListingEntry) -> Self {
        Self {
            date: NO_DATE.to_string(),
            title: entry.title,
            link: entry.link,
            raw_text: FETCH_FAILED_TEXT.to_string(),
        }
    }
}

/// Three-way polarity of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Compound scores at or beyond ±0.05 are polar; the boundary is inclusive.
    pub fn from_compound(score: f64) -> Self {
        if score >= 0.05 {
            SentimentLabel::Positive
        } else if score <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Display colour used by every presentation surface.
    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "green",
            SentimentLabel::Neutral => "gray",
            SentimentLabel::Negative => "red",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// Label plus a human readable explanation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub explanation: String,
}

impl Sentiment {
    pub fn from_compound(score: f64) -> Self {
        let label = SentimentLabel::from_compound(score);
        let explanation = match label {
            SentimentLabel::Neutral => "The sentiment is neutral.".to_string(),
            polar => format!("It is {polar} with a compound sentiment score of {score}."),
        };
        Self { label, explanation }
    }
}

/// A fully processed article.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleRecord {
    pub date: String,
    pub title: String,
    pub link: String,
    /// The article text as scraped (not normalized).
    pub raw_text: String,
    pub summary: String,
    pub sentiment_label: SentimentLabel,
    pub sentiment_explanation: String,
}

impl ArticleRecord {
    pub fn new(raw: RawArticle, summary: String, sentiment: Sentiment) -> Self {
        Self {
            date: raw.date,
            title: raw.title,
            link: raw.link,
            raw_text: raw.raw_text,
            summary,
            sentiment_label: sentiment.label,
            sentiment_explanation: sentiment.explanation,
        }
    }

    /// True for the sentinel produced when the article page was not retrieved.
    pub fn is_unavailable(&self) -> bool {
        self.date == NO_DATE && self.raw_text == FETCH_FAILED_TEXT
    }
}

/// The ordered, deduplicated articles of one run.
#[derive(Debug, Deserialize, Serialize)]
pub struct FrontPage {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// "morning", "afternoon" or "evening".
    pub time_of_day: String,
    pub local_time: String,
    pub articles: Vec<ArticleRecord>,
}

impl FrontPage {
    /// The record shown when the reader selects entry `index` of the listing.
    pub fn select(&self, index: usize) -> Option<&ArticleRecord> {
        self.articles.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, label: SentimentLabel) -> ArticleRecord {
        ArticleRecord {
            date: "12 mars 2024".to_string(),
            title: title.to_string(),
            link: "https://investir.lesechos.fr/a".to_string(),
            raw_text: "texte".to_string(),
            summary: String::new(),
            sentiment_label: label,
            sentiment_explanation: String::new(),
        }
    }

    #[test]
    fn test_label_thresholds_are_inclusive() {
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(0.0499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.0499), SentimentLabel::Neutral);
    }

    #[test]
    fn test_sentiment_explanation_embeds_score() {
        let s = Sentiment::from_compound(0.4404);
        assert_eq!(s.label, SentimentLabel::Positive);
        assert_eq!(
            s.explanation,
            "It is positive with a compound sentiment score of 0.4404."
        );

        let s = Sentiment::from_compound(-0.34);
        assert_eq!(
            s.explanation,
            "It is negative with a compound sentiment score of -0.34."
        );

        let s = Sentiment::from_compound(0.01);
        assert_eq!(s.explanation, "The sentiment is neutral.");
    }

    #[test]
    fn test_label_colors() {
        assert_eq!(SentimentLabel::Positive.color(), "green");
        assert_eq!(SentimentLabel::Neutral.color(), "gray");
        assert_eq!(SentimentLabel::Negative.color(), "red");
    }

    #[test]
    fn test_unavailable_article() {
        let raw = RawArticle::unavailable(ListingEntry {
            title: "Titre".to_string(),
            link: "https://investir.lesechos.fr/x".to_string(),
        });
        assert_eq!(raw.date, "No Date");
        assert_eq!(raw.raw_text, "Failed to retrieve the article");
        let sentinel = ArticleRecord::new(raw, String::new(), Sentiment::from_compound(0.0));
        assert!(sentinel.is_unavailable());
        assert!(!record("Titre", SentimentLabel::Neutral).is_unavailable());
    }

    #[test]
    fn test_record_serializes_lowercase_label() {
        let json = serde_json::to_string(&record("Titre", SentimentLabel::Negative)).unwrap();
        assert!(json.contains(r#""sentiment_label":"negative""#));
    }

    #[test]
    fn test_frontpage_select() {
        let page = FrontPage {
            local_date: "2024-03-12".to_string(),
            time_of_day: "morning".to_string(),
            local_time: "07:30:00".to_string(),
            articles: vec![
                record("A", SentimentLabel::Positive),
                record("B", SentimentLabel::Neutral),
            ],
        };
        assert_eq!(page.select(1).map(|a| a.title.as_str()), Some("B"));
        assert!(page.select(2).is_none());
    }
}
