//! Terminal rendering: the numbered listing and the detail view.

use crate::models::{ArticleRecord, FrontPage, SentimentLabel};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

fn colorize(text: &str, label: SentimentLabel) -> ColoredString {
    match label {
        SentimentLabel::Positive => text.green(),
        SentimentLabel::Neutral => text.bright_black(),
        SentimentLabel::Negative => text.red(),
    }
}

fn paint(text: &str, label: SentimentLabel, color: bool) -> String {
    if color {
        colorize(text, label).to_string()
    } else {
        text.to_string()
    }
}

/// `"{date} - {title}"`, the text of one listing entry.
pub fn listing_line(article: &ArticleRecord) -> String {
    format!("{} - {}", article.date, article.title)
}

/// One numbered line per article, coloured by sentiment when `color` is set.
///
/// The numbers are the indices accepted by [`FrontPage::select`].
pub fn render_listing(front_page: &FrontPage, color: bool) -> String {
    let mut out = String::new();
    for (i, article) in front_page.articles.iter().enumerate() {
        let _ = writeln!(
            out,
            "{i:>3}. {}",
            paint(&listing_line(article), article.sentiment_label, color)
        );
    }
    out
}

pub fn render_detail(article: &ArticleRecord, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Title: {}", article.title);
    let _ = writeln!(out, "Date: {}", article.date);
    let _ = writeln!(out, "Link: {}", article.link);
    let _ = writeln!(out, "\nSummary:\n{}", article.summary);
    let _ = writeln!(
        out,
        "\nSentiment: {}",
        paint(&article.sentiment_explanation, article.sentiment_label, color)
    );
    let _ = writeln!(out, "\nArticle:\n{}", article.raw_text.trim());
    out
}
