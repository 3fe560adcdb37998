//! Sentence and token segmentation.
//!
//! Sentences end at `.`, `!`, `?` or `…` (plus any trailing closing quotes or
//! brackets) when followed by whitespace or the end of the text, so decimals
//! like `3.5` stay inside their sentence. Tokens are words, elided articles
//! (`l'`, `qu'`) and single punctuation marks.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+['’]|\w+(?:[-.,]\w+)*|[^\w\s]").expect("token pattern")
});

const FRENCH_STOPWORDS: &str = include_str!("../../resources/stopwords_fr.txt");

/// A set of lowercase stop-words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The embedded French list.
    pub fn french() -> Self {
        Self::from_text(FRENCH_STOPWORDS)
    }

    /// Parse a word-per-line list; blank lines and `#` comments are skipped.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_lowercase().replace('’', "'"))
            .collect();
        Self { words }
    }

    #[cfg(test)]
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Read a word-per-line list from disk.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        std::fs::read_to_string(path).map(|text| Self::from_text(&text))
    }

    pub fn contains(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        if lower.contains('’') {
            self.words.contains(&lower.replace('’', "'"))
        } else {
            self.words.contains(&lower)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// One sentence of a document, addressed by its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    /// The sentence text without surrounding whitespace.
    pub text: &'a str,
    pub tokens: Vec<&'a str>,
}

/// Splits text into sentences and tokens and tags stop-words.
#[derive(Debug, Clone)]
pub struct Segmenter {
    stop_words: StopWords,
}

impl Segmenter {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Sentence {
                index,
                text,
                tokens: TOKEN.find_iter(text).map(|m| m.as_str()).collect(),
            })
            .collect()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// True when every character of `token` is a punctuation mark.
    pub fn is_punctuation(token: &str) -> bool {
        !token.is_empty() && token.chars().all(is_punctuation_char)
    }

    /// Tokens that count towards word frequencies.
    pub fn is_scoring(&self, token: &str) -> bool {
        !Self::is_punctuation(token) && !self.is_stop_word(token)
    }
}

fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '«' | '»' | '‘' | '’' | '“' | '”' | '…' | '–' | '—' | '·' | '•'
        )
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '»' | '’' | '”')
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminal(next) || is_closing(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        let at_boundary = chars.peek().is_none_or(|&(_, next)| next.is_whitespace());
        if at_boundary {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, span: &'a str) {
    let trimmed = span.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
