//! Lexicon-based compound polarity scoring.
//!
//! Scoring follows the VADER rules: every lexicon word contributes its valence,
//! adjusted by boosters and negations among the three preceding words, by a
//! contrastive conjunction, and by exclamation/question emphasis. The sum is
//! squashed into `[-1, 1]` with `s / sqrt(s² + 15)`.

use crate::error::LexiconError;
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_LEXICON: &str = include_str!("../../resources/lexicon.tsv");

const BOOST_INCREMENT: f64 = 0.293;
const BOOST_DECREMENT: f64 = -0.293;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_BOOST: f64 = 0.292;
const QUESTION_BOOST: f64 = 0.18;
const NORMALIZATION_ALPHA: f64 = 15.0;

const INCREMENTS: &[&str] = &[
    "absolutely", "completely", "considerably", "deeply", "enormously", "especially",
    "extremely", "greatly", "highly", "hugely", "incredibly", "largely", "particularly",
    "really", "remarkably", "significantly", "strongly", "substantially", "totally",
    "tremendously", "very", "vraiment", "très", "fortement", "nettement", "largement",
    "particulièrement", "extrêmement", "considérablement", "sensiblement", "totalement",
    "énormément",
];

const DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "marginally", "partly", "scarcely", "slightly",
    "somewhat", "légèrement", "modérément", "faiblement", "peu", "presque", "quelque",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "neither", "never", "no", "none", "nope", "nor", "not",
    "nothing", "nowhere", "rarely", "seldom", "shouldnt", "wasnt", "werent", "without",
    "wont", "wouldnt", "ne", "pas", "jamais", "sans", "aucun", "aucune", "ni", "guère",
    "nullement", "rien",
];

const CONTRASTIVES: &[&str] = &["but", "mais"];

/// Valences for known words, loaded once and then shared read-only.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// The lexicon bundled with the binary.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::parse(EMBEDDED_LEXICON)
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Parse `token<TAB>valence[<TAB>...]` lines; `#` starts a comment line.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut valences = HashMap::new();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let token = fields.next().map(str::trim).unwrap_or_default();
            let malformed = |reason: String| LexiconError::Malformed { line: n + 1, reason };
            let valence = fields
                .next()
                .ok_or_else(|| malformed(format!("missing valence for {token:?}")))?
                .trim()
                .parse::<f64>()
                .map_err(|e| malformed(e.to_string()))?;
            if token.is_empty() {
                return Err(malformed("empty token".to_string()));
            }
            valences.insert(token.to_lowercase(), valence);
        }
        if valences.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self { valences })
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Valence of `word`, falling back to the part after an elided article (`l'envolée`).
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied().or_else(|| {
            word.split_once(['\'', '’'])
                .and_then(|(_, rest)| self.valences.get(rest).copied())
        })
    }

    /// Compound polarity of `text` in `[-1, 1]`, rounded to four decimals.
    pub fn compound(&self, text: &str) -> f64 {
        let words = words(text);
        let mut sentiments = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            if booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            let Some(mut valence) = self.valence(word) else {
                sentiments.push(0.0);
                continue;
            };
            for distance in 1..=i.min(3) {
                let previous = words[i - distance].as_str();
                if self.valence(previous).is_some() {
                    continue;
                }
                let mut scalar = booster(previous).unwrap_or(0.0);
                if valence < 0.0 {
                    scalar = -scalar;
                }
                scalar *= match distance {
                    2 => 0.95,
                    3 => 0.9,
                    _ => 1.0,
                };
                valence += scalar;
                if is_negation(previous) {
                    valence *= NEGATION_SCALAR;
                }
            }
            sentiments.push(valence);
        }

        if let Some(pivot) = words.iter().position(|w| CONTRASTIVES.contains(&w.as_str())) {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < pivot {
                    *s *= 0.5;
                } else if i > pivot {
                    *s *= 1.5;
                }
            }
        }

        let mut sum: f64 = sentiments.iter().sum();
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);
        (compound * 10_000.0).round() / 10_000.0
    }
}

/// Whitespace tokens, lowercased, with surrounding punctuation stripped from
/// words longer than two characters; single characters are dropped.
fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            let stripped =
                token.trim_matches(|c: char| c.is_ascii_punctuation() || "«»“”…".contains(c));
            if stripped.chars().count() <= 2 {
                token.to_lowercase()
            } else {
                stripped.to_lowercase()
            }
        })
        .filter(|word| word.chars().count() > 1)
        .collect()
}

fn booster(word: &str) -> Option<f64> {
    if INCREMENTS.contains(&word) {
        Some(BOOST_INCREMENT)
    } else if DECREMENTS.contains(&word) {
        Some(BOOST_DECREMENT)
    } else {
        None
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
        || word.contains("n't")
        || word.starts_with("n'")
        || word.starts_with("n’")
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * EXCLAMATION_BOOST;
    let questions = match text.matches('?').count() {
        n @ 2..=3 => n as f64 * QUESTION_BOOST,
        n if n > 3 => 0.96,
        _ => 0.0,
    };
    exclamations + questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::parse("good\t1.9\nbad\t-2.5\nprogresse\t1.6\nenvolée\t2.3\n").unwrap()
    }

    #[test]
    fn test_embedded_lexicon_parses() {
        let lex = Lexicon::embedded().unwrap();
        assert!(lex.len() > 100);
        assert_eq!(lex.valence("hausse"), Some(1.5));
        assert_eq!(lex.valence("chute"), Some(-2.3));
    }

    #[test]
    fn test_parse_ignores_comments_and_extra_columns() {
        let lex = Lexicon::parse("# comment\n\nGood\t1.9\t0.9\t[2, 2]\n").unwrap();
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.valence("good"), Some(1.9));
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(matches!(
            Lexicon::parse("good 1.9\n").unwrap_err(),
            LexiconError::Malformed { line: 1, .. }
        ));
        assert!(matches!(
            Lexicon::parse("ok\t1\nbad\tvery\n").unwrap_err(),
            LexiconError::Malformed { line: 2, .. }
        ));
        assert!(matches!(
            Lexicon::parse("\t1.0\n").unwrap_err(),
            LexiconError::Malformed { line: 1, .. }
        ));
        assert!(matches!(
            Lexicon::parse("# only a comment\n").unwrap_err(),
            LexiconError::Empty
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Lexicon::load(Path::new("/nonexistent/lexicon.tsv")).unwrap_err();
        assert!(matches!(err, LexiconError::Read(_)));
    }

    #[test]
    fn test_single_word_compound() {
        assert_eq!(lexicon().compound("good"), 0.4404);
        assert_eq!(lexicon().compound("bad"), -0.5423);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        assert_eq!(lexicon().compound("the market opened"), 0.0);
        assert_eq!(lexicon().compound(""), 0.0);
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        assert_eq!(lexicon().compound("not good"), -0.3412);
        assert_eq!(lexicon().compound("le titre ne progresse pas"), -0.2924);
    }

    #[test]
    fn test_booster_increases_intensity() {
        assert_eq!(lexicon().compound("very good"), 0.4927);
        assert_eq!(lexicon().compound("slightly good"), 0.3832);
    }

    #[test]
    fn test_contrastive_conjunction() {
        assert_eq!(lexicon().compound("good but bad"), -0.5859);
        assert_eq!(lexicon().compound("good mais bad"), -0.5859);
    }

    #[test]
    fn test_exclamation_emphasis() {
        assert_eq!(lexicon().compound("good!!"), 0.5399);
    }

    #[test]
    fn test_elided_article_falls_back() {
        assert_eq!(lexicon().compound("l'envolée du titre"), 0.5106);
    }
}
