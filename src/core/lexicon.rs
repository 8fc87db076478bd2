// File: src/core/lexicon.rs
use crate::config::LexiconConfig;
use crate::error::{ConfigError, LexiconError};
use std::collections::{HashMap, HashSet};

/// Special characters that always terminate word formation.
pub const DEFAULT_BREAKERS: [&str; 17] = [
    "!", "\"", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/", ":", ";", "=", ">", "?",
];

pub const DEFAULT_SMOOTHING: f64 = 0.01;

/// Count given to dictionary and gazetteer words never seen in training.
pub const DEFAULT_FALLBACK_COUNT: f64 = 0.5;

/// Frozen unigram lexicon: word -> `ln(count + smoothing)`, plus the breaker set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexiconModel {
    scores: HashMap<String, f64>,
    breakers: HashSet<String>,
}

/// Proof that a word is in the lexicon. Only `LexiconModel::entry` hands these out.
#[derive(Debug, Clone, Copy)]
pub struct KnownWord<'a> {
    word: &'a str,
    score: f64,
}

impl<'a> KnownWord<'a> {
    pub fn word(&self) -> &'a str {
        self.word
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl LexiconModel {
    /// Assembles a model from already-smoothed scores, checking its invariants.
    pub fn from_parts(
        scores: HashMap<String, f64>,
        breakers: HashSet<String>,
    ) -> Result<Self, LexiconError> {
        for (word, &score) in &scores {
            if word.trim().is_empty() {
                return Err(LexiconError::EmptyWord);
            }
            if !score.is_finite() {
                return Err(LexiconError::NonFiniteScore { word: word.clone(), score });
            }
        }
        Ok(Self { scores, breakers })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    pub fn entry<'a>(&'a self, word: &str) -> Option<KnownWord<'a>> {
        self.scores
            .get_key_value(word)
            .map(|(word, &score)| KnownWord { word: word.as_str(), score })
    }

    pub fn score(&self, word: &str) -> Result<f64, LexiconError> {
        self.scores
            .get(word)
            .copied()
            .ok_or_else(|| LexiconError::UnknownWord(word.to_string()))
    }

    pub fn is_breaker(&self, syllable: &str) -> bool {
        self.breakers.contains(syllable)
    }

    pub fn breakers(&self) -> &HashSet<String> {
        &self.breakers
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub(crate) fn into_parts(self) -> (HashMap<String, f64>, HashSet<String>) {
        (self.scores, self.breakers)
    }
}

/// Collects raw counts and external word lists, then smooths them once in `build`.
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    counts: HashMap<String, f64>,
    external: HashSet<String>,
    breakers: HashSet<String>,
    smoothing: f64,
    fallback_count: f64,
}

impl LexiconBuilder {
    pub fn new(config: &LexiconConfig) -> Result<Self, ConfigError> {
        if !(config.smoothing.is_finite() && config.smoothing > 0.0) {
            return Err(ConfigError::InvalidSmoothing(config.smoothing));
        }
        Ok(Self {
            counts: HashMap::new(),
            external: HashSet::new(),
            breakers: config.breakers.iter().cloned().collect(),
            smoothing: config.smoothing,
            fallback_count: config.fallback_count,
        })
    }

    /// Adds observed frequency for `word`. Blank words are ignored.
    pub fn add_count(&mut self, word: &str, count: f64) {
        let word = normalise(word);
        if word.is_empty() {
            return;
        }
        *self.counts.entry(word).or_insert(0.0) += count;
    }

    pub fn add_counts<I, S>(&mut self, counts: I)
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        for (word, count) in counts {
            self.add_count(word.as_ref(), count as f64);
        }
    }

    /// Registers a dictionary or gazetteer word with no observed count.
    pub fn add_external_word(&mut self, word: &str) {
        let word = normalise(word);
        if !word.is_empty() {
            self.external.insert(word);
        }
    }

    pub fn add_external_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_external_word(word.as_ref());
        }
    }

    /// Applies the fallback count to unseen external words, then replaces every
    /// count with `ln(count + smoothing)` and freezes the result.
    pub fn build(self) -> Result<LexiconModel, LexiconError> {
        let LexiconBuilder { mut counts, external, breakers, smoothing, fallback_count } = self;

        for word in external {
            counts.entry(word).or_insert(fallback_count);
        }

        let scores: HashMap<String, f64> = counts
            .into_iter()
            .map(|(word, count)| {
                let score = (count + smoothing).ln();
                (word, score)
            })
            .collect();

        log::debug!("built lexicon with {} words and {} breakers", scores.len(), breakers.len());
        LexiconModel::from_parts(scores, breakers)
    }
}

fn normalise(word: &str) -> String {
    word.split_whitespace().collect::<Vec<_>>().join(" ")
}
