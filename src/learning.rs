// File: src/learning.rs
use crate::config::LexiconConfig;
use crate::core::lexicon::{LexiconBuilder, LexiconModel};
use crate::corpus::TaggedSentence;
use crate::error::Error;
use std::collections::HashMap;

/// Accumulates unigram word counts from tagged training sentences.
pub struct CountLearner {
    word_counts: HashMap<String, u64>,
    outside_counts: HashMap<String, u64>,
}

impl CountLearner {
    pub fn new() -> Self {
        Self {
            word_counts: HashMap::new(),
            outside_counts: HashMap::new(),
        }
    }

    pub fn learn(&mut self, sentence: &TaggedSentence) {
        for word in sentence.reference_words() {
            *self.word_counts.entry(word.as_str().to_string()).or_insert(0) += 1;
        }
        for syllable in sentence.outside_syllables() {
            *self.outside_counts.entry(syllable.to_string()).or_insert(0) += 1;
        }
    }

    pub fn learn_all<'a>(&mut self, sentences: impl IntoIterator<Item = &'a TaggedSentence>) {
        for sentence in sentences {
            self.learn(sentence);
        }
    }

    pub fn word_counts(&self) -> &HashMap<String, u64> {
        &self.word_counts
    }

    /// Syllables tagged Outside, e.g. punctuation and numbers.
    pub fn outside_counts(&self) -> &HashMap<String, u64> {
        &self.outside_counts
    }

    /// Smooths the learned counts together with `external` resource words.
    pub fn into_lexicon<I, S>(self, config: &LexiconConfig, external: I) -> Result<LexiconModel, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ambiguous = self
            .outside_counts
            .keys()
            .filter(|syllable| self.word_counts.contains_key(*syllable))
            .count();
        if ambiguous > 0 {
            log::debug!("{} outside syllables also occur as words", ambiguous);
        }

        let mut builder = LexiconBuilder::new(config)?;
        builder.add_counts(self.word_counts);
        builder.add_external_words(external);
        Ok(builder.build()?)
    }
}

impl Default for CountLearner {
    fn default() -> Self {
        Self::new()
    }
}
