// File: src/core/segmenter.rs
use crate::core::lexicon::LexiconModel;
use crate::core::types::{Segment, Segmentation, WordToken};
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Lexicon-driven segmentation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Greedy forward maximum matching.
    MaximumMatching,
    /// Maximum matching with one-syllable lookahead for overlap ambiguity
    /// and clumping of unknown syllable runs.
    #[default]
    EnhancedMaximumMatching,
}

impl Algorithm {
    pub fn selector(self) -> &'static str {
        match self {
            Algorithm::MaximumMatching => "mm",
            Algorithm::EnhancedMaximumMatching => "mm-plus",
        }
    }

    /// Segments one sentence. Nothing is carried between calls.
    /// Blank syllables are skipped so every token stays non-empty.
    pub fn segment<S: AsRef<str>>(self, lexicon: &LexiconModel, syllables: &[S]) -> Segmentation {
        let iter = syllables
            .iter()
            .map(|syllable| AsRef::<str>::as_ref(syllable))
            .filter(|syllable| !syllable.trim().is_empty());
        match self {
            Algorithm::MaximumMatching => drive(MaximumMatcher::new(lexicon), iter),
            Algorithm::EnhancedMaximumMatching => drive(EnhancedMatcher::new(lexicon), iter),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(Algorithm::MaximumMatching),
            "mm-plus" | "mm+" => Ok(Algorithm::EnhancedMaximumMatching),
            other => Err(ConfigError::InvalidAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Pending-buffer state shared by both matchers.
struct PendingWord<'a> {
    buffer: Vec<&'a str>,
    output: Vec<Segment>,
}

impl<'a> PendingWord<'a> {
    fn new() -> Self {
        Self { buffer: Vec::new(), output: Vec::new() }
    }

    /// Emits the first `count` buffered syllables as a token and keeps the rest.
    fn emit_head(&mut self, count: usize) {
        let rest = self.buffer.split_off(count);
        if let Some(token) = WordToken::from_syllables(&self.buffer) {
            self.output.push(Segment::Word(token));
        }
        self.buffer = rest;
    }

    fn flush(&mut self) {
        let len = self.buffer.len();
        self.emit_head(len);
    }

    fn pass_breaker(&mut self, syllable: &str) {
        self.flush();
        self.output.push(Segment::Breaker(syllable.to_string()));
    }

    fn joined(&self, range: std::ops::Range<usize>) -> String {
        self.buffer[range].join(" ")
    }

    fn finish(mut self) -> Segmentation {
        self.flush();
        Segmentation { segments: self.output }
    }
}

trait Matcher<'a> {
    fn feed(&mut self, syllable: &'a str);
    fn finish(self) -> Segmentation;
}

fn drive<'a, M: Matcher<'a>>(mut matcher: M, syllables: impl Iterator<Item = &'a str>) -> Segmentation {
    for syllable in syllables {
        matcher.feed(syllable);
    }
    matcher.finish()
}

struct MaximumMatcher<'a> {
    lexicon: &'a LexiconModel,
    state: PendingWord<'a>,
}

impl<'a> MaximumMatcher<'a> {
    fn new(lexicon: &'a LexiconModel) -> Self {
        Self { lexicon, state: PendingWord::new() }
    }
}

impl<'a> Matcher<'a> for MaximumMatcher<'a> {
    fn feed(&mut self, syllable: &'a str) {
        if self.lexicon.is_breaker(syllable) {
            self.state.pass_breaker(syllable);
            return;
        }
        if !self.state.buffer.is_empty() {
            let extended = format!("{} {}", self.state.joined(0..self.state.buffer.len()), syllable);
            if self.lexicon.contains(&extended) {
                self.state.buffer.push(syllable);
                return;
            }
        }
        self.state.flush();
        self.state.buffer.push(syllable);
    }

    fn finish(self) -> Segmentation {
        self.state.finish()
    }
}

/// What to do with the buffer after a syllable has been appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Accumulate,
    /// Emit the first `n` syllables as a word; the rest stay pending.
    EmitHead(usize),
}

struct EnhancedMatcher<'a> {
    lexicon: &'a LexiconModel,
    state: PendingWord<'a>,
}

impl<'a> EnhancedMatcher<'a> {
    fn new(lexicon: &'a LexiconModel) -> Self {
        Self { lexicon, state: PendingWord::new() }
    }

    fn decide(&self) -> Step {
        let buffer = &self.state.buffer;
        let len = buffer.len();

        if self.lexicon.contains(&self.state.joined(0..len)) {
            return Step::Accumulate;
        }
        if buffer.iter().all(|syllable| !self.lexicon.contains(syllable)) {
            return Step::Accumulate;
        }
        // Unreachable after the all-unknown rule; kept so the rule order stays intact.
        if len == 1 {
            return Step::Accumulate;
        }
        if len == 2 {
            return Step::EmitHead(1);
        }
        self.resolve_overlap()
    }

    /// Buffer is `a + [b, c]`: choose between `a | b c` and `a b | c`.
    fn resolve_overlap(&self) -> Step {
        let len = self.state.buffer.len();
        let split_a_bc = Step::EmitHead(len - 2);
        let split_ab_c = Step::EmitHead(len - 1);

        let a = self.state.joined(0..len - 2);
        let bc = self.state.joined(len - 2..len);
        let ab = self.state.joined(0..len - 1);
        let c = self.state.joined(len - 1..len);

        let (Some(a), Some(bc)) = (self.lexicon.entry(&a), self.lexicon.entry(&bc)) else {
            return split_ab_c;
        };
        let (Some(ab), Some(c)) = (self.lexicon.entry(&ab), self.lexicon.entry(&c)) else {
            return split_ab_c;
        };

        // Equal sums fall through to `ab | c`.
        if a.score() + bc.score() > ab.score() + c.score() {
            split_a_bc
        } else {
            split_ab_c
        }
    }
}

impl<'a> Matcher<'a> for EnhancedMatcher<'a> {
    fn feed(&mut self, syllable: &'a str) {
        if self.lexicon.is_breaker(syllable) {
            self.state.pass_breaker(syllable);
            return;
        }
        self.state.buffer.push(syllable);
        match self.decide() {
            Step::Accumulate => {}
            Step::EmitHead(count) => self.state.emit_head(count),
        }
    }

    fn finish(self) -> Segmentation {
        self.state.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexiconConfig;
    use crate::core::lexicon::LexiconBuilder;
    use std::collections::{HashMap, HashSet};

    fn lexicon(scores: &[(&str, f64)]) -> LexiconModel {
        let scores: HashMap<String, f64> =
            scores.iter().map(|(w, s)| (w.to_string(), *s)).collect();
        let breakers: HashSet<String> = [",", "."].iter().map(|s| s.to_string()).collect();
        LexiconModel::from_parts(scores, breakers).unwrap()
    }

    fn words(segmentation: &Segmentation) -> Vec<&str> {
        segmentation.tokens().map(WordToken::as_str).collect()
    }

    #[test]
    fn overlap_prefers_higher_score_split() {
        let model = lexicon(&[("a", 0.0), ("b c", 0.0), ("a b", -1.0), ("c", -1.0)]);
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["a", "b", "c"]);
        assert_eq!(words(&out), vec!["a", "b c"]);
    }

    #[test]
    fn overlap_tie_prefers_ab_c() {
        let model = lexicon(&[("a", 0.0), ("b c", -1.0), ("a b", 0.0), ("c", -1.0)]);
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["a", "b", "c"]);
        assert_eq!(words(&out), vec!["a b", "c"]);
    }

    #[test]
    fn overlap_with_unknown_bc_splits_ab_c() {
        let model = lexicon(&[("a", 0.0), ("a b", 0.0), ("c", 0.0)]);
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["a", "b", "c"]);
        assert_eq!(words(&out), vec!["a b", "c"]);
    }

    #[test]
    fn overlap_with_unknown_a_splits_ab_c() {
        let model = lexicon(&[("x b", 0.0), ("b c", 3.0), ("c", 0.0)]);
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["x", "b", "c"]);
        assert_eq!(words(&out), vec!["x b", "c"]);
    }

    #[test]
    fn overlap_with_unknown_c_falls_back_to_ab_c() {
        // a, b c and a b are known but c alone is not.
        let model = lexicon(&[("a", 0.0), ("b c", 5.0), ("a b", 0.0), ("b", 0.0)]);
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["a", "b", "c"]);
        assert_eq!(words(&out), vec!["a b", "c"]);
    }

    #[test]
    fn unknown_run_is_clumped() {
        let model = lexicon(&[("nhà", 0.0)]);
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["x", "y"]);
        assert_eq!(words(&out), vec!["x y"]);
    }

    #[test]
    fn unknown_syllables_swallow_unknown_compound_parts() {
        // "Việt Nam" is known but neither syllable is, so the run keeps growing.
        let model = lexicon(&[("Việt Nam", 2.0), ("đẹp", 0.0)]);
        let out = Algorithm::EnhancedMaximumMatching
            .segment(&model, &["Việt", "Nam", "rất", "đẹp"]);
        assert_eq!(words(&out), vec!["Việt Nam rất", "đẹp"]);
    }

    #[test]
    fn known_then_unknown_splits_after_first() {
        let model = lexicon(&[("nhà", 0.0)]);
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["nhà", "zzz"]);
        assert_eq!(words(&out), vec!["nhà", "zzz"]);
    }

    #[test]
    fn breaker_flushes_and_passes_through() {
        let model = lexicon(&[("hello", 0.0), ("world", 0.0)]);
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["hello", ",", "world"]);
        assert_eq!(words(&out), vec!["hello", "world"]);
        assert_eq!(out.render(), "[hello] , [world]");
    }

    #[test]
    fn empty_and_breaker_only_inputs() {
        let model = lexicon(&[("a", 0.0)]);
        let empty: [&str; 0] = [];
        assert!(Algorithm::EnhancedMaximumMatching.segment(&model, &empty).segments.is_empty());
        let out = Algorithm::EnhancedMaximumMatching.segment(&model, &[",", "."]);
        assert_eq!(out.tokens().count(), 0);
    }

    #[test]
    fn blank_syllables_are_skipped() {
        let model = lexicon(&[("x", 0.0)]);
        for algorithm in [Algorithm::MaximumMatching, Algorithm::EnhancedMaximumMatching] {
            assert!(algorithm.segment(&model, &[""]).segments.is_empty());
            let out = algorithm.segment(&model, &["", "x", " "]);
            assert_eq!(words(&out), vec!["x"]);
            assert_eq!(out.render(), "[x]");
        }
    }

    #[test]
    fn greedy_longest_match_continues() {
        let model = lexicon(&[("học", 0.0), ("học sinh", 1.0), ("sinh", 0.0), ("giỏi", 0.0)]);
        let out =
            Algorithm::EnhancedMaximumMatching.segment(&model, &["học", "sinh", "giỏi"]);
        assert_eq!(words(&out), vec!["học sinh", "giỏi"]);
    }

    #[test]
    fn plain_maximum_matching() {
        let model = lexicon(&[("học", 0.0), ("học sinh", 0.0), ("sinh", 0.0), ("sinh viên", 0.0)]);
        let out = Algorithm::MaximumMatching.segment(&model, &["học", "sinh", "viên", ",", "x"]);
        assert_eq!(words(&out), vec!["học sinh", "viên", "x"]);
    }

    #[test]
    fn works_with_built_lexicon() {
        let mut builder = LexiconBuilder::new(&LexiconConfig::default()).unwrap();
        builder.add_counts([("Việt Nam", 12), ("đất nước", 4), ("đẹp", 7), ("Việt", 1), ("Nam", 3)]);
        builder.add_counts([("đất", 2), ("nước", 5)]);
        let model = builder.build().unwrap();
        let out = Algorithm::EnhancedMaximumMatching
            .segment(&model, &["Việt", "Nam", "đất", "nước", "đẹp", "."]);
        assert_eq!(words(&out), vec!["Việt Nam", "đất nước", "đẹp"]);
    }

    #[test]
    fn selector_parsing() {
        assert_eq!("mm".parse::<Algorithm>().unwrap(), Algorithm::MaximumMatching);
        assert_eq!("mm-plus".parse::<Algorithm>().unwrap(), Algorithm::EnhancedMaximumMatching);
        assert!(matches!(
            "crf".parse::<Algorithm>(),
            Err(ConfigError::InvalidAlgorithm(_))
        ));
    }
}
