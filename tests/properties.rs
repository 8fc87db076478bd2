use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use vn_core::core::aligner::{align_corpus, align_sentence, lcs_length};
use vn_core::corpus::parse_bracketed_line;
use vn_core::{Algorithm, LexiconModel, WordToken};

const SYLLABLES: [&str; 8] = ["a", "b", "c", "d", "e", "x", ",", "."];

fn lexicon() -> LexiconModel {
    let scores: HashMap<String, f64> = [
        ("a", -0.5),
        ("b", -1.0),
        ("c", -1.0),
        ("d", 0.2),
        ("a b", 0.0),
        ("b c", 0.0),
        ("c d", 1.0),
        ("a b c", 0.5),
        ("d e", -0.2),
    ]
    .iter()
    .map(|(w, s)| (w.to_string(), *s))
    .collect();
    let breakers: HashSet<String> = [",", "."].iter().map(|s| s.to_string()).collect();
    LexiconModel::from_parts(scores, breakers).unwrap()
}

fn sentence_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(SYLLABLES.to_vec()), 0..24)
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

/// Includes bracket syllables that are neither breakers nor lexicon words.
fn bracketed_sentence_strategy() -> impl Strategy<Value = Vec<String>> {
    let pool = vec!["a", "b", "c", "x", "[", "]", "[x", "x[", ","];
    prop::collection::vec(prop::sample::select(pool), 0..16)
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

fn tokens_strategy() -> impl Strategy<Value = Vec<WordToken>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "a b", "c", "d e"]), 0..12)
        .prop_map(|v| v.into_iter().filter_map(WordToken::parse).collect())
}

proptest! {
    #[test]
    fn segmentation_covers_every_syllable(sentence in sentence_strategy()) {
        let model = lexicon();
        for algorithm in [Algorithm::MaximumMatching, Algorithm::EnhancedMaximumMatching] {
            let out = algorithm.segment(&model, &sentence);
            let expected: Vec<&str> = sentence.iter().map(String::as_str).collect();
            prop_assert_eq!(out.syllables(), expected);
            prop_assert!(out.tokens().all(|t| t.syllables().all(|s| !model.is_breaker(s))));
        }
    }

    #[test]
    fn segmentation_is_deterministic(sentence in sentence_strategy()) {
        let model = lexicon();
        let first = Algorithm::EnhancedMaximumMatching.segment(&model, &sentence);
        let second = Algorithm::EnhancedMaximumMatching.segment(&model, &sentence);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rendered_output_parses_back(sentence in bracketed_sentence_strategy()) {
        let model = lexicon();
        for algorithm in [Algorithm::MaximumMatching, Algorithm::EnhancedMaximumMatching] {
            let out = algorithm.segment(&model, &sentence);
            let parsed = parse_bracketed_line(&out.render());
            prop_assert_eq!(parsed, out.into_tokens());
        }
    }

    #[test]
    fn lcs_is_bounded(reference in tokens_strategy(), hypothesis in tokens_strategy()) {
        let counts = align_sentence(&reference, &hypothesis);
        prop_assert!(counts.correct <= counts.reference.min(counts.hypothesis));
        prop_assert_eq!(lcs_length(&reference, &hypothesis), lcs_length(&hypothesis, &reference));
    }

    #[test]
    fn identical_corpora_score_perfectly(corpus in prop::collection::vec(tokens_strategy(), 1..6)) {
        let counts = align_corpus(&corpus, &corpus).unwrap();
        prop_assume!(counts.totals.reference > 0);
        let scores = counts.scores().unwrap();
        prop_assert_eq!(scores.precision, 1.0);
        prop_assert_eq!(scores.recall, 1.0);
        prop_assert_eq!(scores.f_ratio, 1.0);
    }
}

#[test]
fn overlap_scenario_chooses_a_bc() {
    let scores: HashMap<String, f64> = [("a", 0.0), ("b c", 0.0), ("a b", -1.0), ("c", -1.0)]
        .iter()
        .map(|(w, s)| (w.to_string(), *s))
        .collect();
    let model = LexiconModel::from_parts(scores, HashSet::new()).unwrap();
    let out = Algorithm::EnhancedMaximumMatching.segment(&model, &["a", "b", "c"]);
    let words: Vec<&str> = out.tokens().map(WordToken::as_str).collect();
    assert_eq!(words, vec!["a", "b c"]);
}

#[test]
fn disjoint_corpora_have_zero_precision_and_recall() {
    let reference = vec![vec![WordToken::parse("a b").unwrap(), WordToken::parse("c").unwrap()]];
    let hypothesis = vec![vec![WordToken::parse("a").unwrap(), WordToken::parse("b c").unwrap()]];
    let counts = align_corpus(&reference, &hypothesis).unwrap();
    assert_eq!(counts.totals.correct, 0);
    assert_eq!(counts.precision(), Ok(0.0));
    assert_eq!(counts.recall(), Ok(0.0));
    assert!(counts.f_ratio().is_err());
}
