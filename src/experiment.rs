// File: src/experiment.rs
//! K-fold cross-validation over paired `train*` / `test*` IOB2 files.
use crate::config::{Config, ExperimentConfig};
use crate::core::aligner::{align_corpus, CorpusCounts, Scores};
use crate::core::lexicon::LexiconModel;
use crate::core::segmenter::Algorithm;
use crate::core::types::WordToken;
use crate::corpus::{read_tagged_corpus, TaggedSentence};
use crate::error::{ConfigError, CorpusError, Error};
use crate::learning::CountLearner;
use crate::resources::load_external_words;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct FoldReport {
    pub fold: usize,
    pub train_file: PathBuf,
    pub test_file: PathBuf,
    pub lexicon_size: usize,
    pub counts: CorpusCounts,
    pub scores: Scores,
    /// Reference words missing from the lexicon.
    pub oov: usize,
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

/// Averages over all folds.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentSummary {
    pub algorithm: String,
    pub folds: Vec<FoldReport>,
    pub precision: f64,
    pub recall: f64,
    pub f_ratio: f64,
    pub oov: f64,
    pub sentences: f64,
    pub words: f64,
    pub syllables: f64,
}

pub struct CrossValidation {
    config: Config,
    algorithm: Algorithm,
}

impl CrossValidation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let algorithm = config.experiment.validate()?;
        Ok(Self { config, algorithm })
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn run(&self) -> Result<ExperimentSummary, Error> {
        let settings = &self.config.experiment;
        let train_files = list_fold_files(settings, &settings.train_prefix)?;
        let test_files = list_fold_files(settings, &settings.test_prefix)?;
        // Resource words are shared by every fold; read them once.
        let external = load_external_words(&self.config.lexicon.sources)?;

        let mut folds = Vec::with_capacity(settings.folds);
        for fold in 0..settings.folds {
            let train_file = fold_file(&train_files, fold, "train", settings)?;
            let test_file = fold_file(&test_files, fold, "test", settings)?;
            let report = self.run_fold(fold, train_file, test_file, &external)?;
            log::info!(
                "fold {}: P = {:.3}, R = {:.3}, F = {:.3}, OOV = {}",
                fold,
                report.scores.precision,
                report.scores.recall,
                report.scores.f_ratio,
                report.oov
            );
            folds.push(report);
        }
        Ok(summarise(self.algorithm, folds))
    }

    fn run_fold(
        &self,
        fold: usize,
        train_file: &Path,
        test_file: &Path,
        external: &BTreeSet<String>,
    ) -> Result<FoldReport, Error> {
        let mut learner = CountLearner::new();
        learner.learn_all(&read_tagged_corpus(train_file)?);
        let lexicon = learner.into_lexicon(&self.config.lexicon, external)?;

        let test = read_tagged_corpus(test_file)?;
        let (references, hypotheses) = self.reference_and_hypothesis(&lexicon, &test);
        let counts = align_corpus(&references, &hypotheses)?;

        let oov = references
            .iter()
            .flatten()
            .filter(|word| !lexicon.contains(word.as_str()))
            .count();
        let words: usize = references.iter().map(Vec::len).sum();
        let syllables: usize = references
            .iter()
            .flatten()
            .map(|word| word.syllable_count())
            .sum();

        Ok(FoldReport {
            fold,
            train_file: train_file.to_path_buf(),
            test_file: test_file.to_path_buf(),
            lexicon_size: lexicon.len(),
            counts,
            scores: counts.scores()?,
            oov,
            sentences: references.len(),
            words,
            syllables,
        })
    }

    /// Reference words come from the tags; hypotheses re-segment the bare
    /// syllables with the tags ignored.
    fn reference_and_hypothesis(
        &self,
        lexicon: &LexiconModel,
        test: &[TaggedSentence],
    ) -> (Vec<Vec<WordToken>>, Vec<Vec<WordToken>>) {
        test.par_iter()
            .map(|sentence| {
                let reference = sentence.reference_words();
                let hypothesis = self.algorithm.segment(lexicon, &sentence.syllables).into_tokens();
                (reference, hypothesis)
            })
            .unzip()
    }
}

fn summarise(algorithm: Algorithm, folds: Vec<FoldReport>) -> ExperimentSummary {
    // `CrossValidation::new` guarantees at least one fold.
    let n = folds.len() as f64;
    let mean = |f: &dyn Fn(&FoldReport) -> f64| folds.iter().map(f).sum::<f64>() / n;

    ExperimentSummary {
        algorithm: algorithm.to_string(),
        precision: mean(&|r| r.scores.precision),
        recall: mean(&|r| r.scores.recall),
        f_ratio: mean(&|r| r.scores.f_ratio),
        oov: mean(&|r| r.oov as f64),
        sentences: mean(&|r| r.sentences as f64),
        words: mean(&|r| r.words as f64),
        syllables: mean(&|r| r.syllables as f64),
        folds,
    }
}

/// Files in `data_dir` named `<prefix>*.<extension>`, sorted by name.
fn list_fold_files(settings: &ExperimentConfig, prefix: &str) -> Result<Vec<PathBuf>, Error> {
    let dir = &settings.data_dir;
    let entries = fs::read_dir(dir).map_err(|source| CorpusError::Io {
        path: dir.clone(),
        source,
    })?;
    let suffix = format!(".{}", settings.extension);

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.starts_with(prefix) && name.ends_with(&suffix))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn fold_file<'a>(
    files: &'a [PathBuf],
    fold: usize,
    kind: &'static str,
    settings: &ExperimentConfig,
) -> Result<&'a Path, ConfigError> {
    files.get(fold).map(PathBuf::as_path).ok_or_else(|| ConfigError::MissingFold {
        fold,
        kind,
        available: files.len(),
        dir: settings.data_dir.clone(),
    })
}
