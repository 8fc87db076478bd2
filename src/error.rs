// File: src/error.rs
use std::path::PathBuf;

/// Lexicon lookup failures. The segmenter never produces these: it only
/// scores words obtained through `LexiconModel::entry`.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LexiconError {
    #[error("word `{0}` is not in the lexicon")]
    UnknownWord(String),
    #[error("lexicon entry `{word}` has non-finite score {score}")]
    NonFiniteScore { word: String, score: f64 },
    #[error("lexicon contains an empty word")]
    EmptyWord,
}

/// Degenerate corpus metrics. Callers report these as "undefined".
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MetricError {
    #[error("precision is undefined: the hypothesis contains no tokens")]
    EmptyHypothesis,
    #[error("recall is undefined: the reference contains no tokens")]
    EmptyReference,
    #[error("F-ratio is undefined: precision and recall are both zero")]
    ZeroPrecisionAndRecall,
    #[error("reference has {reference} sentences but hypothesis has {hypothesis}")]
    SentenceCountMismatch { reference: usize, hypothesis: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("could not read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `syllable tag`, found `{content}`")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: unknown tag `{tag}`")]
    UnknownTag { line: usize, tag: String },
    #[error("{syllables} syllables but {tags} tags")]
    TagCountMismatch { syllables: usize, tags: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("model encoding failed: {0}")]
    Codec(#[from] bincode::Error),
    #[error("model is corrupt: {0}")]
    Invalid(#[from] LexiconError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("algorithm `{0}` is invalid. Choose between `mm` and `mm-plus` only")]
    InvalidAlgorithm(String),
    #[error("{kind} file `{path}` does not exist")]
    MissingFile { kind: &'static str, path: PathBuf },
    #[error("fold {fold} needs {kind} file #{fold} but only {available} were found in `{dir}`")]
    MissingFold {
        fold: usize,
        kind: &'static str,
        available: usize,
        dir: PathBuf,
    },
    #[error("smoothing constant must be positive and finite, got {0}")]
    InvalidSmoothing(f64),
    #[error("experiment needs at least one fold")]
    NoFolds,
}

/// Crate-wide error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Metric(#[from] MetricError),
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
