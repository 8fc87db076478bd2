use crate::core::lexicon::LexiconModel;
use crate::core::segmenter::Algorithm;
use crate::core::types::Segmentation;
use crate::error::{ConfigError, Error};
use crate::persistence::load_model;
use crate::preprocess::Preprocessor;
use rayon::prelude::*;
use std::path::Path;

// The tokenizer engine is composed of the frozen lexicon, the chosen
// algorithm and the punctuation preprocessor.
pub struct TokenizerEngine {
    pub lexicon: LexiconModel,
    pub algorithm: Algorithm,
    preprocessor: Preprocessor,
}

impl TokenizerEngine {
    pub fn new(lexicon: LexiconModel, algorithm: Algorithm) -> Self {
        Self {
            lexicon,
            algorithm,
            preprocessor: Preprocessor::new(),
        }
    }

    pub fn from_file(path: &Path, algorithm: Algorithm) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(ConfigError::MissingFile { kind: "model", path: path.to_path_buf() }.into());
        }
        let engine = Self::new(load_model(path)?, algorithm);
        log::info!("tokenizer ready: algorithm {}, {} words", algorithm, engine.lexicon.len());
        Ok(engine)
    }

    /// Segments already-split syllables of one sentence.
    pub fn segment<S: AsRef<str>>(&self, syllables: &[S]) -> Segmentation {
        self.algorithm.segment(&self.lexicon, syllables)
    }

    /// Preprocesses and segments one raw line. A line is one sentence.
    pub fn tokenize_line(&self, line: &str) -> Segmentation {
        let syllables = self.preprocessor.split_line(line);
        self.segment(&syllables)
    }

    /// Segments every line of `text` independently, in parallel.
    pub fn tokenize_text(&self, text: &str) -> Vec<Segmentation> {
        let lines: Vec<&str> = text.lines().collect();
        lines.par_iter().map(|line| self.tokenize_line(line)).collect()
    }

    /// Bracketed output, one line per input line.
    pub fn render(&self, text: &str) -> String {
        let mut out = String::new();
        for segmentation in self.tokenize_text(text) {
            out.push_str(&segmentation.render());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexiconConfig;
    use crate::core::lexicon::LexiconBuilder;
    use crate::persistence::save_model;

    fn engine() -> TokenizerEngine {
        let mut builder = LexiconBuilder::new(&LexiconConfig::default()).unwrap();
        builder.add_counts([("xin", 2), ("chào", 2), ("xin chào", 5), ("bạn", 3)]);
        TokenizerEngine::new(builder.build().unwrap(), Algorithm::EnhancedMaximumMatching)
    }

    #[test]
    fn renders_lines_independently() {
        let engine = engine();
        let out = engine.render("Xin chào bạn!\nxin chào, bạn\n\n");
        assert_eq!(out, "[Xin] [chào] [bạn] !\n[xin chào] , [bạn]\n\n");
    }

    #[test]
    fn loads_saved_model_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.bin");
        save_model(&engine().lexicon, &path).unwrap();

        let loaded = TokenizerEngine::from_file(&path, Algorithm::MaximumMatching).unwrap();
        assert_eq!(loaded.lexicon.len(), 4);
        assert_eq!(loaded.algorithm, Algorithm::MaximumMatching);

        let missing = TokenizerEngine::from_file(&dir.path().join("nope.bin"), Algorithm::default());
        assert!(matches!(missing, Err(Error::Config(ConfigError::MissingFile { .. }))));
    }
}
