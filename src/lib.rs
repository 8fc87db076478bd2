// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod experiment;
pub mod learning;
pub mod persistence;
pub mod preprocess;
pub mod resources;

pub use crate::core::aligner::{align_corpus, CorpusCounts, Scores};
pub use crate::core::engine::TokenizerEngine;
pub use crate::core::lexicon::{LexiconBuilder, LexiconModel};
pub use crate::core::segmenter::Algorithm;
pub use crate::core::types::{Segment, Segmentation, Tag, WordToken};
pub use crate::error::{Error, Result};
