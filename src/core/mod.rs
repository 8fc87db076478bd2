// src/core/mod.rs
pub mod aligner;
pub mod engine;
pub mod lexicon;
pub mod segmenter;
pub mod types;
