// File: src/resources.rs
use crate::config::SourcesConfig;
use crate::corpus::read_lossy;
use crate::error::{ConfigError, Error};
use std::collections::BTreeSet;
use std::path::Path;

const WORD_MARKER: &str = "##";
const CATEGORY_MARKER: &str = "@@";
/// Dictionary categories whose entries are phrases rather than words.
const EXCLUDED_CATEGORIES: [&str; 2] = ["Proverb", "Idiom"];

/// Parses a VNDic-style dictionary. `##word` lines add a word; a following
/// `@@Proverb` or `@@Idiom` line withdraws it.
pub fn parse_dictionary(contents: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for line in contents.lines() {
        if line.contains(WORD_MARKER) {
            let word = normalise(&line.replace(WORD_MARKER, ""));
            if !word.is_empty() {
                words.push(word);
            }
        }
        if line.contains(CATEGORY_MARKER) {
            let category = line.replace(CATEGORY_MARKER, "");
            if EXCLUDED_CATEGORIES.contains(&category.trim()) {
                words.pop();
            }
        }
    }
    words
}

/// One entry per line; blank lines are skipped.
pub fn parse_gazetteer(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(normalise)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Loads every configured source, de-duplicated.
pub fn load_external_words(sources: &SourcesConfig) -> Result<BTreeSet<String>, Error> {
    let mut words = BTreeSet::new();

    if let Some(path) = &sources.dictionary {
        let entries = parse_dictionary(&read_source("dictionary", path)?);
        log::info!("dictionary {}: {} entries", path.display(), entries.len());
        words.extend(entries);
    }
    if let Some(path) = &sources.locations {
        let entries = parse_gazetteer(&read_source("locations", path)?);
        log::info!("locations {}: {} entries", path.display(), entries.len());
        words.extend(entries);
    }
    if let Some(path) = &sources.person_names {
        let entries = parse_gazetteer(&read_source("person names", path)?);
        log::info!("person names {}: {} entries", path.display(), entries.len());
        words.extend(entries);
    }
    Ok(words)
}

fn read_source(kind: &'static str, path: &Path) -> Result<String, Error> {
    if !path.is_file() {
        return Err(ConfigError::MissingFile { kind, path: path.to_path_buf() }.into());
    }
    Ok(read_lossy(path)?)
}

fn normalise(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
