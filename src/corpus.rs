// File: src/corpus.rs
//! Readers for IOB2-tagged corpora and bracketed token files.
use crate::core::types::{Syllable, Tag, WordToken};
use crate::error::CorpusError;
use std::fs;
use std::path::Path;

/// One sentence of a tagged corpus: parallel syllables and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedSentence {
    pub syllables: Vec<Syllable>,
    pub tags: Vec<Tag>,
}

impl TaggedSentence {
    /// Reference segmentation: Outside syllables close the open word and are dropped.
    pub fn reference_words(&self) -> Vec<WordToken> {
        group_words(self.syllables.iter().map(String::as_str).zip(self.tags.iter().copied()))
    }

    pub fn outside_syllables(&self) -> impl Iterator<Item = &str> {
        self.syllables
            .iter()
            .zip(&self.tags)
            .filter(|(_, tag)| **tag == Tag::Outside)
            .map(|(syllable, _)| syllable.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

/// Converts a per-syllable tag sequence (e.g. from an external CRF tagger)
/// into word tokens.
pub fn words_from_tags<S: AsRef<str>>(
    syllables: &[S],
    tags: &[Tag],
) -> Result<Vec<WordToken>, CorpusError> {
    if syllables.len() != tags.len() {
        return Err(CorpusError::TagCountMismatch {
            syllables: syllables.len(),
            tags: tags.len(),
        });
    }
    Ok(group_words(
        syllables.iter().map(|s| AsRef::<str>::as_ref(s)).zip(tags.iter().copied()),
    ))
}

fn group_words<'a>(items: impl Iterator<Item = (&'a str, Tag)>) -> Vec<WordToken> {
    let mut words = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (syllable, tag) in items {
        match tag {
            Tag::Outside => {
                words.extend(WordToken::from_syllables(&current));
                current.clear();
            }
            Tag::BeginWord => {
                words.extend(WordToken::from_syllables(&current));
                current.clear();
                current.push(syllable);
            }
            // An I_W with no open word starts one.
            Tag::InsideWord => current.push(syllable),
        }
    }
    words.extend(WordToken::from_syllables(&current));
    words
}

/// Parses IOB2 text: `syllable <whitespace> tag` per line, blank line between sentences.
pub fn parse_tagged_corpus(contents: &str) -> Result<Vec<TaggedSentence>, CorpusError> {
    let mut sentences = Vec::new();
    let mut current = TaggedSentence::default();

    for (index, line) in contents.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => {
                if !current.is_empty() {
                    sentences.push(std::mem::take(&mut current));
                }
            }
            [syllable, label] => {
                let tag = Tag::from_label(label).ok_or_else(|| CorpusError::UnknownTag {
                    line: index + 1,
                    tag: label.to_string(),
                })?;
                current.syllables.push(syllable.to_string());
                current.tags.push(tag);
            }
            _ => {
                return Err(CorpusError::MalformedLine {
                    line: index + 1,
                    content: line.to_string(),
                })
            }
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    Ok(sentences)
}

pub fn read_tagged_corpus(path: &Path) -> Result<Vec<TaggedSentence>, CorpusError> {
    let contents = read_lossy(path)?;
    let sentences = parse_tagged_corpus(&contents)?;
    log::debug!("read {} tagged sentences from {}", sentences.len(), path.display());
    Ok(sentences)
}

/// Extracts the `[ ... ]` tokens of one line. Text outside brackets is ignored.
///
/// A token opens at a whitespace-delimited word starting with `[` and closes at
/// the first word ending in `]` that has something before the bracket, so the
/// syllables `[` and `]` survive as `[[]` and `[]]`. An unclosed token is dropped.
pub fn parse_bracketed_line(line: &str) -> Vec<WordToken> {
    let mut tokens = Vec::new();
    let mut open: Option<Vec<&str>> = None;

    for word in line.split_whitespace() {
        let body = if open.is_some() {
            word
        } else if let Some(rest) = word.strip_prefix('[') {
            open = Some(Vec::new());
            rest
        } else {
            continue;
        };
        let Some(parts) = open.as_mut() else { continue };

        match body.strip_suffix(']') {
            Some(last) if !last.is_empty() => {
                parts.push(last);
                tokens.extend(WordToken::from_syllables(parts.as_slice()));
                open = None;
            }
            _ if !body.is_empty() => parts.push(body),
            _ => {}
        }
    }
    tokens
}

/// One sentence per line, blank lines included, so line `i` of two files pair up.
pub fn read_bracketed_file(path: &Path) -> Result<Vec<Vec<WordToken>>, CorpusError> {
    let contents = read_lossy(path)?;
    Ok(contents.lines().map(parse_bracketed_line).collect())
}

/// Reads UTF-8, replacing invalid sequences instead of failing.
pub fn read_lossy(path: &Path) -> Result<String, CorpusError> {
    let bytes = fs::read(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
