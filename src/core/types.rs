// src/core/types.rs
use serde::Serialize;
use std::fmt;

/// An atomic space-delimited unit of input text.
pub type Syllable = String;

/// One or more syllables grouped as a single segmentation unit.
/// Tokens compare by their space-joined form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordToken(String);

impl WordToken {
    /// Joins syllables with single spaces. Returns `None` for an empty slice.
    pub fn from_syllables<S: AsRef<str>>(syllables: &[S]) -> Option<Self> {
        if syllables.is_empty() {
            return None;
        }
        let joined: Vec<&str> = syllables.iter().map(|s| AsRef::<str>::as_ref(s)).collect();
        Some(Self(joined.join(" ")))
    }

    /// Normalises whitespace inside `text`. Returns `None` when nothing is left.
    pub fn parse(text: &str) -> Option<Self> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        Self::from_syllables(&parts)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables().count()
    }
}

impl fmt::Display for WordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-syllable IOB2 label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    BeginWord,
    InsideWord,
    Outside,
}

impl Tag {
    /// Parses the corpus spelling: `B_W`, `I_W` or `O`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "B_W" => Some(Tag::BeginWord),
            "I_W" => Some(Tag::InsideWord),
            "O" => Some(Tag::Outside),
            _ => None,
        }
    }
}

/// One unit of segmenter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Word(WordToken),
    /// A breaker syllable passed through in place. Never a token.
    Breaker(Syllable),
}

/// The segmenter's output for one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub segments: Vec<Segment>,
}

impl Segmentation {
    pub fn tokens(&self) -> impl Iterator<Item = &WordToken> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Word(token) => Some(token),
            Segment::Breaker(_) => None,
        })
    }

    pub fn into_tokens(self) -> Vec<WordToken> {
        self.segments
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Word(token) => Some(token),
                Segment::Breaker(_) => None,
            })
            .collect()
    }

    /// Every syllable in output order, breakers included.
    pub fn syllables(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Word(token) => out.extend(token.syllables()),
                Segment::Breaker(syllable) => out.push(syllable.as_str()),
            }
        }
        out
    }

    /// Bracketed presentation: `[word one] , [word]`.
    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Word(token) => format!("[{}]", token),
                Segment::Breaker(syllable) => syllable.clone(),
            })
            .collect();
        parts.join(" ")
    }
}

/// Per-sentence alignment counts.
/// Invariant: `correct <= min(reference, hypothesis)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentCounts {
    pub reference: usize,
    pub hypothesis: usize,
    pub correct: usize,
}

impl std::ops::Add for AlignmentCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            reference: self.reference + other.reference,
            hypothesis: self.hypothesis + other.hypothesis,
            correct: self.correct + other.correct,
        }
    }
}

impl std::iter::Sum for AlignmentCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, counts| acc + counts)
    }
}
