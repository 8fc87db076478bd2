// File: src/preprocess.rs
use regex::Regex;

/// Punctuation detached from the end of a word, in priority order.
const TRAILING_PUNCTUATION: [char; 6] = ['!', ',', '.', ':', ';', '?'];

/// Splits raw lines into syllables, detaching trailing punctuation except
/// from acronyms, initials and dotted dates.
pub struct Preprocessor {
    initials: Regex,
    short_date: Regex,
    long_date: Regex,
}

impl Preprocessor {
    pub fn new() -> Self {
        Self {
            initials: Regex::new(r"(.\.)+\z").expect("initials pattern is valid"),
            short_date: Regex::new(r"\A[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{2}\.\z")
                .expect("short date pattern is valid"),
            long_date: Regex::new(r"\A[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}\.\z")
                .expect("long date pattern is valid"),
        }
    }

    pub fn split_line(&self, line: &str) -> Vec<String> {
        let mut out = Vec::new();
        for word in line.split_whitespace() {
            self.split_word(word, &mut out);
        }
        out
    }

    fn split_word(&self, word: &str, out: &mut Vec<String>) {
        if self.is_kept_whole(word) {
            out.push(word.to_string());
            return;
        }
        for mark in TRAILING_PUNCTUATION {
            if word.ends_with(mark) {
                let stem = word.trim_end_matches(mark);
                if !stem.is_empty() {
                    out.push(stem.to_string());
                }
                out.push(mark.to_string());
                return;
            }
        }
        out.push(word.to_string());
    }

    fn is_kept_whole(&self, word: &str) -> bool {
        (self.initials.is_match(word) && is_upper(word))
            || self.short_date.is_match(word)
            || self.long_date.is_match(word)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// At least one cased character and no lower-case ones.
fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Vec<String> {
        Preprocessor::new().split_line(line)
    }

    #[test]
    fn detaches_trailing_punctuation() {
        assert_eq!(split("Xin chào, bạn!"), vec!["Xin", "chào", ",", "bạn", "!"]);
        assert_eq!(split("thế nào???"), vec!["thế", "nào", "?"]);
        assert_eq!(split("a , b"), vec!["a", ",", "b"]);
    }

    #[test]
    fn keeps_initials_and_acronyms() {
        assert_eq!(split("D. Hằng"), vec!["D.", "Hằng"]);
        assert_eq!(split("TP.HCM."), vec!["TP.HCM."]);
        assert_eq!(split("ông x."), vec!["ông", "x", "."]);
    }

    #[test]
    fn keeps_dotted_dates() {
        assert_eq!(split("ngày 26.1.14."), vec!["ngày", "26.1.14."]);
        assert_eq!(split("ngày 21.01.2014."), vec!["ngày", "21.01.2014."]);
        assert_eq!(split("năm 2014."), vec!["năm", "2014", "."]);
    }

    #[test]
    fn only_first_matching_mark_is_split() {
        assert_eq!(split("vậy.,"), vec!["vậy.", ","]);
        assert!(split("   ").is_empty());
    }
}
