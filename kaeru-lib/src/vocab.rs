// Vocabulary records: {word, kana, type} as produced by the vocabulary builder.

use std::io::{self, Read};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::WordCategory;

/// One dictionary-form word to quiz on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabRecord {
    pub word: String,
    /// Kana reading, absent when the word is already written in kana.
    pub kana: Option<String>,
    #[serde(rename = "type")]
    pub category: WordCategory,
}

// The type tag stays a string until after JSON parsing, so an unknown tag
// surfaces as `UnknownCategoryTag` rather than a JSON error.
#[derive(Deserialize)]
struct RawVocabRecord {
    word: String,
    #[serde(default)]
    kana: Option<String>,
    #[serde(rename = "type")]
    category: String,
}

impl TryFrom<RawVocabRecord> for VocabRecord {
    type Error = Error;

    fn try_from(raw: RawVocabRecord) -> Result<Self> {
        Ok(Self {
            category: raw.category.parse()?,
            word: raw.word,
            kana: raw.kana,
        })
    }
}

/// Parse a JSON array of records. An empty array is an error.
pub fn parse_vocabulary(json: &str) -> Result<Vec<VocabRecord>> {
    let raw: Vec<RawVocabRecord> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(Error::EmptyVocabulary);
    }
    raw.into_iter().map(VocabRecord::try_from).collect()
}

pub fn read_vocabulary(reader: impl Read) -> Result<Vec<VocabRecord>> {
    parse_vocabulary(&io::read_to_string(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdjectiveCategory, VerbCategory};

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"word": "考える", "kana": "かんがえる", "type": "verb-ichidan"},
            {"word": "わかる", "kana": null, "type": "verb-godan"},
            {"word": "強い", "kana": "つよい", "type": "adjective-i"}
        ]"#;
        let records = parse_vocabulary(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, WordCategory::Verb(VerbCategory::Ichidan));
        assert_eq!(records[1].kana, None);
        assert_eq!(records[2].category, WordCategory::Adjective(AdjectiveCategory::I));
    }

    #[test]
    fn test_unknown_type_tag() {
        let json = r#"[{"word": "静か", "type": "adjective-nari"}]"#;
        let err = parse_vocabulary(json).unwrap_err();
        assert!(matches!(err, Error::UnknownCategoryTag(ref t) if t == "adjective-nari"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_vocabulary("[{"), Err(Error::Json(_))));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_read_failure_is_io() {
        assert!(matches!(read_vocabulary(FailingReader), Err(Error::Io(_))));
    }

    #[test]
    fn test_read_vocabulary_from_bytes() {
        let json = r#"[{"word": "いい", "type": "adjective-i-yoi-ii"}]"#;
        let records = read_vocabulary(json.as_bytes()).unwrap();
        assert_eq!(records[0].category, WordCategory::Adjective(AdjectiveCategory::IYoiIi));
    }

    #[test]
    fn test_empty_vocabulary() {
        assert!(matches!(parse_vocabulary("[]"), Err(Error::EmptyVocabulary)));
    }
}
