// The external conjugation oracle.
//
// Consonant-stem sound changes and the する/来る irregulars are not computed
// here. Verb conjugation hands an `OracleRequest` to a `ConjugationOracle`
// and trusts its answer.

use std::collections::HashMap;
use std::io::{self, Read};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Verb class tag understood by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbClass {
    /// Vowel-stem.
    Ichidan,
    /// Consonant-stem.
    Godan,
    Irregular,
}

// String encodings of the oracle's form arguments.
pub const BASE_PLAIN: &str = "plain";
pub const BASE_POLITE: &str = "polite";
pub const BASE_TE: &str = "te";
pub const TENSE_NONPAST: &str = "nonpast";
pub const TENSE_PAST: &str = "past";
pub const POLARITY_POSITIVE: &str = "positive";
pub const POLARITY_NEGATIVE: &str = "negative";

/// One call to the oracle, in its primitive encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OracleRequest<'a> {
    pub word: &'a str,
    pub verb_class: VerbClass,
    pub base_form: &'static str,
    /// Absent for the て-form.
    pub tense: Option<&'static str>,
    pub polarity: &'static str,
}

/// Produces the surface form of a verb for a request.
pub trait ConjugationOracle {
    fn generate(&self, request: &OracleRequest<'_>) -> Result<String>;
}

impl<F> ConjugationOracle for F
where
    F: Fn(&OracleRequest<'_>) -> Result<String>,
{
    fn generate(&self, request: &OracleRequest<'_>) -> Result<String> {
        self(request)
    }
}

/// A precomputed row: the oracle's answer for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub word: String,
    pub verb_class: VerbClass,
    pub base_form: String,
    #[serde(default)]
    pub tense: Option<String>,
    pub polarity: String,
    pub surface: String,
}

type TableKey = (String, VerbClass, String, Option<String>, String);

/// Oracle answering from a table of precomputed conjugations.
///
/// Lookups are exact; a request with no row is an [`Error::Oracle`].
#[derive(Debug, Clone, Default)]
pub struct TableOracle {
    rows: HashMap<TableKey, String>,
}

impl TableOracle {
    pub fn new(entries: impl IntoIterator<Item = TableEntry>) -> Self {
        let mut rows = HashMap::new();
        for e in entries {
            // Later rows replace earlier ones.
            rows.insert((e.word, e.verb_class, e.base_form, e.tense, e.polarity), e.surface);
        }
        Self { rows }
    }

    /// Load a JSON array of [`TableEntry`] rows.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<TableEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_json(&io::read_to_string(reader)?)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ConjugationOracle for TableOracle {
    fn generate(&self, request: &OracleRequest<'_>) -> Result<String> {
        let key = (
            request.word.to_string(),
            request.verb_class,
            request.base_form.to_string(),
            request.tense.map(str::to_string),
            request.polarity.to_string(),
        );
        self.rows.get(&key).cloned().ok_or_else(|| Error::Oracle {
            word: request.word.to_string(),
            reason: format!(
                "no table row for {:?} {} {} {}",
                request.verb_class,
                request.base_form,
                request.tense.unwrap_or("-"),
                request.polarity
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"[
        {"word": "わかる", "verb_class": "godan", "base_form": "plain",
         "tense": "past", "polarity": "positive", "surface": "わかった"},
        {"word": "わかる", "verb_class": "godan", "base_form": "te",
         "polarity": "positive", "surface": "わかって"}
    ]"#;

    fn request(base_form: &'static str, tense: Option<&'static str>) -> OracleRequest<'static> {
        OracleRequest {
            word: "わかる",
            verb_class: VerbClass::Godan,
            base_form,
            tense,
            polarity: POLARITY_POSITIVE,
        }
    }

    #[test]
    fn test_table_lookup() {
        let oracle = TableOracle::from_json(TABLE).unwrap();
        assert_eq!(oracle.len(), 2);
        assert_eq!(
            oracle.generate(&request(BASE_PLAIN, Some(TENSE_PAST))).unwrap(),
            "わかった"
        );
        assert_eq!(oracle.generate(&request(BASE_TE, None)).unwrap(), "わかって");
    }

    #[test]
    fn test_table_miss() {
        let oracle = TableOracle::from_json(TABLE).unwrap();
        let err = oracle
            .generate(&request(BASE_POLITE, Some(TENSE_NONPAST)))
            .unwrap_err();
        assert!(matches!(err, Error::Oracle { ref word, .. } if word == "わかる"));
    }

    #[test]
    fn test_table_later_rows_win() {
        let oracle = TableOracle::new([
            TableEntry {
                word: "する".into(),
                verb_class: VerbClass::Irregular,
                base_form: BASE_PLAIN.into(),
                tense: Some(TENSE_PAST.into()),
                polarity: POLARITY_POSITIVE.into(),
                surface: "wrong".into(),
            },
            TableEntry {
                word: "する".into(),
                verb_class: VerbClass::Irregular,
                base_form: BASE_PLAIN.into(),
                tense: Some(TENSE_PAST.into()),
                polarity: POLARITY_POSITIVE.into(),
                surface: "した".into(),
            },
        ]);
        assert_eq!(oracle.len(), 1);
        let req = OracleRequest {
            word: "する",
            verb_class: VerbClass::Irregular,
            base_form: BASE_PLAIN,
            tense: Some(TENSE_PAST),
            polarity: POLARITY_POSITIVE,
        };
        assert_eq!(oracle.generate(&req).unwrap(), "した");
    }

    #[test]
    fn test_malformed_table() {
        assert!(matches!(TableOracle::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_reader() {
        let oracle = TableOracle::from_reader(TABLE.as_bytes()).unwrap();
        assert_eq!(oracle.len(), 2);
    }

    #[test]
    fn test_closure_oracle() {
        let oracle = |r: &OracleRequest<'_>| -> Result<String> { Ok(format!("{}!", r.word)) };
        assert_eq!(oracle.generate(&request(BASE_TE, None)).unwrap(), "わかる!");
    }
}
