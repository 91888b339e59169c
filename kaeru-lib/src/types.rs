// Closed vocabularies: word categories and inflection feature values.

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

// ---------------------------------------------------------------------------
// Word categories
// ---------------------------------------------------------------------------

/// Conjugation pattern of an adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjectiveCategory {
    /// い-adjective (e.g., {強い}, {おいしい}).
    #[serde(rename = "adjective-i")]
    I,
    /// い-adjective whose 良い ending is written いい (e.g., {いい}, {かっこいい}).
    #[serde(rename = "adjective-i-yoi-ii")]
    IYoiIi,
    /// な-adjective, inflected through a copula (e.g., {有名}, {きれい}).
    #[serde(rename = "adjective-na")]
    Na,
}

impl AdjectiveCategory {
    pub const ALL: [AdjectiveCategory; 3] = [Self::I, Self::IYoiIi, Self::Na];

    pub fn tag(self) -> &'static str {
        match self {
            Self::I => "adjective-i",
            Self::IYoiIi => "adjective-i-yoi-ii",
            Self::Na => "adjective-na",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::I => "い-adjective",
            Self::IYoiIi => "い-adjective (いい)",
            Self::Na => "な-adjective",
        }
    }

    /// Only な-adjectives take the plain copula {だ}.
    pub fn accepts_plain_copula(self) -> bool {
        matches!(self, Self::Na)
    }
}

/// Conjugation pattern of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbCategory {
    /// Vowel-stem る-verbs (e.g., {調べる}).
    #[serde(rename = "verb-ichidan")]
    Ichidan,
    /// Consonant-stem う-verbs (e.g., {わかる}).
    #[serde(rename = "verb-godan")]
    Godan,
    /// {する} and {来る}/{くる}, alone or as the tail of a compound.
    #[serde(rename = "verb-ichidan-irregular")]
    IchidanIrregular,
}

impl VerbCategory {
    pub const ALL: [VerbCategory; 3] = [Self::Ichidan, Self::Godan, Self::IchidanIrregular];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Ichidan => "verb-ichidan",
            Self::Godan => "verb-godan",
            Self::IchidanIrregular => "verb-ichidan-irregular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ichidan => "1-dan verb",
            Self::Godan => "5-dan verb",
            Self::IchidanIrregular => "irregular verb",
        }
    }
}

/// Any conjugable word category. Serialized as its string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Adjective(AdjectiveCategory),
    Verb(VerbCategory),
}

impl WordCategory {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Adjective(a) => a.tag(),
            Self::Verb(v) => v.tag(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Adjective(a) => a.label(),
            Self::Verb(v) => v.label(),
        }
    }
}

impl From<AdjectiveCategory> for WordCategory {
    fn from(category: AdjectiveCategory) -> Self {
        Self::Adjective(category)
    }
}

impl From<VerbCategory> for WordCategory {
    fn from(category: VerbCategory) -> Self {
        Self::Verb(category)
    }
}

impl TryFrom<WordCategory> for AdjectiveCategory {
    type Error = Error;

    fn try_from(category: WordCategory) -> Result<Self, Error> {
        match category {
            WordCategory::Adjective(a) => Ok(a),
            WordCategory::Verb(_) => Err(Error::UnsupportedCategory {
                category,
                expected: "an adjective",
            }),
        }
    }
}

impl TryFrom<WordCategory> for VerbCategory {
    type Error = Error;

    fn try_from(category: WordCategory) -> Result<Self, Error> {
        match category {
            WordCategory::Verb(v) => Ok(v),
            WordCategory::Adjective(_) => Err(Error::UnsupportedCategory {
                category,
                expected: "a verb",
            }),
        }
    }
}

impl FromStr for WordCategory {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Error> {
        let adjective = AdjectiveCategory::ALL
            .into_iter()
            .find(|a| a.tag() == tag)
            .map(Self::Adjective);
        let verb = || {
            VerbCategory::ALL
                .into_iter()
                .find(|v| v.tag() == tag)
                .map(Self::Verb)
        };
        adjective
            .or_else(verb)
            .ok_or_else(|| Error::UnknownCategoryTag(tag.to_string()))
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for WordCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for WordCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Inflection features
// ---------------------------------------------------------------------------

/// Time of the state or action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// Present or future (e.g., {美味しい}, {有名だ}).
    #[default]
    NonPast,
    /// (e.g., {美味しかった}, {有名だった}).
    Past,
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonPast => "nonpast",
            Self::Past => "past",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    #[default]
    Positive,
    /// (e.g., {遅くない}, {完璧じゃない}).
    Negative,
}

/// Register of an adjective ending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    /// No register requested. い-adjectives take no copula; な-adjectives
    /// fall back to the plain copula.
    #[default]
    Unmarked,
    /// The plain copula {だ}. Only meaningful for な-adjectives.
    Plain,
    /// (e.g., {高いです}, {立派です}).
    Polite,
}

/// Base a verb is conjugated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseForm {
    #[default]
    Plain,
    Polite,
    /// The tenseless connective form (e.g., {調べて}).
    Te,
}

impl Distribution<Tense> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tense {
        if rng.gen_bool(0.5) {
            Tense::Past
        } else {
            Tense::NonPast
        }
    }
}

impl Distribution<Polarity> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Polarity {
        if rng.gen_bool(0.5) {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }
}

impl Distribution<BaseForm> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BaseForm {
        match rng.gen_range(0..3) {
            0 => BaseForm::Plain,
            1 => BaseForm::Polite,
            _ => BaseForm::Te,
        }
    }
}
