// Inflection descriptors: what grammatical form is being requested.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{BaseForm, Politeness, Polarity, Tense, WordCategory};

/// Tense, polarity and politeness requested for an adjective.
///
/// Any combination can be constructed. Which combinations are grammatical
/// for a given category is the sampler's concern, not this type's: a plain
/// copula on an い-adjective is representable and still conjugates
/// deterministically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjectiveInflection {
    #[serde(default)]
    pub tense: Tense,
    #[serde(default)]
    pub polarity: Polarity,
    #[serde(default)]
    pub politeness: Politeness,
}

impl AdjectiveInflection {
    pub fn new(tense: Tense, polarity: Polarity, politeness: Politeness) -> Self {
        Self {
            tense,
            polarity,
            politeness,
        }
    }

    /// True only for the exact dictionary-form request.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True if at least one feature carries its marked value (past,
    /// negative or polite). The plain copula does not count.
    pub fn has_marked_feature(&self) -> bool {
        self.tense == Tense::Past
            || self.polarity == Polarity::Negative
            || self.politeness == Politeness::Polite
    }
}

/// Base form, tense and polarity requested for a verb.
///
/// Fields are private so that a て-form descriptor can never carry a tense,
/// and every other base form always does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VerbInflection {
    base_form: BaseForm,
    tense: Option<Tense>,
    polarity: Polarity,
}

impl VerbInflection {
    /// Build a descriptor. A missing tense on a non-て base form defaults to
    /// non-past; a tense on the て-form is rejected.
    pub fn new(base_form: BaseForm, tense: Option<Tense>, polarity: Polarity) -> Result<Self> {
        let tense = match (base_form, tense) {
            (BaseForm::Te, Some(tense)) => {
                return Err(Error::IllegalDescriptorConstruction { tense });
            }
            (BaseForm::Te, None) => None,
            (BaseForm::Plain | BaseForm::Polite, tense) => Some(tense.unwrap_or_default()),
        };
        Ok(Self {
            base_form,
            tense,
            polarity,
        })
    }

    /// The て-form with the given polarity (e.g., {調べて}, {調べなくて}).
    pub fn te(polarity: Polarity) -> Self {
        Self {
            base_form: BaseForm::Te,
            tense: None,
            polarity,
        }
    }

    /// A finite (plain or polite) form. A `Te` base form is accepted and
    /// yields the て-form, dropping the tense.
    pub fn finite(base_form: BaseForm, tense: Tense, polarity: Polarity) -> Self {
        match base_form {
            BaseForm::Te => Self::te(polarity),
            BaseForm::Plain | BaseForm::Polite => Self {
                base_form,
                tense: Some(tense),
                polarity,
            },
        }
    }

    pub fn base_form(&self) -> BaseForm {
        self.base_form
    }

    pub fn tense(&self) -> Option<Tense> {
        self.tense
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for VerbInflection {
    fn default() -> Self {
        Self {
            base_form: BaseForm::Plain,
            tense: Some(Tense::NonPast),
            polarity: Polarity::Positive,
        }
    }
}

#[derive(Deserialize)]
struct RawVerbInflection {
    #[serde(default)]
    base_form: BaseForm,
    #[serde(default)]
    tense: Option<Tense>,
    #[serde(default)]
    polarity: Polarity,
}

impl<'de> Deserialize<'de> for VerbInflection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawVerbInflection::deserialize(deserializer)?;
        Self::new(raw.base_form, raw.tense, raw.polarity).map_err(serde::de::Error::custom)
    }
}

/// A descriptor for either word family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Inflection {
    Adjective(AdjectiveInflection),
    Verb(VerbInflection),
}

impl Inflection {
    /// The all-default descriptor for the family `category` belongs to.
    pub fn default_for(category: WordCategory) -> Self {
        match category {
            WordCategory::Adjective(_) => Self::Adjective(AdjectiveInflection::default()),
            WordCategory::Verb(_) => Self::Verb(VerbInflection::default()),
        }
    }
}

impl From<AdjectiveInflection> for Inflection {
    fn from(inflection: AdjectiveInflection) -> Self {
        Self::Adjective(inflection)
    }
}

impl From<VerbInflection> for Inflection {
    fn from(inflection: VerbInflection) -> Self {
        Self::Verb(inflection)
    }
}
