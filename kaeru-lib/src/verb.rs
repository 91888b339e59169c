// Verb conjugation: descriptor → oracle request → oracle output, verbatim.

use tracing::{debug, trace};

use crate::error::Result;
use crate::inflection::VerbInflection;
use crate::oracle::*;
use crate::types::*;

/// Conjugate a dictionary-form verb through the oracle.
///
/// No linguistic work happens here; the oracle's output is returned as-is and
/// its errors are propagated without retry.
pub fn conjugate_verb<O>(
    word: &str,
    category: VerbCategory,
    inflection: &VerbInflection,
    oracle: &O,
) -> Result<String>
where
    O: ConjugationOracle + ?Sized,
{
    let request = to_request(word, category, inflection);
    trace!(?request, "oracle request");
    let conjugated = oracle.generate(&request)?;
    debug!(word, category = category.tag(), %conjugated, "conjugated verb");
    Ok(conjugated)
}

/// Encode a descriptor the way the oracle expects it.
pub fn to_request<'a>(
    word: &'a str,
    category: VerbCategory,
    inflection: &VerbInflection,
) -> OracleRequest<'a> {
    OracleRequest {
        word,
        verb_class: verb_class(category),
        base_form: match inflection.base_form() {
            BaseForm::Plain => BASE_PLAIN,
            BaseForm::Polite => BASE_POLITE,
            BaseForm::Te => BASE_TE,
        },
        tense: inflection.tense().map(|tense| match tense {
            Tense::NonPast => TENSE_NONPAST,
            Tense::Past => TENSE_PAST,
        }),
        polarity: match inflection.polarity() {
            Polarity::Positive => POLARITY_POSITIVE,
            Polarity::Negative => POLARITY_NEGATIVE,
        },
    }
}

pub fn verb_class(category: VerbCategory) -> VerbClass {
    match category {
        VerbCategory::Ichidan => VerbClass::Ichidan,
        VerbCategory::Godan => VerbClass::Godan,
        VerbCategory::IchidanIrregular => VerbClass::Irregular,
    }
}
