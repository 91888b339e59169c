// Output formatting for inflection descriptors.

use crate::inflection::{AdjectiveInflection, Inflection, VerbInflection};
use crate::types::*;

/// Convert an adjective descriptor to its bracketed "conjugate to" label.
///
/// Only marked features are shown, in the order polarity, tense, politeness:
///   `[NEGATIVE] [PAST] [POLITE]`
/// The plain copula is the な-adjective default and is not shown.
pub fn adjective_to_bracketed(inflection: &AdjectiveInflection) -> String {
    let mut features = Vec::new();
    if inflection.polarity == Polarity::Negative {
        features.push("[NEGATIVE]");
    }
    if inflection.tense == Tense::Past {
        features.push("[PAST]");
    }
    if inflection.politeness == Politeness::Polite {
        features.push("[POLITE]");
    }
    features.join(" ")
}

/// Convert a verb descriptor to its bracketed label.
///
/// Order: base form (`[POLITE]` or `[て-FORM]`), tense, polarity.
pub fn verb_to_bracketed(inflection: &VerbInflection) -> String {
    let mut features = Vec::new();
    match inflection.base_form() {
        BaseForm::Plain => {}
        BaseForm::Polite => features.push("[POLITE]"),
        BaseForm::Te => features.push("[て-FORM]"),
    }
    if inflection.tense() == Some(Tense::Past) {
        features.push("[PAST]");
    }
    if inflection.polarity() == Polarity::Negative {
        features.push("[NEGATIVE]");
    }
    features.join(" ")
}

pub fn to_bracketed(inflection: &Inflection) -> String {
    match inflection {
        Inflection::Adjective(a) => adjective_to_bracketed(a),
        Inflection::Verb(v) => verb_to_bracketed(v),
    }
}
