// Rule-based adjective conjugation.
//
// Three families, selected by category:
//   A. い-adjectives: replace the final い with a suffix chain
//   B. いい-adjectives: like A, but through the よい stem for every
//      non-dictionary form
//   C. な-adjectives: append a copula chain to the unmodified word
//
// Suffixes are appended in the order polarity, tense, politeness. The
// negative morph {くな} is completed by the tense suffix ({い} or {かった}),
// so negative past is {くなかった} rather than two independent affixes.

use tracing::trace;

use crate::inflection::AdjectiveInflection;
use crate::types::*;

// ---------------------------------------------------------------------------
// Suffix constants
// ---------------------------------------------------------------------------

const I_NEGATIVE: &str = "くな";
const I_NONPAST: &str = "い";
const I_PAST: &str = "かった";
const I_POLITE: &str = "です";

// The colloquial いい is only used in dictionary form; its stem is よい.
const YOI_STEM: &str = "よい";

const NA_POLITE: &str = "で";
const NA_POLITE_NONPAST: &str = "す";
const NA_POLITE_PAST: &str = "した";
const NA_POLITE_NEGATIVE: &str = "はありません";
const NA_POLITE_NEGATIVE_PAST: &str = "でした";
const NA_PLAIN: &str = "だ";
// {だ} + {った} is the contracted past {だった}.
const NA_PLAIN_PAST: &str = "った";
const NA_PLAIN_NEGATIVE: &str = "じゃな";

/// Conjugate a dictionary-form adjective of the given category.
///
/// Never fails: the descriptor is not checked against the category, and a
/// combination that is not grammatical for the category still produces the
/// output that category's rules define.
pub fn conjugate_adjective(
    word: &str,
    category: AdjectiveCategory,
    inflection: &AdjectiveInflection,
) -> String {
    let conjugated = match category {
        AdjectiveCategory::I => conjugate_i(word, inflection),
        AdjectiveCategory::IYoiIi => conjugate_i_yoi_ii(word, inflection),
        AdjectiveCategory::Na => conjugate_na(word, inflection),
    };
    trace!(word, category = category.tag(), %conjugated, "conjugated adjective");
    conjugated
}

fn conjugate_i(word: &str, inflection: &AdjectiveInflection) -> String {
    let mut conjugated = drop_last_chars(word, 1).to_string();

    if inflection.polarity == Polarity::Negative {
        conjugated.push_str(I_NEGATIVE);
    }

    conjugated.push_str(match inflection.tense {
        Tense::NonPast => I_NONPAST,
        Tense::Past => I_PAST,
    });

    if inflection.politeness == Politeness::Polite {
        conjugated.push_str(I_POLITE);
    }

    conjugated
}

fn conjugate_i_yoi_ii(word: &str, inflection: &AdjectiveInflection) -> String {
    if inflection.is_default() {
        return word.to_string();
    }
    let yoi = format!("{}{YOI_STEM}", drop_last_chars(word, 2));
    conjugate_i(&yoi, inflection)
}

fn conjugate_na(word: &str, inflection: &AdjectiveInflection) -> String {
    let mut conjugated = word.to_string();

    match (inflection.politeness, inflection.polarity) {
        (Politeness::Polite, Polarity::Positive) => {
            conjugated.push_str(NA_POLITE);
            conjugated.push_str(match inflection.tense {
                Tense::NonPast => NA_POLITE_NONPAST,
                Tense::Past => NA_POLITE_PAST,
            });
        }
        (Politeness::Polite, Polarity::Negative) => {
            conjugated.push_str(NA_POLITE);
            conjugated.push_str(NA_POLITE_NEGATIVE);
            if inflection.tense == Tense::Past {
                conjugated.push_str(NA_POLITE_NEGATIVE_PAST);
            }
        }
        // An unmarked register on a な-adjective is the plain copula.
        (Politeness::Plain | Politeness::Unmarked, Polarity::Positive) => {
            conjugated.push_str(NA_PLAIN);
            if inflection.tense == Tense::Past {
                conjugated.push_str(NA_PLAIN_PAST);
            }
        }
        (Politeness::Plain | Politeness::Unmarked, Polarity::Negative) => {
            conjugated.push_str(NA_PLAIN_NEGATIVE);
            conjugated.push_str(match inflection.tense {
                Tense::NonPast => I_NONPAST,
                Tense::Past => I_PAST,
            });
        }
    }

    conjugated
}

/// Drop the last `n` characters (not bytes). Shorter words become empty.
fn drop_last_chars(word: &str, n: usize) -> &str {
    let mut chars = word.chars();
    for _ in 0..n {
        chars.next_back();
    }
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inflect(tense: Tense, polarity: Polarity, politeness: Politeness) -> AdjectiveInflection {
        AdjectiveInflection::new(tense, polarity, politeness)
    }

    #[test]
    fn test_i_default_unchanged() {
        for word in ["強い", "おいしい", "ラグい"] {
            let out = conjugate_adjective(word, AdjectiveCategory::I, &AdjectiveInflection::default());
            assert_eq!(out, word);
        }
    }

    #[test]
    fn test_i_full_table() {
        use Politeness::{Polite, Unmarked};
        use Polarity::{Negative, Positive};
        use Tense::{NonPast, Past};
        let cases = [
            (inflect(NonPast, Negative, Unmarked), "強くない"),
            (inflect(Past, Positive, Unmarked), "強かった"),
            (inflect(Past, Negative, Unmarked), "強くなかった"),
            (inflect(NonPast, Positive, Polite), "強いです"),
            (inflect(NonPast, Negative, Polite), "強くないです"),
            (inflect(Past, Positive, Polite), "強かったです"),
            (inflect(Past, Negative, Polite), "強くなかったです"),
        ];
        for (inflection, expected) in cases {
            assert_eq!(
                conjugate_adjective("強い", AdjectiveCategory::I, &inflection),
                expected,
                "{inflection:?}"
            );
        }
    }

    #[test]
    fn test_i_yoi_ii_default_keeps_ii() {
        for word in ["いい", "かっこいい", "気持ちいい"] {
            let out = conjugate_adjective(
                word,
                AdjectiveCategory::IYoiIi,
                &AdjectiveInflection::default(),
            );
            assert_eq!(out, word);
        }
    }

    #[test]
    fn test_i_yoi_ii_uses_yoi_stem() {
        let negative = inflect(Tense::NonPast, Polarity::Negative, Politeness::Unmarked);
        assert_eq!(conjugate_adjective("いい", AdjectiveCategory::IYoiIi, &negative), "よくない");
        let polite = inflect(Tense::NonPast, Polarity::Positive, Politeness::Polite);
        assert_eq!(
            conjugate_adjective("かっこいい", AdjectiveCategory::IYoiIi, &polite),
            "かっこよいです"
        );
        let past = inflect(Tense::Past, Polarity::Positive, Politeness::Unmarked);
        assert_eq!(
            conjugate_adjective("気持ちいい", AdjectiveCategory::IYoiIi, &past),
            "気持ちよかった"
        );
    }

    #[test]
    fn test_na_plain_and_polite() {
        use Politeness::{Plain, Polite, Unmarked};
        use Polarity::{Negative, Positive};
        use Tense::{NonPast, Past};
        let cases = [
            (inflect(NonPast, Positive, Unmarked), "有名だ"),
            (inflect(NonPast, Positive, Plain), "有名だ"),
            (inflect(NonPast, Negative, Unmarked), "有名じゃない"),
            (inflect(Past, Positive, Unmarked), "有名だった"),
            (inflect(Past, Negative, Plain), "有名じゃなかった"),
            (inflect(NonPast, Positive, Polite), "有名です"),
            (inflect(Past, Positive, Polite), "有名でした"),
            (inflect(NonPast, Negative, Polite), "有名ではありません"),
            (inflect(Past, Negative, Polite), "有名ではありませんでした"),
        ];
        for (inflection, expected) in cases {
            assert_eq!(
                conjugate_adjective("有名", AdjectiveCategory::Na, &inflection),
                expected,
                "{inflection:?}"
            );
        }
    }

    #[test]
    fn test_plain_copula_on_i_adjective_is_deterministic() {
        // Not grammatical, but the い rules simply ignore the copula.
        let plain = inflect(Tense::Past, Polarity::Positive, Politeness::Plain);
        assert_eq!(conjugate_adjective("強い", AdjectiveCategory::I, &plain), "強かった");
        // Plain is not the all-default descriptor, so いい takes the よい stem.
        let plain_default = inflect(Tense::NonPast, Polarity::Positive, Politeness::Plain);
        assert_eq!(
            conjugate_adjective("いい", AdjectiveCategory::IYoiIi, &plain_default),
            "よい"
        );
    }

    #[test]
    fn test_drop_last_chars_multibyte() {
        assert_eq!(drop_last_chars("強い", 1), "強");
        assert_eq!(drop_last_chars("いい", 2), "");
        assert_eq!(drop_last_chars("い", 3), "");
    }
}
