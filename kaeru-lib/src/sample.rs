// Random descriptor sampling for quiz questions.
//
// Every sample has at least one marked feature: the all-default descriptor
// asks for the dictionary form, which is no question at all.

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use tracing::debug;

use crate::inflection::{AdjectiveInflection, Inflection, VerbInflection};
use crate::types::*;

/// Adjective feature forced to its marked value.
#[derive(Debug, Clone, Copy)]
enum AdjectiveFeature {
    Tense,
    Polarity,
    Politeness,
}

impl Distribution<AdjectiveFeature> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AdjectiveFeature {
        match rng.gen_range(0..3) {
            0 => AdjectiveFeature::Tense,
            1 => AdjectiveFeature::Polarity,
            _ => AdjectiveFeature::Politeness,
        }
    }
}

/// Verb feature forced to its marked value.
#[derive(Debug, Clone, Copy)]
enum VerbFeature {
    BaseForm,
    Polarity,
}

impl Distribution<VerbFeature> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> VerbFeature {
        if rng.gen_bool(0.5) {
            VerbFeature::BaseForm
        } else {
            VerbFeature::Polarity
        }
    }
}

/// Sample an adjective descriptor using the thread-local generator.
pub fn sample_adjective(category: AdjectiveCategory) -> AdjectiveInflection {
    sample_adjective_with(category, &mut rand::thread_rng())
}

/// Sample an adjective descriptor that is legal for `category`.
///
/// い-adjectives take no copula in plain speech, so they are never given
/// [`Politeness::Plain`]: their register is polite or unmarked.
pub fn sample_adjective_with<R: Rng + ?Sized>(
    category: AdjectiveCategory,
    rng: &mut R,
) -> AdjectiveInflection {
    let mut tense: Tense = rng.gen();
    let mut polarity: Polarity = rng.gen();
    let unpolite = if category.accepts_plain_copula() {
        Politeness::Plain
    } else {
        Politeness::Unmarked
    };
    let mut politeness = if rng.gen_bool(0.5) {
        Politeness::Polite
    } else {
        unpolite
    };

    let forced: AdjectiveFeature = rng.gen();
    match forced {
        AdjectiveFeature::Tense => tense = Tense::Past,
        AdjectiveFeature::Polarity => polarity = Polarity::Negative,
        AdjectiveFeature::Politeness => politeness = Politeness::Polite,
    }

    let inflection = AdjectiveInflection::new(tense, polarity, politeness);
    debug!(category = category.tag(), ?forced, ?inflection, "sampled adjective inflection");
    inflection
}

/// Sample a verb descriptor using the thread-local generator.
pub fn sample_verb() -> VerbInflection {
    sample_verb_with(&mut rand::thread_rng())
}

/// Sample a verb descriptor.
pub fn sample_verb_with<R: Rng + ?Sized>(rng: &mut R) -> VerbInflection {
    let mut base_form: BaseForm = rng.gen();
    let tense: Tense = rng.gen();
    let mut polarity: Polarity = rng.gen();

    // Unlike adjectives, tense is never the forced feature, so a past tense
    // alone is never what makes a verb sample non-default. Plain positive
    // past ({わかった}) is therefore never asked.
    let forced: VerbFeature = rng.gen();
    match forced {
        VerbFeature::BaseForm => {
            base_form = if rng.gen_bool(0.5) {
                BaseForm::Polite
            } else {
                BaseForm::Te
            };
        }
        VerbFeature::Polarity => polarity = Polarity::Negative,
    }

    let inflection = VerbInflection::finite(base_form, tense, polarity);
    debug!(?forced, ?inflection, "sampled verb inflection");
    inflection
}

/// Sample a descriptor for any word category.
pub fn sample_with<R: Rng + ?Sized>(category: WordCategory, rng: &mut R) -> Inflection {
    match category {
        WordCategory::Adjective(a) => Inflection::Adjective(sample_adjective_with(a, rng)),
        WordCategory::Verb(_) => Inflection::Verb(sample_verb_with(rng)),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const ITERATIONS: usize = 1_000;

    #[test]
    fn test_adjective_samples_are_marked() {
        let mut rng = StdRng::seed_from_u64(7);
        for category in AdjectiveCategory::ALL {
            for _ in 0..ITERATIONS {
                let a = sample_adjective_with(category, &mut rng);
                assert!(a.has_marked_feature(), "{category:?}: {a:?}");
            }
        }
    }

    #[test]
    fn test_na_samples_never_unmarked() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..ITERATIONS {
            let a = sample_adjective_with(AdjectiveCategory::Na, &mut rng);
            assert_ne!(a.politeness, Politeness::Unmarked);
        }
    }

    #[test]
    fn test_verb_samples_never_plain_positive() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..ITERATIONS {
            let v = sample_verb_with(&mut rng);
            assert!(
                v.base_form() != BaseForm::Plain || v.polarity() == Polarity::Negative,
                "{v:?}"
            );
            assert_eq!(v.tense().is_none(), v.base_form() == BaseForm::Te);
        }
    }

    #[test]
    fn test_sample_with_matches_family() {
        let mut rng = StdRng::seed_from_u64(17);
        assert!(matches!(
            sample_with(WordCategory::Verb(VerbCategory::Godan), &mut rng),
            Inflection::Verb(_)
        ));
        assert!(matches!(
            sample_with(WordCategory::Adjective(AdjectiveCategory::I), &mut rng),
            Inflection::Adjective(_)
        ));
    }
}
