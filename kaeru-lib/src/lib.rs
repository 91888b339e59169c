pub mod types;
pub mod error;
pub mod inflection;
pub mod sample;
pub mod adjective;
pub mod oracle;
pub mod verb;
pub mod output;
pub mod vocab;
pub mod quiz;

pub use adjective::conjugate_adjective;
pub use error::{Error, Result};
pub use inflection::{AdjectiveInflection, Inflection, VerbInflection};
pub use oracle::{ConjugationOracle, OracleRequest, TableOracle};
pub use quiz::Question;
pub use sample::{sample_adjective, sample_verb};
pub use types::{AdjectiveCategory, VerbCategory, WordCategory};
pub use verb::conjugate_verb;
pub use vocab::VocabRecord;

/// Conjugate a word of any category.
///
/// The category decides which algorithm runs; a descriptor from the other
/// word family is an [`Error::UnsupportedCategory`].
pub fn conjugate<O>(
    word: &str,
    category: WordCategory,
    inflection: &Inflection,
    oracle: &O,
) -> Result<String>
where
    O: ConjugationOracle + ?Sized,
{
    match (category, inflection) {
        (WordCategory::Adjective(a), Inflection::Adjective(i)) => Ok(conjugate_adjective(word, a, i)),
        (WordCategory::Verb(v), Inflection::Verb(i)) => conjugate_verb(word, v, i, oracle),
        (WordCategory::Adjective(_), Inflection::Verb(_)) => Err(Error::UnsupportedCategory {
            category,
            expected: "a verb",
        }),
        (WordCategory::Verb(_), Inflection::Adjective(_)) => Err(Error::UnsupportedCategory {
            category,
            expected: "an adjective",
        }),
    }
}
