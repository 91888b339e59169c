// Quiz questions: a vocabulary record, a sampled descriptor and its answer.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::inflection::Inflection;
use crate::oracle::ConjugationOracle;
use crate::output;
use crate::sample;
use crate::types::WordCategory;
use crate::vocab::VocabRecord;

/// A single "conjugate this word" question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<WordCategory>,
    /// Human label of the category (e.g., `5-dan verb`), hidden with it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub inflection: Inflection,
    prompt: String,
    pub answer: String,
}

impl Question {
    /// Sample a descriptor for `record` and conjugate it.
    pub fn sample<R, O>(record: &VocabRecord, rng: &mut R, oracle: &O) -> Result<Self>
    where
        R: Rng + ?Sized,
        O: ConjugationOracle + ?Sized,
    {
        let inflection = sample::sample_with(record.category, rng);
        let answer = crate::conjugate(&record.word, record.category, &inflection, oracle)?;
        Ok(Self {
            word: record.word.clone(),
            kana: record.kana.clone(),
            category: Some(record.category),
            label: Some(record.category.label()),
            prompt: output::to_bracketed(&inflection),
            inflection,
            answer,
        })
    }

    /// Pick a random record and build a question for it.
    pub fn pick<R, O>(records: &[VocabRecord], rng: &mut R, oracle: &O) -> Result<Self>
    where
        R: Rng + ?Sized,
        O: ConjugationOracle + ?Sized,
    {
        let record = records.choose(rng).ok_or(Error::EmptyVocabulary)?;
        Self::sample(record, rng, oracle)
    }

    /// Bracketed label of the requested form (e.g., `[NEGATIVE] [PAST]`).
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn hide_kana(mut self) -> Self {
        self.kana = None;
        self
    }

    pub fn hide_category(mut self) -> Self {
        self.category = None;
        self.label = None;
        self
    }

    /// Surrounding whitespace in the submission is ignored.
    pub fn check(&self, submitted: &str) -> bool {
        submitted.trim() == self.answer
    }
}
