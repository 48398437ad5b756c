use std::collections::BTreeMap;

use serde::Serialize;

use super::{build_prompt, hash, Mood};
use crate::error::ValidationError;

/// Candidate sentences for every mood.
///
/// Every mood has at least one entry; this is checked once in
/// [`AffirmationBank::new`], so selection can never divide by zero.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct AffirmationBank {
    entries: BTreeMap<Mood, Vec<String>>,
}

impl AffirmationBank {
    pub fn new<I>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (Mood, Vec<String>)>,
    {
        let entries: BTreeMap<Mood, Vec<String>> = entries.into_iter().collect();
        for mood in Mood::ALL {
            match entries.get(&mood) {
                Some(list) if !list.is_empty() => {}
                _ => {
                    return Err(ValidationError::EmptyCollection(format!(
                        "affirmation bank for mood '{mood}'"
                    )))
                }
            }
        }
        Ok(Self { entries })
    }

    /// The two sentences per mood the app ships with.
    pub fn builtin() -> Self {
        let bank = |lines: [&str; 2]| lines.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            entries: BTreeMap::from([
                (
                    Mood::Positive,
                    bank([
                        "Я замечаю свою радость и позволяю ей наполнить этот день.",
                        "Моя энергия спокойна и направлена туда, где она нужна.",
                    ]),
                ),
                (
                    Mood::Neutral,
                    bank([
                        "Я здесь и сейчас, и этого достаточно.",
                        "С каждым вдохом я мягко возвращаюсь к себе.",
                    ]),
                ),
                (
                    Mood::Negative,
                    bank([
                        "Мне можно чувствовать то, что я чувствую; это пройдёт.",
                        "Я бережно отношусь к себе и делаю один маленький шаг.",
                    ]),
                ),
            ]),
        }
    }

    pub fn get(&self, mood: Mood) -> &[String] {
        self.entries.get(&mood).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, mood: Mood, text: &str) -> bool {
        self.get(mood).iter().any(|s| s == text)
    }
}

impl Default for AffirmationBank {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Pairs a bank with the hash-index selection.
#[derive(Debug, Clone, Default)]
pub struct AffirmationSelector {
    bank: AffirmationBank,
}

impl AffirmationSelector {
    pub fn new(bank: AffirmationBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &AffirmationBank {
        &self.bank
    }

    /// Index into `mood`'s bank: `|hash(prompt)| mod len`.
    pub fn index_for(&self, mood: Mood) -> usize {
        let len = self.bank.get(mood).len();
        let h = hash(&build_prompt(mood));
        // unsigned_abs keeps i32::MIN at 2^31 instead of overflowing.
        h.unsigned_abs() as usize % len.max(1)
    }

    pub fn select(&self, mood: Mood) -> &str {
        let idx = self.index_for(mood);
        let text = &self.bank.get(mood)[idx];
        tracing::debug!(%mood, idx, "affirmation selected");
        text
    }
}

/// Select from the built-in bank.
pub fn select_affirmation(mood: Mood) -> String {
    AffirmationSelector::default().select(mood).to_string()
}
