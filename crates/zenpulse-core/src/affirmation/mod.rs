//! Mood-driven affirmations.
//!
//! There is no language model behind the "generate" button: the prompt is a
//! pure function of the mood, its hash picks an index into that mood's bank,
//! and so the same mood always yields the same sentence.

mod bank;
mod mood;
mod prompt;

pub use bank::{select_affirmation, AffirmationBank, AffirmationSelector};
pub use mood::Mood;
pub use prompt::{build_prompt, hash};
