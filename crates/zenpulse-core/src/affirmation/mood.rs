use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Positive, Mood::Neutral, Mood::Negative];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
        }
    }

    /// Context phrase appended to the prompt.
    pub fn hint(self) -> &'static str {
        match self {
            Mood::Positive => "Пользователь в хорошем настроении и хочет закрепить это состояние.",
            Mood::Neutral => "Пользователь спокоен и хочет мягко настроиться на день.",
            Mood::Negative => "Пользователь встревожен или устал и ищет поддержку.",
        }
    }

    /// Label shown on the mood selector.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Positive => "Хорошо",
            Mood::Neutral => "Нормально",
            Mood::Negative => "Тяжело",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Mood::Positive),
            "neutral" => Ok(Mood::Neutral),
            "negative" => Ok(Mood::Negative),
            _ => Err(ValidationError::UnknownMood(s.to_string())),
        }
    }
}
