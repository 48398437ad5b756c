use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::affirmation::Mood;
use crate::entitlement::SelectAction;
use crate::navigation::{NavTrigger, Screen};
use crate::paywall::PlanId;

/// Every state change in a session produces an Event.
/// The view layer drains them after each interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ScreenChanged {
        from: Screen,
        to: Screen,
        trigger: NavTrigger,
        at: DateTime<Utc>,
    },
    ItemSelected {
        item_id: String,
        action: SelectAction,
        at: DateTime<Utc>,
    },
    EntitlementChanged {
        subscribed: bool,
        /// "purchase", "dev_activate" or "dev_reset".
        source: String,
        at: DateTime<Utc>,
    },
    MoodChanged {
        mood: Mood,
        at: DateTime<Utc>,
    },
    AffirmationGenerated {
        mood: Mood,
        text: String,
        at: DateTime<Utc>,
    },
    PlanSelected {
        plan: PlanId,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Tag name as it appears in JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::ScreenChanged { .. } => "ScreenChanged",
            Event::ItemSelected { .. } => "ItemSelected",
            Event::EntitlementChanged { .. } => "EntitlementChanged",
            Event::MoodChanged { .. } => "MoodChanged",
            Event::AffirmationGenerated { .. } => "AffirmationGenerated",
            Event::PlanSelected { .. } => "PlanSelected",
        }
    }
}
