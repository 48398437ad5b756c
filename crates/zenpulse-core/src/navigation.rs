//! Screen navigation state machine.
//!
//! Two screens and four triggers. The machine carries no payload; in
//! particular it never reads or writes entitlement.
//!
//! ## State Transitions
//!
//! ```text
//! Paywall --(TryFree | ViewCatalog)--> Meditations
//! Meditations --(LockedItemPressed | BackToPaywall)--> Paywall
//! ```
//!
//! Any other (state, trigger) pair is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Paywall,
    Meditations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTrigger {
    /// Trial CTA on the paywall.
    TryFree,
    ViewCatalog,
    /// A locked, inaccessible item was pressed.
    LockedItemPressed,
    BackToPaywall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub trigger: NavTrigger,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Navigator {
    screen: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Apply a trigger. Returns `None` when it is not valid from the current
    /// screen.
    pub fn apply(&mut self, trigger: NavTrigger) -> Option<Transition> {
        let to = match (self.screen, trigger) {
            (Screen::Paywall, NavTrigger::TryFree | NavTrigger::ViewCatalog) => Screen::Meditations,
            (Screen::Meditations, NavTrigger::LockedItemPressed | NavTrigger::BackToPaywall) => {
                Screen::Paywall
            }
            (screen, trigger) => {
                tracing::debug!(?screen, ?trigger, "ignored navigation trigger");
                return None;
            }
        };
        let transition = Transition {
            from: self.screen,
            to,
            trigger,
        };
        self.screen = to;
        tracing::debug!(from = ?transition.from, to = ?to, ?trigger, "screen changed");
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_paywall() {
        assert_eq!(Navigator::new().screen(), Screen::Paywall);
    }

    #[test]
    fn trial_opens_meditations() {
        let mut nav = Navigator::new();
        let t = nav.apply(NavTrigger::TryFree).unwrap();
        assert_eq!(t.from, Screen::Paywall);
        assert_eq!(t.to, Screen::Meditations);
        assert_eq!(nav.screen(), Screen::Meditations);
    }

    #[test]
    fn locked_press_returns_to_paywall() {
        let mut nav = Navigator::new();
        nav.apply(NavTrigger::ViewCatalog);
        let t = nav.apply(NavTrigger::LockedItemPressed).unwrap();
        assert_eq!(t.to, Screen::Paywall);
    }

    #[test]
    fn invalid_triggers_are_ignored() {
        let mut nav = Navigator::new();
        assert!(nav.apply(NavTrigger::BackToPaywall).is_none());
        assert!(nav.apply(NavTrigger::LockedItemPressed).is_none());
        assert_eq!(nav.screen(), Screen::Paywall);

        nav.apply(NavTrigger::TryFree);
        assert!(nav.apply(NavTrigger::TryFree).is_none());
        assert!(nav.apply(NavTrigger::ViewCatalog).is_none());
        assert_eq!(nav.screen(), Screen::Meditations);
    }

    #[test]
    fn cycles_indefinitely() {
        let mut nav = Navigator::new();
        for _ in 0..5 {
            assert!(nav.apply(NavTrigger::TryFree).is_some());
            assert!(nav.apply(NavTrigger::BackToPaywall).is_some());
        }
        assert_eq!(nav.screen(), Screen::Paywall);
    }
}
