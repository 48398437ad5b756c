//! Entitlement gate.
//!
//! Decides whether a content item may be opened and what happens when the
//! user presses one. The lock classification lives on the item; only the
//! derived accessibility depends on the subscription flag.
//!
//! ```text
//! accessible = item.free || subscribed
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ContentItem};

/// Whether the user currently has paid access to locked content.
///
/// Starts unsubscribed. [`EntitlementState::set`] is the only writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementState {
    subscribed: bool,
}

impl EntitlementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Assign the flag exactly. Returns the previous value.
    pub fn set(&mut self, flag: bool) -> bool {
        let previous = self.subscribed;
        self.subscribed = flag;
        if previous != flag {
            tracing::info!(subscribed = flag, "entitlement changed");
        }
        previous
    }
}

/// What the view layer should do after an item press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectAction {
    /// The item is locked and the user is not subscribed.
    NavigateToPaywall,
    /// Hand the item to the player.
    BeginSession { item_id: String },
}

/// Accessibility of one item, as rendered by the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAccess {
    pub id: String,
    pub title: String,
    pub duration_min: u32,
    pub locked: bool,
    pub accessible: bool,
}

pub struct EntitlementGate;

impl EntitlementGate {
    pub fn is_accessible(item: &ContentItem, subscribed: bool) -> bool {
        item.free || subscribed
    }

    /// Resolve an item press. Never mutates entitlement.
    pub fn on_select(item: &ContentItem, subscribed: bool) -> SelectAction {
        if Self::is_accessible(item, subscribed) {
            tracing::debug!(item = %item.id, "item accessible, starting session");
            SelectAction::BeginSession {
                item_id: item.id.clone(),
            }
        } else {
            tracing::debug!(item = %item.id, "item locked, redirecting to paywall");
            SelectAction::NavigateToPaywall
        }
    }

    pub fn set_entitlement(state: &mut EntitlementState, flag: bool) {
        state.set(flag);
    }

    /// Accessibility for every item, in catalog order.
    pub fn classify(catalog: &Catalog, subscribed: bool) -> Vec<ItemAccess> {
        catalog
            .items()
            .iter()
            .map(|item| ItemAccess {
                id: item.id.clone(),
                title: item.title.clone(),
                duration_min: item.duration_min,
                locked: item.is_locked(),
                accessible: Self::is_accessible(item, subscribed),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn free_item() -> ContentItem {
        ContentItem::new("m1", "Free", 5, true)
    }

    fn locked_item() -> ContentItem {
        ContentItem::new("m4", "Locked", 10, false)
    }

    #[test]
    fn free_item_always_accessible() {
        assert!(EntitlementGate::is_accessible(&free_item(), false));
        assert!(EntitlementGate::is_accessible(&free_item(), true));
    }

    #[test]
    fn locked_item_needs_subscription() {
        assert!(!EntitlementGate::is_accessible(&locked_item(), false));
        assert!(EntitlementGate::is_accessible(&locked_item(), true));
    }

    #[test]
    fn locked_press_goes_to_paywall() {
        assert_eq!(
            EntitlementGate::on_select(&locked_item(), false),
            SelectAction::NavigateToPaywall
        );
    }

    #[test]
    fn accessible_press_begins_session() {
        assert_eq!(
            EntitlementGate::on_select(&locked_item(), true),
            SelectAction::BeginSession {
                item_id: "m4".into()
            }
        );
    }

    #[test]
    fn set_entitlement_assigns_exactly() {
        let mut state = EntitlementState::new();
        assert!(!state.is_subscribed());

        EntitlementGate::set_entitlement(&mut state, true);
        assert!(state.is_subscribed());
        EntitlementGate::set_entitlement(&mut state, true);
        assert!(state.is_subscribed());
        EntitlementGate::set_entitlement(&mut state, false);
        assert!(!state.is_subscribed());
    }

    #[test]
    fn classify_keeps_lock_flag_independent_of_subscription() {
        let catalog = Catalog::builtin();
        let subscribed = EntitlementGate::classify(&catalog, true);
        assert!(subscribed.iter().all(|a| a.accessible));
        assert_eq!(subscribed.iter().filter(|a| a.locked).count(), 4);

        let trial = EntitlementGate::classify(&catalog, false);
        let accessible: Vec<_> = trial
            .iter()
            .filter(|a| a.accessible)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(accessible, vec!["m1", "m2"]);
    }

    #[test]
    fn select_action_json_shape() {
        let json = serde_json::to_value(SelectAction::NavigateToPaywall).unwrap();
        assert_eq!(json["action"], "navigate_to_paywall");
        let json = serde_json::to_value(SelectAction::BeginSession {
            item_id: "m2".into(),
        })
        .unwrap();
        assert_eq!(json["action"], "begin_session");
        assert_eq!(json["item_id"], "m2");
    }

    proptest! {
        #[test]
        fn accessibility_is_free_or_subscribed(free in any::<bool>(), subscribed in any::<bool>()) {
            let item = ContentItem::new("x", "X", 1, free);
            prop_assert_eq!(EntitlementGate::is_accessible(&item, subscribed), free || subscribed);
        }

        #[test]
        fn on_select_never_touches_state(free in any::<bool>(), subscribed in any::<bool>()) {
            let mut state = EntitlementState::new();
            state.set(subscribed);
            let item = ContentItem::new("x", "X", 1, free);
            let _ = EntitlementGate::on_select(&item, state.is_subscribed());
            prop_assert_eq!(state.is_subscribed(), subscribed);
        }
    }
}
