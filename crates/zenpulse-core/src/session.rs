//! App session context.
//!
//! Owns everything that changes while the app runs: entitlement, the current
//! screen, the paywall selection, the mood and the last affirmation. Both
//! screens operate on the same `Session`; `set_entitlement` is the only place
//! entitlement is written.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = Catalog::builtin();
//! let selector = AffirmationSelector::default();
//! let mut session = Session::new(&catalog, &selector);
//! session.start_trial();
//! session.press_item("m4")?; // -> NavigateToPaywall
//! session.complete_purchase();
//! ```

use chrono::Utc;

use crate::affirmation::{AffirmationSelector, Mood};
use crate::catalog::Catalog;
use crate::entitlement::{EntitlementGate, EntitlementState, ItemAccess, SelectAction};
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::navigation::{NavTrigger, Navigator, Screen};
use crate::paywall::{PaywallState, PlanId};

pub struct Session<'a> {
    catalog: &'a Catalog,
    selector: &'a AffirmationSelector,
    entitlement: EntitlementState,
    navigator: Navigator,
    paywall: PaywallState,
    mood: Mood,
    affirmation: Option<String>,
    events: Vec<Event>,
}

impl<'a> Session<'a> {
    /// Fresh session: paywall screen, not subscribed, neutral mood.
    pub fn new(catalog: &'a Catalog, selector: &'a AffirmationSelector) -> Self {
        Self {
            catalog,
            selector,
            entitlement: EntitlementState::new(),
            navigator: Navigator::new(),
            paywall: PaywallState::default(),
            mood: Mood::default(),
            affirmation: None,
            events: Vec::new(),
        }
    }

    /// Override the starting mood and plan (from config).
    pub fn with_defaults(mut self, mood: Mood, plan: PlanId) -> Self {
        self.mood = mood;
        self.paywall = PaywallState::with_plan(plan);
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn is_subscribed(&self) -> bool {
        self.entitlement.is_subscribed()
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    pub fn selected_plan(&self) -> PlanId {
        self.paywall.selected()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn affirmation(&self) -> Option<&str> {
        self.affirmation.as_deref()
    }

    pub fn access_list(&self) -> Vec<ItemAccess> {
        EntitlementGate::classify(self.catalog, self.is_subscribed())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Trial CTA. Opens the catalog without granting entitlement.
    pub fn start_trial(&mut self) -> Option<Screen> {
        self.navigate(NavTrigger::TryFree)
    }

    pub fn view_catalog(&mut self) -> Option<Screen> {
        self.navigate(NavTrigger::ViewCatalog)
    }

    pub fn back_to_paywall(&mut self) -> Option<Screen> {
        self.navigate(NavTrigger::BackToPaywall)
    }

    /// Press an item on the list. A locked item without entitlement sends
    /// the user to the paywall.
    pub fn press_item(&mut self, id: &str) -> Result<SelectAction> {
        let item = self
            .catalog
            .get(id)
            .ok_or_else(|| ValidationError::UnknownItem(id.to_string()))?;
        let action = EntitlementGate::on_select(item, self.is_subscribed());
        self.events.push(Event::ItemSelected {
            item_id: id.to_string(),
            action: action.clone(),
            at: Utc::now(),
        });
        if action == SelectAction::NavigateToPaywall {
            self.navigate(NavTrigger::LockedItemPressed);
        }
        Ok(action)
    }

    // ── Entitlement ──────────────────────────────────────────────────

    /// The single writer for entitlement.
    pub fn set_entitlement(&mut self, flag: bool, source: &str) {
        let previous = self.entitlement.set(flag);
        if previous != flag {
            self.events.push(Event::EntitlementChanged {
                subscribed: flag,
                source: source.to_string(),
                at: Utc::now(),
            });
        }
    }

    pub fn complete_purchase(&mut self) {
        self.set_entitlement(true, "purchase");
    }

    pub fn dev_activate(&mut self) {
        self.set_entitlement(true, "dev_activate");
    }

    pub fn dev_reset(&mut self) {
        self.set_entitlement(false, "dev_reset");
    }

    // ── Paywall / mood ───────────────────────────────────────────────

    pub fn select_plan(&mut self, plan: PlanId) {
        if self.paywall.select_plan(plan) {
            self.events.push(Event::PlanSelected {
                plan,
                at: Utc::now(),
            });
        }
    }

    pub fn set_mood(&mut self, mood: Mood) {
        if self.mood != mood {
            self.mood = mood;
            self.events.push(Event::MoodChanged {
                mood,
                at: Utc::now(),
            });
        }
    }

    /// Re-run selection for the current mood and keep the result.
    pub fn generate_affirmation(&mut self) -> &str {
        let text = self.selector.select(self.mood).to_string();
        self.events.push(Event::AffirmationGenerated {
            mood: self.mood,
            text: text.clone(),
            at: Utc::now(),
        });
        self.affirmation.insert(text).as_str()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn navigate(&mut self, trigger: NavTrigger) -> Option<Screen> {
        let transition = self.navigator.apply(trigger)?;
        self.events.push(Event::ScreenChanged {
            from: transition.from,
            to: transition.to,
            trigger,
            at: Utc::now(),
        });
        Some(transition.to)
    }
}
