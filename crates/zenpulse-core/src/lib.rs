//! # ZenPulse Core Library
//!
//! Business logic behind the ZenPulse meditation app. The screens (paywall,
//! meditation list) are a thin view layer; everything they decide goes
//! through this crate, and the standalone CLI drives the same code.
//!
//! ## Architecture
//!
//! - **Entitlement**: lock/unlock decisions for catalog items from a single
//!   subscription flag
//! - **Affirmations**: deterministic hash-indexed selection from per-mood banks
//! - **Navigation**: the two-screen state machine
//! - **Session**: owns all mutable state and emits [`Event`]s
//! - **Storage**: TOML-based preferences
//!
//! ## Key Components
//!
//! - [`EntitlementGate`]: accessibility predicate and press handling
//! - [`AffirmationSelector`]: mood to affirmation
//! - [`Session`]: explicitly owned app context
//! - [`Config`]: Application configuration management

pub mod affirmation;
pub mod catalog;
pub mod entitlement;
pub mod error;
pub mod events;
pub mod navigation;
pub mod paywall;
pub mod session;
pub mod storage;

pub use affirmation::{
    build_prompt, hash, select_affirmation, AffirmationBank, AffirmationSelector, Mood,
};
pub use catalog::{Catalog, ContentItem};
pub use entitlement::{EntitlementGate, EntitlementState, ItemAccess, SelectAction};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use navigation::{NavTrigger, Navigator, Screen, Transition};
pub use paywall::{savings_percent, Benefit, Paywall, PaywallState, Plan, PlanId};
pub use session::Session;
pub use storage::Config;
