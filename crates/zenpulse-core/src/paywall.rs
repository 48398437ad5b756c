//! Subscription plans shown on the paywall.
//!
//! Selecting a plan or pressing the trial CTA only changes what the paywall
//! shows. Neither grants entitlement; that happens on purchase completion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Monthly,
    #[default]
    Yearly,
}

impl PlanId {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanId::Monthly => "monthly",
            PlanId::Yearly => "yearly",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(PlanId::Monthly),
            "yearly" => Ok(PlanId::Yearly),
            _ => Err(ValidationError::UnknownPlan(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub title: String,
    /// Price in kopecks.
    pub price_minor: u64,
    /// Formatted price, e.g. "1 990 ₽".
    pub price: String,
    pub period: String,
    pub badge: Option<String>,
    pub footnote: String,
}

impl Plan {
    /// Price spread over twelve months, in minor units.
    pub fn yearly_cost_minor(&self) -> u64 {
        match self.id {
            PlanId::Monthly => self.price_minor.saturating_mul(12),
            PlanId::Yearly => self.price_minor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

/// Rounded percentage saved by paying yearly instead of monthly.
///
/// Returns 0 when yearly is not cheaper.
pub fn savings_percent(monthly: &Plan, yearly: &Plan) -> u32 {
    let full = monthly.yearly_cost_minor();
    let paid = yearly.yearly_cost_minor();
    if full == 0 || paid >= full {
        return 0;
    }
    let saved = full - paid;
    ((saved * 100 + full / 2) / full) as u32
}

/// Paywall content. Static for the lifetime of the app.
pub struct Paywall;

impl Paywall {
    pub fn plans() -> Vec<Plan> {
        vec![Self::plan(PlanId::Monthly), Self::plan(PlanId::Yearly)]
    }

    pub fn plan(id: PlanId) -> Plan {
        match id {
            PlanId::Monthly => Plan {
                id,
                title: "Месячный".into(),
                price_minor: 29_900,
                price: "299 ₽".into(),
                period: "/мес".into(),
                badge: None,
                footnote: "Оплата ежемесячно, отмена в любой момент".into(),
            },
            PlanId::Yearly => Plan {
                id,
                title: "Годовой".into(),
                price_minor: 199_000,
                price: "1 990 ₽".into(),
                period: "/год".into(),
                badge: Some("Выгодно".into()),
                footnote: "Экономия ~45% по сравнению с помесячной оплатой".into(),
            },
        }
    }

    /// The plan highlighted with the "best value" hint.
    pub fn recommended() -> PlanId {
        PlanId::Yearly
    }

    pub fn benefits() -> Vec<Benefit> {
        [
            ("Ежедневные практики", "Короткие сессии для фокуса и спокойствия"),
            ("Премиум-курсы", "Глубокие программы по стрессу и осознанности"),
            ("Звуки для сна", "Шум дождя, океан и мягкие амбиенты"),
            ("Оффлайн-доступ", "Скачивайте и медитируйте без интернета"),
        ]
        .into_iter()
        .map(|(title, description)| Benefit {
            title: title.into(),
            description: description.into(),
        })
        .collect()
    }
}

/// Paywall screen state: just the highlighted plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaywallState {
    selected: PlanId,
}

impl PaywallState {
    pub fn with_plan(selected: PlanId) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> PlanId {
        self.selected
    }

    /// Returns true if the selection changed.
    pub fn select_plan(&mut self, id: PlanId) -> bool {
        let changed = self.selected != id;
        self.selected = id;
        changed
    }
}
