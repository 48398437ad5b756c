use serde::Serialize;
use zenpulse_core::{savings_percent, Benefit, Config, Paywall, Plan, PlanId};

#[derive(Serialize)]
struct PaywallView {
    selected: PlanId,
    recommended: PlanId,
    savings_percent: u32,
    plans: Vec<Plan>,
    benefits: Vec<Benefit>,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let view = PaywallView {
        selected: config.paywall.default_plan,
        recommended: Paywall::recommended(),
        savings_percent: savings_percent(
            &Paywall::plan(PlanId::Monthly),
            &Paywall::plan(PlanId::Yearly),
        ),
        plans: Paywall::plans(),
        benefits: Paywall::benefits(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    for plan in &view.plans {
        let radio = if plan.id == view.selected { "(•)" } else { "( )" };
        let badge = plan
            .badge
            .as_deref()
            .map(|b| format!(" [{b}]"))
            .unwrap_or_default();
        println!("{radio} {}{badge}  {} {}", plan.title, plan.price, plan.period);
        println!("    {}", plan.footnote);
    }
    println!();
    for benefit in &view.benefits {
        println!("✓ {} - {}", benefit.title, benefit.description);
    }
    Ok(())
}
