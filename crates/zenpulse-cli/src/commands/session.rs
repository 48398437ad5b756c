use clap::Subcommand;
use serde::Serialize;
use zenpulse_core::{
    AffirmationSelector, Catalog, Config, Event, Mood, PlanId, Screen, Session,
};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Run steps in order and print the emitted events as JSON.
    ///
    /// Steps: try-free, view-catalog, back, press:<id>, purchase,
    /// dev-activate, dev-reset, mood:<mood>, affirm, plan:<plan>
    Run {
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

#[derive(Debug, PartialEq)]
enum Step {
    TryFree,
    ViewCatalog,
    Back,
    Press(String),
    Purchase,
    DevActivate,
    DevReset,
    Mood(Mood),
    Affirm,
    Plan(PlanId),
}

fn parse_step(raw: &str) -> Result<Step, Box<dyn std::error::Error>> {
    let step = match raw.split_once(':') {
        Some(("press", id)) if !id.is_empty() => Step::Press(id.to_string()),
        Some(("mood", mood)) => Step::Mood(mood.parse()?),
        Some(("plan", plan)) => Step::Plan(plan.parse()?),
        None => match raw {
            "try-free" => Step::TryFree,
            "view-catalog" => Step::ViewCatalog,
            "back" => Step::Back,
            "purchase" => Step::Purchase,
            "dev-activate" => Step::DevActivate,
            "dev-reset" => Step::DevReset,
            "affirm" => Step::Affirm,
            _ => return Err(format!("unknown step: {raw}").into()),
        },
        _ => return Err(format!("unknown step: {raw}").into()),
    };
    Ok(step)
}

#[derive(Serialize)]
struct Summary<'a> {
    screen: Screen,
    subscribed: bool,
    mood: Mood,
    selected_plan: PlanId,
    affirmation: Option<&'a str>,
    events: Vec<Event>,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SessionAction::Run { steps } => {
            // Parse everything up front so a typo doesn't leave a half-run script.
            let steps = steps
                .iter()
                .map(|s| parse_step(s))
                .collect::<Result<Vec<_>, _>>()?;

            let config = Config::load_or_default();
            let dev_allowed = config.dev.controls_enabled;
            if !dev_allowed
                && steps
                    .iter()
                    .any(|s| matches!(s, Step::DevActivate | Step::DevReset))
            {
                return Err("dev controls are disabled (set dev.controls_enabled = true)".into());
            }

            let catalog = Catalog::builtin();
            let selector = AffirmationSelector::default();
            let mut session = Session::new(&catalog, &selector)
                .with_defaults(config.affirmation.default_mood, config.paywall.default_plan);

            for step in steps {
                tracing::debug!(?step, "session step");
                match step {
                    Step::TryFree => {
                        session.start_trial();
                    }
                    Step::ViewCatalog => {
                        session.view_catalog();
                    }
                    Step::Back => {
                        session.back_to_paywall();
                    }
                    Step::Press(id) => {
                        session.press_item(&id)?;
                    }
                    Step::Purchase => session.complete_purchase(),
                    Step::DevActivate => session.dev_activate(),
                    Step::DevReset => session.dev_reset(),
                    Step::Mood(mood) => session.set_mood(mood),
                    Step::Affirm => {
                        session.generate_affirmation();
                    }
                    Step::Plan(plan) => session.select_plan(plan),
                }
            }

            let events = session.drain_events();
            let summary = Summary {
                screen: session.screen(),
                subscribed: session.is_subscribed(),
                mood: session.mood(),
                selected_plan: session.selected_plan(),
                affirmation: session.affirmation(),
                events,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
