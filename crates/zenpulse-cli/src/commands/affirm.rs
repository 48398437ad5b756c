use clap::Args;
use zenpulse_core::{build_prompt, AffirmationSelector, Config, Mood};

#[derive(Args)]
pub struct AffirmArgs {
    /// positive, neutral or negative (defaults to affirmation.default_mood)
    #[arg(long)]
    mood: Option<String>,
    /// Print the prompt that drives selection instead of the affirmation
    #[arg(long)]
    prompt: bool,
}

pub fn run(args: AffirmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mood = match args.mood {
        Some(raw) => raw.parse::<Mood>()?,
        None => Config::load_or_default().affirmation.default_mood,
    };

    if args.prompt {
        println!("{}", build_prompt(mood));
    } else {
        let selector = AffirmationSelector::default();
        println!("{}: {}", mood.label(), selector.select(mood));
    }
    Ok(())
}
