use clap::Subcommand;
use zenpulse_core::{Config, Result};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value by dotted key (e.g. paywall.default_plan)
    Get { key: String },
    /// Update one value by dotted key and save
    Set { key: String, value: String },
    /// Print the config file as stored
    List,
    /// Overwrite the config file with defaults
    Reset,
    /// Print where the config file lives
    Path,
}

pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.value(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {}", config.value(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Reset => {
            let path = Config::file_path()?;
            Config::default().save_to(&path)?;
            tracing::info!(path = %path.display(), "config reset");
            println!("reset {}", path.display());
        }
        ConfigAction::Path => {
            println!("{}", Config::file_path()?.display());
        }
    }
    Ok(())
}
