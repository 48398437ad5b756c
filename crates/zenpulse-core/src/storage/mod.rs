mod config;

pub use config::{AffirmationConfig, Config, DevConfig, PaywallConfig};

use std::path::PathBuf;

/// Returns `~/.config/zenpulse[-dev]/` based on ZENPULSE_ENV.
///
/// Set ZENPULSE_ENV=dev to use development data directory.
/// ZENPULSE_CONFIG_DIR overrides the location entirely.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("ZENPULSE_CONFIG_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("ZENPULSE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("zenpulse-dev")
            } else {
                base_dir.join("zenpulse")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
