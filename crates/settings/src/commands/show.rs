//! Show command - Print the resolved settings.

use common::{SettingsError, SettingsResult};

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Settings;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> SettingsResult<()> {
    tracing::debug!("Rendering settings as {:?}", args.format);
    println!("{}", render(settings, args.format)?);
    Ok(())
}

/// Render the settings in the requested format. Secrets never appear.
pub fn render(settings: &Settings, format: OutputFormat) -> SettingsResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::internal(format!("Failed to serialize settings: {}", e))),
        OutputFormat::Env => Ok(settings
            .to_env_pairs()
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
