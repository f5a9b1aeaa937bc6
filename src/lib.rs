// Module declarations
pub mod shared;
pub mod api;
pub mod core;
pub mod cli;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::core::session::ConverterSession;
use crate::core::state::AppState;
use crate::shared::settings::{AppSettings, LoggingSettings};

pub use crate::core::features::unit_converter::{
    build_comparison, convert, convert_str, display_name, format_number, list_categories, units_of,
    Category, UnitId,
};
pub use crate::core::history::{ConversionHistory, ConversionRecord};
pub use crate::shared::error::{AppError, AppResult, ConversionError};

/// Build the shared state from settings, falling back to the default session
pub fn build_state(settings: &AppSettings) -> AppState {
    let session = ConverterSession::from_preferences(&settings.preferences).unwrap_or_else(|e| {
        tracing::warn!("Invalid default preferences: {}, using Length defaults", e);
        ConverterSession::default()
    });
    AppState::new(session)
}

/// Run the interactive converter on stdin/stdout
pub async fn run() -> AppResult<()> {
    // The subscriber has to be up before a failed load is reported
    let loaded = AppSettings::load().await;
    let level = match &loaded {
        Ok(settings) => settings.logging.level.clone(),
        Err(_) => LoggingSettings::default().level,
    };
    shared::logging::init(&level);
    let settings = AppSettings::or_default(loaded);

    let state = build_state(&settings);
    tracing::info!("unit converter ready");

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(format!("{}\n> ", cli::HELP).as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match cli::handle_line(&state, &line).await {
            Ok(cli::Reply::Quit) => break,
            Ok(cli::Reply::Text(text)) if text.is_empty() => String::new(),
            Ok(cli::Reply::Text(text)) => format!("{}\n", text),
            Err(e) => {
                tracing::debug!("command failed: {}", e);
                format!("Error: {}\n", e)
            }
        };
        stdout.write_all(format!("{}> ", output).as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("unit converter exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_uses_preferences() {
        let mut settings = AppSettings::default();
        settings.preferences.default_category = "Energy".to_string();
        settings.preferences.default_from_unit = "kilowatt_hour".to_string();
        settings.preferences.default_to_unit = "joule".to_string();

        let state = build_state(&settings);
        assert_eq!(state.with_session(|s| s.result()), 3_600_000.0);
    }

    #[test]
    fn test_build_state_falls_back() {
        let mut settings = AppSettings::default();
        settings.preferences.default_from_unit = "gram".to_string();

        let state = build_state(&settings);
        assert_eq!(state.with_session(|s| s.from_unit()), UnitId::Meter);
    }
}
