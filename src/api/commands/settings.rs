//! Settings command module
//!
//! Read-only access to application settings.

use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;

/// Get current application settings
pub async fn get_settings() -> AppResult<AppSettings> {
    AppSettings::load().await
}
