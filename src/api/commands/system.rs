//! System integration command module
//!
//! Handles logging from the presentation layer.

use crate::shared::error::AppResult;
use crate::shared::logging::log_at_level;
use crate::shared::types::LogRequest;

/// Log a message from the frontend
pub async fn log_message(request: LogRequest) -> AppResult<()> {
    log_at_level(&request.level, &request.message);
    Ok(())
}
