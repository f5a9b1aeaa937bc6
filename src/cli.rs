//! Line-oriented front end
//!
//! Turns one input line into a reply string. Errors are rendered as user
//! messages by the caller; nothing here terminates the loop except `quit`.

use crate::api::commands::converter::{
    clear_history_command, convert_units_command, get_categories_command, get_history_command,
    get_units_for_category_command, select_category_command, swap_units_command,
};
use crate::api::commands::settings::get_settings;
use crate::core::features::unit_converter::{display_name, parse_conversion_query};
use crate::core::state::AppState;
use crate::shared::error::AppResult;
use crate::shared::types::{ConvertUnitsRequest, SessionSnapshot};

pub const HELP: &str = "\
Commands:
  <value> <unit> to <unit>   convert, e.g. `12 km to mile`
  categories                 list categories
  units <category>           list units of a category
  category <category>        switch the current category
  swap                       swap the current units
  history                    show recent conversions
  clear                      clear the history
  settings                   show the loaded settings
  help                       show this help
  quit                       exit";

#[derive(Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub async fn handle_line(state: &AppState, line: &str) -> AppResult<Reply> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let text = match command.to_ascii_lowercase().as_str() {
        "" => String::new(),
        "quit" | "exit" => return Ok(Reply::Quit),
        "help" => HELP.to_string(),
        "categories" => get_categories_command()
            .await?
            .iter()
            .map(|c| format!("{} {}", c.symbol, c.name))
            .collect::<Vec<_>>()
            .join("\n"),
        "units" => get_units_for_category_command(rest.to_string())
            .await?
            .iter()
            .map(|u| format!("{} ({})", u.label, u.id))
            .collect::<Vec<_>>()
            .join("\n"),
        "category" => render_snapshot(&select_category_command(state, rest.to_string()).await?),
        "swap" => render_snapshot(&swap_units_command(state).await?),
        "history" => {
            let history = get_history_command(state).await?;
            if history.rows.is_empty() {
                "No conversions yet".to_string()
            } else {
                history
                    .rows
                    .iter()
                    .map(|r| format!("{}  {:<12} {}", r.time, r.category, r.conversion))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        "settings" => serde_json::to_string_pretty(&get_settings().await?)?,
        "clear" => {
            clear_history_command(state).await?;
            "History cleared".to_string()
        }
        _ => {
            let query = parse_conversion_query(line)?;
            let response = convert_units_command(
                state,
                ConvertUnitsRequest {
                    amount: query.amount,
                    from_unit: query.from_unit.to_string(),
                    to_unit: query.to_unit.to_string(),
                },
            )
            .await?;
            format!(
                "{} = {} {}",
                response.comparison.bar_text[0],
                response.formatted_result,
                display_name(response.to_unit.as_str())
            )
        }
    };

    Ok(Reply::Text(text))
}

fn render_snapshot(snapshot: &SessionSnapshot) -> String {
    format!(
        "{} {}: {}\n{}",
        snapshot.symbol, snapshot.category, snapshot.details.formula, snapshot.details.factor
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn text(state: &AppState, line: &str) -> String {
        match handle_line(state, line).await.unwrap() {
            Reply::Text(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn test_convert_line() {
        let state = AppState::default();
        assert_eq!(text(&state, "1 km to m").await, "1 Kilometer = 1000 Meter");
        assert!(text(&state, "history").await.contains("1 Kilometer → 1000 Meter"));
    }

    #[tokio::test]
    async fn test_category_and_swap() {
        let state = AppState::default();
        let reply = text(&state, "category data").await;
        assert!(reply.contains("1 Bit = 0.125 Byte"));

        let reply = text(&state, "swap").await;
        assert!(reply.contains("1 Byte = 8 Bit"));
    }

    #[tokio::test]
    async fn test_errors_are_returned() {
        let state = AppState::default();
        assert!(handle_line(&state, "1 furlong to meter").await.is_err());
        assert!(handle_line(&state, "units Color").await.is_err());
        assert!(handle_line(&state, "1 meter to gram").await.is_err());
    }

    #[tokio::test]
    async fn test_quit_and_clear() {
        let state = AppState::default();
        assert_eq!(handle_line(&state, "quit").await.unwrap(), Reply::Quit);
        text(&state, "2 hour to minute").await;
        assert_eq!(text(&state, "clear").await, "History cleared");
        assert_eq!(text(&state, "history").await, "No conversions yet");
    }
}
