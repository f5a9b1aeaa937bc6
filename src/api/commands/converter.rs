//! Converter command module
//!
//! Entry points for a presentation layer. Each command takes primitive or DTO
//! input, touches the shared session through [`AppState`] and returns
//! serializable DTOs.

use crate::core::features::unit_converter::{
    build_comparison, format_number, list_categories, parse_unit_from_text, Category, UnitId,
};
use crate::core::state::AppState;
use crate::shared::error::AppResult;
use crate::shared::types::{
    CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, HistoryResponse, ParseUnitResponse,
    SessionSnapshot, UnitDTO,
};

/// All categories with their units
pub async fn get_categories_command() -> AppResult<Vec<CategoryDTO>> {
    Ok(list_categories()
        .iter()
        .copied()
        .map(CategoryDTO::from)
        .collect())
}

pub async fn get_units_for_category_command(category: String) -> AppResult<Vec<UnitDTO>> {
    let category: Category = category.parse()?;
    Ok(category.units().iter().copied().map(UnitDTO::from).collect())
}

/// Convert, format, shape chart data and record the conversion
pub async fn convert_units_command(
    state: &AppState,
    request: ConvertUnitsRequest,
) -> AppResult<ConvertUnitsResponse> {
    let from_unit: UnitId = request.from_unit.parse()?;
    let to_unit: UnitId = request.to_unit.parse()?;

    let result = state.with_session(|session| {
        session.record_conversion(request.amount, from_unit, to_unit)
    })?;
    let category = from_unit.category();

    Ok(ConvertUnitsResponse {
        result,
        formatted_result: format_number(result),
        from_unit,
        to_unit,
        category,
        comparison: build_comparison(request.amount, from_unit, to_unit, result, category),
    })
}

/// Parse text input and extract amount, unit, and category
pub async fn parse_text_command(text: String) -> AppResult<ParseUnitResponse> {
    let (amount, unit) = parse_unit_from_text(&text)?;
    Ok(ParseUnitResponse {
        amount,
        unit,
        category: unit.category(),
    })
}

pub async fn get_history_command(state: &AppState) -> AppResult<HistoryResponse> {
    Ok(state.with_session(|session| HistoryResponse {
        entries: session.history().to_vec(),
        rows: session.history().rows(),
    }))
}

pub async fn clear_history_command(state: &AppState) -> AppResult<()> {
    state.with_session(|session| session.clear_history());
    Ok(())
}

pub async fn select_category_command(
    state: &AppState,
    category: String,
) -> AppResult<SessionSnapshot> {
    state.with_session(|session| -> AppResult<SessionSnapshot> {
        session.select_category_by_name(&category)?;
        Ok(session.snapshot()?)
    })
}

pub async fn set_value_command(state: &AppState, value: String) -> AppResult<SessionSnapshot> {
    state.with_session(|session| -> AppResult<SessionSnapshot> {
        session.set_value_text(&value)?;
        Ok(session.snapshot()?)
    })
}

/// Set either side of the current conversion by canonical unit id
pub async fn set_units_command(
    state: &AppState,
    from_unit: Option<String>,
    to_unit: Option<String>,
) -> AppResult<SessionSnapshot> {
    state.with_session(|session| -> AppResult<SessionSnapshot> {
        if let Some(from) = from_unit {
            session.set_from_unit(from.parse()?)?;
        }
        if let Some(to) = to_unit {
            session.set_to_unit(to.parse()?)?;
        }
        Ok(session.snapshot()?)
    })
}

pub async fn swap_units_command(state: &AppState) -> AppResult<SessionSnapshot> {
    state.with_session(|session| -> AppResult<SessionSnapshot> {
        session.swap_units()?;
        Ok(session.snapshot()?)
    })
}

pub async fn get_session_command(state: &AppState) -> AppResult<SessionSnapshot> {
    state.with_session(|session| -> AppResult<SessionSnapshot> { Ok(session.snapshot()?) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::{AppError, ConversionError};

    #[tokio::test]
    async fn test_get_categories() {
        let categories = get_categories_command().await.unwrap();
        assert_eq!(categories.len(), 10);
        assert_eq!(categories[0].name, "Length");
        assert_eq!(categories[0].units[0].label, "Meter");
        assert_eq!(categories[3].units.len(), 3);
    }

    #[tokio::test]
    async fn test_get_units_for_category() {
        let units = get_units_for_category_command("area".to_string()).await.unwrap();
        assert_eq!(units[4].id, UnitId::SquareFoot);
        assert_eq!(units[4].label, "Square Foot");

        assert!(matches!(
            get_units_for_category_command("Color".to_string()).await,
            Err(AppError::Conversion(ConversionError::UnknownCategory(_)))
        ));
    }

    #[tokio::test]
    async fn test_convert_units_records_history() {
        let state = AppState::default();
        let response = convert_units_command(
            &state,
            ConvertUnitsRequest {
                amount: 1.0,
                from_unit: "hour".to_string(),
                to_unit: "second".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.result, 3600.0);
        assert_eq!(response.formatted_result, "3600");
        assert_eq!(response.category, Category::Time);
        assert_eq!(response.comparison.labels, ["Hour".to_string(), "Second".to_string()]);

        let history = get_history_command(&state).await.unwrap();
        assert_eq!(history.entries.len(), 1);
        assert_eq!(history.rows[0].conversion, "1 Hour → 3600 Second");
    }

    #[tokio::test]
    async fn test_convert_unknown_unit_leaves_history() {
        let state = AppState::default();
        let err = convert_units_command(
            &state,
            ConvertUnitsRequest {
                amount: 1.0,
                from_unit: "furlong".to_string(),
                to_unit: "meter".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::Conversion(ConversionError::UnknownUnit(_))
        ));
        assert!(get_history_command(&state).await.unwrap().entries.is_empty());
    }

    #[tokio::test]
    async fn test_parse_text() {
        let parsed = parse_text_command("5 kg".to_string()).await.unwrap();
        assert_eq!(parsed.amount, 5.0);
        assert_eq!(parsed.unit, UnitId::Kilogram);
        assert_eq!(parsed.category, Category::Mass);
    }

    #[tokio::test]
    async fn test_session_commands() {
        let state = AppState::default();

        let snapshot = select_category_command(&state, "Temperature".to_string())
            .await
            .unwrap();
        assert_eq!(snapshot.from_unit, UnitId::Kelvin);

        let snapshot = set_units_command(&state, Some("celsius".to_string()), Some("fahrenheit".to_string()))
            .await
            .unwrap();
        assert_eq!(snapshot.from_unit, UnitId::Celsius);

        let snapshot = set_value_command(&state, "100".to_string()).await.unwrap();
        assert_eq!(snapshot.result, 212.0);
        assert_eq!(snapshot.formatted_result, "212");

        let snapshot = swap_units_command(&state).await.unwrap();
        assert_eq!(snapshot.from_unit, UnitId::Fahrenheit);

        clear_history_command(&state).await.unwrap();
        assert!(get_history_command(&state).await.unwrap().rows.is_empty());

        let snapshot = get_session_command(&state).await.unwrap();
        assert_eq!(snapshot.comparison.highlight_color, "#FF9800");
    }
}
