use crate::errors::AppError;
use crate::journal::save_journal_entry;
use crate::keys::DateKey;
use crate::models::{AddNameRequest, JournalEntryRequest, RatingRequest, ToggleRequest};
use crate::overlay::Rating;
use crate::state::AppState;
use crate::storage::flush;
use crate::template::{load_template, TemplateKind};
use crate::ui::render_index;
use crate::view::{self, ChecklistRow, DayView, RatingRow};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&DateKey::today()))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<DayView>, AppError> {
    let date = parse_date(&raw)?;
    let mut data = state.data.lock().await;
    let day = view::select_date(&mut *data, &date);
    // First access initializes empty templates.
    flush(&state.data_path, &mut data).await?;
    Ok(Json(day))
}

pub async fn save_entry(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(payload): Json<JournalEntryRequest>,
) -> Result<StatusCode, AppError> {
    let date = parse_date(&raw)?;
    let mut data = state.data.lock().await;
    save_journal_entry(&mut *data, &date, &payload.text);
    flush(&state.data_path, &mut data).await?;
    info!(%date, chars = payload.text.chars().count(), "journal entry saved");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_checked(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ChecklistRow>, AppError> {
    let date = parse_date(&raw)?;
    let mut data = state.data.lock().await;
    view::toggle_checklist_item(&mut *data, &date, &payload.name, payload.checked);
    flush(&state.data_path, &mut data).await?;
    Ok(Json(ChecklistRow {
        name: payload.name,
        checked: payload.checked,
    }))
}

pub async fn update_rating(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(payload): Json<RatingRequest>,
) -> Result<Json<RatingRow>, AppError> {
    let date = parse_date(&raw)?;
    let value = parse_rating(payload.value)?;

    let mut data = state.data.lock().await;
    view::set_rating(&mut *data, &date, &payload.name, value);
    flush(&state.data_path, &mut data).await?;
    Ok(Json(RatingRow {
        name: payload.name,
        value,
    }))
}

pub async fn get_checklist(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    get_template(&state, TemplateKind::Checklist).await
}

pub async fn get_rating_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    get_template(&state, TemplateKind::RatingCategories).await
}

pub async fn add_checklist_item(
    State(state): State<AppState>,
    Json(payload): Json<AddNameRequest>,
) -> Result<Json<Option<ChecklistRow>>, AppError> {
    let mut data = state.data.lock().await;
    let row = view::add_checklist_item(&mut *data, &payload.name);
    flush(&state.data_path, &mut data).await?;
    Ok(Json(row))
}

pub async fn add_rating_category(
    State(state): State<AppState>,
    Json(payload): Json<AddNameRequest>,
) -> Result<Json<Option<RatingRow>>, AppError> {
    let mut data = state.data.lock().await;
    let row = view::add_rating_category(&mut *data, &payload.name);
    flush(&state.data_path, &mut data).await?;
    Ok(Json(row))
}

async fn get_template(state: &AppState, kind: TemplateKind) -> Result<Json<Vec<String>>, AppError> {
    let mut data = state.data.lock().await;
    let names = load_template(&mut *data, kind);
    flush(&state.data_path, &mut data).await?;
    Ok(Json(names))
}

fn parse_rating(raw: i64) -> Result<Rating, AppError> {
    u8::try_from(raw).ok().and_then(Rating::new).ok_or_else(|| {
        AppError::bad_request(format!(
            "rating must be between {} and {}, got {raw}",
            Rating::MIN,
            Rating::MAX
        ))
    })
}

fn parse_date(raw: &str) -> Result<DateKey, AppError> {
    DateKey::parse(raw).map_err(|err| AppError::invalid_date(raw, err))
}
