use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/days/:date", get(handlers::get_day))
        .route("/api/days/:date/entry", put(handlers::save_entry))
        .route("/api/days/:date/checked", put(handlers::toggle_checked))
        .route("/api/days/:date/ratings", put(handlers::update_rating))
        .route(
            "/api/checklist",
            get(handlers::get_checklist).post(handlers::add_checklist_item),
        )
        .route(
            "/api/rating-categories",
            get(handlers::get_rating_categories).post(handlers::add_rating_category),
        )
        .with_state(state)
}
