use axum::{extract::State, Json};

use crate::{error::AppError, models::event::Event, state::AppState};

pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.events.list(&state.pool).await?;
    Ok(Json(events))
}
