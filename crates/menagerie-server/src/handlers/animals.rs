//! Record handlers (list, lookup by name, create).

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use menagerie_core::AnimalKind;

use crate::error::ApiError;
use crate::schema::animals::{AnimalView, CreateAnimalRequest};
use crate::state::AppState;

/// Lists every record in insertion order.
///
/// `GET /animals`
pub async fn list_animals(State(state): State<AppState>) -> Json<Vec<AnimalView>> {
    let store = state.store.read().await;
    let views = store.list().iter().map(AnimalView::from).collect();
    Json(views)
}

/// Returns the first record with the given name.
///
/// `GET /animals/{name}`
///
/// A segment that does not decode to UTF-8 cannot name any record, so it is
/// reported as not found.
pub async fn get_animal(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<AnimalView>, ApiError> {
    let Path(name) = path.map_err(|_| ApiError::NotFound)?;
    let store = state.store.read().await;
    let animal = store.find_by_name(&name).ok_or(ApiError::NotFound)?;
    Ok(Json(AnimalView::from(animal)))
}

/// Appends a new record.
///
/// `POST /animals`
///
/// The body is read as raw bytes so a missing or wrong `Content-Type` does
/// not change the outcome.
pub async fn create_animal(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    let req = CreateAnimalRequest::from_body(&body)?;
    let kind: AnimalKind = req.kind().parse()?;
    let animal = kind.with_name(req.into_name());

    tracing::debug!(%kind, name = animal.name(), "animal added");
    state.store.write().await.append(animal);

    Ok((StatusCode::CREATED, "Animal added"))
}
