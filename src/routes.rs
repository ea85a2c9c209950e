use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::CreateMovieRequest,
};

pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    tracing::debug!("list movies called");

    let movies = state
        .movies
        .get_movies()
        .await
        .map_err(|err| AppError::internal("An error occurred while fetching movies.", err))?;

    if movies.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(movies).into_response())
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    tracing::debug!(id, "get movie called");

    let movie = state.movies.get_movie(id).await.map_err(|err| {
        AppError::internal(format!("An error occurred while fetching Movie '{id}'."), err)
    })?;

    Ok(match movie {
        Some(movie) => Json(movie).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Response {
    tracing::debug!("create movie called");

    let req = match body {
        Ok(Json(req)) => req,
        Err(
            rejection @ (JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)),
        ) => {
            tracing::debug!(error = %rejection.body_text(), "invalid create movie body");
            return StatusCode::BAD_REQUEST.into_response();
        }
        Err(rejection) => return rejection.into_response(),
    };

    match state.movies.add_movie(&req.name, req.year_of_release).await {
        Some(movie) => {
            let location = format!("/api/movies/{}", movie.id);
            (StatusCode::CREATED, [(header::LOCATION, location)], Json(movie)).into_response()
        }
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

pub async fn delete_movie(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> StatusCode {
    tracing::debug!(id, "delete movie called");

    if state.movies.delete_movie(id).await { StatusCode::OK } else { StatusCode::NOT_FOUND }
}

pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    match state.db.ping().await {
        Ok(()) => {
            (StatusCode::OK, Json(json!({ "status": "healthy", "database": "up" }))).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "database": "down" })),
            )
                .into_response()
        }
    }
}

