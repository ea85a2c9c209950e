pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    http::{Uri, uri::PathAndQuery},
    middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{
    repository::SeaOrmMovieRepository,
    service::{MovieService, MoviesService},
};

/// `RUST_LOG` fallback used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info,moviesd=debug,sqlx=warn";

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MoviesService>,
    pub db: DatabaseConnection,
}

impl AppState {
    /// Wires the sea-orm repository and movie service over `db`.
    pub fn new(db: DatabaseConnection) -> Self {
        let movies = MovieService::new(SeaOrmMovieRepository::new(db.clone()));
        Self { movies: Arc::new(movies), db }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/movies", post(routes::create_movie).get(routes::list_movies))
        .route("/api/movies/{id}", get(routes::get_movie).delete(routes::delete_movie))
        .route("/health", get(routes::health))
        .with_state(Arc::new(state));

    // Paths are lowercased before they reach `api`, so the outer router
    // only hosts the middleware.
    Router::new()
        .fallback_service(api)
        .layer(middleware::map_request(lowercase_path))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn lowercase_path(mut req: Request) -> Request {
    let path = req.uri().path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return req;
    }

    let lowered = match req.uri().query() {
        Some(query) => format!("{}?{query}", path.to_ascii_lowercase()),
        None => path.to_ascii_lowercase(),
    };
    let Ok(path_and_query) = lowered.parse::<PathAndQuery>() else {
        return req;
    };

    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    if let Ok(uri) = Uri::from_parts(parts) {
        *req.uri_mut() = uri;
    }
    req
}
