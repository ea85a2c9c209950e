use async_trait::async_trait;

use crate::{error::StoreError, models::Movie, repository::MovieRepository};

/// Movie operations exposed to the HTTP layer.
///
/// Reads propagate `StoreError` so the boundary can answer 500. Writes log
/// failures and collapse them into `None`/`false`, which callers cannot tell
/// apart from "nothing created" or "nothing to delete".
#[async_trait]
pub trait MoviesService: Send + Sync {
    async fn get_movie(&self, id: i32) -> Result<Option<Movie>, StoreError>;
    async fn get_movies(&self) -> Result<Vec<Movie>, StoreError>;
    /// `None` means creation failed.
    async fn add_movie(&self, name: &str, year_of_release: i32) -> Option<Movie>;
    /// `true` only when a row was actually removed.
    async fn delete_movie(&self, id: i32) -> bool;
}

pub struct MovieService<R> {
    repo: R,
}

impl<R: MovieRepository> MovieService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: MovieRepository> MoviesService for MovieService<R> {
    async fn get_movie(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        tracing::debug!(id, "getting movie");
        self.repo.find_by_id(id).await
    }

    async fn get_movies(&self) -> Result<Vec<Movie>, StoreError> {
        tracing::debug!("getting movies");
        self.repo.find_all().await
    }

    async fn add_movie(&self, name: &str, year_of_release: i32) -> Option<Movie> {
        tracing::debug!(name, year_of_release, "adding movie");

        // TODO: return a distinguishable error instead of None once clients can handle it
        match self.repo.insert(name, year_of_release).await {
            Ok(movie) => Some(movie),
            Err(err) => {
                tracing::error!(error = %err, "error adding movie");
                None
            }
        }
    }

    async fn delete_movie(&self, id: i32) -> bool {
        tracing::debug!(id, "deleting movie");

        match self.repo.delete_by_id(id).await {
            Ok(deleted) => deleted,
            Err(err) => {
                tracing::error!(id, error = %err, "error deleting movie");
                false
            }
        }
    }
}
