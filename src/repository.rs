use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::{entities::movie, error::StoreError, models::Movie};

/// Data access for the `movies` table.
///
/// A missing row is never an error: lookups return `None` and deletes return
/// `false`. `StoreError` is reserved for infrastructure and constraint
/// failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, StoreError>;
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError>;
    /// Persists a new row; the store assigns `id` and `created_at`.
    async fn insert(&self, name: &str, year_of_release: i32) -> Result<Movie, StoreError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct SeaOrmMovieRepository {
    db: DatabaseConnection,
}

impl SeaOrmMovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for SeaOrmMovieRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        let movie = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(movie.map(Movie::from))
    }

    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let movies =
            movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(movies.into_iter().map(Movie::from).collect())
    }

    async fn insert(&self, name: &str, year_of_release: i32) -> Result<Movie, StoreError> {
        let model = movie::ActiveModel {
            name: Set(name.to_string()),
            year_of_release: Set(year_of_release),
            ..Default::default()
        };

        let inserted = model.insert(&self.db).await?;
        Ok(inserted.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, StoreError> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
