use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entities::movie;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub name: String,
    pub year_of_release: i32,
    pub created_at: NaiveDateTime,
}

impl From<movie::Model> for Movie {
    fn from(model: movie::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            year_of_release: model.year_of_release,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub name: String,
    pub year_of_release: i32,
}
