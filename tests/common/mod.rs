#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime, Utc};
use moviesd::{db::connect_and_migrate, entities::movie, models::Movie};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{Layer, layer::Context};

pub const SEED: [(&str, i32); 2] = [("Gone With The Wind", 1939), ("Back To The Future", 1985)];

pub fn seeded_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, 10).and_then(|d| d.and_hms_opt(10, 10, 10)).unwrap()
}

pub fn expected_seed() -> Vec<Movie> {
    SEED.iter()
        .enumerate()
        .map(|(i, (name, year))| Movie {
            id: i as i32 + 1,
            name: name.to_string(),
            year_of_release: *year,
            created_at: seeded_at(),
        })
        .collect()
}

/// Fresh in-memory store with the schema applied and no rows.
pub async fn empty_db() -> DatabaseConnection {
    connect_and_migrate("sqlite::memory:", 1).await.expect("failed to create test database")
}

/// In-memory store holding the two fixture movies with ids 1 and 2.
pub async fn seeded_db() -> DatabaseConnection {
    let db = empty_db().await;
    for (name, year) in SEED {
        movie::ActiveModel {
            name: Set(name.to_string()),
            year_of_release: Set(year),
            created_at: Set(seeded_at()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("failed to seed movie");
    }
    db
}

/// Handle to a store whose pool has been shut down; every call fails to connect.
pub async fn unreachable_db() -> DatabaseConnection {
    let db = seeded_db().await;
    let handle = db.clone();
    db.close().await.expect("failed to close test database");
    handle
}

pub async fn movie_count(db: &DatabaseConnection) -> u64 {
    movie::Entity::find().count(db).await.expect("failed to count movies")
}

pub fn assert_recent(created_at: NaiveDateTime) {
    let drift = (Utc::now().naive_utc() - created_at).num_seconds().abs();
    assert!(drift <= 5, "created_at {created_at} is {drift}s away from now");
}

/// Events recorded by [`CapturedLogs`]: level plus rendered message.
pub type LogLine = (Level, String);

/// Layer recording events whose target starts with `prefix`.
#[derive(Clone)]
pub struct CapturedLogs {
    prefix: &'static str,
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl CapturedLogs {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, lines: Arc::default() }
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn levels(&self) -> Vec<Level> {
        self.lines().into_iter().map(|(level, _)| level).collect()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if !meta.target().starts_with(self.prefix) {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.lines.lock().unwrap().push((*meta.level(), visitor.0));
    }
}
