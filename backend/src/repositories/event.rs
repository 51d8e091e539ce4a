use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::event::Event;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepositoryTrait: Send + Sync {
    async fn list(&self, db: &PgPool) -> Result<Vec<Event>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EventRepository;

impl EventRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventRepositoryTrait for EventRepository {
    async fn list(&self, db: &PgPool) -> Result<Vec<Event>, AppError> {
        // Ordering is left to the client, which sorts by date on its own.
        let rows = sqlx::query_as::<_, Event>(
            "SELECT id, name, date, time, location, venue, description FROM events ORDER BY id",
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
