use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Event announcement shown on the lecturer events page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
}
