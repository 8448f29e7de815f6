use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, serde::Serialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}
