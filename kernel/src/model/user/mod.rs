use crate::model::id::UserId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
