use crate::model::id::{EventId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

// (user_id, event_id) の組が登録の識別子となる
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub user_id: UserId,
    pub event_id: EventId,
    pub registered_at: DateTime<Utc>,
}

// イベント詳細で返す、ユーザー情報を伴った登録者
#[derive(Debug, Clone, PartialEq)]
pub struct Registrant {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}
