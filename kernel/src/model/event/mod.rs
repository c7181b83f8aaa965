use crate::model::id::EventId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
}

// 開催予定一覧で使う、登録数を伴ったイベント
#[derive(Debug)]
pub struct UpcomingEvent {
    pub event: Event,
    pub registered_count: i64,
}

#[derive(Debug, PartialEq)]
pub struct EventStats {
    pub event_id: EventId,
    pub total_registrations: i64,
    pub remaining_capacity: i64,
    pub capacity_percentage: f64,
}
