use kernel::model::{
    event::{Event, EventStats, UpcomingEvent},
    id::EventId,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub id: EventId,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            id,
            title,
            date_time,
            location,
            capacity,
            created_at,
        } = value;
        Event {
            id,
            title,
            date_time,
            location,
            capacity,
            created_at,
        }
    }
}

// 開催予定一覧を取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct UpcomingEventRow {
    pub id: EventId,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub registered_count: i64,
}

impl From<UpcomingEventRow> for UpcomingEvent {
    fn from(value: UpcomingEventRow) -> Self {
        let UpcomingEventRow {
            id,
            title,
            date_time,
            location,
            capacity,
            created_at,
            registered_count,
        } = value;
        UpcomingEvent {
            event: Event {
                id,
                title,
                date_time,
                location,
                capacity,
                created_at,
            },
            registered_count,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct EventStatsRow {
    pub event_id: EventId,
    pub total_registrations: i64,
    pub remaining_capacity: i64,
    pub capacity_percentage: f64,
}

impl From<EventStatsRow> for EventStats {
    fn from(value: EventStatsRow) -> Self {
        let EventStatsRow {
            event_id,
            total_registrations,
            remaining_capacity,
            capacity_percentage,
        } = value;
        EventStats {
            event_id,
            total_registrations,
            remaining_capacity,
            capacity_percentage,
        }
    }
}
