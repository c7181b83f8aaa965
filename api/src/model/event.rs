use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    event::{event::CreateEvent, Event, EventStats, UpcomingEvent},
    id::EventId,
    registration::Registrant,
};
use serde::{Deserialize, Serialize};

use crate::model::registration::RegistrantResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub date_time: DateTime<Utc>,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(range(min = 1, max = 1000))]
    pub capacity: i32,
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(value: CreateEventRequest) -> Self {
        let CreateEventRequest {
            title,
            date_time,
            location,
            capacity,
        } = value;
        CreateEvent {
            title,
            date_time,
            location,
            capacity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            id,
            title,
            date_time,
            location,
            capacity,
            created_at,
        } = value;
        Self {
            id,
            title,
            date_time,
            location,
            capacity,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEventsResponse {
    pub items: Vec<UpcomingEventResponse>,
}

impl From<Vec<UpcomingEvent>> for UpcomingEventsResponse {
    fn from(value: Vec<UpcomingEvent>) -> Self {
        Self {
            items: value.into_iter().map(UpcomingEventResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEventResponse {
    pub id: EventId,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    pub registered_count: i64,
}

impl From<UpcomingEvent> for UpcomingEventResponse {
    fn from(value: UpcomingEvent) -> Self {
        let UpcomingEvent {
            event,
            registered_count,
        } = value;
        Self {
            id: event.id,
            title: event.title,
            date_time: event.date_time,
            location: event.location,
            capacity: event.capacity,
            registered_count,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponse {
    pub id: EventId,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub registered_count: usize,
    pub registrations: Vec<RegistrantResponse>,
}

impl EventDetailResponse {
    pub fn new(event: Event, registrants: Vec<Registrant>) -> Self {
        let Event {
            id,
            title,
            date_time,
            location,
            capacity,
            created_at,
        } = event;
        Self {
            id,
            title,
            date_time,
            location,
            capacity,
            created_at,
            registered_count: registrants.len(),
            registrations: registrants
                .into_iter()
                .map(RegistrantResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatsResponse {
    pub event_id: EventId,
    pub total_registrations: i64,
    pub remaining_capacity: i64,
    pub capacity_percentage: f64,
}

impl From<EventStats> for EventStatsResponse {
    fn from(value: EventStats) -> Self {
        let EventStats {
            event_id,
            total_registrations,
            remaining_capacity,
            capacity_percentage,
        } = value;
        Self {
            event_id,
            total_registrations,
            remaining_capacity,
            capacity_percentage,
        }
    }
}
