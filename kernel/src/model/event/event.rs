use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateEvent {
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
}
