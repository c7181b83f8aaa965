use crate::model::{
    event::{event::CreateEvent, Event, EventStats, UpcomingEvent},
    id::EventId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<Event>;
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    // 開催日時が現在より後のイベントを、登録数付きで取得する
    async fn find_upcoming(&self) -> AppResult<Vec<UpcomingEvent>>;
    // イベントが存在しない場合は None を返す
    async fn stats(&self, event_id: EventId) -> AppResult<Option<EventStats>>;
}
