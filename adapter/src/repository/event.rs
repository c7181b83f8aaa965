use crate::database::{
    model::event::{EventRow, EventStatsRow, UpcomingEventRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    event::{event::CreateEvent, Event, EventStats, UpcomingEvent},
    id::EventId,
};
use kernel::repository::event::EventRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct EventRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create(&self, event: CreateEvent) -> AppResult<Event> {
        // id と created_at はデータベース側で採番・付与される
        let row: EventRow = sqlx::query_as(
            r#"
                INSERT INTO events (title, date_time, location, capacity)
                VALUES ($1, $2, $3, $4)
                RETURNING id, title, date_time, location, capacity, created_at
            "#,
        )
        .bind(event.title)
        .bind(event.date_time)
        .bind(event.location)
        .bind(event.capacity)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
                SELECT id, title, date_time, location, capacity, created_at
                FROM events
                WHERE id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Event::from))
    }

    // 開催予定のイベント一覧を取得する
    async fn find_upcoming(&self) -> AppResult<Vec<UpcomingEvent>> {
        // event_registrations テーブルと LEFT JOIN し、登録数も一緒に抽出する。
        // 出力するレコードは開催日時の早い順、同時刻の場合は開催場所の
        // 辞書順に並べる
        let rows: Vec<UpcomingEventRow> = sqlx::query_as(
            r#"
                SELECT
                    e.id,
                    e.title,
                    e.date_time,
                    e.location,
                    e.capacity,
                    e.created_at,
                    COUNT(er.user_id) AS registered_count
                FROM events AS e
                LEFT JOIN event_registrations AS er ON e.id = er.event_id
                WHERE e.date_time > $1
                GROUP BY e.id
                ORDER BY e.date_time ASC, e.location ASC
            "#,
        )
        .bind(Utc::now())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(UpcomingEvent::from).collect())
    }

    // イベントの統計情報を取得する
    async fn stats(&self, event_id: EventId) -> AppResult<Option<EventStats>> {
        let row: Option<EventStatsRow> = sqlx::query_as(
            r#"
                SELECT
                    e.id AS event_id,
                    COUNT(er.user_id) AS total_registrations,
                    e.capacity - COUNT(er.user_id) AS remaining_capacity,
                    (CASE
                        WHEN e.capacity > 0
                        THEN ROUND(COUNT(er.user_id)::NUMERIC / e.capacity::NUMERIC * 100, 2)
                        ELSE 0
                    END)::FLOAT8 AS capacity_percentage
                FROM events AS e
                LEFT JOIN event_registrations AS er ON e.id = er.event_id
                WHERE e.id = $1
                GROUP BY e.id, e.capacity
            "#,
        )
        .bind(event_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(EventStats::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{registration::RegistrationRepositoryImpl, user::UserRepositoryImpl};
    use chrono::{DateTime, Duration};
    use kernel::model::{registration::event::CreateRegistration, user::event::CreateUser};
    use kernel::repository::{registration::RegistrationRepository, user::UserRepository};

    async fn make_event(
        db: &ConnectionPool,
        title: &str,
        date_time: DateTime<Utc>,
        location: &str,
        capacity: i32,
    ) -> anyhow::Result<Event> {
        let repo = EventRepositoryImpl::new(db.clone());
        let event = repo
            .create(CreateEvent::new(
                title.into(),
                date_time,
                location.into(),
                capacity,
            ))
            .await?;
        Ok(event)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_create_and_find_event(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let repo = EventRepositoryImpl::new(db.clone());

        let date_time = Utc::now() + Duration::days(7);
        let created = make_event(&db, "RustConf", date_time, "Osaka", 100).await?;

        let found = repo.find_by_id(created.id).await?;
        let Some(found) = found else {
            panic!("the created event must be found");
        };
        assert_eq!(found.title, "RustConf");
        assert_eq!(found.location, "Osaka");
        assert_eq!(found.capacity, 100);
        assert_eq!(found, created);

        let missing = repo.find_by_id(EventId::new(4096)).await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_find_upcoming_excludes_past_and_orders(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let repo = EventRepositoryImpl::new(db.clone());

        let now = Utc::now();
        make_event(&db, "Yesterday", now - Duration::days(1), "Tokyo", 10).await?;
        let next_week = make_event(&db, "Next Week", now + Duration::days(7), "Tokyo", 10).await?;
        let tomorrow = make_event(&db, "Tomorrow", now + Duration::days(1), "Tokyo", 10).await?;

        let upcoming = repo.find_upcoming().await?;
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].event.id, tomorrow.id);
        assert_eq!(upcoming[1].event.id, next_week.id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_find_upcoming_orders_by_location_on_tie(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let repo = EventRepositoryImpl::new(db.clone());

        let date_time = Utc::now() + Duration::days(3);
        let osaka = make_event(&db, "Meetup B", date_time, "Osaka", 10).await?;
        let tokyo = make_event(&db, "Meetup C", date_time, "Tokyo", 10).await?;
        let kyoto = make_event(&db, "Meetup A", date_time, "Kyoto", 10).await?;

        let upcoming = repo.find_upcoming().await?;
        let ids: Vec<EventId> = upcoming.iter().map(|u| u.event.id).collect();
        assert_eq!(ids, vec![kyoto.id, osaka.id, tokyo.id]);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_upcoming_carries_registered_count(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let repo = EventRepositoryImpl::new(db.clone());
        let user_repo = UserRepositoryImpl::new(db.clone());
        let registration_repo = RegistrationRepositoryImpl::new(db.clone());

        let event = make_event(&db, "Meetup", Utc::now() + Duration::days(1), "Tokyo", 10).await?;
        let user = user_repo
            .create(CreateUser::new("Alice".into(), "alice@example.com".into()))
            .await?;
        registration_repo
            .register(CreateRegistration::new(user.user_id, event.id))
            .await?;

        let upcoming = repo.find_upcoming().await?;
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].registered_count, 1);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_stats(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let repo = EventRepositoryImpl::new(db.clone());
        let user_repo = UserRepositoryImpl::new(db.clone());
        let registration_repo = RegistrationRepositoryImpl::new(db.clone());

        let event = make_event(&db, "Meetup", Utc::now() + Duration::days(1), "Tokyo", 10).await?;

        // 登録が無い間はすべてゼロ
        let stats = repo.stats(event.id).await?.expect("event exists");
        assert_eq!(stats.total_registrations, 0);
        assert_eq!(stats.remaining_capacity, 10);
        assert_eq!(stats.capacity_percentage, 0.0);

        for (name, email) in [
            ("Alice", "alice@example.com"),
            ("Bob", "bob@example.com"),
            ("Carol", "carol@example.com"),
        ] {
            let user = user_repo
                .create(CreateUser::new(name.into(), email.into()))
                .await?;
            registration_repo
                .register(CreateRegistration::new(user.user_id, event.id))
                .await?;
        }

        let stats = repo.stats(event.id).await?.expect("event exists");
        assert_eq!(stats.event_id, event.id);
        assert_eq!(stats.total_registrations, 3);
        assert_eq!(stats.remaining_capacity, 7);
        assert_eq!(stats.capacity_percentage, 30.00);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_stats_unknown_event(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let repo = EventRepositoryImpl::new(db.clone());

        let stats = repo.stats(EventId::new(4096)).await?;
        assert!(stats.is_none());

        Ok(())
    }
}
