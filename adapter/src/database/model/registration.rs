use kernel::model::{
    id::{EventId, UserId},
    registration::{Registrant, Registration},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct RegistrationRow {
    pub user_id: UserId,
    pub event_id: EventId,
    pub registered_at: DateTime<Utc>,
}

impl From<RegistrationRow> for Registration {
    fn from(value: RegistrationRow) -> Self {
        let RegistrationRow {
            user_id,
            event_id,
            registered_at,
        } = value;
        Registration {
            user_id,
            event_id,
            registered_at,
        }
    }
}

// イベント詳細の登録者一覧を取得する際に使う型
// users テーブルと INNER JOIN した結果がはまる
#[derive(sqlx::FromRow)]
pub struct RegistrantRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

impl From<RegistrantRow> for Registrant {
    fn from(value: RegistrantRow) -> Self {
        let RegistrantRow {
            user_id,
            name,
            email,
            registered_at,
        } = value;
        Registrant {
            user_id,
            name,
            email,
            registered_at,
        }
    }
}
