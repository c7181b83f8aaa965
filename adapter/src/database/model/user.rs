use kernel::model::{id::UserId, user::User};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            id,
            name,
            email,
            created_at,
        } = value;
        User {
            user_id: id,
            name,
            email,
            created_at,
        }
    }
}
