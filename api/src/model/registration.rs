use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{EventId, UserId},
    registration::{Registrant, Registration},
};
use serde::{Deserialize, Serialize};

// 登録と取り消しの両方で使うリクエストボディ
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(skip)]
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub user_id: UserId,
    pub event_id: EventId,
    pub registered_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationResponse {
    fn from(value: Registration) -> Self {
        let Registration {
            user_id,
            event_id,
            registered_at,
        } = value;
        Self {
            user_id,
            event_id,
            registered_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrantResponse {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

impl From<Registrant> for RegistrantResponse {
    fn from(value: Registrant) -> Self {
        let Registrant {
            user_id,
            name,
            email,
            registered_at,
        } = value;
        Self {
            user_id,
            name,
            email,
            registered_at,
        }
    }
}
