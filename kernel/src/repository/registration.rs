use crate::model::{
    id::EventId,
    registration::{
        event::{CreateRegistration, DeleteRegistration},
        Registrant, Registration,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    // 登録操作を行う。定員の検査と挿入はひとつのトランザクションで行う
    async fn register(&self, event: CreateRegistration) -> AppResult<Registration>;
    // 登録を取り消す。該当の登録がない場合は EntityNotFound を返す
    async fn cancel(&self, event: DeleteRegistration) -> AppResult<()>;
    // イベント ID に紐づく登録者一覧を、登録日時の古い順に取得する
    async fn find_registrants(&self, event_id: EventId) -> AppResult<Vec<Registrant>>;
}
