use crate::database::{
    model::{
        event::EventRow,
        registration::{RegistrantRow, RegistrationRow},
    },
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{EventId, UserId},
    registration::{
        event::{CreateRegistration, DeleteRegistration},
        Registrant, Registration,
    },
};
use kernel::repository::registration::RegistrationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RegistrationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    // 登録操作を行う
    async fn register(&self, event: CreateRegistration) -> AppResult<Registration> {
        let mut tx = self.db.begin().await?;

        // 検査と挿入はすべて admit の中で同じトランザクションに対して行う。
        // どの検査で失敗しても挿入済みの行を残さないよう、
        // 失敗時は明示的にロールバックしてからエラーを返す。
        match Self::admit(&mut tx, &event).await {
            Ok(registration) => {
                tx.commit().await.map_err(AppError::TransactionError)?;
                Ok(registration)
            }
            Err(e) => {
                tx.rollback().await.map_err(AppError::TransactionError)?;
                Err(e)
            }
        }
    }

    // 登録の取り消し操作を行う
    async fn cancel(&self, event: DeleteRegistration) -> AppResult<()> {
        // 複数ステップで守るべき不変条件はないため、DELETE 単体の
        // 原子性だけで足りる
        let res = sqlx::query(
            r#"
                DELETE FROM event_registrations
                WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(event.user_id)
        .bind(event.event_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // 2 回目の取り消しは 1 回目と区別できる形で失敗させる
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("registration not found".into()));
        }

        Ok(())
    }

    // イベント ID に紐づく登録者一覧を取得する
    async fn find_registrants(&self, event_id: EventId) -> AppResult<Vec<Registrant>> {
        // users テーブルと INNER JOIN し、登録者のユーザー情報も一緒に抽出する
        // 出力するレコードは、登録日時の古い順に並べる
        let rows: Vec<RegistrantRow> = sqlx::query_as(
            r#"
                SELECT
                    er.user_id,
                    u.name,
                    u.email,
                    er.registered_at
                FROM event_registrations AS er
                INNER JOIN users AS u ON er.user_id = u.id
                WHERE er.event_id = $1
                ORDER BY er.registered_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Registrant::from).collect())
    }
}

impl RegistrationRepositoryImpl {
    // register メソッドの中で使う、検査と挿入の本体。
    // 事前のチェックとして、以下を順に調べる。
    // - 指定のイベント ID をもつイベントが存在するか
    // - そのイベントが開催前か
    // - 定員に空きがあるか
    // - 指定のユーザー ID をもつユーザーが存在するか
    // - 同じ (ユーザー, イベント) の登録が既に存在しないか
    //
    // すべて Yes だった場合のみ登録レコードを挿入する。
    async fn admit(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        event: &CreateRegistration,
    ) -> AppResult<Registration> {
        //
        // ① イベントの行ロックを取得する。
        //    同一イベントへの登録処理はこのロックで直列化されるため、
        //    登録数の検査から挿入までの間に他の登録が割り込むことはない。
        //    別イベントへの登録はロックの対象外なので並行に進む。
        //
        let target: Option<EventRow> = sqlx::query_as(
            r#"
                SELECT id, title, date_time, location, capacity, created_at
                FROM events
                WHERE id = $1
                FOR UPDATE
            "#,
        )
        .bind(event.event_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(target) = target else {
            return Err(AppError::EntityNotFound("event not found".into()));
        };

        //
        // ② 開催済みのイベントには登録できない
        //
        if target.date_time <= Utc::now() {
            return Err(AppError::UnprocessableEntity(
                "cannot register for past events".into(),
            ));
        }

        //
        // ③ 現在の登録数を同じトランザクション内で数え、定員と比較する
        //
        let registered_count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*)
                FROM event_registrations
                WHERE event_id = $1
            "#,
        )
        .bind(event.event_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if registered_count >= i64::from(target.capacity) {
            return Err(AppError::Conflict("event is full".into()));
        }

        //
        // ④ ユーザーの存在確認
        //
        let user: Option<UserId> = sqlx::query_scalar(
            r#"
                SELECT id
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(event.user_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if user.is_none() {
            return Err(AppError::EntityNotFound("user not found".into()));
        }

        //
        // ⑤ 二重登録の確認
        //
        let existing: Option<UserId> = sqlx::query_scalar(
            r#"
                SELECT user_id
                FROM event_registrations
                WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(event.user_id)
        .bind(event.event_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing.is_some() {
            return Err(AppError::Conflict(
                "user already registered for this event".into(),
            ));
        }

        //
        // ここまでのチェックを通過すれば登録レコードを挿入する
        //
        let row: RegistrationRow = sqlx::query_as(
            r#"
                INSERT INTO event_registrations (user_id, event_id)
                VALUES ($1, $2)
                RETURNING user_id, event_id, registered_at
            "#,
        )
        .bind(event.user_id)
        .bind(event.event_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }
}
