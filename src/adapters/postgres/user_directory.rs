use crate::domain::value_objects::UserId;
use crate::ports::user_directory::{
    DuplicatedEmail, Result, User, UserDirectory, UserDraft,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをUserに変換する
fn map_row_to_user(row: &PgRow) -> User {
    User {
        user_id: UserId::from_i64(row.get("user_id")),
        name: row.get("name"),
        email: row.get("email"),
    }
}

/// 一意性違反をメールアドレス競合に変換する
///
/// usersテーブルの唯一の一意制約はemailのため、一意性違反は
/// そのままメールアドレス重複として報告できる。
fn map_unique_violation(
    e: sqlx::Error,
    email: &str,
) -> Box<dyn std::error::Error + Send + Sync> {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return Box::new(DuplicatedEmail {
                email: email.to_string(),
            });
        }
    }
    Box::new(e)
}

/// UserDirectoryのPostgreSQL実装
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn create(&self, draft: UserDraft) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING user_id, name, email
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &draft.email))?;

        Ok(map_row_to_user(&row))
    }

    async fn save(&self, user: User) -> Result<User> {
        let row = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3
            WHERE user_id = $1
            RETURNING user_id, name, email
            "#,
        )
        .bind(user.user_id.value())
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &user.email))?;

        Ok(map_row_to_user(&row))
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT user_id, name, email
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_user))
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, name, email
            FROM users
            ORDER BY user_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_user).collect())
    }

    async fn delete(&self, user_id: UserId) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.value())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
