use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        contact_message::{ContactFilter, ContactMessage, NewContactMessage},
        pagination::Pagination,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;

    async fn get_contact_message_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError>;

    async fn list_contact_messages(
        &self,
        filter: &ContactFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<ContactMessage>, i64), AppError>;

    async fn mark_contact_message_read(&self, id: &Uuid) -> Result<ContactMessage, AppError>;

    async fn delete_contact_message(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError> {
        let saved = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn get_contact_message_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".into()))
    }

    async fn list_contact_messages(
        &self,
        filter: &ContactFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<ContactMessage>, i64), AppError> {
        let offset = Pagination::offset(page, limit);
        let limit = i64::from(limit);

        let (messages, total) = match filter {
            ContactFilter::All => {
                let messages = sqlx::query_as::<_, ContactMessage>(
                    "SELECT * FROM contact_messages ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages")
                    .fetch_one(&self.pool)
                    .await?;

                (messages, total)
            }
            ContactFilter::UnreadOnly => {
                let messages = sqlx::query_as::<_, ContactMessage>(
                    "SELECT * FROM contact_messages WHERE read = FALSE ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM contact_messages WHERE read = FALSE",
                )
                .fetch_one(&self.pool)
                .await?;

                (messages, total)
            }
        };

        Ok((messages, total))
    }

    async fn mark_contact_message_read(&self, id: &Uuid) -> Result<ContactMessage, AppError> {
        sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages SET read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Message not found".into()))
    }

    async fn delete_contact_message(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Message not found".into()))
                } else {
                    Ok(())
                }
            })?
    }
}
