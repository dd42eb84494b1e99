use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::social_links::{SocialLinks, SocialLinksInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxSocialLinksRepo,
};

#[async_trait]
pub trait SocialLinksRepository: Send + Sync {
    /// Returns the singleton row when one exists. The table may transiently
    /// hold more than one row under a racing first-create; the oldest wins.
    async fn find_social_links(&self) -> Result<Option<SocialLinks>, AppError>;

    async fn insert_social_links(&self, insert: &SocialLinksInsert) -> Result<SocialLinks, AppError>;

    async fn update_social_links(
        &self,
        id: &Uuid,
        insert: &SocialLinksInsert,
    ) -> Result<SocialLinks, AppError>;
}

impl SqlxSocialLinksRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSocialLinksRepo { pool }
    }
}

#[async_trait]
impl SocialLinksRepository for SqlxSocialLinksRepo {
    async fn find_social_links(&self) -> Result<Option<SocialLinks>, AppError> {
        let links = sqlx::query_as::<_, SocialLinks>(
            "SELECT * FROM social_links ORDER BY updated_at ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(links)
    }

    async fn insert_social_links(&self, insert: &SocialLinksInsert) -> Result<SocialLinks, AppError> {
        let links = sqlx::query_as::<_, SocialLinks>(
            r#"
            INSERT INTO social_links (github, linkedin, leetcode, resume_url, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&insert.github)
        .bind(&insert.linkedin)
        .bind(&insert.leetcode)
        .bind(&insert.resume_url)
        .bind(&insert.email)
        .bind(&insert.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(links)
    }

    async fn update_social_links(
        &self,
        id: &Uuid,
        insert: &SocialLinksInsert,
    ) -> Result<SocialLinks, AppError> {
        sqlx::query_as::<_, SocialLinks>(
            r#"
            UPDATE social_links SET
                github = $1, linkedin = $2, leetcode = $3,
                resume_url = $4, email = $5, phone = $6,
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&insert.github)
        .bind(&insert.linkedin)
        .bind(&insert.leetcode)
        .bind(&insert.resume_url)
        .bind(&insert.email)
        .bind(&insert.phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Social links not found".into()))
    }
}
