use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        blog::{Blog, BlogFilter, NewBlogRequest},
        pagination::Pagination,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxBlogRepo,
};

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Returns one page of blogs plus the total count of the filtered set,
    /// newest first. The tag filter is an exact match against the tag array.
    async fn list_blogs(
        &self,
        filter: &BlogFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Blog>, i64), AppError>;

    async fn get_blog_by_id(&self, id: &Uuid) -> Result<Blog, AppError>;

    async fn create_blog(&self, new: &NewBlogRequest) -> Result<Blog, AppError>;

    async fn update_blog(&self, id: &Uuid, merged: &NewBlogRequest) -> Result<Blog, AppError>;

    async fn delete_blog(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxBlogRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxBlogRepo { pool }
    }
}

#[async_trait]
impl BlogRepository for SqlxBlogRepo {
    async fn list_blogs(
        &self,
        filter: &BlogFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Blog>, i64), AppError> {
        let offset = Pagination::offset(page, limit);
        let limit = i64::from(limit);

        let (blogs, total) = match filter {
            BlogFilter::All => {
                let blogs = sqlx::query_as::<_, Blog>(
                    "SELECT * FROM blogs ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
                    .fetch_one(&self.pool)
                    .await?;

                (blogs, total)
            }
            BlogFilter::Tag(tag) => {
                let blogs = sqlx::query_as::<_, Blog>(
                    "SELECT * FROM blogs WHERE $1 = ANY(tags) ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(tag)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total =
                    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs WHERE $1 = ANY(tags)")
                        .bind(tag)
                        .fetch_one(&self.pool)
                        .await?;

                (blogs, total)
            }
        };

        Ok((blogs, total))
    }

    async fn get_blog_by_id(&self, id: &Uuid) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>("SELECT * FROM blogs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".into()))
    }

    async fn create_blog(&self, new: &NewBlogRequest) -> Result<Blog, AppError> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (title, content, excerpt, tags, thumbnail, read_time, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&new.content)
        .bind(&new.excerpt)
        .bind(&new.tags)
        .bind(&new.thumbnail)
        .bind(new.read_time)
        .bind(new.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(blog)
    }

    async fn update_blog(&self, id: &Uuid, merged: &NewBlogRequest) -> Result<Blog, AppError> {
        sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs SET
                title = $1, content = $2, excerpt = $3, tags = $4,
                thumbnail = $5, read_time = $6, published = $7,
                updated_at = NOW()
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&merged.title)
        .bind(&merged.content)
        .bind(&merged.excerpt)
        .bind(&merged.tags)
        .bind(&merged.thumbnail)
        .bind(merged.read_time)
        .bind(merged.published)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog not found".into()))
    }

    async fn delete_blog(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Blog not found".into()))
                } else {
                    Ok(())
                }
            })?
    }
}
