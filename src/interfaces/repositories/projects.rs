use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        pagination::Pagination,
        project::{NewProjectRequest, Project, ProjectFilter},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Returns one page of projects plus the total count of the filtered set,
    /// sorted by start date descending.
    async fn list_projects(
        &self,
        filter: &ProjectFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Project>, i64), AppError>;

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;

    async fn create_project(&self, new: &NewProjectRequest) -> Result<Project, AppError>;

    /// Writes the full merged record; validation has already run against it.
    async fn update_project(&self, id: &Uuid, merged: &NewProjectRequest) -> Result<Project, AppError>;

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(
        &self,
        filter: &ProjectFilter,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Project>, i64), AppError> {
        let offset = Pagination::offset(page, limit);
        let limit = i64::from(limit);

        let (projects, total) = match filter {
            ProjectFilter::All => {
                let projects = sqlx::query_as::<_, Project>(
                    "SELECT * FROM projects ORDER BY start_date DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
                    .fetch_one(&self.pool)
                    .await?;

                (projects, total)
            }
            ProjectFilter::Featured(featured) => {
                let projects = sqlx::query_as::<_, Project>(
                    "SELECT * FROM projects WHERE featured = $1 ORDER BY start_date DESC LIMIT $2 OFFSET $3",
                )
                .bind(featured)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

                let total =
                    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE featured = $1")
                        .bind(featured)
                        .fetch_one(&self.pool)
                        .await?;

                (projects, total)
            }
        };

        Ok((projects, total))
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn create_project(&self, new: &NewProjectRequest) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects
                (title, description, long_description, tech_stack, github,
                 live_link, image, start_date, end_date, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.long_description)
        .bind(&new.tech_stack)
        .bind(&new.github)
        .bind(&new.live_link)
        .bind(&new.image)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(new.featured)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn update_project(&self, id: &Uuid, merged: &NewProjectRequest) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title = $1, description = $2, long_description = $3,
                tech_stack = $4, github = $5, live_link = $6, image = $7,
                start_date = $8, end_date = $9, featured = $10,
                updated_at = NOW()
            WHERE id = $11
            RETURNING *
            "#,
        )
        .bind(&merged.title)
        .bind(&merged.description)
        .bind(&merged.long_description)
        .bind(&merged.tech_stack)
        .bind(&merged.github)
        .bind(&merged.live_link)
        .bind(&merged.image)
        .bind(merged.start_date)
        .bind(merged.end_date)
        .bind(merged.featured)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Project not found".into()))
                } else {
                    Ok(())
                }
            })?
    }
}
