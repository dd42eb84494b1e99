use validator::Validate;

use crate::{
    entities::{
        pagination::Pagination,
        project::{NewProjectRequest, Project, ProjectFilter, ProjectListData, UpdateProjectRequest},
    },
    errors::AppError,
    repositories::projects::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects newest-start-date first with the pagination block.
    pub async fn list_projects(
        &self,
        filter: ProjectFilter,
        page: u32,
        limit: u32,
    ) -> Result<ProjectListData, AppError> {
        let (projects, total) = self.project_repo.list_projects(&filter, page, limit).await?;

        Ok(ProjectListData {
            projects,
            pagination: Pagination::new(page, limit, total),
        })
    }

    /// Retrieves a project by its ID
    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id, "Project")?;
        self.project_repo.get_project_by_id(&valid_id).await
    }

    /// Creates a new project after validating every field rule at once
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        request.validate()?;
        self.project_repo.create_project(&request).await
    }

    /// Applies a partial update; validation re-runs against the merged record
    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id, "Project")?;

        let current = self.project_repo.get_project_by_id(&valid_id).await?;
        let merged = request.merge_into(&current);
        merged.validate()?;

        self.project_repo.update_project(&valid_id, &merged).await
    }

    /// Deletes a project by its ID
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id, "Project")?;
        self.project_repo.delete_project(&valid_id).await
    }
}
