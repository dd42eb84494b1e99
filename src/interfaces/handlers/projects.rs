use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    entities::project::{NewProjectRequest, ProjectFilter, ProjectListQuery, UpdateProjectRequest},
    envelope::ApiResponse,
    errors::AppError,
    AppState,
};

#[get("")]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectListQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let filter = match query.featured {
        Some(featured) => ProjectFilter::Featured(featured),
        None => ProjectFilter::All,
    };

    let data = state.project_handler.list_projects(filter, page, limit).await?;

    Ok(ApiResponse::ok("Projects fetched successfully", data))
}

#[get("/{id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project = state.project_handler.get_project_by_id(&path).await?;

    Ok(ApiResponse::ok("Project fetched successfully", project))
}

#[post("")]
pub async fn create_project(
    state: web::Data<AppState>,
    body: web::Json<NewProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let project = state.project_handler.create_project(body.into_inner()).await?;

    Ok(ApiResponse::created("Project created successfully", project))
}

#[put("/{id}")]
pub async fn update_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let project = state
        .project_handler
        .update_project(&path, body.into_inner())
        .await?;

    Ok(ApiResponse::ok("Project updated successfully", project))
}

#[delete("/{id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.project_handler.delete_project(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
        "Project deleted successfully",
    )))
}
