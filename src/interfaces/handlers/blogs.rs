use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    entities::blog::{BlogFilter, BlogListQuery, NewBlogRequest, UpdateBlogRequest},
    envelope::ApiResponse,
    errors::AppError,
    AppState,
};

#[get("")]
pub async fn list_blogs(
    state: web::Data<AppState>,
    query: web::Query<BlogListQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let filter = match query.tag {
        Some(tag) => BlogFilter::Tag(tag),
        None => BlogFilter::All,
    };

    let data = state.blog_handler.list_blogs(filter, page, limit).await?;

    Ok(ApiResponse::ok("Blogs fetched successfully", data))
}

#[get("/{id}")]
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let blog = state.blog_handler.get_blog_by_id(&path).await?;

    Ok(ApiResponse::ok("Blog fetched successfully", blog))
}

#[post("")]
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<NewBlogRequest>,
) -> Result<HttpResponse, AppError> {
    let blog = state.blog_handler.create_blog(body.into_inner()).await?;

    Ok(ApiResponse::created("Blog created successfully", blog))
}

#[put("/{id}")]
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> Result<HttpResponse, AppError> {
    let blog = state.blog_handler.update_blog(&path, body.into_inner()).await?;

    Ok(ApiResponse::ok("Blog updated successfully", blog))
}

#[delete("/{id}")]
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.blog_handler.delete_blog(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
        "Blog deleted successfully",
    )))
}
