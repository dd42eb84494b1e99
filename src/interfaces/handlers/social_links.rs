use actix_web::{get, post, web, HttpResponse};

use crate::{
    entities::social_links::SocialLinksPayload,
    envelope::ApiResponse,
    errors::AppError,
    AppState,
};

#[get("")]
pub async fn get_social_links(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let links = state.social_handler.get_social_links().await?;

    Ok(ApiResponse::ok("Social links fetched successfully", links))
}

/// Create-or-update for the singleton; 201 on first creation, 200 afterwards.
#[post("")]
pub async fn create_or_update_social_links(
    state: web::Data<AppState>,
    body: web::Json<SocialLinksPayload>,
) -> Result<HttpResponse, AppError> {
    let saved = state
        .social_handler
        .create_or_update_social_links(body.into_inner())
        .await?;

    if saved.created {
        Ok(ApiResponse::created("Social links created successfully", saved.links))
    } else {
        Ok(ApiResponse::ok("Social links updated successfully", saved.links))
    }
}
