use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    constants::{DEFAULT_MESSAGE_PAGE_SIZE, DEFAULT_PAGE},
    entities::contact_message::{ContactFilter, ContactListQuery, NewContactMessage},
    envelope::ApiResponse,
    errors::AppError,
    AppState,
};

/// Public, unauthenticated contact-form submission.
#[post("")]
pub async fn send_contact_message(
    state: web::Data<AppState>,
    body: web::Json<NewContactMessage>,
) -> Result<HttpResponse, AppError> {
    let message = state
        .contact_handler
        .create_contact_message(body.into_inner())
        .await?;

    Ok(ApiResponse::created(
        "Message sent successfully. You will receive a confirmation email.",
        message,
    ))
}

#[get("")]
pub async fn list_contact_messages(
    state: web::Data<AppState>,
    query: web::Query<ContactListQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_MESSAGE_PAGE_SIZE);
    let filter = if query.unread_only.unwrap_or(false) {
        ContactFilter::UnreadOnly
    } else {
        ContactFilter::All
    };

    let data = state
        .contact_handler
        .list_contact_messages(filter, page, limit)
        .await?;

    Ok(ApiResponse::ok("Contact messages fetched successfully", data))
}

#[get("/{id}")]
pub async fn get_contact_message(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let message = state.contact_handler.get_contact_message_by_id(&path).await?;

    Ok(ApiResponse::ok("Message fetched successfully", message))
}

#[put("/{id}/read")]
pub async fn mark_message_read(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let message = state.contact_handler.mark_contact_message_read(&path).await?;

    Ok(ApiResponse::ok("Message marked as read", message))
}

#[delete("/{id}")]
pub async fn delete_contact_message(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.contact_handler.delete_contact_message(&path).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
        "Message deleted successfully",
    )))
}
