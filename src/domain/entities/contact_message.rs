use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::validation::validate_email_address;

use super::pagination::Pagination;

const MAX_NAME_LENGTH: u64 = 100;
const MAX_SUBJECT_LENGTH: u64 = 200;
const MAX_MESSAGE_LENGTH: u64 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Public contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[validate(length(min = 1, max = MAX_SUBJECT_LENGTH, message = "Subject must be 1-200 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

impl NewContactMessage {
    /// Email addresses are stored lower-cased.
    pub fn prepare_for_insert(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactListQuery {
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: Option<u32>,

    pub unread_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFilter {
    All,
    UnreadOnly,
}

#[derive(Debug, Serialize)]
pub struct ContactListData {
    pub messages: Vec<ContactMessage>,
    pub pagination: Pagination,
}
