use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::pagination::Pagination;

const MAX_TITLE_LENGTH: u64 = 200;
const MAX_EXCERPT_LENGTH: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    pub read_time: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Blog content is required"))]
    pub content: String,

    #[validate(length(min = 1, max = MAX_EXCERPT_LENGTH, message = "Excerpt must be 1-300 characters"))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "At least one tag is required"))]
    pub tags: Vec<String>,

    pub thumbnail: Option<String>,

    #[validate(range(min = 1, message = "Read time must be at least 1 minute"))]
    pub read_time: i32,

    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub read_time: Option<i32>,
    pub published: Option<bool>,
}

impl UpdateBlogRequest {
    pub fn merge_into(self, current: &Blog) -> NewBlogRequest {
        NewBlogRequest {
            title: self.title.unwrap_or_else(|| current.title.clone()),
            content: self.content.unwrap_or_else(|| current.content.clone()),
            excerpt: self.excerpt.unwrap_or_else(|| current.excerpt.clone()),
            tags: self.tags.unwrap_or_else(|| current.tags.clone()),
            thumbnail: self.thumbnail.or_else(|| current.thumbnail.clone()),
            read_time: self.read_time.unwrap_or(current.read_time),
            published: self.published.unwrap_or(current.published),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct BlogListQuery {
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: Option<u32>,

    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogFilter {
    All,
    Tag(String),
}

#[derive(Debug, Serialize)]
pub struct BlogListData {
    pub blogs: Vec<Blog>,
    pub pagination: Pagination,
}
