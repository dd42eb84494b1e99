use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::validation::{validate_generic_url, validate_github_url};

use super::pagination::Pagination;

const MAX_TITLE_LENGTH: u64 = 100;
const MAX_DESCRIPTION_LENGTH: u64 = 500;
const MAX_LONG_DESCRIPTION_LENGTH: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub tech_stack: Vec<String>,
    pub github: Option<String>,
    pub live_link: Option<String>,
    pub image: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full candidate record; also the merge target for partial updates so that
/// validation always runs against the resulting record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description must be 1-500 characters"))]
    pub description: String,

    #[validate(length(max = MAX_LONG_DESCRIPTION_LENGTH, message = "Long description cannot exceed 2000 characters"))]
    pub long_description: Option<String>,

    #[validate(length(min = 1, message = "Tech stack must have at least one technology"))]
    pub tech_stack: Vec<String>,

    #[validate(custom(function = "validate_github_url"))]
    pub github: Option<String>,

    #[validate(custom(function = "validate_generic_url"))]
    pub live_link: Option<String>,

    pub image: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub featured: bool,
}

/// Partial update: only supplied fields change.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub github: Option<String>,
    pub live_link: Option<String>,
    pub image: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub featured: Option<bool>,
}

impl UpdateProjectRequest {
    /// Merges supplied fields onto the current record, yielding the candidate
    /// the invariants are re-checked against.
    pub fn merge_into(self, current: &Project) -> NewProjectRequest {
        NewProjectRequest {
            title: self.title.unwrap_or_else(|| current.title.clone()),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            long_description: self.long_description.or_else(|| current.long_description.clone()),
            tech_stack: self.tech_stack.unwrap_or_else(|| current.tech_stack.clone()),
            github: self.github.or_else(|| current.github.clone()),
            live_link: self.live_link.or_else(|| current.live_link.clone()),
            image: self.image.or_else(|| current.image.clone()),
            start_date: self.start_date.unwrap_or(current.start_date),
            end_date: self.end_date.or(current.end_date),
            featured: self.featured.unwrap_or(current.featured),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProjectListQuery {
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: Option<u32>,

    pub featured: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Featured(bool),
}

#[derive(Debug, Serialize)]
pub struct ProjectListData {
    pub projects: Vec<Project>,
    pub pagination: Pagination,
}
