use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::validation::{
        validate_email_address, validate_github_url, validate_leetcode_url, validate_linkedin_url,
    },
    errors::{AppError, FieldError},
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub id: Uuid,
    pub github: String,
    pub linkedin: String,
    pub leetcode: String,
    pub resume_url: String,
    pub email: String,
    pub phone: String,
    pub updated_at: DateTime<Utc>,
}

/// Create-or-update payload. All fields are optional on the wire: against an
/// existing singleton the supplied ones overwrite, the rest are retained; on
/// first creation every field is required.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinksPayload {
    #[validate(custom(function = "validate_github_url"))]
    pub github: Option<String>,

    #[validate(custom(function = "validate_linkedin_url"))]
    pub linkedin: Option<String>,

    #[validate(custom(function = "validate_leetcode_url"))]
    pub leetcode: Option<String>,

    #[validate(length(min = 1, message = "Resume URL is required"))]
    pub resume_url: Option<String>,

    #[validate(custom(function = "validate_email_address"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: Option<String>,
}

/// Fully-populated record ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinksInsert {
    pub github: String,
    pub linkedin: String,
    pub leetcode: String,
    pub resume_url: String,
    pub email: String,
    pub phone: String,
}

impl SocialLinksPayload {
    /// First creation: every field must be present. Missing ones are reported
    /// together, never one at a time.
    pub fn into_insert(self) -> Result<SocialLinksInsert, AppError> {
        let mut missing = Vec::new();
        let mut require = |field: &str, value: Option<String>, label: &str| {
            value.unwrap_or_else(|| {
                missing.push(FieldError {
                    field: field.to_string(),
                    message: format!("{} is required", label),
                });
                String::new()
            })
        };

        let insert = SocialLinksInsert {
            github: require("github", self.github, "GitHub URL"),
            linkedin: require("linkedin", self.linkedin, "LinkedIn URL"),
            leetcode: require("leetcode", self.leetcode, "LeetCode URL"),
            resume_url: require("resumeUrl", self.resume_url, "Resume URL"),
            email: require("email", self.email, "Email"),
            phone: require("phone", self.phone, "Phone"),
        };
        drop(require);

        if missing.is_empty() {
            Ok(SocialLinksInsert {
                email: insert.email.trim().to_lowercase(),
                ..insert
            })
        } else {
            Err(AppError::ValidationError(missing))
        }
    }

    /// Merge onto the existing singleton: supplied fields overwrite, the rest
    /// are retained.
    pub fn merge_into(self, current: &SocialLinks) -> SocialLinksInsert {
        SocialLinksInsert {
            github: self.github.unwrap_or_else(|| current.github.clone()),
            linkedin: self.linkedin.unwrap_or_else(|| current.linkedin.clone()),
            leetcode: self.leetcode.unwrap_or_else(|| current.leetcode.clone()),
            resume_url: self.resume_url.unwrap_or_else(|| current.resume_url.clone()),
            email: self
                .email
                .map(|e| e.trim().to_lowercase())
                .unwrap_or_else(|| current.email.clone()),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
        }
    }
}

/// Create-or-update outcome; `created` drives the 201-vs-200 status.
#[derive(Debug)]
pub struct SocialLinksSaved {
    pub links: SocialLinks,
    pub created: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> SocialLinksPayload {
        SocialLinksPayload {
            github: Some("https://github.com/someone".into()),
            linkedin: Some("https://linkedin.com/in/someone".into()),
            leetcode: Some("https://leetcode.com/u/someone".into()),
            resume_url: Some("https://example.com/resume.pdf".into()),
            email: Some("Someone@Example.com".into()),
            phone: Some("+1 555 0100".into()),
        }
    }

    #[test]
    fn full_payload_converts_to_insert_with_lowercased_email() {
        let insert = full_payload().into_insert().unwrap();
        assert_eq!(insert.email, "someone@example.com");
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let payload = SocialLinksPayload {
            github: Some("https://github.com/someone".into()),
            ..Default::default()
        };

        let Err(AppError::ValidationError(errors)) = payload.into_insert() else {
            panic!("expected a validation failure");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["linkedin", "leetcode", "resumeUrl", "email", "phone"]);
    }

    #[test]
    fn merge_overrides_only_supplied_fields() {
        let current = SocialLinks {
            id: Uuid::new_v4(),
            github: "https://github.com/old".into(),
            linkedin: "https://linkedin.com/in/old".into(),
            leetcode: "https://leetcode.com/u/old".into(),
            resume_url: "https://example.com/old.pdf".into(),
            email: "old@example.com".into(),
            phone: "+1 555 0000".into(),
            updated_at: Utc::now(),
        };

        let payload = SocialLinksPayload {
            github: Some("https://github.com/new".into()),
            ..Default::default()
        };

        let merged = payload.merge_into(&current);
        assert_eq!(merged.github, "https://github.com/new");
        assert_eq!(merged.linkedin, "https://linkedin.com/in/old");
        assert_eq!(merged.email, "old@example.com");
    }

    #[test]
    fn platform_patterns_apply_to_supplied_fields() {
        let mut payload = full_payload();
        payload.leetcode = Some("https://github.com/not-leetcode".into());

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("leetcode"));
    }
}
