use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use portfolio_api::{
    entities::social_links::{SocialLinks, SocialLinksInsert, SocialLinksPayload},
    errors::AppError,
    repositories::social_links::SocialLinksRepository,
    use_cases::social::SocialLinksHandler,
};

mock! {
    pub SocialRepo {}

    #[async_trait]
    impl SocialLinksRepository for SocialRepo {
        async fn find_social_links(&self) -> Result<Option<SocialLinks>, AppError>;

        async fn insert_social_links(&self, insert: &SocialLinksInsert) -> Result<SocialLinks, AppError>;

        async fn update_social_links(
            &self,
            id: &Uuid,
            insert: &SocialLinksInsert,
        ) -> Result<SocialLinks, AppError>;
    }
}

fn existing_links(id: Uuid) -> SocialLinks {
    SocialLinks {
        id,
        github: "https://github.com/old".into(),
        linkedin: "https://linkedin.com/in/old".into(),
        leetcode: "https://leetcode.com/u/old".into(),
        resume_url: "https://example.com/old.pdf".into(),
        email: "old@example.com".into(),
        phone: "+1 555 0000".into(),
        updated_at: Utc::now(),
    }
}

fn links_from(insert: &SocialLinksInsert, id: Uuid) -> SocialLinks {
    SocialLinks {
        id,
        github: insert.github.clone(),
        linkedin: insert.linkedin.clone(),
        leetcode: insert.leetcode.clone(),
        resume_url: insert.resume_url.clone(),
        email: insert.email.clone(),
        phone: insert.phone.clone(),
        updated_at: Utc::now(),
    }
}

fn full_payload() -> SocialLinksPayload {
    SocialLinksPayload {
        github: Some("https://github.com/someone".into()),
        linkedin: Some("https://linkedin.com/in/someone".into()),
        leetcode: Some("https://leetcode.com/u/someone".into()),
        resume_url: Some("https://example.com/resume.pdf".into()),
        email: Some("someone@example.com".into()),
        phone: Some("+1 555 0100".into()),
    }
}

#[actix_rt::test]
async fn first_call_creates_the_singleton() {
    let id = Uuid::new_v4();
    let mut repo = MockSocialRepo::new();
    repo.expect_find_social_links().returning(|| Ok(None));
    repo.expect_insert_social_links()
        .times(1)
        .returning(move |insert| Ok(links_from(insert, id)));

    let handler = SocialLinksHandler::new(repo);

    let saved = handler
        .create_or_update_social_links(full_payload())
        .await
        .unwrap();

    assert!(saved.created);
    assert_eq!(saved.links.github, "https://github.com/someone");
}

#[actix_rt::test]
async fn second_call_merges_into_the_existing_record() {
    let id = Uuid::new_v4();
    let mut repo = MockSocialRepo::new();
    repo.expect_find_social_links()
        .returning(move || Ok(Some(existing_links(id))));
    repo.expect_update_social_links()
        .withf(move |target, insert| {
            *target == id
                && insert.github == "https://github.com/new"
                && insert.linkedin == "https://linkedin.com/in/old"
                && insert.email == "old@example.com"
        })
        .times(1)
        .returning(move |_, insert| Ok(links_from(insert, id)));

    let handler = SocialLinksHandler::new(repo);

    let payload = SocialLinksPayload {
        github: Some("https://github.com/new".into()),
        ..Default::default()
    };

    let saved = handler.create_or_update_social_links(payload).await.unwrap();

    assert!(!saved.created);
    assert_eq!(saved.links.github, "https://github.com/new");
    assert_eq!(saved.links.phone, "+1 555 0000");
}

#[actix_rt::test]
async fn first_creation_requires_every_field() {
    let mut repo = MockSocialRepo::new();
    repo.expect_find_social_links().returning(|| Ok(None));
    // No insert expectation: missing fields must be rejected first.

    let handler = SocialLinksHandler::new(repo);

    let payload = SocialLinksPayload {
        github: Some("https://github.com/someone".into()),
        ..Default::default()
    };

    let Err(AppError::ValidationError(errors)) =
        handler.create_or_update_social_links(payload).await
    else {
        panic!("expected a validation failure");
    };
    assert!(errors.iter().any(|e| e.field == "resumeUrl"));
    assert!(errors.iter().any(|e| e.field == "phone"));
}

#[actix_rt::test]
async fn supplied_fields_must_still_match_their_platform_patterns() {
    let handler = SocialLinksHandler::new(MockSocialRepo::new());

    let payload = SocialLinksPayload {
        linkedin: Some("https://github.com/not-linkedin".into()),
        ..Default::default()
    };

    let Err(AppError::ValidationError(errors)) =
        handler.create_or_update_social_links(payload).await
    else {
        panic!("expected a validation failure");
    };
    assert!(errors.iter().any(|e| e.field == "linkedin"));
}

#[actix_rt::test]
async fn get_before_first_creation_is_not_found() {
    let mut repo = MockSocialRepo::new();
    repo.expect_find_social_links().returning(|| Ok(None));

    let handler = SocialLinksHandler::new(repo);

    let err = handler.get_social_links().await.unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound(msg) if msg == "Social links not found. Please create them first."
    ));
}
