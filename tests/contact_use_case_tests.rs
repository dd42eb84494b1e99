use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use portfolio_api::{
    email::mailer::ContactNotifier,
    entities::contact_message::{ContactFilter, ContactMessage, NewContactMessage},
    errors::AppError,
    repositories::contact::ContactRepository,
    use_cases::contact::ContactHandler,
};

mock! {
    pub ContactRepo {}

    #[async_trait]
    impl ContactRepository for ContactRepo {
        async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;

        async fn get_contact_message_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError>;

        async fn list_contact_messages(
            &self,
            filter: &ContactFilter,
            page: u32,
            limit: u32,
        ) -> Result<(Vec<ContactMessage>, i64), AppError>;

        async fn mark_contact_message_read(&self, id: &Uuid) -> Result<ContactMessage, AppError>;

        async fn delete_contact_message(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub Notifier {}

    #[async_trait]
    impl ContactNotifier for Notifier {
        async fn send_contact_notification(
            &self,
            name: &str,
            email: &str,
            subject: &str,
            message: &str,
        ) -> Result<(), AppError>;
    }
}

fn submission() -> NewContactMessage {
    NewContactMessage {
        name: "A".into(),
        email: "A@B.com".into(),
        subject: "S".into(),
        message: "M".into(),
    }
}

fn saved_message(id: Uuid, read: bool) -> ContactMessage {
    ContactMessage {
        id,
        name: "A".into(),
        email: "a@b.com".into(),
        subject: "S".into(),
        message: "M".into(),
        read,
        created_at: Utc::now(),
    }
}

#[actix_rt::test]
async fn create_persists_lowercased_email_and_notifies() {
    let id = Uuid::new_v4();

    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .withf(|msg| msg.email == "a@b.com")
        .times(1)
        .returning(move |_| Ok(saved_message(id, false)));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send_contact_notification()
        .withf(|name, email, subject, message| {
            name == "A" && email == "a@b.com" && subject == "S" && message == "M"
        })
        .times(1)
        .returning(|_, _, _, _| Ok(()));

    let handler = ContactHandler::new(repo, notifier);

    let saved = handler.create_contact_message(submission()).await.unwrap();
    assert!(!saved.read);
    assert_eq!(saved.email, "a@b.com");
}

#[actix_rt::test]
async fn notification_failure_surfaces_after_the_message_committed() {
    let id = Uuid::new_v4();

    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(1)
        .returning(move |_| Ok(saved_message(id, false)));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_send_contact_notification()
        .times(1)
        .returning(|_, _, _, _| Err(AppError::NotificationError("SMTP refused".into())));

    let handler = ContactHandler::new(repo, notifier);

    let err = handler.create_contact_message(submission()).await.unwrap_err();
    // The repo expectation above verifies the write happened regardless.
    assert!(matches!(err, AppError::NotificationError(_)));
}

#[actix_rt::test]
async fn invalid_submission_never_reaches_the_store_or_the_mailer() {
    let handler = ContactHandler::new(MockContactRepo::new(), MockNotifier::new());

    let mut request = submission();
    request.email = "not-an-email".into();
    request.subject.clear();

    let Err(AppError::ValidationError(errors)) = handler.create_contact_message(request).await
    else {
        panic!("expected a validation failure");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"subject"));
}

#[actix_rt::test]
async fn unread_filter_is_passed_through_to_the_store() {
    let mut repo = MockContactRepo::new();
    repo.expect_list_contact_messages()
        .withf(|filter, page, limit| {
            *filter == ContactFilter::UnreadOnly && *page == 1 && *limit == 20
        })
        .returning(|_, _, _| Ok((vec![saved_message(Uuid::new_v4(), false)], 1)));

    let handler = ContactHandler::new(repo, MockNotifier::new());

    let data = handler
        .list_contact_messages(ContactFilter::UnreadOnly, 1, 20)
        .await
        .unwrap();

    assert_eq!(data.messages.len(), 1);
    assert!(data.messages.iter().all(|m| !m.read));
}

#[actix_rt::test]
async fn mark_read_flips_the_flag() {
    let id = Uuid::new_v4();
    let mut repo = MockContactRepo::new();
    repo.expect_mark_contact_message_read()
        .returning(move |_| Ok(saved_message(id, true)));

    let handler = ContactHandler::new(repo, MockNotifier::new());

    let message = handler
        .mark_contact_message_read(&id.to_string())
        .await
        .unwrap();
    assert!(message.read);
}

#[actix_rt::test]
async fn mark_read_of_a_missing_message_is_not_found() {
    let mut repo = MockContactRepo::new();
    repo.expect_mark_contact_message_read()
        .returning(|_| Err(AppError::NotFound("Message not found".into())));

    let handler = ContactHandler::new(repo, MockNotifier::new());

    let err = handler
        .mark_contact_message_read(&Uuid::new_v4().to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
