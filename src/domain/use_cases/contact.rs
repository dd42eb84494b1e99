use validator::Validate;

use crate::{
    entities::{
        contact_message::{ContactFilter, ContactListData, ContactMessage, NewContactMessage},
        pagination::Pagination,
    },
    errors::AppError,
    infrastructure::email::mailer::ContactNotifier,
    repositories::contact::ContactRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ContactHandler<R, M>
where
    R: ContactRepository,
    M: ContactNotifier,
{
    pub contact_repo: R,
    pub mailer: M,
}

impl<R, M> ContactHandler<R, M>
where
    R: ContactRepository,
    M: ContactNotifier,
{
    pub fn new(contact_repo: R, mailer: M) -> Self {
        ContactHandler { contact_repo, mailer }
    }

    /// Persists a contact-form submission, then notifies the admin and sends
    /// the submitter a confirmation. The write commits before any send: a
    /// notification failure surfaces as its own error and never rolls the
    /// message back.
    pub async fn create_contact_message(
        &self,
        request: NewContactMessage,
    ) -> Result<ContactMessage, AppError> {
        request.validate()?;

        let saved = self
            .contact_repo
            .create_contact_message(&request.prepare_for_insert())
            .await?;

        if let Err(e) = self
            .mailer
            .send_contact_notification(&saved.name, &saved.email, &saved.subject, &saved.message)
            .await
        {
            tracing::error!("Contact message {} saved but notification failed: {}", saved.id, e);
            return Err(e);
        }

        Ok(saved)
    }

    /// Lists contact messages, newest first, optionally unread only
    pub async fn list_contact_messages(
        &self,
        filter: ContactFilter,
        page: u32,
        limit: u32,
    ) -> Result<ContactListData, AppError> {
        let (messages, total) = self
            .contact_repo
            .list_contact_messages(&filter, page, limit)
            .await?;

        Ok(ContactListData {
            messages,
            pagination: Pagination::new(page, limit, total),
        })
    }

    /// Retrieves a contact message by its ID
    pub async fn get_contact_message_by_id(&self, id: &str) -> Result<ContactMessage, AppError> {
        let valid_id = valid_uuid(id, "Message")?;
        self.contact_repo.get_contact_message_by_id(&valid_id).await
    }

    /// Flips the read flag to true
    pub async fn mark_contact_message_read(&self, id: &str) -> Result<ContactMessage, AppError> {
        let valid_id = valid_uuid(id, "Message")?;
        self.contact_repo.mark_contact_message_read(&valid_id).await
    }

    /// Deletes a contact message by its ID
    pub async fn delete_contact_message(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id, "Message")?;
        self.contact_repo.delete_contact_message(&valid_id).await
    }
}
