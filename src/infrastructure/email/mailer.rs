use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{info, warn};

use crate::{errors::AppError, settings::AppConfig};

/// Boundary for the contact-form notification collaborator: one mail to the
/// admin inbox, one confirmation to the submitter.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn send_contact_notification(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), AppError>;
}

pub struct SmtpMailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
    admin_address: String,
}

impl SmtpMailer {
    /// Builds the mailer from settings. Without an SMTP host the mailer is a
    /// no-op that logs a warning per skipped send.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let transport = match (&config.smtp_host, &config.smtp_username, &config.smtp_password) {
            (Some(host), Some(username), Some(password)) => {
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                    .map_err(|e| AppError::InternalError(format!("SMTP relay setup failed: {}", e)))?
                    .credentials(Credentials::new(username.clone(), password.clone()))
                    .build();
                info!("SMTP mailer configured for relay {}", host);
                Some(transport)
            }
            _ => {
                warn!("SMTP not configured; contact notifications are disabled");
                None
            }
        };

        let from = config
            .mail_from
            .clone()
            .or_else(|| config.smtp_username.clone())
            .unwrap_or_else(|| "no-reply@localhost".to_string());

        let admin_address = config.contact_email.clone().unwrap_or_else(|| from.clone());

        Ok(SmtpMailer { transport, from, admin_address })
    }

    fn mailbox(address: &str) -> Result<Mailbox, AppError> {
        address
            .parse()
            .map_err(|e| AppError::NotificationError(format!("Invalid mail address {}: {}", address, e)))
    }
}

#[async_trait]
impl ContactNotifier for SmtpMailer {
    async fn send_contact_notification(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), AppError> {
        let Some(transport) = &self.transport else {
            warn!("Skipping contact notification for {}: SMTP not configured", email);
            return Ok(());
        };

        let from = Self::mailbox(&self.from)?;

        let admin_mail = Message::builder()
            .from(from.clone())
            .to(Self::mailbox(&self.admin_address)?)
            .subject(format!("New Portfolio Contact: {}", subject))
            .header(ContentType::TEXT_HTML)
            .body(format!(
                "<h2>New Contact Form Submission</h2>\
                 <p><strong>Name:</strong> {name}</p>\
                 <p><strong>Email:</strong> {email}</p>\
                 <p><strong>Subject:</strong> {subject}</p>\
                 <p><strong>Message:</strong></p>\
                 <p>{}</p>",
                message.replace('\n', "<br>")
            ))
            .map_err(|e| AppError::NotificationError(format!("Failed to build admin mail: {}", e)))?;

        let confirmation_mail = Message::builder()
            .from(from)
            .to(Self::mailbox(email)?)
            .subject("Message Received - Portfolio")
            .header(ContentType::TEXT_HTML)
            .body(format!(
                "<h2>Thank You for Reaching Out!</h2>\
                 <p>Hi {name},</p>\
                 <p>Your message has been received successfully. \
                 I'll get back to you as soon as possible.</p>\
                 <p><strong>Your Subject:</strong> {subject}</p>"
            ))
            .map_err(|e| AppError::NotificationError(format!("Failed to build confirmation mail: {}", e)))?;

        transport
            .send(admin_mail)
            .await
            .map_err(|e| AppError::NotificationError(format!("Admin notification failed: {}", e)))?;

        transport
            .send(confirmation_mail)
            .await
            .map_err(|e| AppError::NotificationError(format!("Confirmation mail failed: {}", e)))?;

        info!("Contact notification emails sent for {}", email);
        Ok(())
    }
}
