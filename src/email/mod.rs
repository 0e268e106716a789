//! Best-effort email notifications for submitted forms. Send failures are
//! logged and reported as `false`, never surfaced to the HTTP caller.

mod templates;

pub use templates::{ContactNotification, IntakeNotification};

use anyhow::{Context, Result};
use askama::Template;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

use crate::config::SmtpConfig;
use crate::db::models::{NewContactMessage, NewIntakeForm};

pub struct Mailer {
    inner: Option<SmtpMailer>,
}

struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl Mailer {
    /// A mailer that skips every send. Used when SMTP is not configured
    /// and in tests.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn from_config(config: Option<&SmtpConfig>) -> Result<Self> {
        let Some(config) = config else {
            return Ok(Self::disabled());
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
            .context("Failed to build SMTP transport")?
            .port(config.port)
            .credentials(Credentials::new(
                config.email.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .email
            .parse::<Mailbox>()
            .context("Failed to parse SMTP_EMAIL as a mailbox")?;
        let to = config
            .notification_email
            .parse::<Mailbox>()
            .context("Failed to parse NOTIFICATION_EMAIL as a mailbox")?;

        Ok(Self {
            inner: Some(SmtpMailer {
                transport,
                from,
                to,
            }),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns whether the notification was actually sent, matching the
    /// `email_sent` field in the intake response.
    pub async fn send_intake_notification(
        &self,
        form: &NewIntakeForm,
        business_name: &str,
    ) -> bool {
        let notification = IntakeNotification::from_form(form, business_name);
        self.send(
            &notification.subject(),
            notification.text_body(),
            notification.render(),
            Some(&form.email),
        )
        .await
    }

    pub async fn send_contact_notification(
        &self,
        message: &NewContactMessage,
        business_name: &str,
    ) -> bool {
        let notification = ContactNotification::from_message(message, business_name);
        self.send(
            &notification.subject(),
            notification.text_body(),
            notification.render(),
            Some(&message.email),
        )
        .await
    }

    async fn send(
        &self,
        subject: &str,
        text_body: String,
        html_body: askama::Result<String>,
        reply_to: Option<&str>,
    ) -> bool {
        let Some(smtp) = &self.inner else {
            info!("Email not configured, skipping notification");
            return false;
        };

        let html_body = match html_body {
            Ok(html) => html,
            Err(err) => {
                warn!("Failed to render notification email: {err}");
                return false;
            }
        };

        let mut builder = Message::builder()
            .from(smtp.from.clone())
            .to(smtp.to.clone())
            .subject(subject);
        if let Some(mailbox) = reply_to.and_then(|addr| addr.parse::<Mailbox>().ok()) {
            builder = builder.reply_to(mailbox);
        }

        let message =
            match builder.multipart(MultiPart::alternative_plain_html(text_body, html_body)) {
                Ok(message) => message,
                Err(err) => {
                    warn!("Failed to build notification email: {err}");
                    return false;
                }
            };

        match smtp.transport.send(message).await {
            Ok(_) => {
                info!("Notification email sent to {}", smtp.to);
                true
            }
            Err(err) => {
                warn!("Failed to send notification email: {err}");
                false
            }
        }
    }
}
