use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, SinglePart},
    transport::smtp::{authentication::Credentials, Error as SmtpError},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::ExposeSecret;
use thiserror::Error;
use tokio::sync::Mutex;

use bimquote_core::config::SmtpConfig;

use crate::render::OutboundEmail;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),
    #[error("failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),
    #[error("invalid email address: {0}")]
    InvalidAddress(String),
    #[error("mail transport failure: {0}")]
    Transport(String),
}

/// Outbound mail seam. The workflow only sees this trait, so tests can
/// substitute a recording transport.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpMailer {
    /// Build the process-lifetime SMTP transport. `secure` selects the
    /// implicit-TLS relay; otherwise the connection upgrades via STARTTLS.
    pub fn new(config: &SmtpConfig) -> Result<Self, SmtpError> {
        let credentials =
            Credentials::new(config.username.clone(), config.password.expose_secret().to_string());

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };
        let mailer = builder.port(config.port).credentials(credentials).build();

        Ok(Self { mailer, from_address: config.username.clone() })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let from: Mailbox = format!("{} <{}>", email.from_name, self.from_address)
            .parse()
            .map_err(|_| MailError::InvalidAddress(self.from_address.clone()))?;
        let to: Mailbox =
            email.to.parse().map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.as_str())
            .singlepart(
                SinglePart::builder().header(ContentType::TEXT_HTML).body(email.html.clone()),
            )?;

        self.mailer.send(message).await?;

        tracing::info!(
            event_name = "mail.sent",
            to = %email.to,
            subject = %email.subject,
            "notification email sent"
        );
        Ok(())
    }
}

/// Stand-in used when no SMTP transport could be built at startup. Sends
/// always fail; the workflow logs and carries on.
pub struct DisabledMailer;

#[async_trait]
impl MailTransport for DisabledMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        Err(MailError::Transport(format!(
            "mail transport not configured, dropping message to `{}`",
            email.to
        )))
    }
}

/// Test transport that records every message instead of delivering it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every send fails, like one built without
    /// credentials.
    pub fn failing() -> Self {
        Self { sent: Mutex::new(Vec::new()), fail: true }
    }

    pub async fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Transport("recording transport set to fail".to_string()));
        }
        if email.to.trim().is_empty() {
            return Err(MailError::InvalidAddress(email.to.clone()));
        }
        self.sent.lock().await.push(email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::render::OutboundEmail;
    use crate::transport::{MailTransport, RecordingMailer};

    fn email(to: &str) -> OutboundEmail {
        OutboundEmail {
            to: to.to_string(),
            from_name: "BIM AFRICA".to_string(),
            subject: "Your Website Quotation - BIM-X".to_string(),
            html: "<p>quote</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn recording_transport_captures_messages() {
        let mailer = RecordingMailer::new();

        mailer.send(&email("amy@example.com")).await.expect("send");

        let sent = mailer.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "amy@example.com");
    }

    #[tokio::test]
    async fn empty_destination_is_an_invalid_address() {
        let mailer = RecordingMailer::new();

        let error = mailer.send(&email("")).await.expect_err("empty to should fail");

        assert!(matches!(error, crate::transport::MailError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn failing_transport_reports_every_send() {
        let mailer = RecordingMailer::failing();

        let error = mailer.send(&email("amy@example.com")).await.expect_err("must fail");

        assert!(matches!(error, crate::transport::MailError::Transport(_)));
        assert!(mailer.sent().await.is_empty());
    }
}
