//! Operator email alerts
//!
//! The daily jobs run unattended from cron; when a collaborator fails, the
//! only way the operator finds out is this mailer. Alerts are best-effort by
//! design: a failure to alert is logged and must never mask the error that
//! triggered it.

use lettre::message::Message;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use thiserror::Error;
use tracing::{error, info};

const SMTP_HOST: &str = "smtp.gmail.com";

/// Errors that can occur building or sending an alert
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("message build error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Alert mailbox credentials (the operator mails themselves)
#[derive(Debug, Clone)]
pub struct AlertConfig {
    pub address: String,
    pub password: String,
}

impl AlertConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, AlertError> {
        let address = std::env::var("EMAIL_ADDRESS")
            .map_err(|_| AlertError::Config("EMAIL_ADDRESS not set".to_string()))?;
        let password = std::env::var("EMAIL_PASSWORD")
            .map_err(|_| AlertError::Config("EMAIL_PASSWORD not set".to_string()))?;
        Ok(Self { address, password })
    }
}

/// SMTP mailer for failure alerts
pub struct Mailer {
    config: AlertConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl Mailer {
    pub fn new(config: AlertConfig) -> Result<Self, AlertError> {
        let credentials = Credentials::new(config.address.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_HOST)?
            .credentials(credentials)
            .build();
        Ok(Self { config, transport })
    }

    /// Send a plain-text failure alert to the configured mailbox.
    pub async fn send_failure(&self, subject: &str, body: &str) -> Result<(), AlertError> {
        let message = Message::builder()
            .from(self.config.address.parse()?)
            .to(self.config.address.parse()?)
            .subject(subject)
            .body(body.to_string())?;

        self.transport.send(message).await?;
        info!(subject, "Failure alert sent");
        Ok(())
    }

    /// `send_failure`, but swallow (and log) alert-path errors so the caller
    /// can keep propagating the original failure.
    pub async fn try_send_failure(&self, subject: &str, body: &str) {
        if let Err(e) = self.send_failure(subject, body).await {
            error!("Failed to send alert email: {e}");
        }
    }
}
