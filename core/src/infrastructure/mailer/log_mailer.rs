use crate::domain::{
    auth::{ports::MailerPort, value_objects::Mail},
    common::entities::app_errors::CoreError,
};

/// Mailer that records deliveries in the log stream. Deployments front this
/// with an SMTP relay watching the log pipeline; development reads the reset
/// URL straight from the console.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

impl MailerPort for LogMailer {
    async fn send(&self, mail: Mail) -> Result<(), CoreError> {
        tracing::info!(
            to = %mail.to,
            subject = %mail.subject,
            body = %mail.body,
            "Outbound mail"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_mailer_never_fails_delivery() {
        let mailer = LogMailer::new();
        let result = mailer
            .send(Mail {
                to: "jane@example.com".to_string(),
                subject: "Password reset token".to_string(),
                body: "reset url".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }
}
