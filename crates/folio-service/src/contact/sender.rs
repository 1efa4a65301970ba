//! Email delivery for contact form submissions.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use folio_core::config::ContactConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_entity::Locale;

use super::service::ProjectType;

/// A validated contact submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    /// Sender's name.
    pub name: String,
    /// Sender's email, used as reply-to.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional project type.
    pub project_type: Option<ProjectType>,
    /// Message body.
    pub message: String,
}

impl ContactMessage {
    /// Subject line for the notification email.
    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }
}

/// Delivers contact submissions.
#[async_trait]
pub trait EmailSender: Send + Sync + std::fmt::Debug + 'static {
    /// Sender name for logs.
    fn name(&self) -> &'static str;

    /// Deliver one submission.
    async fn send(&self, message: &ContactMessage) -> AppResult<()>;
}

/// Escape text for inclusion in HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// HTML body of the notification email. Every user value is escaped.
pub fn render_html(message: &ContactMessage) -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head>\
         <body style=\"font-family: sans-serif; line-height: 1.6; color: #333;\">\
         <h1 style=\"font-size: 22px;\">New Contact Form Submission</h1>",
    );

    let field = |html: &mut String, label: &str, value: &str| {
        html.push_str(&format!(
            "<p><strong>{label}</strong><br>{}</p>",
            escape(value)
        ));
    };

    field(&mut html, "Name", &message.name);
    field(&mut html, "Email", &message.email);
    if let Some(phone) = &message.phone {
        field(&mut html, "Phone", phone);
    }
    if let Some(project_type) = &message.project_type {
        field(&mut html, "Project Type", &project_type.label(Locale::En));
    }
    html.push_str(&format!(
        "<p><strong>Message</strong></p><div style=\"white-space: pre-wrap;\">{}</div>",
        escape(&message.message)
    ));
    html.push_str("</body></html>");
    html
}

#[derive(Debug, Serialize)]
struct ResendEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: String,
    html: String,
}

/// Sends through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendSender {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    from: String,
    to: String,
}

impl ResendSender {
    /// Create a sender from contact settings.
    pub fn new(config: &ContactConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Ok(Self {
            client,
            api_key: config.resend_api_key.trim().to_string(),
            endpoint: format!("{}/emails", config.api_base_url.trim_end_matches('/')),
            from: config.from_address.clone(),
            to: config.to_address.clone(),
        })
    }
}

#[async_trait]
impl EmailSender for ResendSender {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, message: &ContactMessage) -> AppResult<()> {
        let body = ResendEmail {
            from: &self.from,
            to: [&self.to],
            reply_to: &message.email,
            subject: message.subject(),
            html: render_html(message),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Email provider unreachable", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = %status, detail = %detail, "Email provider rejected message");
            return Err(AppError::external(format!(
                "Email provider returned {status}"
            )));
        }

        info!(reply_to = %message.email, "Contact email sent");
        Ok(())
    }
}

/// Logs submissions instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnlySender;

#[async_trait]
impl EmailSender for LogOnlySender {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, message: &ContactMessage) -> AppResult<()> {
        info!(
            name = %message.name,
            email = %message.email,
            phone = message.phone.as_deref().unwrap_or("-"),
            project_type = message
                .project_type
                .as_ref()
                .map(|p| p.label(Locale::En).into_owned())
                .unwrap_or_default(),
            message = %message.message,
            "Contact form submission (email delivery not configured)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Dana <b>".into(),
            email: "dana@example.com".into(),
            phone: None,
            project_type: Some(ProjectType::RealEstate),
            message: "Hi & <script>x</script>".into(),
        }
    }

    #[test]
    fn html_escapes_user_values() {
        let html = render_html(&message());
        assert!(html.contains("Dana &lt;b&gt;"));
        assert!(html.contains("Hi &amp; &lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("Real Estate Photography"));
        assert!(!html.contains("Phone"));
    }

    #[test]
    fn subject_names_the_sender() {
        assert_eq!(
            message().subject(),
            "New Contact Form Submission from Dana <b>"
        );
    }

    #[test]
    fn resend_endpoint_joins_base() {
        let sender = ResendSender::new(&ContactConfig {
            resend_api_key: " key ".into(),
            api_base_url: "http://127.0.0.1:9/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(sender.endpoint, "http://127.0.0.1:9/emails");
        assert_eq!(sender.api_key, "key");
    }

    #[tokio::test]
    async fn log_only_always_succeeds() {
        assert!(LogOnlySender.send(&message()).await.is_ok());
    }
}
