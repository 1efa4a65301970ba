//! Contact form validation and delivery.

use std::borrow::Cow;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use folio_core::config::ContactConfig;
use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_entity::Locale;

use super::sender::{ContactMessage, EmailSender, LogOnlySender, ResendSender};
use crate::admin::ActionResult;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Kind of project the visitor is asking about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ProjectType {
    /// Architectural photography.
    Architectural,
    /// Interior photography.
    Interior,
    /// Real estate photography.
    RealEstate,
    /// Commercial photography.
    Commercial,
    /// Anything else.
    Other,
    /// A value outside the known list, kept verbatim.
    Custom(String),
}

impl ProjectType {
    /// Parse a form value. Unknown values are kept as [`ProjectType::Custom`].
    pub fn from_form(raw: &str) -> Self {
        match raw.trim() {
            "architectural" => Self::Architectural,
            "interior" => Self::Interior,
            "realEstate" => Self::RealEstate,
            "commercial" => Self::Commercial,
            "other" => Self::Other,
            custom => Self::Custom(custom.to_string()),
        }
    }

    /// Form value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Architectural => "architectural",
            Self::Interior => "interior",
            Self::RealEstate => "realEstate",
            Self::Commercial => "commercial",
            Self::Other => "other",
            Self::Custom(raw) => raw,
        }
    }

    /// Display label.
    pub fn label(&self, locale: Locale) -> Cow<'_, str> {
        let label = match (self, locale) {
            (Self::Architectural, Locale::En) => "Architectural Photography",
            (Self::Architectural, Locale::He) => "צילום אדריכלות",
            (Self::Interior, Locale::En) => "Interior Photography",
            (Self::Interior, Locale::He) => "צילום פנים",
            (Self::RealEstate, Locale::En) => "Real Estate Photography",
            (Self::RealEstate, Locale::He) => "צילום נדל\"ן",
            (Self::Commercial, Locale::En) => "Commercial Photography",
            (Self::Commercial, Locale::He) => "צילום מסחרי",
            (Self::Other, Locale::En) => "Other",
            (Self::Other, Locale::He) => "אחר",
            (Self::Custom(raw), _) => return Cow::Borrowed(raw),
        };
        Cow::Borrowed(label)
    }

    /// The known project types, in form order.
    pub fn known() -> [ProjectType; 5] {
        [
            Self::Architectural,
            Self::Interior,
            Self::RealEstate,
            Self::Commercial,
            Self::Other,
        ]
    }
}

impl From<ProjectType> for String {
    fn from(value: ProjectType) -> Self {
        value.as_str().to_string()
    }
}

/// Contact form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    /// Visitor's name.
    #[serde(default)]
    pub name: String,
    /// Visitor's email.
    #[serde(default)]
    pub email: String,
    /// Optional phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Optional project type.
    #[serde(default, alias = "projectType")]
    pub project_type: Option<String>,
    /// Message.
    #[serde(default)]
    pub message: String,
}

/// Validates contact submissions and hands them to an [`EmailSender`].
#[derive(Debug, Clone)]
pub struct ContactService {
    sender: Arc<dyn EmailSender>,
    email_pattern: Regex,
}

impl ContactService {
    /// Creates a contact service delivering through `sender`.
    pub fn new(sender: Arc<dyn EmailSender>) -> AppResult<Self> {
        let email_pattern = Regex::new(EMAIL_PATTERN).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Invalid email pattern", e)
        })?;
        Ok(Self {
            sender,
            email_pattern,
        })
    }

    /// Creates a contact service using Resend when a key is configured and
    /// logging otherwise.
    pub fn from_config(config: &ContactConfig) -> AppResult<Self> {
        let sender: Arc<dyn EmailSender> = if config.has_provider() {
            Arc::new(ResendSender::new(config)?)
        } else {
            Arc::new(LogOnlySender)
        };
        info!(sender = sender.name(), "Contact delivery ready");
        Self::new(sender)
    }

    /// Check a form, returning the cleaned message or a user-facing error.
    pub fn validate(&self, form: &ContactForm) -> Result<ContactMessage, String> {
        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err("Name, email, and message are required".to_string());
        }
        if !self.email_pattern.is_match(email) {
            return Err("Invalid email address".to_string());
        }

        let optional = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(&form.phone),
            project_type: optional(&form.project_type).map(|p| ProjectType::from_form(&p)),
            message: message.to_string(),
        })
    }

    /// Validate and deliver a submission.
    pub async fn submit(&self, form: &ContactForm) -> ActionResult {
        let message = match self.validate(form) {
            Ok(message) => message,
            Err(reason) => return ActionResult::fail(reason),
        };

        match self.sender.send(&message).await {
            Ok(()) => ActionResult::done(),
            Err(e) => {
                error!(sender = self.sender.name(), error = %e, "Failed to deliver contact message");
                ActionResult::fail("Failed to send message")
            }
        }
    }
}
