//! Contact form delivery configuration.

use serde::{Deserialize, Serialize};

/// Outbound email settings for contact form submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Resend API key. When empty, submissions are only logged.
    #[serde(default)]
    pub resend_api_key: String,
    /// Resend API base URL.
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    /// Sender address.
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Recipient address.
    #[serde(default = "default_to")]
    pub to_address: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl ContactConfig {
    /// Whether a real email provider is configured.
    pub fn has_provider(&self) -> bool {
        !self.resend_api_key.trim().is_empty()
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            resend_api_key: String::new(),
            api_base_url: default_api_base(),
            from_address: default_from(),
            to_address: default_to(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.resend.com".to_string()
}

fn default_from() -> String {
    "Portfolio Contact <onboarding@resend.dev>".to_string()
}

fn default_to() -> String {
    "contact@example.com".to_string()
}

fn default_timeout() -> u64 {
    10
}
