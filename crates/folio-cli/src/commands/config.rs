//! Configuration inspection commands.

use anyhow::bail;
use clap::{Args, Subcommand};

use folio_core::config::{AppConfig, DatabaseBackend};

use crate::output::{self, OutputFormat};

const MASK: &str = "****";

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration with secrets masked
    Show,
    /// Check the configuration for settings that block startup or login
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: AppConfig, format: OutputFormat) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommand::Show => {
            let config = redact(config);
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => {
                    output::print_kv("server", &format!("{}:{}", config.server.host, config.server.port));
                    output::print_kv("database.backend", &format!("{:?}", config.database.backend));
                    output::print_kv("database.url", &config.database.url);
                    output::print_kv("storage.provider", &config.storage.provider);
                    output::print_kv("storage.upload.max_bytes", &config.storage.upload.max_bytes.to_string());
                    output::print_kv("auth.admin_username", &config.auth.admin_username);
                    output::print_kv("auth.admin_password_hash", &config.auth.admin_password_hash);
                    output::print_kv("contact.to_address", &config.contact.to_address);
                    output::print_kv("contact.resend_api_key", &config.contact.resend_api_key);
                    output::print_kv("site.base_url", &config.site.base_url);
                    output::print_kv("site.default_locale", &config.site.default_locale);
                    output::print_kv("logging", &format!("{} ({})", config.logging.level, config.logging.format));
                }
            }
        }
        ConfigCommand::Validate => {
            let problems = problems(&config);
            let warnings = warnings(&config);
            for warning in &warnings {
                output::print_warning(warning);
            }
            if !problems.is_empty() {
                for problem in &problems {
                    output::print_error(problem);
                }
                bail!("Configuration has {} problem(s)", problems.len());
            }
            output::print_success("Configuration is valid");
        }
    }
    Ok(())
}

/// Settings that prevent the server from running correctly.
fn problems(config: &AppConfig) -> Vec<String> {
    let mut problems = Vec::new();
    if !matches!(config.storage.provider.as_str(), "local" | "s3") {
        problems.push(format!(
            "storage.provider must be 'local' or 's3', got '{}'",
            config.storage.provider
        ));
    }
    if config.storage.provider == "s3" && config.storage.s3.bucket.is_empty() {
        problems.push("storage.s3.bucket is required for the s3 provider".to_string());
    }
    if config.database.backend == DatabaseBackend::Postgres && config.database.url.is_empty() {
        problems.push("database.url is required for the postgres backend".to_string());
    }
    if !matches!(config.site.default_locale.as_str(), "en" | "he") {
        problems.push(format!(
            "site.default_locale must be 'en' or 'he', got '{}'",
            config.site.default_locale
        ));
    }
    if config.storage.upload.max_bytes == 0 {
        problems.push("storage.upload.max_bytes must be positive".to_string());
    }
    if let Err(e) = config.auth.check_signing_secret() {
        problems.push(e.message);
    }
    problems
}

/// Settings that work but are probably not intended.
fn warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.auth.admin_password_hash.is_empty() {
        warnings.push("auth.admin_password_hash is empty; admin login is disabled".to_string());
    }
    if config.auth.allow_insecure_secret && config.auth.has_weak_secret() {
        warnings.push("auth.jwt_secret is weak; accepted because allow_insecure_secret is set".to_string());
    }
    if !config.contact.has_provider() {
        warnings.push("contact.resend_api_key is empty; contact submissions are only logged".to_string());
    }
    warnings
}

/// Replace credentials with a fixed mask.
fn redact(mut config: AppConfig) -> AppConfig {
    config.database.url = mask_password(&config.database.url);
    for secret in [
        &mut config.auth.jwt_secret,
        &mut config.auth.admin_password_hash,
        &mut config.contact.resend_api_key,
        &mut config.storage.s3.secret_key,
    ] {
        if !secret.is_empty() {
            *secret = MASK.to_string();
        }
    }
    config
}

/// Mask password in database URL for display
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                let mut masked = url[..colon_pos + 1].to_string();
                masked.push_str(MASK);
                masked.push_str(&url[at_pos..]);
                return masked;
            }
        }
    }
    url.to_string()
}
