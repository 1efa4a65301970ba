//! Admin password hashing.

use anyhow::{Context, bail};
use clap::Args;
use dialoguer::Password;

use folio_auth::PasswordHasher;

/// Arguments for hash-password
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Password to hash; prompted for when omitted
    #[arg(long, env = "FOLIO_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Print an Argon2id PHC hash for the admin password.
pub fn execute(args: &HashPasswordArgs) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => Password::new()
            .with_prompt("Admin password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .context("Failed to read password")?,
    };
    if password.is_empty() {
        bail!("Password must not be empty");
    }

    let hash = PasswordHasher::new().hash_password(&password)?;
    println!("{hash}");
    eprintln!("Set this as auth.admin_password_hash (FOLIO__AUTH__ADMIN_PASSWORD_HASH).");
    Ok(())
}
