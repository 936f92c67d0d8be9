use lazy_static::lazy_static;
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use regex::Regex;
use sqlx::PgPool;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::{
    auth::{
        password,
        repo::{PasswordResetToken, User},
    },
    error::AppError,
};

/// Identical for unknown email and wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
/// Identical for a missing and an expired reset token.
pub const INVALID_RESET_TOKEN: &str = "Invalid or expired reset token";
/// Returned whether or not the email exists.
pub const FORGOT_PASSWORD_MESSAGE: &str =
    "If the email exists, a reset token has been sent via email";

const RESET_TOKEN_LEN: usize = 64;
const RESET_TOKEN_TTL_MINUTES: i64 = 15;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Opaque lookup key for the reset flow, sampled from the OS RNG.
pub(crate) fn generate_reset_token() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(RESET_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Stores a fresh reset token for the user behind `email`. An unknown email
/// is swallowed without any side effect; callers answer with the same
/// generic message either way.
pub async fn forgot_password(db: &PgPool, email: &str) -> Result<(), AppError> {
    let Some(user) = User::find_by_email(db, email).await? else {
        debug!("forgot-password for unknown email");
        return Ok(());
    };

    let token = generate_reset_token();
    let expires_at = OffsetDateTime::now_utc() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);
    PasswordResetToken::create(db, user.id, &token, expires_at).await?;

    // Email dispatch is an external concern; the token only leaves the
    // process through that channel.
    info!(user_id = user.id, "reset token stored");
    Ok(())
}

/// Consumes `reset_token` and rotates the user's password. The whole
/// sequence runs in one transaction with the token row locked, so of two
/// concurrent attempts the first commit wins and the second sees no row.
pub async fn reset_password(
    db: &PgPool,
    reset_token: &str,
    new_password: &str,
) -> Result<(), AppError> {
    let mut tx = db.begin().await?;

    let Some(row) = PasswordResetToken::find_for_update(&mut tx, reset_token).await? else {
        return Err(AppError::unauthorized(INVALID_RESET_TOKEN));
    };

    if OffsetDateTime::now_utc() > row.expires_at {
        // Expired rows linger until a later attempt trips over them.
        return Err(AppError::unauthorized(INVALID_RESET_TOKEN));
    }

    let hash = password::hash_password(new_password)?;

    User::update_password(&mut tx, row.user_id, &hash).await?;
    PasswordResetToken::delete(&mut tx, reset_token).await?;

    tx.commit().await?;
    info!(user_id = row.user_id, "password reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails_pass() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("john.doe+tag@example.co.uk"));
    }

    #[test]
    fn invalid_emails_fail() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@x.com"));
    }

    #[test]
    fn reset_tokens_are_long_and_alphanumeric() {
        let token = generate_reset_token();
        assert_eq!(token.len(), RESET_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn reset_tokens_are_distinct() {
        assert_ne!(generate_reset_token(), generate_reset_token());
    }
}
