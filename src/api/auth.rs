use anyhow::anyhow;
use argon2::Argon2;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::{Session, cookie::Key};

use crate::constants::{routes, session as keys};

/// Fixed salt for deriving the cookie-signing key from the configured secret.
const SESSION_KEY_SALT: &[u8] = b"enquiry-desk/session-signing";

/// Derives the 64-byte cookie signing key from an arbitrary-length secret.
pub fn derive_session_key(secret: &str) -> anyhow::Result<Key> {
    let mut material = [0u8; 64];
    Argon2::default()
        .hash_password_into(secret.as_bytes(), SESSION_KEY_SALT, &mut material)
        .map_err(|e| anyhow!("Failed to derive session key: {e}"))?;
    Ok(Key::from(&material))
}

/// Whether the session carries the admin flag. Session store failures count
/// as logged out.
pub async fn is_admin(session: &Session) -> bool {
    match session.get::<bool>(keys::ADMIN_LOGGED_IN).await {
        Ok(flag) => flag.unwrap_or(false),
        Err(e) => {
            tracing::warn!("Failed to read session: {e}");
            false
        }
    }
}

/// Marks the session as logged in. The session id is rotated first.
pub async fn sign_in(
    session: &Session,
    username: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(keys::ADMIN_LOGGED_IN, true).await?;
    session.insert(keys::ADMIN_USERNAME, username).await?;
    Ok(())
}

pub async fn sign_out(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

/// Guards every admin-only route: requests without the session flag are
/// redirected to the login page.
pub async fn require_admin(session: Session, request: Request, next: Next) -> Response {
    if !is_admin(&session).await {
        return Redirect::to(routes::LOGIN).into_response();
    }

    if let Ok(Some(username)) = session.get::<String>(keys::ADMIN_USERNAME).await {
        tracing::Span::current().record("admin", username.as_str());
    }

    next.run(request).await
}
