use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;

use crate::{
    audit::log_audit,
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile},
    error::{AppError, AppResult},
    models::UserRecord,
    state::AppState,
};

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<RegisterResponse> {
    let RegisterRequest {
        id,
        username,
        email,
        password,
    } = payload;

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    let user = UserRecord {
        id,
        username,
        email,
        password_hash,
        created_at: Utc::now(),
    };
    let profile = UserProfile::from(&user);
    state.store.insert_user(user).await?;

    log_audit(
        Some(profile.id),
        "user_register",
        Some("users"),
        Some(serde_json::json!({ "username": profile.username })),
    );

    Ok(RegisterResponse {
        message: "You're successfully registered!".to_string(),
        user: profile,
    })
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest {
        username, password, ..
    } = payload;

    let candidates = state.store.users_named(&username).await?;
    let argon2 = Argon2::default();
    for user in candidates {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
        if argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
        {
            log_audit(
                Some(user.id),
                "user_login",
                Some("users"),
                Some(serde_json::json!({ "username": user.username })),
            );
            return Ok(LoginResponse::Success {
                message: "Login Successful!".to_string(),
            });
        }
    }

    tracing::debug!(username = %username, "login rejected");
    Ok(LoginResponse::Failure {
        error: "Invalid username or password!!!".to_string(),
    })
}
