use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, Result},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

pub fn generate_token(auth: &AuthConfig, user_id: Uuid, email: &str) -> Result<String> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::seconds(auth.token_ttl_seconds))
        .ok_or_else(|| AppError::InternalError("Failed to calculate expiration".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token generation failed: {}", e)))
}

pub fn verify_token(auth: &AuthConfig, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("Token verification failed: {}", e);
        AppError::Unauthorized("Invalid token".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(secret: &str, ttl: i64) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_seconds: ttl,
            bcrypt_cost: 4,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let auth = auth("test-secret", 3600);
        let user_id = Uuid::new_v4();

        let token = generate_token(&auth, user_id, "seller@example.com").unwrap();
        let claims = verify_token(&auth, &token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "seller@example.com");
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = generate_token(&auth("secret-a", 3600), Uuid::new_v4(), "a@b.com").unwrap();

        let err = verify_token(&auth("secret-b", 3600), &token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(ref msg) if msg == "Invalid token"));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Past the default 60s leeway.
        let auth = auth("test-secret", -600);
        let token = generate_token(&auth, Uuid::new_v4(), "a@b.com").unwrap();

        assert!(matches!(
            verify_token(&auth, &token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let auth = auth("test-secret", 3600);
        assert!(verify_token(&auth, "not.a.jwt").is_err());
    }
}
