//! Bearer-token verification for the authentication collaborator.
//!
//! Token issuance, refresh and session management live in an external
//! service; this module only validates HS256-signed tokens and extracts the
//! opaque subject id. A missing or invalid token disables feedback
//! persistence, never the allocator.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Opaque user identifier.
    pub sub: String,
    pub exp: usize,
}

/// Extract and verify the bearer token from request headers.
pub fn user_from_headers(headers: &HeaderMap, secret: &str) -> Option<String> {
    let auth = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?;
    verify_token(token, secret)
}

/// Verify a token and return its subject, or `None` if it is not valid.
pub fn verify_token(token: &str, secret: &str) -> Option<String> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);
    match decode::<Claims>(token, &key, &validation) {
        Ok(data) => Some(data.claims.sub),
        Err(e) => {
            tracing::debug!("token rejected: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token_for(sub: &str, exp: usize, secret: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> usize {
        (chrono::Utc::now().timestamp() + 3600) as usize
    }

    #[test]
    fn test_valid_token_yields_subject() {
        let token = token_for("user-42", far_future(), SECRET);
        assert_eq!(verify_token(&token, SECRET), Some("user-42".to_string()));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = token_for("user-42", far_future(), "other-secret");
        assert_eq!(verify_token(&token, SECRET), None);
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = token_for("user-42", 1_000_000, SECRET);
        assert_eq!(verify_token(&token, SECRET), None);
    }

    #[test]
    fn test_headers_without_bearer_yield_none() {
        let headers = HeaderMap::new();
        assert_eq!(user_from_headers(&headers, SECRET), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(user_from_headers(&headers, SECRET), None);
    }

    #[test]
    fn test_headers_with_bearer_token() {
        let token = token_for("user-7", far_future(), SECRET);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token).parse().unwrap(),
        );
        assert_eq!(user_from_headers(&headers, SECRET), Some("user-7".to_string()));
    }
}
