use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SecurityConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(rename = "accountId")]
    pub account_id: Uuid,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and checks HS256 bearer tokens carrying the caller's account id.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(security: &SecurityConfig) -> Result<Self, JwtError> {
        if security.jwt_secret.is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&security.jwt_issuer]);
        validation.set_audience(&[&security.jwt_audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(security.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(security.jwt_secret.as_bytes()),
            validation,
            issuer: security.jwt_issuer.clone(),
            audience: security.jwt_audience.clone(),
            lifetime: Duration::minutes(security.jwt_expiry_minutes),
        })
    }

    pub fn generate_token(&self, account_id: Uuid) -> Result<IssuedToken, JwtError> {
        let now = Utc::now();
        let expires_at = now + self.lifetime;
        let claims = Claims {
            sub: account_id.to_string(),
            account_id,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Any validation failure collapses to `None`.
    pub fn validate_and_extract_account_id(&self, token: &str) -> Option<Uuid> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims.account_id),
            Err(e) => {
                tracing::debug!("Rejected bearer token: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn service() -> TokenService {
        TokenService::new(&AppConfig::development().security).unwrap()
    }

    #[test]
    fn test_round_trip_account_id() {
        let service = service();
        let account_id = Uuid::new_v4();
        let issued = service.generate_token(account_id).unwrap();

        assert_eq!(service.validate_and_extract_account_id(&issued.token), Some(account_id));
        assert!(issued.expires_at > Utc::now());
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let mut security = AppConfig::development().security;
        security.jwt_secret = String::new();
        assert!(matches!(TokenService::new(&security), Err(JwtError::InvalidSecret)));
    }

    #[test]
    fn test_wrong_secret_audience_or_issuer_fails() {
        let service = service();
        let account_id = Uuid::new_v4();

        let mut other = AppConfig::development().security;
        other.jwt_secret = "some-other-secret-with-enough-length".to_string();
        let forged = TokenService::new(&other).unwrap().generate_token(account_id).unwrap();
        assert_eq!(service.validate_and_extract_account_id(&forged.token), None);

        let mut other = AppConfig::development().security;
        other.jwt_audience = "someone-else".to_string();
        let foreign = TokenService::new(&other).unwrap().generate_token(account_id).unwrap();
        assert_eq!(service.validate_and_extract_account_id(&foreign.token), None);

        let mut other = AppConfig::development().security;
        other.jwt_issuer = "another-issuer".to_string();
        let foreign = TokenService::new(&other).unwrap().generate_token(account_id).unwrap();
        assert_eq!(service.validate_and_extract_account_id(&foreign.token), None);
    }

    #[test]
    fn test_expired_token_fails_without_leeway() {
        let mut security = AppConfig::development().security;
        security.jwt_expiry_minutes = -1;
        let service = TokenService::new(&security).unwrap();
        let issued = service.generate_token(Uuid::new_v4()).unwrap();
        assert_eq!(service.validate_and_extract_account_id(&issued.token), None);
    }

    #[test]
    fn test_garbage_token_fails() {
        assert_eq!(service().validate_and_extract_account_id("not.a.token"), None);
        assert_eq!(service().validate_and_extract_account_id(""), None);
    }
}
