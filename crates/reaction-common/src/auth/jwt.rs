//! Host session tokens and admin form nonces
//!
//! The host platform signs session tokens with a shared secret; this module
//! decodes them with the `jsonwebtoken` crate. Form nonces are short-lived
//! tokens of the same shape, bound to one user and one action.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use reaction_core::UserId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    FormNonce,
}

/// Host capabilities the service checks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// May change site-wide settings
    ManageOptions,
}

impl Capability {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageOptions => "manage_options",
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (host user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    pub token_type: TokenType,
    /// Capability names granted by the host
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Action a form nonce is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Claims {
    /// Get the host user ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a numeric id
    pub fn user_id(&self) -> Result<UserId, AppError> {
        UserId::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.iter().any(|c| c == capability.as_str())
    }
}

/// Service for decoding session tokens and issuing form nonces
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    nonce_expiry: i64,
}

impl JwtService {
    #[must_use]
    pub fn new(secret: &str, nonce_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            nonce_expiry,
        }
    }

    /// Sign a session token the way the host does
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token(
        &self,
        user_id: UserId,
        capabilities: &[Capability],
        expires_in: i64,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expires_in)).timestamp(),
            token_type: TokenType::Access,
            capabilities: capabilities.iter().map(|c| c.as_str().to_string()).collect(),
            action: None,
        };
        self.encode_claims(&claims)
    }

    /// Issue an anti-forgery nonce for one user and action
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_nonce(&self, user_id: UserId, action: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.nonce_expiry)).timestamp(),
            token_type: TokenType::FormNonce,
            capabilities: Vec::new(),
            action: Some(action.to_string()),
        };
        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Validate a session token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or a form nonce
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }

    /// Check a nonce submitted with a form
    ///
    /// # Errors
    /// Returns `InvalidNonce` unless the nonce is valid, unexpired and bound
    /// to this user and action
    pub fn verify_nonce(&self, nonce: &str, user_id: UserId, action: &str) -> Result<(), AppError> {
        let claims = self.decode_token(nonce).map_err(|_| AppError::InvalidNonce)?;

        let bound = claims.token_type == TokenType::FormNonce
            && claims.action.as_deref() == Some(action)
            && claims.user_id().ok() == Some(user_id);

        if bound {
            Ok(())
        } else {
            Err(AppError::InvalidNonce)
        }
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("nonce_expiry", &self.nonce_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 3600)
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = create_test_service();
        let token = service
            .issue_access_token(UserId::new(7), &[Capability::ManageOptions], 900)
            .unwrap();

        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), UserId::new(7));
        assert!(claims.has_capability(Capability::ManageOptions));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_nonce_is_not_a_session() {
        let service = create_test_service();
        let nonce = service.issue_nonce(UserId::new(7), "reaction_settings").unwrap();

        assert!(matches!(
            service.validate_access_token(&nonce),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_nonce() {
        let service = create_test_service();
        let nonce = service.issue_nonce(UserId::new(7), "reaction_settings").unwrap();

        assert!(service
            .verify_nonce(&nonce, UserId::new(7), "reaction_settings")
            .is_ok());
        assert!(matches!(
            service.verify_nonce(&nonce, UserId::new(8), "reaction_settings"),
            Err(AppError::InvalidNonce)
        ));
        assert!(matches!(
            service.verify_nonce(&nonce, UserId::new(7), "other_action"),
            Err(AppError::InvalidNonce)
        ));
        assert!(matches!(
            service.verify_nonce("garbage", UserId::new(7), "reaction_settings"),
            Err(AppError::InvalidNonce)
        ));
    }

    #[test]
    fn test_session_token_is_not_a_nonce() {
        let service = create_test_service();
        let token = service.issue_access_token(UserId::new(7), &[], 900).unwrap();

        assert!(service
            .verify_nonce(&token, UserId::new(7), "reaction_settings")
            .is_err());
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new("another-secret-key-entirely-different", 3600);
        let token = other.issue_access_token(UserId::new(7), &[], 900).unwrap();

        assert!(matches!(
            service.validate_access_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token() {
        let service = create_test_service();
        let token = service.issue_access_token(UserId::new(7), &[], -3600).unwrap();

        assert!(matches!(
            service.validate_access_token(&token),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn test_missing_capability() {
        let claims = Claims {
            sub: "12".to_string(),
            iat: 0,
            exp: i64::MAX,
            token_type: TokenType::Access,
            capabilities: vec!["edit_posts".to_string()],
            action: None,
        };

        assert!(!claims.has_capability(Capability::ManageOptions));
        assert_eq!(claims.user_id().unwrap(), UserId::new(12));
    }
}
