use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::TokenConfig;

/// Issues and decodes HMAC-signed bearer tokens.
///
/// The signing key is process-wide and fixed for the life of the
/// process. Tokens are stateless: nothing is stored server-side, so
/// there is no revocation path short of expiry.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_minutes: i64,
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (username).
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    pub iat: i64,
}

impl JwtService {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.signing_key.as_bytes()),
            ttl_minutes: config.ttl_minutes,
        }
    }

    /// Encode a token for the given subject, expiring after the
    /// configured TTL.
    pub fn issue(&self, username: &str) -> Result<String, anyhow::Error> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.ttl_minutes);

        let claims = TokenClaims {
            sub: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Failed to encode access token: {}", e))?;

        Ok(token)
    }

    /// Decode and verify signature and expiry. The caller interprets
    /// the error kind (expired vs. malformed).
    pub fn decode(&self, token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // exp <= now is expired, with no grace window.
        validation.leeway = 0;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    #[cfg(test)]
    pub(crate) fn issue_with_expiry(
        &self,
        username: &str,
        exp: i64,
    ) -> Result<String, anyhow::Error> {
        let claims = TokenClaims {
            sub: username.to_string(),
            exp,
            iat: Utc::now().timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Failed to encode access token: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn service() -> JwtService {
        JwtService::new(&TokenConfig {
            signing_key: "unit-test-signing-key".to_string(),
            ttl_minutes: 30,
        })
    }

    #[test]
    fn issue_then_decode_resolves_subject() {
        let jwt = service();
        let token = jwt.issue("johndoe").expect("issue failed");

        let claims = jwt.decode(&token).expect("decode failed");
        assert_eq!(claims.sub, "johndoe");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_fails_with_expiry_kind() {
        let jwt = service();
        let past = Utc::now().timestamp() - 120;
        let token = jwt.issue_with_expiry("johndoe", past).expect("issue failed");

        let err = jwt.decode(&token).expect_err("expired token accepted");
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let jwt = service();
        let other = JwtService::new(&TokenConfig {
            signing_key: "a-different-key".to_string(),
            ttl_minutes: 30,
        });

        let token = other.issue("johndoe").expect("issue failed");
        let err = jwt.decode(&token).expect_err("forged token accepted");
        assert!(!matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = service();
        assert!(jwt.decode("not-a-token").is_err());
    }
}
