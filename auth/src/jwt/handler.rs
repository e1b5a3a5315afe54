use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT signing and validation over a process-wide symmetric key.
///
/// The key and algorithm are fixed at construction and never change; every
/// encode and decode in the process must use the identical pair.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create an HS256 handler over a symmetric secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self::with_algorithm(secret, Algorithm::HS256)
    }

    /// Create a handler with an explicit HMAC algorithm (HS256/HS384/HS512).
    pub fn with_algorithm(secret: &[u8], algorithm: Algorithm) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// `exp` is a required claim; expired or tampered tokens are rejected.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` has passed
    /// * `DecodingFailed` - signature mismatch or malformed token
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::jwt::TokenClaims;
    use crate::jwt::TokenKind;

    fn claims_expiring_in(minutes: i64) -> TokenClaims {
        TokenClaims::new(
            "user@example.com",
            1,
            1,
            TokenKind::Access,
            Utc::now() + Duration::minutes(minutes),
        )
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let claims = claims_expiring_in(30);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded: TokenClaims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode::<TokenClaims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&claims_expiring_in(30))
            .expect("Failed to encode token");

        let result = handler2.decode::<TokenClaims>(&token);
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        // Past the validation leeway
        let token = handler
            .encode(&claims_expiring_in(-10))
            .expect("Failed to encode token");

        let result = handler.decode::<TokenClaims>(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }
}
