pub mod error;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use error::SessionError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secret_santa_config::Config;
use serde::{Deserialize, Serialize};

/// Claims embedded in a bearer credential.
///
/// Reconstructed from the verified token on every request, never stored
/// server-side. The embedded participant id is trusted as the caller's
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Participant id the bearer acts as.
    pub sub: u64,
    pub email: String,
    pub iat: u64,
    pub exp: u64,
}

/// Issues and verifies the signed bearer credentials binding a caller to a
/// participant id.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl SessionIssuer {
    #[must_use]
    pub fn new(secret: &str, validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.session.secret,
            Duration::from_secs(config.session.validity_seconds),
        )
    }

    /// Issues a credential for the participant, valid from now for the
    /// configured window.
    pub fn issue(&self, participant_id: u64, email: &str) -> Result<String, SessionError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| SessionError::Clock)?
            .as_secs();
        self.issue_at(participant_id, email, now)
    }

    /// `now` is seconds since the unix epoch. Split out of [`Self::issue`]
    /// so tests control the clock.
    pub fn issue_at(
        &self,
        participant_id: u64,
        email: &str,
        now: u64,
    ) -> Result<String, SessionError> {
        let claims = SessionClaims {
            sub: participant_id,
            email: email.to_owned(),
            iat: now,
            exp: now + self.validity.as_secs(),
        };
        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Checks signature and expiry and returns the embedded claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        match decode::<SessionClaims>(token, &self.decoding_key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(error) => match error.kind() {
                ErrorKind::ExpiredSignature => Err(SessionError::Expired),
                _ => Err(SessionError::Invalid(error)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> SessionIssuer {
        SessionIssuer::new("test-secret", Duration::from_secs(3600))
    }

    #[test]
    fn issue_then_verify_roundtrips_the_claims() {
        let issuer = issuer();
        let token = issuer.issue(1, "alice@example.com").unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, 1);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn verify_rejects_an_expired_credential() {
        let issuer = issuer();
        // Issued two validity windows in the past.
        let token = issuer.issue_at(1, "alice@example.com", 1_000_000).unwrap();
        assert!(matches!(issuer.verify(&token), Err(SessionError::Expired)));
    }

    #[test]
    fn verify_rejects_a_credential_signed_with_another_secret() {
        let other = SessionIssuer::new("other-secret", Duration::from_secs(3600));
        let token = other.issue(1, "alice@example.com").unwrap();
        assert!(matches!(
            issuer().verify(&token),
            Err(SessionError::Invalid(_))
        ));
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(matches!(
            issuer().verify("not-a-token"),
            Err(SessionError::Invalid(_))
        ));
    }
}
