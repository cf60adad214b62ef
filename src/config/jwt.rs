use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct JwtSettings {
    pub secret: SecretString,
    pub expiration_hours: i64,
}

impl JwtSettings {
    pub fn new(secret: String, expiration_hours: i64) -> Self {
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
            expiration_hours,
        }
    }

    /// Unix timestamp `expiration_hours` from now, for token claims.
    pub fn expiry_timestamp(&self) -> usize {
        let expiry = chrono::Utc::now() + chrono::Duration::hours(self.expiration_hours);
        expiry.timestamp() as usize
    }
}
