//! Authentication configuration

use carepath_common::Config;

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Credential lifetime; also used as the cookie `Max-Age`
    pub token_ttl_seconds: i64,
    /// Adds the `Secure` attribute to credential cookies
    pub secure_cookies: bool,
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl_seconds: config.token_ttl_seconds,
            secure_cookies: config.is_production(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}
