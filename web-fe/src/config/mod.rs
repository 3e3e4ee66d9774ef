/// Storage key layout. The durable and session tiers share the URL key name.
pub mod keys {
    pub const PROJECT_URL: &str = "family_app_url";
    /// Durable credential. Stored as plain text despite the suffix.
    pub const DURABLE_API_KEY: &str = "family_app_key_enc";
    pub const SESSION_API_KEY: &str = "family_app_key";
}

pub const SECURE_SCHEME_PREFIX: &str = "https://";
pub const SIMULATED_AUTH_DELAY_MS: u32 = 1500;
pub const SHAKE_DURATION_MS: f64 = 400.0;
pub const SHAKE_OFFSET_PX: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub url_prefix: &'static str,
    pub auth_delay_ms: u32,
    pub shake_duration_ms: f64,
    pub shake_offset_px: i32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url_prefix: SECURE_SCHEME_PREFIX,
            auth_delay_ms: SIMULATED_AUTH_DELAY_MS,
            shake_duration_ms: SHAKE_DURATION_MS,
            shake_offset_px: SHAKE_OFFSET_PX,
        }
    }
}
