//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and credential hashing configuration.
///
/// The secret and algorithm are process-wide: rotating the secret
/// invalidates every outstanding token.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Symmetric secret used to sign tokens (32+ characters recommended).
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Signing algorithm identifier (`HS256`, `HS384`, or `HS512`).
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Clock skew tolerated when checking `exp`, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl AuthConfig {
    /// Access token lifetime in seconds, as reported to clients.
    pub fn access_ttl_seconds(&self) -> u64 {
        self.access_ttl_minutes * 60
    }

    /// Whether the signing secret is still the built-in development value.
    pub fn uses_development_secret(&self) -> bool {
        self.secret_key == default_secret_key()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            algorithm: default_algorithm(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            leeway_seconds: 0,
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"****")
            .field("algorithm", &self.algorithm)
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .field("leeway_seconds", &self.leeway_seconds)
            .field("hash_memory_kib", &self.hash_memory_kib)
            .field("hash_iterations", &self.hash_iterations)
            .field("hash_parallelism", &self.hash_parallelism)
            .finish()
    }
}

fn default_secret_key() -> String {
    "dev-secret-key-change-in-production-min-32-chars".to_string()
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_ttl() -> u64 {
    30
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_hash_memory() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
