//! User service configuration.

use std::env;

use domain::HashCost;

/// User service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// Argon2 cost applied to newly registered passwords
    pub hash_cost: HashCost,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Each cost parameter reads `USER_SERVICE_HASH_*` first, then
    /// `PASSWORD_HASH_*`, and falls back to the argon2 default. Unparseable
    /// values fall back too; out-of-range values are rejected when the
    /// service is built.
    pub fn from_env() -> Self {
        let defaults = HashCost::default();

        Self {
            hash_cost: HashCost {
                memory_kib: read_u32("MEMORY_KIB").unwrap_or(defaults.memory_kib),
                iterations: read_u32("ITERATIONS").unwrap_or(defaults.iterations),
                parallelism: read_u32("PARALLELISM").unwrap_or(defaults.parallelism),
            },
        }
    }
}

fn read_u32(suffix: &str) -> Option<u32> {
    env::var(format!("USER_SERVICE_HASH_{}", suffix))
        .or_else(|_| env::var(format!("PASSWORD_HASH_{}", suffix)))
        .ok()
        .and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only this test touches these variables.
    #[test]
    fn test_from_env_reads_prefixed_then_fallback() {
        env::set_var("USER_SERVICE_HASH_MEMORY_KIB", "65536");
        env::set_var("PASSWORD_HASH_ITERATIONS", "4");
        env::set_var("USER_SERVICE_HASH_PARALLELISM", "not-a-number");

        let config = UserServiceConfig::from_env();

        env::remove_var("USER_SERVICE_HASH_MEMORY_KIB");
        env::remove_var("PASSWORD_HASH_ITERATIONS");
        env::remove_var("USER_SERVICE_HASH_PARALLELISM");

        assert_eq!(config.hash_cost.memory_kib, 65536);
        assert_eq!(config.hash_cost.iterations, 4);
        assert_eq!(config.hash_cost.parallelism, HashCost::default().parallelism);
    }
}
