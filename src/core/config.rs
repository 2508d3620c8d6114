//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Registry capacity used when `APPLICATIONS_CAPACITY` is unset or invalid
pub const DEFAULT_APPLICATIONS_CAPACITY: usize = 10_000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of applications kept in memory
    pub applications_capacity: usize,

    /// Contact address shown in logs at start-up
    /// Example: support@centerhub.app
    pub support_email: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("APPLICATIONS_CAPACITY").ok().as_deref(),
            std::env::var("SUPPORT_EMAIL").ok(),
        )
    }

    fn from_values(capacity: Option<&str>, support_email: Option<String>) -> Self {
        Self {
            applications_capacity: parse_capacity(capacity),
            support_email: support_email.filter(|email| !email.trim().is_empty()),
        }
    }

    /// Check if a support address is configured
    pub fn has_support_email(&self) -> bool {
        self.support_email.is_some()
    }
}

fn parse_capacity(value: Option<&str>) -> usize {
    match value.map(str::trim).map(str::parse::<usize>) {
        Some(Ok(capacity)) => capacity,
        Some(Err(_)) => {
            tracing::warn!(
                "APPLICATIONS_CAPACITY is not a number, using {}",
                DEFAULT_APPLICATIONS_CAPACITY
            );
            DEFAULT_APPLICATIONS_CAPACITY
        }
        None => DEFAULT_APPLICATIONS_CAPACITY,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
