//! Connection and startup flags shared by `serve` and `init-db`
//!
//! Environment (including `.env`) is read once through
//! [`DbConfig::from_env`]; any flag given on the command line then replaces
//! the matching value. Precedence is flag > environment > default.

use std::time::Duration;

use clap::Args;
use todo_server::db::schema::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_INTERVAL};
use todo_server::{ConfigError, DbConfig, RetryPolicy};

/// PostgreSQL connection flags (env: DB_HOST, DB_PORT, DB_NAME, DB_USER,
/// DB_PASSWORD, DB_MAX_CONNECTIONS, DB_ACQUIRE_TIMEOUT_SECS)
#[derive(Args, Debug, Clone, Default)]
pub struct DbArgs {
    /// Database host [env: DB_HOST, default: postgres]
    #[arg(long = "db-host")]
    pub host: Option<String>,

    /// Database port [env: DB_PORT, default: 5432]
    #[arg(long = "db-port")]
    pub port: Option<u16>,

    /// Database name [env: DB_NAME, default: tododb]
    #[arg(long = "db-name")]
    pub name: Option<String>,

    /// Database user [env: DB_USER, default: todouser]
    #[arg(long = "db-user")]
    pub user: Option<String>,

    /// Database password [env: DB_PASSWORD]
    #[arg(long = "db-password")]
    pub password: Option<String>,

    /// Maximum pooled connections [env: DB_MAX_CONNECTIONS, default: 5]
    #[arg(long = "db-max-connections")]
    pub max_connections: Option<u32>,

    /// Seconds a request waits for a pooled connection [env: DB_ACQUIRE_TIMEOUT_SECS, default: 5]
    #[arg(long = "db-acquire-timeout-secs")]
    pub acquire_timeout_secs: Option<u64>,
}

impl DbArgs {
    /// Resolve against the environment.
    pub fn into_config(self) -> Result<DbConfig, ConfigError> {
        self.apply(DbConfig::from_env()?)
    }

    /// Overlay the flags that were given onto `base`, then validate.
    pub fn apply(self, base: DbConfig) -> Result<DbConfig, ConfigError> {
        let config = DbConfig {
            host: self.host.unwrap_or(base.host),
            port: self.port.unwrap_or(base.port),
            name: self.name.unwrap_or(base.name),
            user: self.user.unwrap_or(base.user),
            password: self.password.unwrap_or(base.password),
            max_connections: self.max_connections.unwrap_or(base.max_connections),
            acquire_timeout: self
                .acquire_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(base.acquire_timeout),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Startup wait flags
#[derive(Args, Debug, Clone)]
pub struct RetryArgs {
    /// Connection attempts before giving up on the database
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Seconds to wait between connection attempts
    #[arg(long, default_value_t = DEFAULT_RETRY_INTERVAL.as_secs())]
    pub retry_interval_secs: u64,
}

impl From<RetryArgs> for RetryPolicy {
    fn from(args: RetryArgs) -> Self {
        Self {
            max_attempts: args.max_attempts,
            interval: Duration::from_secs(args.retry_interval_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        db: DbArgs,
        #[command(flatten)]
        retry: RetryArgs,
    }

    #[test]
    fn flags_override_base_config() {
        let harness = Harness::try_parse_from([
            "todoctl",
            "--db-host",
            "localhost",
            "--db-port",
            "6543",
            "--db-acquire-timeout-secs",
            "1",
            "--max-attempts",
            "3",
            "--retry-interval-secs",
            "0",
        ])
        .unwrap();

        let base = DbConfig {
            name: "from_env".into(),
            ..DbConfig::default()
        };
        let config = harness.db.apply(base).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 6543);
        assert_eq!(config.name, "from_env");
        assert_eq!(config.acquire_timeout, Duration::from_secs(1));

        let policy = RetryPolicy::from(harness.retry);
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.interval, Duration::ZERO);
    }

    #[test]
    fn no_flags_keeps_base_config() {
        let config = DbArgs::default().apply(DbConfig::default()).unwrap();
        assert_eq!(config, DbConfig::default());
    }

    #[test]
    fn rejects_zero_pool_size() {
        let harness =
            Harness::try_parse_from(["todoctl", "--db-max-connections", "0"]).unwrap();
        let err = harness.db.apply(DbConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. }));
    }
}
