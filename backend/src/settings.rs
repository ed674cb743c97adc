//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `JOB_OFFERS_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence. Optional fields
//! fall back to defaults through the accessors below.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::OfferSyncSchedulerConfig;

const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;
const MIN_REMOTE_TIMEOUT_MS: u64 = 100;
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 3 * 60 * 60;

fn default_bind_addr() -> SocketAddr {
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_BIND_PORT))
}

/// Runtime configuration for the job offers service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOB_OFFERS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection string; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Base URL of the remote offer provider; syncing is a no-op when unset.
    pub remote_base_url: Option<Url>,
    /// Timeout applied to each remote fetch, in milliseconds.
    pub remote_timeout_ms: Option<u64>,
    /// Delay between scheduled syncs, in seconds.
    pub sync_interval_secs: Option<u64>,
    /// Run a sync as soon as the service starts.
    #[ortho_config(default = true)]
    pub sync_on_start: bool,
}

impl AppSettings {
    /// Return the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(default_bind_addr)
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Return the remote provider base URL, if any.
    pub fn remote_base_url(&self) -> Option<&Url> {
        self.remote_base_url.as_ref()
    }

    /// Return the remote fetch timeout; values below 100 ms are raised to it.
    pub fn remote_timeout(&self) -> Duration {
        let millis = self
            .remote_timeout_ms
            .unwrap_or(DEFAULT_REMOTE_TIMEOUT_MS)
            .max(MIN_REMOTE_TIMEOUT_MS);
        Duration::from_millis(millis)
    }

    /// Return the interval between scheduled syncs, between one second and
    /// [`OfferSyncSchedulerConfig::MAX_INTERVAL`].
    pub fn sync_interval(&self) -> Duration {
        let secs = self
            .sync_interval_secs
            .unwrap_or(DEFAULT_SYNC_INTERVAL_SECS)
            .max(1);
        Duration::from_secs(secs).min(OfferSyncSchedulerConfig::MAX_INTERVAL)
    }

    /// Build the scheduler configuration from these settings.
    pub fn scheduler_config(&self) -> OfferSyncSchedulerConfig {
        OfferSyncSchedulerConfig {
            interval: self.sync_interval(),
            run_on_start: self.sync_on_start,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "JOB_OFFERS_BIND_ADDR",
        "JOB_OFFERS_DATABASE_URL",
        "JOB_OFFERS_DB_MAX_CONNECTIONS",
        "JOB_OFFERS_REMOTE_BASE_URL",
        "JOB_OFFERS_REMOTE_TIMEOUT_MS",
        "JOB_OFFERS_SYNC_INTERVAL_SECS",
        "JOB_OFFERS_SYNC_ON_START",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("job-offers")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.db_max_connections(), 10);
        assert!(settings.remote_base_url().is_none());
        assert_eq!(settings.remote_timeout(), Duration::from_secs(5));
        assert_eq!(settings.sync_interval(), Duration::from_secs(10_800));
        assert!(settings.sync_on_start);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("JOB_OFFERS_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "JOB_OFFERS_DATABASE_URL",
                Some("postgres://offers@localhost/offers".to_owned()),
            ),
            ("JOB_OFFERS_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            (
                "JOB_OFFERS_REMOTE_BASE_URL",
                Some("http://localhost:5057".to_owned()),
            ),
            ("JOB_OFFERS_REMOTE_TIMEOUT_MS", Some("250".to_owned())),
            ("JOB_OFFERS_SYNC_INTERVAL_SECS", Some("60".to_owned())),
            ("JOB_OFFERS_SYNC_ON_START", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000".parse().expect("addr"));
        assert_eq!(
            settings.database_url(),
            Some("postgres://offers@localhost/offers")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(
            settings.remote_base_url().map(Url::as_str),
            Some("http://localhost:5057/")
        );
        assert_eq!(settings.remote_timeout(), Duration::from_millis(250));

        let scheduler = settings.scheduler_config();
        assert_eq!(scheduler.interval, Duration::from_secs(60));
        assert!(!scheduler.run_on_start);
    }

    #[rstest]
    #[case(Some("   "), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    #[case(Some("postgres://db/offers"), Some("postgres://db/offers"))]
    fn blank_database_urls_select_the_memory_store(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let settings = AppSettings {
            bind_addr: None,
            database_url: raw.map(str::to_owned),
            db_max_connections: None,
            remote_base_url: None,
            remote_timeout_ms: None,
            sync_interval_secs: None,
            sync_on_start: true,
        };
        assert_eq!(settings.database_url(), expected);
    }

    fn with_timing(remote_timeout_ms: Option<u64>, sync_interval_secs: Option<u64>) -> AppSettings {
        AppSettings {
            bind_addr: None,
            database_url: None,
            db_max_connections: None,
            remote_base_url: None,
            remote_timeout_ms,
            sync_interval_secs,
            sync_on_start: false,
        }
    }

    #[rstest]
    #[case::zero(0, Duration::from_secs(1))]
    #[case::hourly(3_600, Duration::from_secs(3_600))]
    #[case::thirty_days(2_592_000, OfferSyncSchedulerConfig::MAX_INTERVAL)]
    #[case::u64_max(u64::MAX, OfferSyncSchedulerConfig::MAX_INTERVAL)]
    fn sync_interval_is_clamped(#[case] secs: u64, #[case] expected: Duration) {
        let settings = with_timing(None, Some(secs));
        assert_eq!(settings.sync_interval(), expected);
        assert_eq!(settings.scheduler_config().interval, expected);
    }

    #[rstest]
    #[case::zero(0, Duration::from_millis(100))]
    #[case::below_floor(99, Duration::from_millis(100))]
    #[case::configured(250, Duration::from_millis(250))]
    fn remote_timeout_has_a_floor(#[case] millis: u64, #[case] expected: Duration) {
        assert_eq!(with_timing(Some(millis), None).remote_timeout(), expected);
    }

    #[rstest]
    fn huge_interval_from_environment_is_capped() {
        let _guard = lock_env(VARS.map(|name| {
            let value = (name == "JOB_OFFERS_SYNC_INTERVAL_SECS").then(|| u64::MAX.to_string());
            (name, value)
        }));

        let settings = load_from_empty_args();
        assert_eq!(settings.sync_interval(), OfferSyncSchedulerConfig::MAX_INTERVAL);
    }
}
