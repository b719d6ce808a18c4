//! Configuration for the proxy rotator.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Policy governing how a proxy is chosen for each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Draw a fresh random proxy for every request.
    RotatePerRequest,
    /// Pin one randomly chosen proxy and keep it until it fails.
    PinOnce,
    /// Use a single externally configured proxy, never evicted.
    FixedCustom,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RotatePerRequest => "rotate_per_request",
            Self::PinOnce => "pin_once",
            Self::FixedCustom => "fixed_custom",
        }
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rotateperrequest" | "rotate_per_request" | "rotate-per-request" => {
                Ok(Self::RotatePerRequest)
            }
            "pinonce" | "pin_once" | "pin-once" => Ok(Self::PinOnce),
            "fixedcustom" | "fixed_custom" | "fixed-custom" => Ok(Self::FixedCustom),
            _ => Err(ConfigError::IllegalMode(s.to_string())),
        }
    }
}

/// Kind of source backing the proxy list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSourceKind {
    /// A local line-delimited proxy file, re-read on refill.
    File,
    /// A shared registry reachable over an HTTP line-list endpoint.
    Registry,
}

impl ListSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Registry => "registry",
        }
    }
}

impl FromStr for ListSourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "registry" => Ok(Self::Registry),
            _ => Err(ConfigError::IllegalListSource(s.to_string())),
        }
    }
}

/// Configuration for the proxy pool and middleware.
#[derive(Debug, Clone)]
pub struct RotatorConfig {
    /// Selection mode, fixed for the lifetime of the pool.
    pub mode: SelectionMode,
    /// Path to a line-delimited proxy file (file-backed lists).
    pub proxy_list: Option<PathBuf>,
    /// Kind of source backing the proxy list.
    pub list_source: Option<ListSourceKind>,
    /// A single proxy line, required in fixed mode.
    pub custom_proxy: Option<String>,
    /// HTTP endpoint of the registry (registry-backed lists).
    pub registry_endpoint: Option<String>,
    /// File the registry source persists fetched addresses to.
    pub cache_file: Option<PathBuf>,
    /// Timeout for refill fetches, owned by the source adapter.
    pub refill_timeout: Duration,
    /// Timeout for proxied requests issued by the middleware.
    pub request_timeout: Duration,
    /// Number of times the middleware retries a request with another proxy.
    pub retry_count: usize,
    /// Seed for the selection RNG; random draws are deterministic when set.
    pub rng_seed: Option<u64>,
}

impl RotatorConfig {
    /// Create a new configuration builder for the given mode.
    pub fn builder(mode: SelectionMode) -> RotatorConfigBuilder {
        RotatorConfigBuilder::new(mode)
    }
}

/// Builder for `RotatorConfig`.
pub struct RotatorConfigBuilder {
    mode: SelectionMode,
    proxy_list: Option<PathBuf>,
    list_source: Option<ListSourceKind>,
    custom_proxy: Option<String>,
    registry_endpoint: Option<String>,
    cache_file: Option<PathBuf>,
    refill_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
    retry_count: Option<usize>,
    rng_seed: Option<u64>,
}

impl RotatorConfigBuilder {
    /// Create a new builder with default values.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            proxy_list: None,
            list_source: None,
            custom_proxy: None,
            registry_endpoint: None,
            cache_file: None,
            refill_timeout: None,
            request_timeout: None,
            retry_count: None,
            rng_seed: None,
        }
    }

    /// Set the path of the line-delimited proxy file.
    pub fn proxy_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.proxy_list = Some(path.into());
        self
    }

    /// Set the kind of source backing the proxy list.
    pub fn list_source(mut self, kind: ListSourceKind) -> Self {
        self.list_source = Some(kind);
        self
    }

    /// Set the single proxy line used in fixed mode.
    pub fn custom_proxy(mut self, line: impl Into<String>) -> Self {
        self.custom_proxy = Some(line.into());
        self
    }

    /// Set the HTTP endpoint of the registry.
    pub fn registry_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.registry_endpoint = Some(endpoint.into());
        self
    }

    /// Set the file fetched registry addresses are persisted to.
    pub fn cache_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_file = Some(path.into());
        self
    }

    /// Set the timeout for refill fetches.
    pub fn refill_timeout(mut self, timeout: Duration) -> Self {
        self.refill_timeout = Some(timeout);
        self
    }

    /// Set the timeout for proxied requests.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the number of times to retry a request with different proxies.
    pub fn retry_count(mut self, count: usize) -> Self {
        self.retry_count = Some(count);
        self
    }

    /// Seed the selection RNG for deterministic draws.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RotatorConfig {
        RotatorConfig {
            mode: self.mode,
            proxy_list: self.proxy_list,
            list_source: self.list_source,
            custom_proxy: self.custom_proxy,
            registry_endpoint: self.registry_endpoint,
            cache_file: self.cache_file,
            refill_timeout: self.refill_timeout.unwrap_or(Duration::from_secs(10)),
            request_timeout: self.request_timeout.unwrap_or(Duration::from_secs(30)),
            retry_count: self.retry_count.unwrap_or(3),
            rng_seed: self.rng_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_mode_from_str() {
        assert_eq!(
            "RotatePerRequest".parse::<SelectionMode>().unwrap(),
            SelectionMode::RotatePerRequest
        );
        assert_eq!(
            "pin_once".parse::<SelectionMode>().unwrap(),
            SelectionMode::PinOnce
        );
        assert_eq!(
            "fixed-custom".parse::<SelectionMode>().unwrap(),
            SelectionMode::FixedCustom
        );
        assert!(matches!(
            "sometimes".parse::<SelectionMode>(),
            Err(ConfigError::IllegalMode(_))
        ));
    }

    #[test]
    fn test_list_source_kind_from_str() {
        assert_eq!(
            "FILE".parse::<ListSourceKind>().unwrap(),
            ListSourceKind::File
        );
        assert_eq!(
            "registry".parse::<ListSourceKind>().unwrap(),
            ListSourceKind::Registry
        );
        assert!(matches!(
            "REDIS".parse::<ListSourceKind>(),
            Err(ConfigError::IllegalListSource(_))
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = RotatorConfig::builder(SelectionMode::RotatePerRequest).build();

        assert_eq!(config.mode, SelectionMode::RotatePerRequest);
        assert!(config.proxy_list.is_none());
        assert!(config.list_source.is_none());
        assert_eq!(config.refill_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.retry_count, 3);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = RotatorConfig::builder(SelectionMode::PinOnce)
            .list_source(ListSourceKind::File)
            .proxy_list("/tmp/proxies.txt")
            .refill_timeout(Duration::from_secs(5))
            .retry_count(1)
            .rng_seed(7)
            .build();

        assert_eq!(config.list_source, Some(ListSourceKind::File));
        assert_eq!(config.proxy_list, Some(PathBuf::from("/tmp/proxies.txt")));
        assert_eq!(config.refill_timeout, Duration::from_secs(5));
        assert_eq!(config.retry_count, 1);
        assert_eq!(config.rng_seed, Some(7));
    }
}
