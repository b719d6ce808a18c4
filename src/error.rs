//! Error types for the reqwest-proxy-rotator crate.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when no proxy is left in the pool.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no proxies available in pool")]
pub struct EmptyPool;

/// A proxy line that does not match `scheme://[user:password@]host[:port]`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed proxy line: {line:?}")]
pub struct ParseError {
    line: String,
}

impl ParseError {
    pub(crate) fn new(line: &str) -> Self {
        Self {
            line: line.to_string(),
        }
    }

    /// The offending input line.
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// Fatal configuration problems, caught at pool construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("proxy mode {0:?} is not recognized")]
    IllegalMode(String),
    #[error("proxy list source {0:?} is not recognized")]
    IllegalListSource(String),
    #[error("a proxy list source is required for this mode")]
    MissingListSource,
    #[error("a proxy list path is required for a file-backed list")]
    MissingProxyList,
    #[error("proxy list {path:?} could not be read")]
    UnreadableProxyList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("a custom proxy is required for fixed mode")]
    MissingCustomProxy,
    #[error("custom proxy is not well formatted")]
    MalformedCustomProxy(#[from] ParseError),
    #[error("fixed mode requires exactly one proxy entry, got {0}")]
    FixedEntryCount(usize),
    #[error("a registry endpoint is required for a registry-backed list")]
    MissingRegistryEndpoint,
}

/// Errors that can abort pool construction.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Empty(#[from] EmptyPool),
}

/// Errors from a refill source. Logged and absorbed by the pool; a later
/// qualifying eviction retries the refill.
#[derive(Debug, Error)]
pub enum RefillError {
    #[error("refill source unreachable: {0}")]
    Http(#[from] reqwest::Error),
    #[error("refill source unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("refill source produced no usable entries")]
    EmptyBatch,
}
