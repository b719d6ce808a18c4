//! # reqwest-proxy-rotator
//!
//! A rotating proxy pool middleware for reqwest-based crawlers.
//!
//! This library manages the outbound proxies of a crawling client: each
//! request is routed through a proxy chosen by a configurable policy
//! (rotate per request, pin once, or a fixed custom proxy), proxies that
//! prove unusable are evicted, a request keeps its proxy across internal
//! retries until it actually fails, and the pool refills itself from an
//! external source once it runs low.

pub mod config;
pub mod error;
pub mod middleware;
pub mod pool;
pub mod proxy;
pub mod source;
mod utils;

pub use config::{ListSourceKind, RotatorConfig, RotatorConfigBuilder, SelectionMode};
pub use error::{ConfigError, EmptyPool, ParseError, PoolError, RefillError};
pub use middleware::ProxyRotatorMiddleware;
pub use pool::{ProxyPool, RequestProxyState};
pub use proxy::{parse_proxy_list, ProxyEntry};
pub use source::{FileSource, HttpSource, ProxySource};
