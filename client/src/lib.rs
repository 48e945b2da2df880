//! Async client and test-support helpers for the posts/users API.
//!
//! # Architecture
//!
//! - [`api`] - [`ApiClient`], a thin typed layer over the service's CRUD
//!   surface, plus raw request methods for negative tests that assert on
//!   arbitrary paths and status codes
//! - [`wait`] - bounded-time condition polling ([`wait_until`]) for
//!   asserting on eventually-true state
//! - [`data`] - random post payload generation for create tests
//! - [`config`] - base URL resolution from environment and config file
//!
//! All requests go through one shared, pooled [`reqwest::Client`]; per-target
//! state is limited to the base URL carried by each [`ApiClient`].

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod wait;

pub use api::ApiClient;
pub use config::ProbeConfig;
pub use error::ApiError;
pub use wait::{Timeout, WaitConfig, WaitError, wait_until, wait_until_true};

pub use apiprobe_types as types;

use std::sync::OnceLock;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

// Connection pool settings; the suite fires many small requests at one host.
const POOL_MAX_IDLE_PER_HOST: usize = 8;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Shared HTTP client for all [`ApiClient`] instances.
///
/// Plain HTTP is allowed: the hermetic suite talks to loopback mock servers.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder().build().unwrap_or_else(|e| {
            tracing::error!("Failed to build pooled HTTP client: {e}. Falling back to defaults.");
            reqwest::Client::builder()
                .build()
                .expect("default HTTP client must build; cannot issue requests without one")
        })
    })
}

fn base_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
        .redirect(reqwest::redirect::Policy::none())
}
