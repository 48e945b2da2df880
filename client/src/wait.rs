//! Bounded-time condition polling.
//!
//! [`wait_until`] repeatedly evaluates an asynchronous condition at a fixed
//! cadence until it reports true or a wall-clock deadline elapses. The suite
//! uses it to gate on eventually-true state (a target answering, a resource
//! appearing) without hand-rolled sleep loops in every test.
//!
//! # Semantics
//!
//! - The elapsed-time check runs *before* each condition evaluation, so a
//!   zero timeout fails immediately without ever invoking the condition.
//! - A true result returns at once; the remainder of the interval is not
//!   waited out.
//! - Only wall-clock time bounds the loop; there is no attempt cap. The
//!   final attempt may overshoot the timeout by up to one interval plus the
//!   condition's own latency.
//! - Condition errors propagate unchanged as [`WaitError::Condition`]; they
//!   are never swallowed or converted into a timeout.
//!
//! The condition may be invoked many times and is assumed idempotent.

use std::convert::Infallible;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{Instant, sleep};

/// Default deadline for [`WaitConfig`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default pause between condition checks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Timing parameters for [`wait_until`].
///
/// A zero `interval` degenerates to a busy poll; keep it positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Wall-clock budget for the whole wait.
    pub timeout: Duration,
    /// Fixed pause between condition checks.
    pub interval: Duration,
}

impl WaitConfig {
    #[must_use]
    pub const fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Default interval with the given timeout.
    #[must_use]
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_INTERVAL)
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_INTERVAL)
    }
}

/// The condition never reported true within the wall-clock budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("condition not met within {timeout:?}")]
pub struct Timeout {
    /// The budget that elapsed.
    pub timeout: Duration,
}

/// Outcome of a failed [`wait_until`] call.
#[derive(Debug, Error)]
pub enum WaitError<E> {
    #[error(transparent)]
    Timeout(#[from] Timeout),

    /// The condition itself failed; polling stopped at the first error.
    #[error("condition check failed: {0}")]
    Condition(E),
}

/// Polls `condition` until it reports `Ok(true)` or `config.timeout` elapses.
///
/// Returns `Ok(())` the first time the condition holds, fails with
/// [`WaitError::Timeout`] once the deadline passes, and propagates the first
/// condition error as [`WaitError::Condition`].
pub async fn wait_until<F, Fut, E>(mut condition: F, config: WaitConfig) -> Result<(), WaitError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        if started.elapsed() >= config.timeout {
            tracing::debug!(attempts, timeout = ?config.timeout, "condition wait timed out");
            return Err(WaitError::Timeout(Timeout {
                timeout: config.timeout,
            }));
        }

        attempts += 1;
        if condition().await.map_err(WaitError::Condition)? {
            return Ok(());
        }

        sleep(config.interval).await;
    }
}

/// [`wait_until`] for conditions that cannot fail.
pub async fn wait_until_true<F, Fut>(mut condition: F, config: WaitConfig) -> Result<(), Timeout>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let outcome = wait_until(
        move || {
            let check = condition();
            async move { Ok::<bool, Infallible>(check.await) }
        },
        config,
    )
    .await;

    match outcome {
        Ok(()) => Ok(()),
        Err(WaitError::Timeout(timeout)) => Err(timeout),
        Err(WaitError::Condition(never)) => match never {},
    }
}
