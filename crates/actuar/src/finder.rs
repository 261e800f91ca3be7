//! Fluent element finding with timeout tiers.
//!
//! A [`Finder`] turns the driver's instantaneous DOM queries into patient
//! lookups: it polls until at least one element matches or the selected
//! timeout elapses.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::driver::{Driver, Element};
use crate::locator::ResolvedLocator;
use crate::result::{ActuarError, ActuarResult};
use crate::timeout::{millis, Timeout, Timeouts};

/// Interval between DOM polls (50ms)
pub const POLL_INTERVAL_MS: u64 = 50;

/// Element lookup with a timeout policy.
#[async_trait]
pub trait Finder: Send + Sync {
    /// The driver this finder queries
    fn driver(&self) -> &Arc<dyn Driver>;

    /// The tier table used to resolve named timeouts
    fn timeouts(&self) -> &Timeouts;

    /// First element matching the locator, waiting up to the selected
    /// timeout for it to appear
    async fn find_element(
        &self,
        target: &ResolvedLocator,
        timeout: Timeout,
    ) -> ActuarResult<Box<dyn Element>>;

    /// All elements matching the locator once at least one appears
    async fn find_elements(
        &self,
        target: &ResolvedLocator,
        timeout: Timeout,
    ) -> ActuarResult<Vec<Box<dyn Element>>>;
}

/// Default [`Finder`] implementation. Covers most web testing use cases.
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use actuar::driver::{Driver, MockDriver};
/// use actuar::finder::FluentFinder;
/// use actuar::timeout::Timeouts;
///
/// let driver: Arc<dyn Driver> = Arc::new(MockDriver::new());
/// let finder = FluentFinder::new(
///     driver,
///     Timeouts::new().with_default(Duration::from_secs(5)),
/// );
/// ```
pub struct FluentFinder {
    driver: Arc<dyn Driver>,
    timeouts: Timeouts,
}

impl FluentFinder {
    /// Create a finder over a driver with a tier table
    #[must_use]
    pub fn new(driver: Arc<dyn Driver>, timeouts: Timeouts) -> Self {
        Self { driver, timeouts }
    }

    async fn poll_for(
        &self,
        target: &ResolvedLocator,
        limit: Duration,
    ) -> ActuarResult<Vec<Box<dyn Element>>> {
        let deadline = Instant::now() + limit;
        loop {
            let found = self.driver.find_all(target).await?;
            if !found.is_empty() {
                return Ok(found);
            }
            if Instant::now() >= deadline {
                return Err(ActuarError::Timeout {
                    waited_for: target.to_string(),
                    ms: millis(limit),
                });
            }
            tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
        }
    }
}

#[async_trait]
impl Finder for FluentFinder {
    fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    fn timeouts(&self) -> &Timeouts {
        &self.timeouts
    }

    async fn find_element(
        &self,
        target: &ResolvedLocator,
        timeout: Timeout,
    ) -> ActuarResult<Box<dyn Element>> {
        let limit = self.timeouts.resolve(timeout);
        tracing::debug!(locator = %target, timeout_ms = millis(limit), "find_element");
        let mut found = self.poll_for(target, limit).await?;
        Ok(found.remove(0))
    }

    async fn find_elements(
        &self,
        target: &ResolvedLocator,
        timeout: Timeout,
    ) -> ActuarResult<Vec<Box<dyn Element>>> {
        let limit = self.timeouts.resolve(timeout);
        tracing::debug!(locator = %target, timeout_ms = millis(limit), "find_elements");
        self.poll_for(target, limit).await
    }
}
