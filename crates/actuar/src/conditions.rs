//! Wait conditions.
//!
//! A [`Condition`] is a predicate probed against the driver until it holds or
//! a timeout elapses. A failing probe is simply `false`; conditions never
//! surface driver errors themselves.

use async_trait::async_trait;

use crate::driver::Driver;
use crate::locator::{LocatorKind, ResolvedLocator};

/// Predicate polled by `Actions::wait_for`.
#[async_trait]
pub trait Condition: Send + Sync {
    /// Probe the condition once
    async fn check(&self, driver: &dyn Driver) -> bool;

    /// Human-readable description for logs and timeout errors
    fn description(&self) -> String;
}

/// Condition that holds once at least one element matches a locator.
#[derive(Debug, Clone)]
pub struct LocatorExists {
    target: ResolvedLocator,
}

impl LocatorExists {
    /// Wait for this locator to match
    #[must_use]
    pub const fn new(target: ResolvedLocator) -> Self {
        Self { target }
    }

    /// Wait for an XPath expression to match
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::new(ResolvedLocator::new(LocatorKind::XPath, expression))
    }
}

#[async_trait]
impl Condition for LocatorExists {
    async fn check(&self, driver: &dyn Driver) -> bool {
        driver
            .find_all(&self.target)
            .await
            .map(|found| !found.is_empty())
            .unwrap_or(false)
    }

    fn description(&self) -> String {
        format!("locator exists -> {}", self.target)
    }
}

/// Closure-backed condition with a description.
pub struct FnCondition<F: Fn() -> bool + Send + Sync> {
    func: F,
    description: String,
}

impl<F: Fn() -> bool + Send + Sync> FnCondition<F> {
    /// Create a condition from a closure
    pub fn new(func: F, description: impl Into<String>) -> Self {
        Self {
            func,
            description: description.into(),
        }
    }
}

impl<F: Fn() -> bool + Send + Sync> std::fmt::Debug for FnCondition<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCondition")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F: Fn() -> bool + Send + Sync> Condition for FnCondition<F> {
    async fn check(&self, _driver: &dyn Driver) -> bool {
        (self.func)()
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{MockDriver, MockElementSpec};

    #[tokio::test]
    async fn test_locator_exists_false_then_true() {
        let driver = MockDriver::new();
        let condition = LocatorExists::xpath("//body");
        assert!(!condition.check(&driver).await);
        driver.stage_element("//body", MockElementSpec::new());
        assert!(condition.check(&driver).await);
    }

    #[tokio::test]
    async fn test_description_names_locator() {
        let condition = LocatorExists::xpath("//div[@class='blog']");
        assert_eq!(
            condition.description(),
            "locator exists -> xpath=//div[@class='blog']"
        );
    }

    #[tokio::test]
    async fn test_fn_condition() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let driver = MockDriver::new();
        let ready = AtomicBool::new(false);
        let condition = FnCondition::new(|| ready.load(Ordering::SeqCst), "backend ready");
        assert!(!condition.check(&driver).await);
        ready.store(true, Ordering::SeqCst);
        assert!(condition.check(&driver).await);
        assert_eq!(condition.description(), "backend ready");
    }
}
