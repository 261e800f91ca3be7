//! Actuar: fluent WebDriver actions for UI testing.
//!
//! Actuar (Spanish: "to act") is a thin, opinionated layer over a
//! WebDriver-style backend. It contributes the pieces every Selenium-flavored
//! suite reinvents:
//!
//! - **Parameterized locators** - templates with `{name}` placeholders,
//!   validated and substituted at resolution time
//! - **Fluent finding** - element lookups that poll with named timeout tiers
//!   (`short` / `medium` / `long` / `absurd`) or explicit overrides
//! - **An action facade** - find, act, wait, sleep sequencing with structured
//!   action events
//! - **Page objects** - a small trait for modeling pages and components
//!
//! The browser itself stays behind the [`driver::Driver`] trait; enable the
//! `webdriver` feature for the `thirtyfour` backend, or use
//! [`driver::MockDriver`] in unit tests.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use actuar::prelude::*;
//!
//! # async fn run() -> ActuarResult<()> {
//! let driver: Arc<dyn Driver> = Arc::new(MockDriver::new());
//! let finder = FluentFinder::new(driver, Timeouts::new());
//! let actions = Actions::new(Arc::new(finder), Duration::from_secs(10));
//!
//! let post_link =
//!     Locator::xpath("//section[contains(., '{title}')]//a[contains(., 'Read')]");
//!
//! actions.goto("https://example.org/blog").await?;
//! actions
//!     .click(&post_link.resolve(&LocatorArgs::new().with("title", "Hello"))?)
//!     .await?;
//! actions
//!     .wait_for(&LocatorExists::xpath("//article"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod actions;
pub mod assertions;
pub mod conditions;
pub mod config;
pub mod driver;
pub mod finder;
pub mod locator;
pub mod observe;
pub mod pages;
pub mod result;
pub mod timeout;

pub use actions::{ActionOptions, Actions};
pub use assertions::assert_condition;
pub use conditions::{Condition, FnCondition, LocatorExists};
pub use config::{ActuarConfig, TimeoutsConfig};
pub use driver::{Driver, Element, MockDriver, MockElementSpec};
pub use finder::{Finder, FluentFinder, POLL_INTERVAL_MS};
pub use locator::{
    extract_parameters, Locator, LocatorArgs, LocatorKind, ResolvedLocator,
};
pub use observe::{init_tracing, ActionEvent, EventSink, MemorySink, TracingSink};
pub use pages::Page;
pub use result::{ActuarError, ActuarResult};
pub use timeout::{Timeout, TimeoutTier, Timeouts};

#[cfg(feature = "webdriver")]
pub use driver::{WebDriverBackend, WebDriverElement};

/// Convenient imports for test suites.
pub mod prelude {
    pub use crate::actions::{ActionOptions, Actions};
    pub use crate::assertions::assert_condition;
    pub use crate::conditions::{Condition, FnCondition, LocatorExists};
    pub use crate::config::ActuarConfig;
    pub use crate::driver::{Driver, Element, MockDriver};
    pub use crate::finder::{Finder, FluentFinder};
    pub use crate::locator::{Locator, LocatorArgs, LocatorKind, ResolvedLocator};
    pub use crate::observe::{ActionEvent, EventSink};
    pub use crate::pages::Page;
    pub use crate::result::{ActuarError, ActuarResult};
    pub use crate::timeout::{Timeout, TimeoutTier, Timeouts};

    #[cfg(feature = "webdriver")]
    pub use crate::driver::WebDriverBackend;
}
