//! Driver abstraction over the browser automation backend.
//!
//! The [`Driver`] trait is the seam between Actuar and whatever actually
//! talks to a browser. [`Driver::find_all`] is a raw, non-waiting DOM query;
//! all polling and timeout policy lives in the finder on top of it.
//!
//! Two implementations ship with the crate: [`MockDriver`] for unit tests,
//! and `WebDriverBackend` over the `thirtyfour` client when the `webdriver`
//! feature is enabled.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::locator::ResolvedLocator;
use crate::result::{ActuarError, ActuarResult};

/// Handle to a located UI element.
#[async_trait]
pub trait Element: Send + Sync {
    /// Click the element
    async fn click(&self) -> ActuarResult<()>;

    /// Type text into the element
    async fn send_keys(&self, text: &str) -> ActuarResult<()>;

    /// Clear the element's value
    async fn clear(&self) -> ActuarResult<()>;

    /// Submit the form this element belongs to
    async fn submit(&self) -> ActuarResult<()>;

    /// Read an attribute, `None` if absent
    async fn attr(&self, name: &str) -> ActuarResult<Option<String>>;

    /// Rendered text of the element
    async fn text(&self) -> ActuarResult<String>;

    /// Move the pointer over the element
    async fn hover(&self) -> ActuarResult<()>;
}

/// Browser session backend.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigate to a URL
    async fn goto(&self, url: &str) -> ActuarResult<()>;

    /// Current page title
    async fn title(&self) -> ActuarResult<String>;

    /// Current page URL
    async fn current_url(&self) -> ActuarResult<String>;

    /// All elements currently matching the locator. Returns immediately;
    /// an empty vec means no match right now, not an error.
    async fn find_all(&self, target: &ResolvedLocator) -> ActuarResult<Vec<Box<dyn Element>>>;

    /// Execute JavaScript in the page and return its result
    async fn execute_js(&self, script: &str) -> ActuarResult<serde_json::Value>;
}

// =============================================================================
// MOCK DRIVER
// =============================================================================

/// Blueprint for an element served by [`MockDriver`].
#[derive(Debug, Clone, Default)]
pub struct MockElementSpec {
    text: String,
    attrs: HashMap<String, String>,
    /// Number of `find_all` polls against the selector before this element
    /// becomes visible
    after_polls: u32,
}

impl MockElementSpec {
    /// Create an element blueprint
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set an attribute
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Make the element appear only after this many polls
    #[must_use]
    pub fn after_polls(mut self, polls: u32) -> Self {
        self.after_polls = polls;
        self
    }
}

#[derive(Debug, Default)]
struct MockState {
    url: String,
    title: String,
    elements: HashMap<String, Vec<MockElementSpec>>,
    poll_counts: HashMap<String, u32>,
    js_results: Vec<serde_json::Value>,
    calls: Vec<String>,
}

/// In-memory driver double for unit tests.
///
/// Elements are staged per selector value; every interaction is appended to a
/// shared call history that tests can assert on.
#[derive(Debug, Default)]
pub struct MockDriver {
    state: Mutex<MockState>,
    log: Arc<Mutex<Vec<String>>>,
}

impl MockDriver {
    /// Create an empty mock driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an element for a selector value
    pub fn stage_element(&self, value: impl Into<String>, spec: MockElementSpec) {
        if let Ok(mut state) = self.state.lock() {
            state.elements.entry(value.into()).or_default().push(spec);
        }
    }

    /// Set the page title reported by [`Driver::title`]
    pub fn set_title(&self, title: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.title = title.into();
        }
    }

    /// Queue a result for [`Driver::execute_js`]
    pub fn push_js_result(&self, result: serde_json::Value) {
        if let Ok(mut state) = self.state.lock() {
            state.js_results.push(result);
        }
    }

    /// Everything the driver and its elements were asked to do, in order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().map(|log| (*log).clone()).unwrap_or_default()
    }

    /// Whether any recorded call starts with `prefix`
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls().iter().any(|call| call.starts_with(prefix))
    }

    fn record(&self, call: String) {
        if let Ok(mut log) = self.log.lock() {
            log.push(call);
        }
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn goto(&self, url: &str) -> ActuarResult<()> {
        self.record(format!("goto:{url}"));
        if let Ok(mut state) = self.state.lock() {
            state.url = url.to_string();
        }
        Ok(())
    }

    async fn title(&self) -> ActuarResult<String> {
        Ok(self
            .state
            .lock()
            .map(|state| state.title.clone())
            .unwrap_or_default())
    }

    async fn current_url(&self) -> ActuarResult<String> {
        Ok(self
            .state
            .lock()
            .map(|state| state.url.clone())
            .unwrap_or_default())
    }

    async fn find_all(&self, target: &ResolvedLocator) -> ActuarResult<Vec<Box<dyn Element>>> {
        self.record(format!("find_all:{target}"));
        let mut state = self
            .state
            .lock()
            .map_err(|_| ActuarError::driver("mock state poisoned"))?;
        let polls = state.poll_counts.entry(target.value.clone()).or_insert(0);
        *polls += 1;
        let polls = *polls;
        let specs = state.elements.get(&target.value).cloned().unwrap_or_default();
        Ok(specs
            .into_iter()
            .filter(|spec| spec.after_polls < polls)
            .map(|spec| {
                Box::new(MockElement {
                    selector: target.value.clone(),
                    spec,
                    log: Arc::clone(&self.log),
                }) as Box<dyn Element>
            })
            .collect())
    }

    async fn execute_js(&self, script: &str) -> ActuarResult<serde_json::Value> {
        self.record(format!("execute_js:{script}"));
        let mut state = self
            .state
            .lock()
            .map_err(|_| ActuarError::driver("mock state poisoned"))?;
        if state.js_results.is_empty() {
            Ok(serde_json::Value::Null)
        } else {
            Ok(state.js_results.remove(0))
        }
    }
}

/// Element served by [`MockDriver`].
#[derive(Debug)]
pub struct MockElement {
    selector: String,
    spec: MockElementSpec,
    log: Arc<Mutex<Vec<String>>>,
}

impl MockElement {
    fn record(&self, call: String) {
        if let Ok(mut log) = self.log.lock() {
            log.push(call);
        }
    }
}

#[async_trait]
impl Element for MockElement {
    async fn click(&self) -> ActuarResult<()> {
        self.record(format!("click:{}", self.selector));
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> ActuarResult<()> {
        self.record(format!("send_keys:{}:{text}", self.selector));
        Ok(())
    }

    async fn clear(&self) -> ActuarResult<()> {
        self.record(format!("clear:{}", self.selector));
        Ok(())
    }

    async fn submit(&self) -> ActuarResult<()> {
        self.record(format!("submit:{}", self.selector));
        Ok(())
    }

    async fn attr(&self, name: &str) -> ActuarResult<Option<String>> {
        self.record(format!("attr:{}:{name}", self.selector));
        Ok(self.spec.attrs.get(name).cloned())
    }

    async fn text(&self) -> ActuarResult<String> {
        Ok(self.spec.text.clone())
    }

    async fn hover(&self) -> ActuarResult<()> {
        self.record(format!("hover:{}", self.selector));
        Ok(())
    }
}

// =============================================================================
// THIRTYFOUR BACKEND
// =============================================================================

#[cfg(feature = "webdriver")]
mod webdriver_backend {
    use super::{async_trait, ActuarError, ActuarResult, Driver, Element, ResolvedLocator};
    use crate::locator::LocatorKind;
    use thirtyfour::prelude::{By, WebDriver, WebElement};

    /// [`Driver`] implementation over a live `thirtyfour` WebDriver session.
    pub struct WebDriverBackend {
        client: WebDriver,
    }

    impl WebDriverBackend {
        /// Wrap an already connected session
        #[must_use]
        pub fn new(client: WebDriver) -> Self {
            Self { client }
        }

        /// Connect to a WebDriver server with default Chrome capabilities
        ///
        /// # Errors
        ///
        /// Returns [`ActuarError::Driver`] if the session cannot be created.
        pub async fn connect(server_url: &str) -> ActuarResult<Self> {
            let caps = thirtyfour::DesiredCapabilities::chrome();
            let client = WebDriver::new(server_url, caps)
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))?;
            Ok(Self { client })
        }

        /// The underlying session, for operations Actuar does not wrap
        #[must_use]
        pub fn client(&self) -> &WebDriver {
            &self.client
        }

        /// End the session
        ///
        /// # Errors
        ///
        /// Returns [`ActuarError::Driver`] if the session refuses to quit.
        pub async fn quit(self) -> ActuarResult<()> {
            self.client
                .quit()
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }
    }

    fn to_by(target: &ResolvedLocator) -> By {
        let value = target.value.as_str();
        match target.kind {
            LocatorKind::Id => By::Id(value),
            LocatorKind::Name => By::Name(value),
            LocatorKind::XPath => By::XPath(value),
            LocatorKind::ClassName => By::ClassName(value),
            LocatorKind::Css => By::Css(value),
            LocatorKind::Tag => By::Tag(value),
            LocatorKind::LinkText => By::LinkText(value),
            LocatorKind::PartialLinkText => By::PartialLinkText(value),
        }
    }

    #[async_trait]
    impl Driver for WebDriverBackend {
        async fn goto(&self, url: &str) -> ActuarResult<()> {
            self.client
                .goto(url)
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn title(&self) -> ActuarResult<String> {
            self.client
                .title()
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn current_url(&self) -> ActuarResult<String> {
            self.client
                .current_url()
                .await
                .map(|url| url.to_string())
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn find_all(&self, target: &ResolvedLocator) -> ActuarResult<Vec<Box<dyn Element>>> {
            let elements = self
                .client
                .find_all(to_by(target))
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))?;
            Ok(elements
                .into_iter()
                .map(|inner| Box::new(WebDriverElement { inner }) as Box<dyn Element>)
                .collect())
        }

        async fn execute_js(&self, script: &str) -> ActuarResult<serde_json::Value> {
            self.client
                .execute(script, Vec::new())
                .await
                .map(|ret| ret.json().clone())
                .map_err(|e| ActuarError::driver(e.to_string()))
        }
    }

    /// [`Element`] wrapper around a `thirtyfour` element handle.
    pub struct WebDriverElement {
        inner: WebElement,
    }

    #[async_trait]
    impl Element for WebDriverElement {
        async fn click(&self) -> ActuarResult<()> {
            self.inner
                .click()
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn send_keys(&self, text: &str) -> ActuarResult<()> {
            self.inner
                .send_keys(text)
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn clear(&self) -> ActuarResult<()> {
            self.inner
                .clear()
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn submit(&self) -> ActuarResult<()> {
            // W3C WebDriver has no submit endpoint; drive the owning form
            self.inner
                .handle
                .execute(
                    "arguments[0].closest('form').submit();",
                    vec![self
                        .inner
                        .to_json()
                        .map_err(|e| ActuarError::driver(e.to_string()))?],
                )
                .await
                .map(|_| ())
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn attr(&self, name: &str) -> ActuarResult<Option<String>> {
            self.inner
                .attr(name)
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn text(&self) -> ActuarResult<String> {
            self.inner
                .text()
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }

        async fn hover(&self) -> ActuarResult<()> {
            self.inner
                .handle
                .action_chain()
                .move_to_element_center(&self.inner)
                .perform()
                .await
                .map_err(|e| ActuarError::driver(e.to_string()))
        }
    }
}

#[cfg(feature = "webdriver")]
pub use webdriver_backend::{WebDriverBackend, WebDriverElement};
