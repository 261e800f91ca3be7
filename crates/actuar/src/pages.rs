//! Page object base.
//!
//! Implement [`Page`] for each page or component of the application under
//! test and drive it through the shared [`Actions`] facade:
//!
//! ```no_run
//! use async_trait::async_trait;
//! use actuar::actions::Actions;
//! use actuar::locator::Locator;
//! use actuar::pages::Page;
//! use actuar::result::ActuarResult;
//!
//! struct BlogPage {
//!     actions: Actions,
//! }
//!
//! #[async_trait]
//! impl Page for BlogPage {
//!     fn actions(&self) -> &Actions {
//!         &self.actions
//!     }
//!
//!     fn url(&self) -> Option<&str> {
//!         Some("https://example.org/blog")
//!     }
//! }
//!
//! impl BlogPage {
//!     async fn open_first_post(&self) -> ActuarResult<()> {
//!         let post = Locator::css("a.post-link").target()?;
//!         self.actions.click(&post).await
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::actions::Actions;
use crate::result::{ActuarError, ActuarResult};

/// A page or component of the application under test.
///
/// Components are pages without a `url`.
#[async_trait]
pub trait Page: Send + Sync {
    /// The facade this page drives
    fn actions(&self) -> &Actions;

    /// Canonical URL of the page, if it has one
    fn url(&self) -> Option<&str> {
        None
    }

    /// Navigate to the page's canonical URL
    ///
    /// # Errors
    ///
    /// Returns [`ActuarError::InvalidState`] when the page declares no URL.
    async fn open(&self) -> ActuarResult<()> {
        let url = self.url().ok_or_else(|| ActuarError::InvalidState {
            message: "page declares no url".to_string(),
        })?;
        self.actions().goto(url).await
    }

    /// Navigate to an explicit URL instead of the canonical one
    ///
    /// # Errors
    ///
    /// Returns [`ActuarError::Driver`] if navigation fails.
    async fn open_url(&self, url: &str) -> ActuarResult<()> {
        self.actions().goto(url).await
    }

    /// Title of the currently loaded document
    ///
    /// # Errors
    ///
    /// Returns [`ActuarError::Driver`] if the title cannot be read.
    async fn title(&self) -> ActuarResult<String> {
        self.actions().driver().title().await
    }
}
