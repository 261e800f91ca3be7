//! Structured action events.
//!
//! Every facade operation reports what it did through an injected
//! [`EventSink`] rather than a process-wide logger, so embedders can route
//! events to tracing, a report file, or a test collector.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

use crate::timeout::millis;

/// One observed action: what ran, against which target, and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Operation name, e.g. `"click"`
    pub action: String,
    /// Resolved locator the operation acted on, if any
    pub target: Option<String>,
    /// Extra context: URL, typed text (masked if requested), condition text
    pub detail: Option<String>,
    /// Wall-clock time the operation took, in milliseconds
    pub elapsed_ms: Option<u64>,
}

impl ActionEvent {
    /// Create an event for an operation
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            target: None,
            detail: None,
            elapsed_ms: None,
        }
    }

    /// Attach the resolved locator
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Attach extra context
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the elapsed time
    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed_ms = Some(millis(elapsed));
        self
    }
}

/// Destination for action events.
///
/// Implementations must be cheap and infallible; the facade never blocks on
/// its sink.
pub trait EventSink: Send + Sync {
    /// Record one event
    fn record(&self, event: &ActionEvent);
}

/// Default sink forwarding events to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &ActionEvent) {
        tracing::info!(
            action = %event.action,
            locator = event.target.as_deref().unwrap_or("-"),
            detail = event.detail.as_deref().unwrap_or("-"),
            elapsed_ms = event.elapsed_ms,
            "action"
        );
    }
}

/// Sink that keeps every event in memory. Intended for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ActionEvent>>,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events
    #[must_use]
    pub fn events(&self) -> Vec<ActionEvent> {
        self.events.lock().map(|e| (*e).clone()).unwrap_or_default()
    }

    /// Names of all recorded actions, in order
    #[must_use]
    pub fn action_names(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .map(|event| event.action)
            .collect()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &ActionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Install a fmt tracing subscriber honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = ActionEvent::new("click")
            .with_target("xpath=//button")
            .with_detail("first attempt")
            .with_elapsed(Duration::from_millis(42));
        assert_eq!(event.action, "click");
        assert_eq!(event.target.as_deref(), Some("xpath=//button"));
        assert_eq!(event.elapsed_ms, Some(42));
    }

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        sink.record(&ActionEvent::new("goto"));
        sink.record(&ActionEvent::new("click"));
        assert_eq!(sink.action_names(), ["goto", "click"]);
    }

    #[test]
    fn test_event_serializes() {
        let event = ActionEvent::new("type_text").with_detail("***");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type_text\""));
        assert!(json.contains("\"***\""));
    }
}
