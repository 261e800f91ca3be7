//! Named timeout tiers for element finding and waits.
//!
//! Instead of sprinkling raw durations through a test suite, callers pick a
//! tier (`Short`, `Medium`, `Long`, `Absurd`) whose concrete duration comes
//! from one shared [`Timeouts`] table, or override it per call with an
//! explicit duration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Named timeout bucket. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutTier {
    /// A couple of seconds, for elements that should already be there
    Short,
    /// The everyday default
    Medium,
    /// Slow pages and heavy renders
    Long,
    /// Last resort before declaring the page broken
    Absurd,
}

impl TimeoutTier {
    /// Tier name as used in configuration files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Absurd => "absurd",
        }
    }
}

impl std::fmt::Display for TimeoutTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-call timeout selection: the shared default, a named tier, or an
/// explicit override. An explicit duration always wins because the variants
/// are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeout {
    /// Use the configured default duration
    #[default]
    Default,
    /// Use a named tier from the [`Timeouts`] table
    Tier(TimeoutTier),
    /// Use this exact duration
    Explicit(Duration),
}

impl From<TimeoutTier> for Timeout {
    fn from(tier: TimeoutTier) -> Self {
        Self::Tier(tier)
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        Self::Explicit(duration)
    }
}

/// Duration table mapping each tier to a concrete wait, plus the default used
/// when no tier is named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeouts {
    short: Duration,
    medium: Duration,
    long: Duration,
    absurd: Duration,
    default: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            short: Duration::from_secs(2),
            medium: Duration::from_secs(5),
            long: Duration::from_secs(10),
            absurd: Duration::from_secs(20),
            default: Duration::from_secs(5),
        }
    }
}

impl Timeouts {
    /// Create a table with the default tier durations
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the short tier duration
    #[must_use]
    pub const fn with_short(mut self, duration: Duration) -> Self {
        self.short = duration;
        self
    }

    /// Set the medium tier duration
    #[must_use]
    pub const fn with_medium(mut self, duration: Duration) -> Self {
        self.medium = duration;
        self
    }

    /// Set the long tier duration
    #[must_use]
    pub const fn with_long(mut self, duration: Duration) -> Self {
        self.long = duration;
        self
    }

    /// Set the absurd tier duration
    #[must_use]
    pub const fn with_absurd(mut self, duration: Duration) -> Self {
        self.absurd = duration;
        self
    }

    /// Set the duration used when no tier is named
    #[must_use]
    pub const fn with_default(mut self, duration: Duration) -> Self {
        self.default = duration;
        self
    }

    /// Concrete duration for a tier
    #[must_use]
    pub const fn duration_for(&self, tier: TimeoutTier) -> Duration {
        match tier {
            TimeoutTier::Short => self.short,
            TimeoutTier::Medium => self.medium,
            TimeoutTier::Long => self.long,
            TimeoutTier::Absurd => self.absurd,
        }
    }

    /// The duration used when no tier is named
    #[must_use]
    pub const fn default_duration(&self) -> Duration {
        self.default
    }

    /// Resolve a per-call selection to a concrete duration
    #[must_use]
    pub const fn resolve(&self, timeout: Timeout) -> Duration {
        match timeout {
            Timeout::Default => self.default,
            Timeout::Tier(tier) => self.duration_for(tier),
            Timeout::Explicit(duration) => duration,
        }
    }
}

/// Duration in whole milliseconds, saturating
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
