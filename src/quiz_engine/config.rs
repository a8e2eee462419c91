use serde::{Deserialize, Serialize};

use crate::quiz_engine::scorer::PassPolicy;

/// Questions drawn for a random test when no count is given.
pub const DEFAULT_RANDOM_COUNT: usize = 30;
/// Questions shown per page in both test modes.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

/// Per-session settings chosen by the caller when a session is created.
///
/// Missing fields fall back to [`SessionConfig::random_exam`] when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub page_size: usize,
    pub pass_policy: PassPolicy,
    /// Countdown length. `None` or `Some(0)` disables the timer.
    pub time_limit_secs: Option<u32>,
}

impl SessionConfig {
    /// Fixed-length random test: at most 5 errors.
    pub fn random_exam() -> Self {
        SessionConfig {
            page_size: DEFAULT_PAGE_SIZE,
            pass_policy: PassPolicy::max_errors(5),
            time_limit_secs: None,
        }
    }

    /// Variable-length section test: errors tolerated in proportion 4/30.
    pub fn section_exam() -> Self {
        SessionConfig {
            page_size: DEFAULT_PAGE_SIZE,
            pass_policy: PassPolicy::proportional(4, 30),
            time_limit_secs: None,
        }
    }

    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Page size used for pagination; a configured 0 is treated as 1.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::random_exam()
    }
}

// ---------------------------------------------------------------------------
// Session requests
// ---------------------------------------------------------------------------

/// How the question set of a new session is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Shuffle the whole bank and keep the first `count` questions.
    Random { count: usize },
    /// Every question of one section in bank order, optionally filtered.
    Section { name: String, filter: Option<String> },
    /// Study listing over one section or, with `None`, the whole bank.
    Browse { section: Option<String>, filter: Option<String> },
}

impl SessionMode {
    pub fn random() -> Self {
        SessionMode::Random { count: DEFAULT_RANDOM_COUNT }
    }

    pub fn section(name: impl Into<String>) -> Self {
        SessionMode::Section { name: name.into(), filter: None }
    }

    /// Preset matching this mode's usual pass policy.
    pub fn default_config(&self) -> SessionConfig {
        match self {
            SessionMode::Random { .. } => SessionConfig::random_exam(),
            SessionMode::Section { .. } | SessionMode::Browse { .. } => SessionConfig::section_exam(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub mode: SessionMode,
    pub config: SessionConfig,
    /// Seed for random sampling. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    /// Fail with `EmptySession` instead of starting an empty session.
    pub require_non_empty: bool,
}

impl SessionRequest {
    /// Minimal constructor: the mode's preset config, entropy seeding,
    /// empty sessions allowed.
    pub fn new(mode: SessionMode) -> Self {
        let config = mode.default_config();
        SessionRequest { mode, config, rng_seed: None, require_non_empty: false }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn non_empty(mut self) -> Self {
        self.require_non_empty = true;
        self
    }
}
