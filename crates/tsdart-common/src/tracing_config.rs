//! Tracing subscriber setup for the `tsdart` binary and test harnesses.
//!
//! `TSDART_LOG` (falling back to `RUST_LOG`) holds an `EnvFilter` directive;
//! `TSDART_LOG_FORMAT` picks the layer:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented spans via `tracing-tree`, one level per nested type node
//! - `json`: one JSON object per event
//!
//! ```bash
//! TSDART_LOG=debug TSDART_LOG_FORMAT=tree tsdart types.json
//! TSDART_LOG="tsdart_emitter::translator=trace" tsdart types.json
//! ```
//!
//! Nothing is installed unless a filter variable is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// A resolved logging request: which events to keep and how to print them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    pub filter: String,
    pub format: LogFormat,
}

impl TracingSettings {
    /// Settings from the process environment, or `None` when logging is off.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Settings from an arbitrary variable lookup. `TSDART_LOG` wins over
    /// `RUST_LOG`; an empty value counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let filter = ["TSDART_LOG", "RUST_LOG"]
            .into_iter()
            .filter_map(&lookup)
            .find(|value| !value.trim().is_empty())?;
        let format = lookup("TSDART_LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Some(Self { filter, format })
    }

    /// Install these settings as the global subscriber, writing to stderr.
    ///
    /// Returns `false` when a global subscriber was already installed.
    pub fn install(&self) -> bool {
        let filter = EnvFilter::builder().parse_lossy(&self.filter);
        let registry = Registry::default().with(filter);
        let result = match self.format {
            LogFormat::Tree => registry
                .with(
                    tracing_tree::HierarchicalLayer::default()
                        .with_indent_amount(2)
                        .with_indent_lines(true)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Text => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
        };
        result.is_ok()
    }
}

/// Install the subscriber described by the environment, if any.
///
/// Returns whether a subscriber was installed by this call.
pub fn init_tracing() -> bool {
    TracingSettings::from_env().is_some_and(|settings| settings.install())
}
