//! Translator configuration.
//!
//! Options are read from JSON with camelCase keys; every field has a default,
//! so `{}` is a valid configuration.
//!
//! ```json
//! {
//!   "reportLossyTypes": true,
//!   "typeRenames": { "Observable": "Stream" },
//!   "libraryPrefixes": { "Stream": "async" },
//!   "maxTypeDepth": 128
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tsdart_common::limits::MAX_TYPE_NODE_DEPTH;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslateOptions {
    /// Report a warning for every type that degrades to `dynamic`
    /// (non-map type literals, unions, function types). Output is unchanged.
    pub report_lossy_types: bool,
    /// Additional or overriding type-name renames for the facade resolver.
    pub type_renames: FxHashMap<String, String>,
    /// Type name -> import prefix, rendered as `prefix.Name`.
    pub library_prefixes: FxHashMap<String, String>,
    /// Maximum type-node nesting depth before the translator gives up on a subtree.
    pub max_type_depth: u32,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            report_lossy_types: false,
            type_renames: FxHashMap::default(),
            library_prefixes: FxHashMap::default(),
            max_type_depth: MAX_TYPE_NODE_DEPTH,
        }
    }
}

impl TranslateOptions {
    /// Parse options from a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid translator options")
    }

    /// Read and parse an options file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }
}
