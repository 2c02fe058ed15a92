//! Core configuration for one generation run.

use serde::{Deserialize, Serialize};

use crate::casing::CaseStrategy;

/// Options consumed by the core pipeline.
///
/// Plumbing concerns (paths, separator, formatting, verbosity) stay in the
/// CLI layer; the core only sees what affects the rendered text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Name of the emitted struct; passed through unchanged, even when empty.
    pub type_name: String,
    /// Header casing strategy.
    pub strategy: CaseStrategy,
    /// Whether the emitted text names its enclosing package.
    pub include_package_header: bool,
}
