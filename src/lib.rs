//! DeepL node - translation step for workflow pipelines
//!
//! This library maps pipeline items to DeepL `/translate` requests, maps the
//! responses back to paired output items, and provides the node's UI metadata
//! and target-language lookup.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod node;

// Re-export key types for convenience
pub use crate::core::{
    client::{ApiRequester, DeeplClient},
    config::{ApiPlan, DeeplConfig},
    errors::{DeeplError, Result},
    models::{
        FailureRecord, ItemParameters, LanguageOption, NodeInput, NodeOperation, NodeOutput,
        TranslationRequest, TranslationResult,
    },
};

pub use node::{batch::FailureMode, DeeplNode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
