//! Structured error types for the conformance harness

use std::path::PathBuf;
use thiserror::Error;

use crate::check::KeyRole;
use crate::report::Location;

#[derive(Debug, Error)]
pub enum CheckError {
    /// The algorithm rejected the vector's key material. This is a fault in
    /// the algorithm or its configuration, not a conformance mismatch.
    #[error("{role} context initialization failed for vector {vector}: {source}")]
    ContextInit {
        vector: String,
        role: KeyRole,
        #[source]
        source: pkcheck_api::Error,
    },

    #[error("conformance failures in vector {vector} (checked at {location}):\n{failures}")]
    Failed {
        vector: String,
        location: Location,
        failures: String,
    },

    #[error("suite failed: {failed} vector(s) failed, {errored} could not run")]
    SuiteFailed { failed: usize, errored: usize },

    #[error("unknown {kind} algorithm: {name}")]
    UnknownAlgorithm { kind: &'static str, name: String },

    #[error("{kind} algorithm already registered: {name}")]
    DuplicateAlgorithm { kind: &'static str, name: String },

    #[error("hex decode error in {vector}.{field}: {source}")]
    Hex {
        vector: String,
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;
