//! # pkcheck
//!
//! Conformance checks for public-key algorithms.
//!
//! An algorithm implements [`api::PubkeyAlgorithm`] (and the digests it signs
//! with implement [`api::DigestAlgorithm`]); the harness then runs known-answer
//! encryption and signature vectors against it and reports every assertion.
//!
//! ## Features
//!
//! - `harness` (default): the conformance checks, vector loading and reports
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`pkcheck-api`]: traits, key material, contexts and errors
//! - [`pkcheck-harness`]: checks, vector files, registry and runner

// Core re-exports (always available)
pub use pkcheck_api as api;

// Feature-gated re-exports
#[cfg(feature = "harness")]
pub use pkcheck_harness as harness;

/// Common imports for pkcheck users
pub mod prelude {
    pub use crate::api::{
        DigestAlgorithm, DigestContext, Error, KeyMaterial, PubkeyAlgorithm, PubkeyContext, Result,
    };

    #[cfg(feature = "harness")]
    pub use crate::harness::{
        pubkey_ok, pubkey_sign_ok, CheckError, EncryptionTestVector, Harness, HarnessConfig,
        Registry, Report, Runner, SignatureTestVector, SigningMode, Summary,
    };
}
