//! Algorithm-facing API for the pkcheck conformance harness
//!
//! This crate defines the capability sets the harness drives: the
//! [`PubkeyAlgorithm`] trait for asymmetric encrypt/decrypt/sign/verify
//! primitives and the [`DigestAlgorithm`] trait for the hash that feeds
//! signing. Algorithm implementations live elsewhere and plug in through
//! these traits as trait objects.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{KeyMaterial, PubkeyContext};

pub use traits::{digest, DigestAlgorithm, DigestContext, PubkeyAlgorithm};
