//! Capability sets the harness drives

pub mod digest;
pub mod pubkey;

pub use digest::{digest, DigestAlgorithm, DigestContext};
pub use pubkey::PubkeyAlgorithm;
