//! Conformance checks for public-key algorithms
//!
//! Two procedures are exposed, one per vector shape:
//!
//! - [`check_encryption`] decrypts a known ciphertext and round-trips the
//!   plaintext through both key directions.
//! - [`check_signature`] signs a digest deterministically, verifies the known
//!   signature and checks that a corrupted copy is rejected.
//!
//! Each check records every assertion in a [`Report`] instead of stopping at
//! the first mismatch (unless [`HarnessConfig::fail_fast`] is set), and always
//! finalizes the contexts it created.
//!
//! ```ignore
//! let harness = Harness::default();
//! let report = harness.check_encryption(&vector)?;
//! assert!(report.is_success(), "{}", report);
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod registry;
pub mod report;
pub mod runner;

mod macros;


pub use check::{check_encryption, check_signature, Harness, KeyRole};
pub use config::{HarnessConfig, TamperOffset};
pub use error::{CheckError, Result};
pub use loader::{load_suite, parse_suite, EncryptionCase, ResolvedSuite, SignatureCase, VectorSuite};
pub use model::{EncryptionTestVector, SignatureTestVector, SigningMode};
pub use registry::Registry;
pub use report::{render_summary, Assertion, AssertionId, Location, Outcome, Report};
pub use runner::{Runner, Summary, VectorError};
