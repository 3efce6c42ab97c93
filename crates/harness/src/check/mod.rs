//! Conformance check procedures and the plumbing they share

mod encryption;
mod signature;

pub use encryption::check_encryption;
pub use signature::check_signature;

use core::fmt;
use core::ops::Deref;
use pkcheck_api::{KeyMaterial, PubkeyAlgorithm, PubkeyContext};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::HarnessConfig;
use crate::error::{CheckError, Result};
use crate::model::{EncryptionTestVector, SignatureTestVector};
use crate::report::{AssertionId, Location, Outcome, Report};

/// Which half of the key pair a context holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyRole {
    Private,
    Public,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Private => f.write_str("private"),
            KeyRole::Public => f.write_str("public"),
        }
    }
}

/// Owns one initialized context and finalizes it through the algorithm when
/// dropped, on every exit path.
pub(crate) struct ContextGuard<'a> {
    pubkey: &'a dyn PubkeyAlgorithm,
    ctx: PubkeyContext,
    role: KeyRole,
}

impl<'a> ContextGuard<'a> {
    pub(crate) fn init(
        pubkey: &'a dyn PubkeyAlgorithm,
        key: &KeyMaterial,
        role: KeyRole,
        vector: &str,
    ) -> Result<Self> {
        let mut ctx = PubkeyContext::new(pubkey.context_size());
        if let Err(source) = pubkey.init(&mut ctx, key) {
            pubkey.finalize(&mut ctx);
            warn!(vector, %role, algorithm = pubkey.name(), error = %source, "context initialization failed");
            return Err(CheckError::ContextInit {
                vector: vector.to_string(),
                role,
                source,
            });
        }
        debug!(vector, %role, size = ctx.size(), "context initialized");
        Ok(Self { pubkey, ctx, role })
    }
}

impl Deref for ContextGuard<'_> {
    type Target = PubkeyContext;

    fn deref(&self) -> &PubkeyContext {
        &self.ctx
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        self.pubkey.finalize(&mut self.ctx);
        debug!(role = %self.role, "context finalized");
    }
}

/// Returned by [`Recorder`] methods when `fail_fast` stops the check
pub(crate) struct Halt;

pub(crate) type Step = core::result::Result<(), Halt>;

/// Collects assertion outcomes into a [`Report`]
pub(crate) struct Recorder {
    report: Report,
    fail_fast: bool,
}

impl Recorder {
    pub(crate) fn new(report: Report, config: &HarnessConfig) -> Self {
        Self {
            report,
            fail_fast: config.fail_fast,
        }
    }

    fn record(&mut self, id: AssertionId, outcome: Outcome, detail: Option<String>) -> Step {
        match outcome {
            Outcome::Pass => debug!(vector = %self.report.vector, assertion = ?id, "pass"),
            Outcome::Skipped => debug!(vector = %self.report.vector, assertion = ?id, "skipped"),
            Outcome::Fail | Outcome::Fault => warn!(
                vector = %self.report.vector,
                algorithm = self.report.algorithm,
                assertion = ?id,
                outcome = ?outcome,
                detail = detail.as_deref().unwrap_or(""),
                "assertion failed"
            ),
        }
        self.report.push(id, outcome, detail);
        if self.fail_fast && outcome.is_failure() {
            self.report.halted = true;
            return Err(Halt);
        }
        Ok(())
    }

    /// Record `Pass` when `ok`, otherwise `Fail` with a lazily built detail
    pub(crate) fn check(&mut self, id: AssertionId, ok: bool, detail: impl FnOnce() -> String) -> Step {
        if ok {
            self.record(id, Outcome::Pass, None)
        } else {
            self.record(id, Outcome::Fail, Some(detail()))
        }
    }

    pub(crate) fn pass(&mut self, id: AssertionId) -> Step {
        self.record(id, Outcome::Pass, None)
    }

    pub(crate) fn fail(&mut self, id: AssertionId, detail: impl Into<String>) -> Step {
        self.record(id, Outcome::Fail, Some(detail.into()))
    }

    pub(crate) fn fault(&mut self, id: AssertionId, detail: impl Into<String>) -> Step {
        self.record(id, Outcome::Fault, Some(detail.into()))
    }

    pub(crate) fn skip(&mut self, id: AssertionId, reason: &str) -> Step {
        self.record(id, Outcome::Skipped, Some(reason.to_string()))
    }

    pub(crate) fn finish(self) -> Report {
        self.report
    }
}

/// Length reported by an operation, checked against the buffer it wrote to
pub(crate) fn bounded(len: usize, max_len: usize) -> core::result::Result<usize, String> {
    if len > max_len {
        Err(format!("reported length {} exceeds maximum {}", len, max_len))
    } else {
        Ok(len)
    }
}

/// Entry point for drivers: runs checks with one configuration and
/// attributes each report to the caller's source location.
#[derive(Debug, Clone, Default)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    #[track_caller]
    pub fn check_encryption(&self, vector: &EncryptionTestVector<'_>) -> Result<Report> {
        check_encryption(vector, &self.config, Location::caller())
    }

    #[track_caller]
    pub fn check_signature(&self, vector: &SignatureTestVector<'_>) -> Result<Report> {
        check_signature(vector, &self.config, Location::caller())
    }
}
