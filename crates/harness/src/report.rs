//! Assertion outcomes and per-vector reports

use core::fmt;
use serde::Serialize;

use crate::error::{CheckError, Result};
use crate::runner::Summary;

/// Source position of the code that requested a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Location of the caller, propagated through `#[track_caller]` frames
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line(), loc.column())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Identifies one assertion of a conformance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionId {
    // Encryption check
    KnownDecryptLength,
    KnownDecryptBytes,
    PrivateEncrypt,
    PublicDecryptLength,
    PublicDecryptBytes,
    PublicEncrypt,
    PrivateDecryptLength,
    PrivateDecryptBytes,
    // Signature check
    SignLength,
    SignBytes,
    SignVerifies,
    Verify,
    TamperRejected,
}

impl AssertionId {
    pub fn description(self) -> &'static str {
        match self {
            AssertionId::KnownDecryptLength => {
                "private-key decryption of the known ciphertext has the plaintext length"
            }
            AssertionId::KnownDecryptBytes => {
                "private-key decryption of the known ciphertext matches the plaintext"
            }
            AssertionId::PrivateEncrypt => "private-key encryption succeeds",
            AssertionId::PublicDecryptLength => {
                "public-key decryption of the private-key ciphertext has the plaintext length"
            }
            AssertionId::PublicDecryptBytes => {
                "public-key decryption of the private-key ciphertext matches the plaintext"
            }
            AssertionId::PublicEncrypt => "public-key encryption succeeds",
            AssertionId::PrivateDecryptLength => {
                "private-key decryption of the public-key ciphertext has the plaintext length"
            }
            AssertionId::PrivateDecryptBytes => {
                "private-key decryption of the public-key ciphertext matches the plaintext"
            }
            AssertionId::SignLength => "signature has the expected length",
            AssertionId::SignBytes => "signature matches the expected signature",
            AssertionId::SignVerifies => "fresh signature verifies with the public key",
            AssertionId::Verify => "expected signature verifies with the public key",
            AssertionId::TamperRejected => "corrupted signature is rejected",
        }
    }
}

impl fmt::Display for AssertionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    /// The algorithm produced a wrong answer
    Fail,
    /// The algorithm could not produce an answer at all
    Fault,
    /// Not evaluated because an earlier step produced nothing to check
    Skipped,
}

impl Outcome {
    pub fn is_failure(self) -> bool {
        matches!(self, Outcome::Fail | Outcome::Fault)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assertion {
    pub id: AssertionId,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Every assertion evaluated for one vector, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub vector: String,
    pub algorithm: &'static str,
    pub location: Location,
    pub assertions: Vec<Assertion>,
    /// Set when `fail_fast` stopped the check early
    pub halted: bool,
}

impl Report {
    pub fn new(vector: impl Into<String>, algorithm: &'static str, location: Location) -> Self {
        Self {
            vector: vector.into(),
            algorithm,
            location,
            assertions: Vec::new(),
            halted: false,
        }
    }

    pub fn push(&mut self, id: AssertionId, outcome: Outcome, detail: Option<String>) {
        self.assertions.push(Assertion { id, outcome, detail });
    }

    /// True when no assertion failed or faulted
    pub fn is_success(&self) -> bool {
        !self.assertions.iter().any(|a| a.outcome.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &Assertion> {
        self.assertions.iter().filter(|a| a.outcome.is_failure())
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.assertions.iter().filter(|a| a.outcome == outcome).count()
    }

    /// Outcome recorded for `id`, if that assertion was reached
    pub fn outcome(&self, id: AssertionId) -> Option<Outcome> {
        self.assertions.iter().find(|a| a.id == id).map(|a| a.outcome)
    }

    /// Convert into an error listing every failure
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        let failures = self
            .failures()
            .map(render_assertion)
            .collect::<Vec<_>>()
            .join("\n");
        Err(CheckError::Failed {
            vector: self.vector,
            location: self.location,
            failures,
        })
    }
}

fn render_assertion(a: &Assertion) -> String {
    match &a.detail {
        Some(detail) => format!("  [{:?}] {}: {}", a.outcome, a.id, detail),
        None => format!("  [{:?}] {}", a.outcome, a.id),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_success() { "ok" } else { "FAILED" };
        writeln!(
            f,
            "{} ({}) at {}: {}",
            self.vector, self.algorithm, self.location, status
        )?;
        for a in &self.assertions {
            writeln!(f, "{}", render_assertion(a))?;
        }
        if self.halted {
            writeln!(f, "  (stopped at first failure)")?;
        }
        Ok(())
    }
}

/// Human-readable report for a whole run
pub fn render_summary(summary: &Summary) -> String {
    let mut report = String::new();

    report.push_str("=== Public Key Conformance Report ===\n\n");
    report.push_str("Summary:\n");
    report.push_str(&format!("  Vectors: {}\n", summary.total()));
    report.push_str(&format!("  Passed: {}\n", summary.passed()));
    report.push_str(&format!("  Failed: {}\n", summary.failed()));
    report.push_str(&format!("  Errored: {}\n", summary.errors.len()));

    if summary.failed() > 0 {
        report.push_str("\nFailed vectors:\n");
        for r in summary.reports.iter().filter(|r| !r.is_success()) {
            report.push_str(&format!("  {} ({}) at {}\n", r.vector, r.algorithm, r.location));
            for a in r.failures() {
                report.push_str(&format!("  {}\n", render_assertion(a)));
            }
        }
    }

    if !summary.errors.is_empty() {
        report.push_str("\nErrored vectors:\n");
        for e in &summary.errors {
            report.push_str(&format!("  {}: {}\n", e.vector, e.message));
        }
    }

    report
}
