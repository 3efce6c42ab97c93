//! Runs a resolved suite and collects per-vector reports

use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::check::{check_encryption, check_signature, Harness};
use crate::error::{CheckError, Result};
use crate::loader::ResolvedSuite;
use crate::report::{Location, Report};

/// A vector that could not be checked at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorError {
    pub vector: String,
    pub message: String,
}

/// Outcome of a suite run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub reports: Vec<Report>,
    pub errors: Vec<VectorError>,
}

impl Summary {
    /// Vectors attempted, including those that errored
    pub fn total(&self) -> usize {
        self.reports.len() + self.errors.len()
    }

    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.failed() == 0
    }

    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CheckError::SuiteFailed {
                failed: self.failed(),
                errored: self.errors.len(),
            })
        }
    }

    fn record(&mut self, vector: &str, result: Result<Report>) {
        match result {
            Ok(report) => self.reports.push(report),
            Err(e) => {
                warn!(vector, error = %e, "vector could not be checked");
                self.errors.push(VectorError {
                    vector: vector.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }
}

pub struct Runner<'h> {
    harness: &'h Harness,
}

impl<'h> Runner<'h> {
    pub fn new(harness: &'h Harness) -> Self {
        Self { harness }
    }

    /// Check every vector in the suite. A vector whose keys cannot be loaded
    /// is recorded as an error and does not stop the run.
    #[track_caller]
    pub fn run_suite(&self, suite: &ResolvedSuite<'_>) -> Summary {
        let location = Location::caller();
        let config = self.harness.config();
        let _span = info_span!("run_suite", vectors = suite.len()).entered();

        let mut summary = Summary::default();
        for vector in &suite.encryption {
            summary.record(&vector.name, check_encryption(vector, config, location));
        }
        for vector in &suite.signature {
            summary.record(&vector.name, check_signature(vector, config, location));
        }

        info!(
            total = summary.total(),
            passed = summary.passed(),
            failed = summary.failed(),
            errored = summary.errors.len(),
            "suite complete"
        );
        summary
    }
}
