//! Harness configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CheckError, Result};

/// Bit flipped in the tamper-detection check unless configured otherwise
pub const DEFAULT_TAMPER_MASK: u8 = 0x40;

/// Which byte of the expected signature the tamper check corrupts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TamperOffset {
    /// `len / 2`, away from header and trailer bytes some encodings tolerate
    #[default]
    Midpoint,
    /// A fixed index, clamped to the last byte
    Index(usize),
}

impl TamperOffset {
    /// Resolve to a byte index for a signature of `len` bytes (`len >= 1`)
    pub fn index(self, len: usize) -> usize {
        match self {
            TamperOffset::Midpoint => len / 2,
            TamperOffset::Index(i) => i.min(len.saturating_sub(1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Stop a check at its first failing assertion. Contexts are still
    /// finalized.
    pub fail_fast: bool,
    /// XOR mask applied to the tampered byte; must be non-zero
    pub tamper_mask: u8,
    pub tamper_offset: TamperOffset,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            tamper_mask: DEFAULT_TAMPER_MASK,
            tamper_offset: TamperOffset::Midpoint,
        }
    }
}

// Builder methods for easy customization
impl HarnessConfig {
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_tamper_mask(mut self, mask: u8) -> Self {
        self.tamper_mask = mask;
        self
    }

    pub fn with_tamper_offset(mut self, offset: TamperOffset) -> Self {
        self.tamper_offset = offset;
        self
    }
}

impl HarnessConfig {
    /// Stop at the first failing assertion of each vector
    pub fn halting() -> Self {
        Self::default().with_fail_fast(true)
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tamper_mask == 0 {
            return Err(CheckError::Config(
                "tamper_mask must flip at least one bit".into(),
            ));
        }
        Ok(())
    }
}
