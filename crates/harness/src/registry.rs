//! Name-keyed registry of algorithms available to vector files

use std::collections::HashMap;

use pkcheck_api::{DigestAlgorithm, PubkeyAlgorithm};

use crate::error::{CheckError, Result};

/// Algorithms that vector files may refer to by name
///
/// Names are matched case-insensitively.
#[derive(Default)]
pub struct Registry {
    pubkeys: HashMap<String, Box<dyn PubkeyAlgorithm>>,
    digests: HashMap<String, Box<dyn DigestAlgorithm>>,
}

fn key(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_pubkey(&mut self, algorithm: impl PubkeyAlgorithm + 'static) -> Result<()> {
        let name = key(algorithm.name());
        if self.pubkeys.contains_key(&name) {
            return Err(CheckError::DuplicateAlgorithm {
                kind: "public-key",
                name,
            });
        }
        self.pubkeys.insert(name, Box::new(algorithm));
        Ok(())
    }

    pub fn register_digest(&mut self, algorithm: impl DigestAlgorithm + 'static) -> Result<()> {
        let name = key(algorithm.name());
        if self.digests.contains_key(&name) {
            return Err(CheckError::DuplicateAlgorithm { kind: "digest", name });
        }
        self.digests.insert(name, Box::new(algorithm));
        Ok(())
    }

    pub fn pubkey(&self, name: &str) -> Result<&dyn PubkeyAlgorithm> {
        self.pubkeys
            .get(&key(name))
            .map(|b| &**b)
            .ok_or_else(|| CheckError::UnknownAlgorithm {
                kind: "public-key",
                name: name.to_string(),
            })
    }

    pub fn digest(&self, name: &str) -> Result<&dyn DigestAlgorithm> {
        self.digests
            .get(&key(name))
            .map(|b| &**b)
            .ok_or_else(|| CheckError::UnknownAlgorithm {
                kind: "digest",
                name: name.to_string(),
            })
    }

    /// Registered public-key algorithm names, sorted
    pub fn pubkey_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.pubkeys.values().map(|a| a.name()).collect();
        names.sort_unstable();
        names
    }

    /// Registered digest algorithm names, sorted
    pub fn digest_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.digests.values().map(|a| a.name()).collect();
        names.sort_unstable();
        names
    }
}
