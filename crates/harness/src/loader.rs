//! Loads public-key test vectors from JSON files
//!
//! A suite file names a default algorithm and lists encryption and signature
//! cases; binary fields are hex strings:
//!
//! ```json
//! {
//!   "algorithm": "RSA",
//!   "encryption": [
//!     { "name": "rsa1024-test", "privateKey": "…", "publicKey": "…",
//!       "plaintext": "74657374", "ciphertext": "…" }
//!   ],
//!   "signature": [
//!     { "name": "rsa1024-sha256", "digest": "SHA-256", "privateKey": "…",
//!       "publicKey": "…", "plaintext": "…", "signature": "…" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CheckError, Result};
use crate::model::{EncryptionTestVector, SignatureTestVector, SigningMode};
use crate::registry::Registry;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionCase {
    pub name: String,
    /// Overrides the suite-level algorithm
    #[serde(default)]
    pub algorithm: Option<String>,
    pub private_key: String,
    pub public_key: String,
    pub plaintext: String,
    pub ciphertext: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureCase {
    pub name: String,
    #[serde(default)]
    pub algorithm: Option<String>,
    pub digest: String,
    pub private_key: String,
    pub public_key: String,
    pub plaintext: String,
    pub signature: String,
    #[serde(default)]
    pub signing: SigningMode,
}

/// One vector file, before algorithm names are resolved
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorSuite {
    #[serde(default)]
    pub description: Option<String>,
    pub algorithm: String,
    #[serde(default)]
    pub encryption: Vec<EncryptionCase>,
    #[serde(default)]
    pub signature: Vec<SignatureCase>,
}

/// Vectors bound to registered algorithms, ready to run
#[derive(Debug, Default)]
pub struct ResolvedSuite<'r> {
    pub encryption: Vec<EncryptionTestVector<'r>>,
    pub signature: Vec<SignatureTestVector<'r>>,
}

impl ResolvedSuite<'_> {
    pub fn len(&self) -> usize {
        self.encryption.len() + self.signature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn decode(vector: &str, field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value.trim()).map_err(|source| CheckError::Hex {
        vector: vector.to_string(),
        field,
        source,
    })
}

impl VectorSuite {
    /// Bind every case to its algorithms and decode the hex fields
    pub fn resolve<'r>(&self, registry: &'r Registry) -> Result<ResolvedSuite<'r>> {
        let mut resolved = ResolvedSuite::default();

        for case in &self.encryption {
            let pubkey = registry.pubkey(case.algorithm.as_deref().unwrap_or(&self.algorithm))?;
            resolved.encryption.push(EncryptionTestVector::new(
                case.name.clone(),
                pubkey,
                decode(&case.name, "privateKey", &case.private_key)?,
                decode(&case.name, "publicKey", &case.public_key)?,
                decode(&case.name, "plaintext", &case.plaintext)?,
                decode(&case.name, "ciphertext", &case.ciphertext)?,
            ));
        }

        for case in &self.signature {
            let pubkey = registry.pubkey(case.algorithm.as_deref().unwrap_or(&self.algorithm))?;
            let digest = registry.digest(&case.digest)?;
            resolved.signature.push(
                SignatureTestVector::new(
                    case.name.clone(),
                    pubkey,
                    digest,
                    decode(&case.name, "privateKey", &case.private_key)?,
                    decode(&case.name, "publicKey", &case.public_key)?,
                    decode(&case.name, "plaintext", &case.plaintext)?,
                    decode(&case.name, "signature", &case.signature)?,
                )
                .with_signing(case.signing),
            );
        }

        Ok(resolved)
    }
}

/// Parse a suite from JSON text
pub fn parse_suite(json: &str) -> Result<VectorSuite> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a suite file
pub fn load_suite(path: impl AsRef<Path>) -> Result<VectorSuite> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_suite(&json)
}
