//! Test vectors checked by the harness
//!
//! Vectors own their byte data and borrow the algorithms they target, so a
//! single algorithm instance (typically a `static` or an entry in a
//! [`Registry`](crate::Registry)) can back any number of vectors.

use core::fmt;
use pkcheck_api::{DigestAlgorithm, KeyMaterial, PubkeyAlgorithm};
use serde::{Deserialize, Serialize};

/// Whether a signature scheme produces one signature per key and digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningMode {
    /// Signing must reproduce the expected signature byte for byte
    #[default]
    Deterministic,
    /// Signing is randomized; a fresh signature only has to verify
    Randomized,
}

/// Known-answer vector for the encryption check
///
/// Ground truth: decrypting `ciphertext` with `private_key` yields
/// `plaintext`.
#[derive(Clone)]
pub struct EncryptionTestVector<'a> {
    pub name: String,
    pub pubkey: &'a dyn PubkeyAlgorithm,
    pub private_key: KeyMaterial,
    pub public_key: KeyMaterial,
    pub plaintext: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl<'a> EncryptionTestVector<'a> {
    pub fn new(
        name: impl Into<String>,
        pubkey: &'a dyn PubkeyAlgorithm,
        private_key: impl Into<KeyMaterial>,
        public_key: impl Into<KeyMaterial>,
        plaintext: impl Into<Vec<u8>>,
        ciphertext: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            pubkey,
            private_key: private_key.into(),
            public_key: public_key.into(),
            plaintext: plaintext.into(),
            ciphertext: ciphertext.into(),
        }
    }
}

impl fmt::Debug for EncryptionTestVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionTestVector")
            .field("name", &self.name)
            .field("pubkey", &self.pubkey.name())
            .field("private_key", &self.private_key)
            .field("public_key", &self.public_key)
            .field("plaintext_len", &self.plaintext.len())
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

/// Known-answer vector for the signature check
///
/// In [`SigningMode::Deterministic`], signing the `digest` of `plaintext`
/// with `private_key` yields `signature`.
#[derive(Clone)]
pub struct SignatureTestVector<'a> {
    pub name: String,
    pub pubkey: &'a dyn PubkeyAlgorithm,
    pub digest: &'a dyn DigestAlgorithm,
    pub private_key: KeyMaterial,
    pub public_key: KeyMaterial,
    pub plaintext: Vec<u8>,
    pub signature: Vec<u8>,
    pub signing: SigningMode,
}

impl<'a> SignatureTestVector<'a> {
    pub fn new(
        name: impl Into<String>,
        pubkey: &'a dyn PubkeyAlgorithm,
        digest: &'a dyn DigestAlgorithm,
        private_key: impl Into<KeyMaterial>,
        public_key: impl Into<KeyMaterial>,
        plaintext: impl Into<Vec<u8>>,
        signature: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            pubkey,
            digest,
            private_key: private_key.into(),
            public_key: public_key.into(),
            plaintext: plaintext.into(),
            signature: signature.into(),
            signing: SigningMode::Deterministic,
        }
    }

    pub fn with_signing(mut self, signing: SigningMode) -> Self {
        self.signing = signing;
        self
    }
}

impl fmt::Debug for SignatureTestVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureTestVector")
            .field("name", &self.name)
            .field("pubkey", &self.pubkey.name())
            .field("digest", &self.digest.name())
            .field("private_key", &self.private_key)
            .field("public_key", &self.public_key)
            .field("plaintext_len", &self.plaintext.len())
            .field("signature_len", &self.signature.len())
            .field("signing", &self.signing)
            .finish()
    }
}
