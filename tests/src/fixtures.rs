//! Known-answer data shipped with the test crate

use once_cell::sync::Lazy;
use pkcheck_harness::{parse_suite, EncryptionCase, VectorSuite};
use std::path::{Path, PathBuf};

/// RSA suite: PKCS#1 v1.5 encryption and SHA-2 signatures, 1024 and 2048 bits
pub const RSA_VECTORS: &str = include_str!("vectors/rsa.json");

/// Directory holding the JSON vector files
pub fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

pub static RSA_SUITE: Lazy<VectorSuite> =
    Lazy::new(|| parse_suite(RSA_VECTORS).unwrap_or_else(|e| panic!("rsa.json: {}", e)));

/// Decoded encryption case, for driving algorithms directly
#[derive(Debug, Clone)]
pub struct RawEncryptionVector {
    pub private_key: Vec<u8>,
    pub public_key: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl From<&EncryptionCase> for RawEncryptionVector {
    fn from(case: &EncryptionCase) -> Self {
        let field = |name: &str, value: &str| {
            hex::decode(value).unwrap_or_else(|e| panic!("{}.{}: {}", case.name, name, e))
        };
        Self {
            private_key: field("privateKey", &case.private_key),
            public_key: field("publicKey", &case.public_key),
            plaintext: field("plaintext", &case.plaintext),
            ciphertext: field("ciphertext", &case.ciphertext),
        }
    }
}

pub fn encryption_case(name: &str) -> &'static EncryptionCase {
    RSA_SUITE
        .encryption
        .iter()
        .find(|case| case.name == name)
        .unwrap_or_else(|| panic!("no encryption vector named {}", name))
}

/// 1024-bit key pair encrypting the four bytes `"test"`
pub fn rsa1024_test() -> RawEncryptionVector {
    encryption_case("rsa1024-test").into()
}
