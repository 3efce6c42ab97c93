//! Error type definitions for public-key and digest operations

use std::fmt;

/// Primary error type returned by algorithm implementations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Context could not be initialized from the supplied key material
    ContextInit {
        context: &'static str,
        message: String,
    },

    /// Key material is malformed or does not suit the requested operation
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Encryption failed
    EncryptionFailed {
        context: &'static str,
        message: String,
    },

    /// Decryption failed (bad padding, out-of-range ciphertext, ...)
    DecryptionFailed {
        context: &'static str,
        message: String,
    },

    /// Signing failed
    SigningFailed {
        context: &'static str,
        message: String,
    },

    /// Signature did not verify
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Digest algorithm is not usable with this public-key algorithm
    UnsupportedDigest {
        context: &'static str,
        digest: &'static str,
    },
}

/// Result type for algorithm operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a context initialization failure
    pub fn context_init(context: &'static str, message: impl Into<String>) -> Self {
        Self::ContextInit {
            context,
            message: message.into(),
        }
    }

    /// Replace the message carried by an error, keeping its kind and context
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::ContextInit { context, .. } => Self::ContextInit { context, message },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::EncryptionFailed { context, .. } => Self::EncryptionFailed { context, message },
            Self::DecryptionFailed { context, .. } => Self::DecryptionFailed { context, message },
            Self::SigningFailed { context, .. } => Self::SigningFailed { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength { .. } | Self::UnsupportedDigest { .. } => self,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContextInit { context, message } => {
                write!(f, "Context initialization failed: {}: {}", context, message)
            }
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::EncryptionFailed { context, message } => {
                write!(f, "Encryption failed: {}: {}", context, message)
            }
            Self::DecryptionFailed { context, message } => {
                write!(f, "Decryption failed: {}: {}", context, message)
            }
            Self::SigningFailed { context, message } => {
                write!(f, "Signing failed: {}: {}", context, message)
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::UnsupportedDigest { context, digest } => {
                write!(f, "{}: unsupported digest {}", context, digest)
            }
        }
    }
}
