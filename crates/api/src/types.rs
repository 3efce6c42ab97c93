//! Key material and per-key working state
//!
//! Both types hold secrets for private keys, so both wipe their bytes when
//! dropped and neither prints its contents through `Debug`.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Result};

/// Opaque encoded key, private or public, in whatever encoding the
/// algorithm under test expects
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    bytes: Vec<u8>,
}

impl KeyMaterial {
    /// Wrap an encoded key
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Copy an encoded key out of a slice
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }

    /// Borrow the encoded key
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the encoding in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the encoding is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for KeyMaterial {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for KeyMaterial {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for KeyMaterial {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for KeyMaterial {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_slice(bytes)
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial([REDACTED; {}])", self.bytes.len())
    }
}

/// Algorithm-defined working state for one key
///
/// The buffer is allocated once at the size reported by
/// [`PubkeyAlgorithm::context_size`](crate::PubkeyAlgorithm::context_size)
/// and never grows; algorithms serialize whatever state they need into it.
/// [`wipe`](Self::wipe) may be called any number of times.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PubkeyContext {
    buf: Vec<u8>,
}

impl PubkeyContext {
    /// Allocate a zeroed context of `size` bytes
    pub fn new(size: usize) -> Self {
        Self { buf: vec![0u8; size] }
    }

    /// Size of the context buffer in bytes
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Borrow the stored state
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Mutably borrow the stored state
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Copy `state` into the start of the buffer, zero-filling the rest
    pub fn store(&mut self, state: &[u8]) -> Result<()> {
        if state.len() > self.buf.len() {
            return Err(Error::InvalidLength {
                context: "PubkeyContext::store",
                expected: self.buf.len(),
                actual: state.len(),
            });
        }
        self.wipe();
        self.buf[..state.len()].copy_from_slice(state);
        Ok(())
    }

    /// Overwrite the whole buffer with zeros
    pub fn wipe(&mut self) {
        self.buf.as_mut_slice().zeroize();
    }

    /// True when every byte of the buffer is zero
    pub fn is_wiped(&self) -> bool {
        self.buf.iter().all(|&b| b == 0)
    }
}

impl fmt::Debug for PubkeyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubkeyContext([REDACTED; {}])", self.buf.len())
    }
}
