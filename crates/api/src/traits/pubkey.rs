//! Trait definition for public-key algorithms under test

use super::digest::DigestAlgorithm;
use crate::error::Result;
use crate::types::{KeyMaterial, PubkeyContext};

/// Capability set of an asymmetric algorithm
///
/// Every operation works on a [`PubkeyContext`] previously filled by
/// [`init`](Self::init). The same trait covers both key halves: whether a
/// context holds a private or a public key is decided by the key material it
/// was initialized from, and `encrypt`/`decrypt` apply the raw transform for
/// whichever key the context holds.
///
/// The trait is object safe so vectors and registries can hold
/// `&dyn PubkeyAlgorithm`.
pub trait PubkeyAlgorithm: Send + Sync {
    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Size in bytes of the working state required per key
    fn context_size(&self) -> usize;

    /// Initialize `ctx` from encoded key material
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextInit`](crate::Error::ContextInit) when the key
    /// cannot be decoded or does not fit the context.
    fn init(&self, ctx: &mut PubkeyContext, key: &KeyMaterial) -> Result<()>;

    /// Maximum plaintext, ciphertext or signature length for this key
    fn max_len(&self, ctx: &PubkeyContext) -> usize;

    /// Encrypt `plaintext` into `out`, returning the ciphertext length
    ///
    /// `out` is at least [`max_len`](Self::max_len) bytes long.
    fn encrypt(&self, ctx: &PubkeyContext, plaintext: &[u8], out: &mut [u8]) -> Result<usize>;

    /// Decrypt `ciphertext` into `out`, returning the plaintext length
    fn decrypt(&self, ctx: &PubkeyContext, ciphertext: &[u8], out: &mut [u8]) -> Result<usize>;

    /// Sign a precomputed digest value, returning the signature length
    fn sign(
        &self,
        ctx: &PubkeyContext,
        digest: &dyn DigestAlgorithm,
        value: &[u8],
        out: &mut [u8],
    ) -> Result<usize>;

    /// Verify `signature` over a precomputed digest value
    fn verify(
        &self,
        ctx: &PubkeyContext,
        digest: &dyn DigestAlgorithm,
        value: &[u8],
        signature: &[u8],
    ) -> Result<()>;

    /// Release the state held by `ctx`
    ///
    /// Must be safe to call more than once. The default wipes the buffer.
    fn finalize(&self, ctx: &mut PubkeyContext) {
        ctx.wipe();
    }
}
