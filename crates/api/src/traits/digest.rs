//! Trait definitions for digest algorithms used by signature checks

/// A running digest computation
pub trait DigestContext {
    /// Absorb more input
    fn update(&mut self, data: &[u8]);

    /// Finish the computation, writing the digest into `out`
    ///
    /// `out` is exactly [`DigestAlgorithm::digest_size`] bytes long.
    fn finalize(self: Box<Self>, out: &mut [u8]);
}

/// Capability set of a digest algorithm
pub trait DigestAlgorithm: Send + Sync {
    /// Returns the algorithm name, e.g. `"SHA-256"`
    fn name(&self) -> &'static str;

    /// Size in bytes of the running state
    fn context_size(&self) -> usize;

    /// Size in bytes of the finished digest
    fn digest_size(&self) -> usize;

    /// Start a fresh computation
    fn init(&self) -> Box<dyn DigestContext>;
}

/// Digest `data` in a single update
pub fn digest(algorithm: &dyn DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    let mut ctx = algorithm.init();
    ctx.update(data);
    let mut out = vec![0u8; algorithm.digest_size()];
    ctx.finalize(&mut out);
    out
}
