//! Process-wide registry of the reference algorithms

use once_cell::sync::Lazy;
use pkcheck_harness::{Registry, Result};

use crate::digest::{Sha224, Sha256, Sha384, Sha512};
use crate::rsa::RsaPkcs1;

/// Every reference algorithm, registered once
pub static REGISTRY: Lazy<Registry> =
    Lazy::new(|| reference_registry().unwrap_or_else(|e| panic!("reference registry: {}", e)));

fn reference_registry() -> Result<Registry> {
    let mut registry = Registry::new();
    registry.register_pubkey(RsaPkcs1)?;
    registry.register_digest(Sha224)?;
    registry.register_digest(Sha256)?;
    registry.register_digest(Sha384)?;
    registry.register_digest(Sha512)?;
    Ok(registry)
}
