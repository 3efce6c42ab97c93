//! Signature conformance check

use pkcheck_api::digest;
use tracing::{debug, info_span};

use super::{bounded, ContextGuard, KeyRole, Recorder, Step};
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::model::{SignatureTestVector, SigningMode};
use crate::report::{AssertionId, Location, Report};

/// Run the signature check for one vector
///
/// The plaintext is digested once, then:
///
/// 1. signing the digest with the private key reproduces the expected
///    signature (or, for [`SigningMode::Randomized`], produces a signature
///    that verifies)
/// 2. the expected signature verifies with the public key
/// 3. the expected signature with one bit flipped does not verify
///
/// # Errors
///
/// Returns [`CheckError::ContextInit`](crate::CheckError::ContextInit) when
/// either key cannot be loaded.
pub fn check_signature(
    vector: &SignatureTestVector<'_>,
    config: &HarnessConfig,
    location: Location,
) -> Result<Report> {
    let pubkey = vector.pubkey;
    let _span = info_span!(
        "pubkey_sign_ok",
        vector = %vector.name,
        algorithm = pubkey.name(),
        digest = vector.digest.name()
    )
    .entered();

    let private_ctx = ContextGuard::init(pubkey, &vector.private_key, KeyRole::Private, &vector.name)?;
    let public_ctx = ContextGuard::init(pubkey, &vector.public_key, KeyRole::Public, &vector.name)?;
    let max_len = pubkey.max_len(&private_ctx);

    let digest_value = digest(vector.digest, &vector.plaintext);
    debug!(
        max_len,
        digest_size = digest_value.len(),
        digest_context_size = vector.digest.context_size(),
        "digest computed"
    );

    let mut rec = Recorder::new(Report::new(&vector.name, pubkey.name(), location), config);
    let _ = run(&mut rec, vector, config, &private_ctx, &public_ctx, &digest_value, max_len);

    drop(public_ctx);
    drop(private_ctx);
    Ok(rec.finish())
}

fn run(
    rec: &mut Recorder,
    vector: &SignatureTestVector<'_>,
    config: &HarnessConfig,
    private_ctx: &ContextGuard<'_>,
    public_ctx: &ContextGuard<'_>,
    digest_value: &[u8],
    max_len: usize,
) -> Step {
    match vector.signing {
        SigningMode::Deterministic => sign_exact(rec, vector, private_ctx, digest_value, max_len)?,
        SigningMode::Randomized => sign_fresh(rec, vector, private_ctx, public_ctx, digest_value, max_len)?,
    }
    verify_expected(rec, vector, public_ctx, digest_value)?;
    reject_tampered(rec, vector, config, public_ctx, digest_value)
}

fn sign(
    vector: &SignatureTestVector<'_>,
    private_ctx: &ContextGuard<'_>,
    digest_value: &[u8],
    out: &mut [u8],
) -> core::result::Result<usize, String> {
    let max_len = out.len();
    vector
        .pubkey
        .sign(private_ctx, vector.digest, digest_value, out)
        .map_err(|e| e.to_string())
        .and_then(|len| bounded(len, max_len))
}

fn sign_exact(
    rec: &mut Recorder,
    vector: &SignatureTestVector<'_>,
    private_ctx: &ContextGuard<'_>,
    digest_value: &[u8],
    max_len: usize,
) -> Step {
    let mut signature = vec![0u8; max_len];
    let signature_len = match sign(vector, private_ctx, digest_value, &mut signature) {
        Ok(len) => len,
        Err(detail) => {
            rec.fault(AssertionId::SignLength, detail)?;
            return rec.skip(AssertionId::SignBytes, "signing produced no signature");
        }
    };

    rec.check(AssertionId::SignLength, signature_len == vector.signature.len(), || {
        format!("expected {} bytes, got {}", vector.signature.len(), signature_len)
    })?;
    rec.check(AssertionId::SignBytes, signature[..signature_len] == vector.signature[..], || {
        "signature differs from the expected signature".to_string()
    })
}

fn sign_fresh(
    rec: &mut Recorder,
    vector: &SignatureTestVector<'_>,
    private_ctx: &ContextGuard<'_>,
    public_ctx: &ContextGuard<'_>,
    digest_value: &[u8],
    max_len: usize,
) -> Step {
    let mut signature = vec![0u8; max_len];
    let signature_len = match sign(vector, private_ctx, digest_value, &mut signature) {
        Ok(len) => len,
        Err(detail) => return rec.fault(AssertionId::SignVerifies, detail),
    };

    match vector
        .pubkey
        .verify(public_ctx, vector.digest, digest_value, &signature[..signature_len])
    {
        Ok(()) => rec.pass(AssertionId::SignVerifies),
        Err(e) => rec.fail(AssertionId::SignVerifies, e.to_string()),
    }
}

fn verify_expected(
    rec: &mut Recorder,
    vector: &SignatureTestVector<'_>,
    public_ctx: &ContextGuard<'_>,
    digest_value: &[u8],
) -> Step {
    match vector
        .pubkey
        .verify(public_ctx, vector.digest, digest_value, &vector.signature)
    {
        Ok(()) => rec.pass(AssertionId::Verify),
        Err(e) => rec.fail(AssertionId::Verify, e.to_string()),
    }
}

fn reject_tampered(
    rec: &mut Recorder,
    vector: &SignatureTestVector<'_>,
    config: &HarnessConfig,
    public_ctx: &ContextGuard<'_>,
    digest_value: &[u8],
) -> Step {
    if vector.signature.is_empty() {
        return rec.fail(
            AssertionId::TamperRejected,
            "expected signature is empty, nothing to corrupt",
        );
    }

    let mut bad = vector.signature.clone();
    let index = config.tamper_offset.index(bad.len());
    bad[index] ^= config.tamper_mask;
    debug!(index, mask = config.tamper_mask, "signature corrupted");

    let accepted = vector
        .pubkey
        .verify(public_ctx, vector.digest, digest_value, &bad)
        .is_ok();
    rec.check(AssertionId::TamperRejected, !accepted, || {
        format!(
            "signature with byte {} xored by {:#04x} was accepted",
            index, config.tamper_mask
        )
    })
}
