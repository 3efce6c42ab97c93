//! Encryption conformance check

use pkcheck_api::PubkeyAlgorithm;
use tracing::{debug, info_span};
use zeroize::Zeroizing;

use super::{bounded, ContextGuard, KeyRole, Recorder, Step};
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::model::EncryptionTestVector;
use crate::report::{AssertionId, Location, Report};

/// Assertions belonging to one round-trip direction
struct Direction {
    label: &'static str,
    encrypt: AssertionId,
    decrypt_len: AssertionId,
    decrypt_bytes: AssertionId,
}

const PRIVATE_TO_PUBLIC: Direction = Direction {
    label: "private->public",
    encrypt: AssertionId::PrivateEncrypt,
    decrypt_len: AssertionId::PublicDecryptLength,
    decrypt_bytes: AssertionId::PublicDecryptBytes,
};

const PUBLIC_TO_PRIVATE: Direction = Direction {
    label: "public->private",
    encrypt: AssertionId::PublicEncrypt,
    decrypt_len: AssertionId::PrivateDecryptLength,
    decrypt_bytes: AssertionId::PrivateDecryptBytes,
};

/// Run the encryption check for one vector
///
/// 1. known ciphertext decrypts to the plaintext with the private key
/// 2. plaintext encrypted with the private key decrypts with the public key
/// 3. plaintext encrypted with the public key decrypts with the private key
///
/// Intermediate ciphertexts are never compared to the vector's ciphertext,
/// since encryption may be randomized.
///
/// # Errors
///
/// Returns [`CheckError::ContextInit`](crate::CheckError::ContextInit) when
/// either key cannot be loaded. Assertion failures are reported in the
/// returned [`Report`], not as errors.
pub fn check_encryption(
    vector: &EncryptionTestVector<'_>,
    config: &HarnessConfig,
    location: Location,
) -> Result<Report> {
    let pubkey = vector.pubkey;
    let _span = info_span!("pubkey_ok", vector = %vector.name, algorithm = pubkey.name()).entered();

    let private_ctx = ContextGuard::init(pubkey, &vector.private_key, KeyRole::Private, &vector.name)?;
    let public_ctx = ContextGuard::init(pubkey, &vector.public_key, KeyRole::Public, &vector.name)?;
    let max_len = pubkey.max_len(&private_ctx);
    debug!(max_len, plaintext_len = vector.plaintext.len(), "contexts ready");

    let mut rec = Recorder::new(Report::new(&vector.name, pubkey.name(), location), config);
    let _ = run(&mut rec, vector, &private_ctx, &public_ctx, max_len);

    drop(public_ctx);
    drop(private_ctx);
    Ok(rec.finish())
}

fn run(
    rec: &mut Recorder,
    vector: &EncryptionTestVector<'_>,
    private_ctx: &ContextGuard<'_>,
    public_ctx: &ContextGuard<'_>,
    max_len: usize,
) -> Step {
    known_decrypt(rec, vector, private_ctx, max_len)?;
    round_trip(rec, vector, private_ctx, public_ctx, max_len, &PRIVATE_TO_PUBLIC)?;
    round_trip(rec, vector, public_ctx, private_ctx, max_len, &PUBLIC_TO_PRIVATE)
}

fn known_decrypt(
    rec: &mut Recorder,
    vector: &EncryptionTestVector<'_>,
    private_ctx: &ContextGuard<'_>,
    max_len: usize,
) -> Step {
    decrypt_and_compare(
        rec,
        vector.pubkey,
        private_ctx,
        &vector.ciphertext,
        &vector.plaintext,
        max_len,
        AssertionId::KnownDecryptLength,
        AssertionId::KnownDecryptBytes,
    )
}

fn round_trip(
    rec: &mut Recorder,
    vector: &EncryptionTestVector<'_>,
    encrypt_ctx: &ContextGuard<'_>,
    decrypt_ctx: &ContextGuard<'_>,
    max_len: usize,
    dir: &Direction,
) -> Step {
    let pubkey = vector.pubkey;
    let mut encrypted = vec![0u8; max_len];

    let encrypted_len = match pubkey
        .encrypt(encrypt_ctx, &vector.plaintext, &mut encrypted)
        .map_err(|e| e.to_string())
        .and_then(|len| bounded(len, max_len))
    {
        Ok(len) => {
            rec.pass(dir.encrypt)?;
            len
        }
        Err(detail) => {
            rec.fault(dir.encrypt, detail)?;
            rec.skip(dir.decrypt_len, "encryption produced no ciphertext")?;
            return rec.skip(dir.decrypt_bytes, "encryption produced no ciphertext");
        }
    };
    debug!(direction = dir.label, encrypted_len, "encrypted");

    decrypt_and_compare(
        rec,
        pubkey,
        decrypt_ctx,
        &encrypted[..encrypted_len],
        &vector.plaintext,
        max_len,
        dir.decrypt_len,
        dir.decrypt_bytes,
    )
}

#[allow(clippy::too_many_arguments)]
fn decrypt_and_compare(
    rec: &mut Recorder,
    pubkey: &dyn PubkeyAlgorithm,
    ctx: &ContextGuard<'_>,
    ciphertext: &[u8],
    plaintext: &[u8],
    max_len: usize,
    len_id: AssertionId,
    bytes_id: AssertionId,
) -> Step {
    let mut decrypted = Zeroizing::new(vec![0u8; max_len]);

    let decrypted_len = match pubkey
        .decrypt(ctx, ciphertext, &mut decrypted)
        .map_err(|e| e.to_string())
        .and_then(|len| bounded(len, max_len))
    {
        Ok(len) => len,
        Err(detail) => {
            rec.fail(len_id, detail)?;
            return rec.skip(bytes_id, "decryption produced no plaintext");
        }
    };

    rec.check(len_id, decrypted_len == plaintext.len(), || {
        format!("expected {} bytes, got {}", plaintext.len(), decrypted_len)
    })?;
    rec.check(bytes_id, &decrypted[..decrypted_len] == plaintext, || {
        "decrypted bytes differ from the plaintext".to_string()
    })
}
