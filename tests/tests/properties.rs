// tests/properties.rs
use pkcheck_api::{KeyMaterial, PubkeyAlgorithm, PubkeyContext};
use pkcheck_harness::{EncryptionTestVector, Harness, HarnessConfig, TamperOffset};
use pkcheck_tests::fixtures::{self, RSA_SUITE};
use pkcheck_tests::rsa::RsaPkcs1;
use pkcheck_tests::REGISTRY;
use proptest::prelude::*;

fn encrypt_with(key: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let mut ctx = PubkeyContext::new(RsaPkcs1.context_size());
    RsaPkcs1.init(&mut ctx, &KeyMaterial::from_slice(key)).unwrap();
    let mut out = vec![0u8; RsaPkcs1.max_len(&ctx)];
    let len = RsaPkcs1.encrypt(&ctx, plaintext, &mut out).unwrap();
    out.truncate(len);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Every message that fits the 1024-bit modulus passes the full check
    #[test]
    fn prop_rsa_encryption_check_holds(plaintext in proptest::collection::vec(any::<u8>(), 0..=117)) {
        let raw = fixtures::rsa1024_test();
        let ciphertext = encrypt_with(&raw.public_key, &plaintext);
        let vector = EncryptionTestVector::new("random", &RsaPkcs1, raw.private_key, raw.public_key, plaintext, ciphertext);

        let report = Harness::default().check_encryption(&vector).unwrap();
        prop_assert!(report.is_success(), "{}", report);
    }

    /// Any single-bit corruption of a valid signature is rejected
    #[test]
    fn prop_rsa_rejects_any_tamper(index in 0usize..256, bit in 0u32..8) {
        let config = HarnessConfig::default()
            .with_tamper_mask(1u8 << bit)
            .with_tamper_offset(TamperOffset::Index(index));
        let harness = Harness::new(config).unwrap();

        for vector in RSA_SUITE.resolve(&REGISTRY).unwrap().signature {
            let report = harness.check_signature(&vector).unwrap();
            prop_assert!(report.is_success(), "{}", report);
        }
    }
}
