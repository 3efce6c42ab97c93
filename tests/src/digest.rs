//! SHA-2 digests over the `sha2` crate

use pkcheck_api::{DigestAlgorithm, DigestContext};
use sha2::Digest;

struct Sha2Context<D>(D);

impl<D: Digest> DigestContext for Sha2Context<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>, out: &mut [u8]) {
        let Self(inner) = *self;
        out.copy_from_slice(&inner.finalize());
    }
}

macro_rules! sha2_digest {
    ($name:ident, $inner:ty, $label:literal, $size:literal) => {
        #[doc = concat!($label, " digest")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl DigestAlgorithm for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn context_size(&self) -> usize {
                core::mem::size_of::<$inner>()
            }

            fn digest_size(&self) -> usize {
                $size
            }

            fn init(&self) -> Box<dyn DigestContext> {
                Box::new(Sha2Context(<$inner>::new()))
            }
        }
    };
}

sha2_digest!(Sha224, sha2::Sha224, "SHA-224", 28);
sha2_digest!(Sha256, sha2::Sha256, "SHA-256", 32);
sha2_digest!(Sha384, sha2::Sha384, "SHA-384", 48);
sha2_digest!(Sha512, sha2::Sha512, "SHA-512", 64);

#[cfg(test)]
mod tests {
    use super::*;
    use pkcheck_api::digest;

    #[test]
    fn test_known_answers() {
        assert_eq!(
            hex::encode(digest(&Sha256, b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hex::encode(digest(&Sha224, b"")),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
    }

    #[test]
    fn test_incremental_updates_match_one_shot() {
        for alg in [&Sha224 as &dyn DigestAlgorithm, &Sha256, &Sha384, &Sha512] {
            let mut ctx = alg.init();
            ctx.update(b"Hello ");
            ctx.update(b"world\n");
            let mut out = vec![0u8; alg.digest_size()];
            ctx.finalize(&mut out);
            assert_eq!(out, digest(alg, b"Hello world\n"), "{}", alg.name());
        }
    }
}
