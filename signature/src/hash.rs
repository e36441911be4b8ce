//! Message hashing for the signature scheme.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use streebog::{Digest, Streebog256, Streebog512};

use crate::constants::{SIG_SIZE_256, SIG_SIZE_512};
use crate::errors::GostError;

/// Hash width selecting the digest function and the signature size.
///
/// As a [`MessageHasher`] it hashes with GOST 34.11-2012 (Streebog) of the
/// matching output size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashWidth {
    /// 256-bit digest, 512-bit signature.
    W256,
    /// 512-bit digest, 1024-bit signature.
    W512,
}

impl HashWidth {
    /// Width in bits.
    #[inline]
    pub const fn bits(self) -> usize {
        match self {
            HashWidth::W256 => 256,
            HashWidth::W512 => 512,
        }
    }

    /// Width in bytes, which is also the size of one encoded signature component.
    #[inline]
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Size in bytes of an encoded signature `r || s`.
    #[inline]
    pub const fn signature_size(self) -> usize {
        match self {
            HashWidth::W256 => SIG_SIZE_256,
            HashWidth::W512 => SIG_SIZE_512,
        }
    }
}

/// Hash function used to derive the message representative `e`.
///
/// Implementations return a digest of exactly `width().bytes()` bytes.
pub trait MessageHasher {
    fn width(&self) -> HashWidth;

    fn hash(&self, msg: &[u8]) -> Result<Vec<u8>, GostError>;
}

impl MessageHasher for HashWidth {
    #[inline]
    fn width(&self) -> HashWidth {
        *self
    }

    fn hash(&self, msg: &[u8]) -> Result<Vec<u8>, GostError> {
        Ok(match self {
            HashWidth::W256 => Streebog256::digest(msg).to_vec(),
            HashWidth::W512 => Streebog512::digest(msg).to_vec(),
        })
    }
}

/// Computes the message representative `e = H(msg) mod q`, with `e = 0`
/// replaced by `1`.
///
/// The digest is read as a big-endian unsigned integer.
pub(crate) fn message_scalar<H: MessageHasher + ?Sized>(
    hasher: &H,
    msg: &[u8],
    q: &BigUint,
) -> Result<BigUint, GostError> {
    let expected = hasher.width().bytes();
    let digest = hasher.hash(msg)?;
    if digest.len() != expected {
        return Err(GostError::DigestLength {
            expected,
            actual: digest.len(),
        });
    }

    let alpha = BigUint::from_bytes_be(&digest);
    let e = alpha % q;
    if e.is_zero() {
        return Ok(BigUint::from(1u32));
    }

    Ok(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_sizes() {
        assert_eq!(HashWidth::W256.hash(b"abc").expect("hash").len(), 32);
        assert_eq!(HashWidth::W512.hash(b"abc").expect("hash").len(), 64);
        assert_eq!(HashWidth::W256.signature_size(), 2 * HashWidth::W256.bytes());
        assert_eq!(HashWidth::W512.signature_size(), 2 * HashWidth::W512.bytes());
    }

    fn unhex(s: &str) -> Vec<u8> {
        let digits: String = s.split_whitespace().collect();
        BigUint::parse_bytes(digits.as_bytes(), 16)
            .expect("hex")
            .to_bytes_be()
    }

    #[test]
    fn test_known_digests() {
        // gost-engine etalon: "12345670" repeated 128 times.
        let msg = b"12345670".repeat(128);
        assert_eq!(
            HashWidth::W256.hash(&msg).expect("hash"),
            unhex("1906512b86a1283c68cec8419e57113efc562a1d0e95d8f4809542900c416fe4")
        );
        assert_eq!(
            HashWidth::W512.hash(&msg).expect("hash"),
            unhex(
                "283587e434864d0d4bea97c0fb10e2dd421572fc859304bdf6a94673d652c590
                 49212bad7802b4fcf5eecc1f8fab569d60f2c20dbd789a7fe4efbd79d8137ee7"
            )
        );
    }

    #[test]
    fn test_widths_are_distinct_functions() {
        // Streebog-256 is not a truncation of Streebog-512.
        let d256 = HashWidth::W256.hash(b"abc").expect("hash");
        let d512 = HashWidth::W512.hash(b"abc").expect("hash");
        assert_ne!(d256[..], d512[..32]);
        assert_ne!(d256[..], d512[32..]);
    }

    #[test]
    fn test_message_scalar_reduces_mod_q() {
        let q = BigUint::from(7u32);
        let digest = HashWidth::W256.hash(b"message").expect("hash");
        let e = message_scalar(&HashWidth::W256, b"message", &q).expect("scalar");
        let alpha = BigUint::from_bytes_be(&digest) % &q;
        if alpha.is_zero() {
            assert_eq!(e, BigUint::from(1u32));
        } else {
            assert_eq!(e, alpha);
        }
    }

    struct Truncated;

    impl MessageHasher for Truncated {
        fn width(&self) -> HashWidth {
            HashWidth::W512
        }

        fn hash(&self, _msg: &[u8]) -> Result<Vec<u8>, GostError> {
            Ok(vec![1u8; 32])
        }
    }

    #[test]
    fn test_wrong_digest_length_rejected() {
        let res = message_scalar(&Truncated, b"m", &BigUint::from(7u32));
        assert_eq!(
            res,
            Err(GostError::DigestLength {
                expected: 64,
                actual: 32
            })
        );
    }
}
