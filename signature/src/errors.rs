//! Error types for the GOST 34.10 signature scheme.

use gost_curve::CurveError;
use thiserror::Error;

/// Errors that can occur during key generation, signing and verification.
///
/// These are environment or configuration failures. A signature that simply
/// does not verify is reported through [`crate::Verification`], never here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GostError {
    /// The random source failed to produce a scalar.
    #[error("random source: {0}")]
    Random(#[from] CurveError),
    /// The hash function failed.
    #[error("hash function failed: {0}")]
    Hash(String),
    /// The hash function returned a digest of the wrong size.
    #[error("digest has {actual} bytes, expected {expected}")]
    DigestLength { expected: usize, actual: usize },
    /// Every nonce drawn produced `r = 0` or `s = 0`.
    ///
    /// Only reachable with a broken random source or a pathologically
    /// small subgroup order.
    #[error("no valid nonce found after {attempts} attempts")]
    RetryBudgetExceeded { attempts: usize },
    /// A private scalar outside `[1, q-1]` was supplied.
    #[error("private scalar outside [1, q-1]")]
    ScalarOutOfRange,
    /// A signature component does not fit in the hash width.
    ///
    /// The subgroup order is wider than the selected hash.
    #[error("signature component has {bits} bits, wider than the {width}-bit hash")]
    ScalarTooWide { bits: u64, width: usize },
    /// The point at infinity was supplied as a public key.
    #[error("verifying key is the point at infinity")]
    IdentityKey,
}

/// Errors raised while decoding a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The buffer does not hold exactly two components of the hash width.
    #[error("signature has {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },
    /// The text form contains a character other than `0` or `1`, or has the
    /// wrong number of bits.
    #[error("malformed signature bit string")]
    BitString,
}
