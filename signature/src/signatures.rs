//! Signature type, its fixed-width encoding and verification outcomes.

use core::fmt;

use num_bigint::BigUint;

use crate::errors::{GostError, SignatureError};
use crate::hash::HashWidth;

/// A GOST 34.10 signature consisting of two scalars.
///
/// The signature is a pair `(r, s)` where:
/// - `r` is the x-coordinate of the commitment `k * P`, reduced mod `q`
/// - `s = (r * d + k * e) mod q`
///
/// # Encoding
///
/// On the wire, `r` and `s` are each written as a big-endian integer of
/// exactly `width` bits (zero padded on the left) and concatenated, `r`
/// first, giving `2 * width / 8` bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
    width: HashWidth,
}

impl Signature {
    /// Assemble a signature from its components.
    ///
    /// Fails if either component does not fit in `width` bits.
    pub fn new(r: BigUint, s: BigUint, width: HashWidth) -> Result<Self, GostError> {
        for component in [&r, &s] {
            let bits = component.bits();
            if bits > width.bits() as u64 {
                return Err(GostError::ScalarTooWide {
                    bits,
                    width: width.bits(),
                });
            }
        }
        Ok(Self { r, s, width })
    }

    #[inline]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    #[inline]
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    #[inline]
    pub fn width(&self) -> HashWidth {
        self.width
    }

    /// Encode as `r || s`, each component `width / 8` big-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.width.bytes();
        let mut out = vec![0u8; 2 * len];
        write_be(&self.r, &mut out[..len]);
        write_be(&self.s, &mut out[len..]);
        out
    }

    /// Decode `r || s` for the given hash width.
    ///
    /// `r` is read from bytes `[0, width/8)` and `s` from
    /// `[width/8, 2*width/8)`. The components are not range-checked here.
    pub fn from_bytes(width: HashWidth, bytes: &[u8]) -> Result<Self, SignatureError> {
        let expected = width.signature_size();
        if bytes.len() != expected {
            return Err(SignatureError::Length {
                expected,
                actual: bytes.len(),
            });
        }

        let (r, s) = bytes.split_at(width.bytes());
        Ok(Self {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
            width,
        })
    }

    /// Render as a string of `2 * width` ASCII `0`/`1` characters.
    ///
    /// Only meant for debugging output.
    pub fn to_bit_string(&self) -> String {
        let bits = self.width.bits();
        format!("{:0>bits$}{:0>bits$}", self.r.to_str_radix(2), self.s.to_str_radix(2))
    }

    /// Parse the output of [`Signature::to_bit_string`].
    ///
    /// `r` is bits `[0, width)` and `s` is bits `[width, 2*width)`.
    pub fn from_bit_string(width: HashWidth, text: &str) -> Result<Self, SignatureError> {
        let bits = width.bits();
        if text.len() != 2 * bits || !text.bytes().all(|c| c == b'0' || c == b'1') {
            return Err(SignatureError::BitString);
        }

        let (r, s) = text.as_bytes().split_at(bits);
        let r = BigUint::parse_bytes(r, 2).ok_or(SignatureError::BitString)?;
        let s = BigUint::parse_bytes(s, 2).ok_or(SignatureError::BitString)?;
        Ok(Self { r, s, width })
    }
}

fn write_be(value: &BigUint, out: &mut [u8]) {
    let bytes = value.to_bytes_be();
    let offset = out.len() - bytes.len();
    out[offset..].copy_from_slice(&bytes);
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Reason a signature was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The encoded signature has the wrong length or hash width.
    Malformed,
    /// `r` or `s` lies outside `[1, q-1]`.
    ComponentOutOfRange,
    /// The message representative `e` has no inverse modulo `q`.
    ///
    /// Only possible when the configured `q` is not prime.
    NonInvertibleDigest,
    /// The recomputed commitment is the point at infinity.
    IdentityPoint,
    /// The recomputed `R` differs from `r`.
    Mismatch,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::Malformed => "malformed signature",
            Rejection::ComponentOutOfRange => "signature component out of range",
            Rejection::NonInvertibleDigest => "message representative not invertible mod q",
            Rejection::IdentityPoint => "commitment is the point at infinity",
            Rejection::Mismatch => "signature does not match",
        })
    }
}

/// Outcome of verifying a signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verification {
    Valid,
    Invalid(Rejection),
}

impl Verification {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_encoding_layout() {
        let sig = Signature::new(n(0x0102), n(0x03), HashWidth::W256).expect("fits");
        let bytes = sig.to_bytes();

        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[30..32], &[0x01, 0x02]);
        assert!(bytes[..30].iter().all(|b| *b == 0));
        assert_eq!(bytes[63], 0x03);
        assert!(bytes[32..63].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_decode_boundary() {
        // Last byte of r and first byte of s sit on either side of the boundary.
        let mut bytes = vec![0u8; 128];
        bytes[63] = 0x80;
        bytes[64] = 0x01;
        let sig = Signature::from_bytes(HashWidth::W512, &bytes).expect("decode");

        assert_eq!(*sig.r(), n(0x80));
        assert_eq!(*sig.s(), n(1) << 504u32);
        assert_eq!(sig.to_bytes(), bytes);
    }

    #[test]
    fn test_decode_wrong_length() {
        let res = Signature::from_bytes(HashWidth::W256, &[0u8; 63]);
        assert_eq!(
            res,
            Err(SignatureError::Length {
                expected: 64,
                actual: 63
            })
        );
        assert!(Signature::from_bytes(HashWidth::W512, &[0u8; 64]).is_err());
    }

    #[test]
    fn test_component_too_wide() {
        let res = Signature::new(n(1) << 256u32, n(1), HashWidth::W256);
        assert_eq!(
            res,
            Err(GostError::ScalarTooWide {
                bits: 257,
                width: 256
            })
        );
        assert!(Signature::new(n(1) << 256u32, n(1), HashWidth::W512).is_ok());
    }

    #[test]
    fn test_bit_string_form() {
        let sig = Signature::new(n(3), n(5), HashWidth::W256).expect("fits");
        let text = sig.to_bit_string();

        assert_eq!(text.len(), 512);
        assert!(text[..254].bytes().all(|c| c == b'0'));
        assert_eq!(&text[254..256], "11");
        assert_eq!(&text[509..], "101");
        assert_eq!(Signature::from_bit_string(HashWidth::W256, &text), Ok(sig));
    }

    #[test]
    fn test_bit_string_rejects_garbage() {
        let mut text = "0".repeat(512);
        text.replace_range(10..11, "2");
        assert_eq!(
            Signature::from_bit_string(HashWidth::W256, &text),
            Err(SignatureError::BitString)
        );
        assert_eq!(
            Signature::from_bit_string(HashWidth::W256, &"0".repeat(511)),
            Err(SignatureError::BitString)
        );
    }

    #[test]
    fn test_display_is_hex_of_bytes() {
        let sig = Signature::new(n(0xab), n(0x01), HashWidth::W256).expect("fits");
        let text = sig.to_string();
        assert_eq!(text.len(), 128);
        assert_eq!(&text[62..64], "ab");
        assert_eq!(&text[126..], "01");
    }

    #[test]
    fn test_verification_predicate() {
        assert!(Verification::Valid.is_valid());
        assert!(!Verification::Invalid(Rejection::Mismatch).is_valid());
    }
}
