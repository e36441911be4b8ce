//! Signing and verifying keys for the GOST 34.10 signature scheme.

use core::fmt;

use gost_curve::{AffinePoint, CurveError, CurveGroup, UniformRandom, mod_inverse, mod_neg};
use num_bigint::BigUint;
use num_traits::{CheckedSub, One, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::constants::MAX_SIGN_ATTEMPTS;
use crate::errors::GostError;
use crate::hash::{MessageHasher, message_scalar};
use crate::signatures::{Rejection, Signature, Verification};

/// A secret signing key: a scalar `d` in `[1, q-1]`.
///
/// The key does not carry its curve; every operation takes the
/// [`CurveGroup`] it was generated for. Its `Debug` output never shows the
/// scalar.
///
/// # Example
///
/// ```
/// use gost_curve::DomainParams;
/// use gost_signature::SigningKey;
///
/// let curve = DomainParams::gost_example_256().build().expect("params");
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&curve, &mut rng).expect("keygen");
/// let verifying_key = signing_key.verifying_key(&curve);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: BigUint,
}

/// A public verifying key: the point `Q = d * P`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: AffinePoint,
}

/// A signing key together with its verifying key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

/// Returns the closed scalar range `[1, q-1]`.
fn scalar_range(q: &BigUint) -> Result<(BigUint, BigUint), GostError> {
    let upper = q
        .checked_sub(&BigUint::one())
        .ok_or(CurveError::EmptyRange)?;
    Ok((BigUint::one(), upper))
}

impl SigningKey {
    /// Draws a signing key uniformly from `[1, q-1]`.
    ///
    /// # Arguments
    ///
    /// * `curve` - The curve the key is used with
    /// * `rng` - A cryptographically secure source of uniform integers
    pub fn random<R: UniformRandom + ?Sized>(
        curve: &CurveGroup,
        rng: &mut R,
    ) -> Result<Self, GostError> {
        let (low, high) = scalar_range(curve.q())?;
        let scalar = rng.uniform_inclusive(&low, &high)?;
        Ok(Self { scalar })
    }

    /// Loads an existing private scalar, rejecting values outside `[1, q-1]`.
    pub fn from_scalar(curve: &CurveGroup, scalar: BigUint) -> Result<Self, GostError> {
        if scalar.is_zero() || &scalar >= curve.q() {
            return Err(GostError::ScalarOutOfRange);
        }
        Ok(Self { scalar })
    }

    /// The secret scalar `d`.
    #[inline]
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Derives the verifying key `Q = d * P`.
    pub fn verifying_key(&self, curve: &CurveGroup) -> VerifyingKey {
        VerifyingKey {
            point: curve.mul_base(&self.scalar),
        }
    }

    /// Signs a message.
    ///
    /// The signature is computed as follows:
    /// 1. `e = H(msg) mod q`, replaced by `1` if it is zero
    /// 2. Draw a nonce `k` uniformly from `[1, q-1]`
    /// 3. `C = k * P`, `r = x(C) mod q`; a zero `r` discards `k`
    /// 4. `s = (r * d + k * e) mod q`; a zero `s` discards `k`
    ///
    /// At most [`MAX_SIGN_ATTEMPTS`] nonces are drawn.
    ///
    /// # Arguments
    ///
    /// * `curve` - The curve the key was generated for
    /// * `rng` - A cryptographically secure source of uniform integers for the nonce
    /// * `hasher` - Hash function; its width fixes the signature size
    /// * `msg` - The message to sign
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the signature on success, or a `GostError` if:
    /// - The hash or the random source fails
    /// - Every nonce drawn was rejected ([`GostError::RetryBudgetExceeded`])
    /// - `q` is wider than the hash width ([`GostError::ScalarTooWide`])
    pub fn sign<R, H>(
        &self,
        curve: &CurveGroup,
        rng: &mut R,
        hasher: &H,
        msg: &[u8],
    ) -> Result<Signature, GostError>
    where
        R: UniformRandom + ?Sized,
        H: MessageHasher + ?Sized,
    {
        let q = curve.q();
        let e = message_scalar(hasher, msg, q)?;
        let (low, high) = scalar_range(q)?;

        for attempt in 1..=MAX_SIGN_ATTEMPTS {
            let nonce = rng.uniform_inclusive(&low, &high)?;

            let r = match curve.mul_base(&nonce).x() {
                Some(x) => x % q,
                None => BigUint::zero(),
            };
            if r.is_zero() {
                warn!(attempt, "nonce gave r = 0, drawing another");
                continue;
            }

            let s = (&r * &self.scalar + &nonce * &e) % q;
            if s.is_zero() {
                warn!(attempt, "nonce gave s = 0, drawing another");
                continue;
            }

            return Signature::new(r, s, hasher.width());
        }

        error!(attempts = MAX_SIGN_ATTEMPTS, "signing retry budget exhausted");
        Err(GostError::RetryBudgetExceeded {
            attempts: MAX_SIGN_ATTEMPTS,
        })
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl VerifyingKey {
    /// Wraps a known public point, rejecting the point at infinity.
    pub fn from_point(point: AffinePoint) -> Result<Self, GostError> {
        if point.is_identity() {
            return Err(GostError::IdentityKey);
        }
        Ok(Self { point })
    }

    #[inline]
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Verifies a signature on a message using this verifying key.
    ///
    /// With `e = H(msg) mod q` (zero replaced by one) and `v = e^-1 mod q`,
    /// the check recomputes `C = (s*v) * P + (-r*v) * Q` and accepts iff
    /// `x(C) mod q == r`.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Verification::Valid)` if the signature is valid
    /// - `Ok(Verification::Invalid(_))` with the reason it was rejected
    /// - `Err(GostError)` only if the hash function fails
    pub fn verify<H: MessageHasher + ?Sized>(
        &self,
        curve: &CurveGroup,
        hasher: &H,
        msg: &[u8],
        sig: &Signature,
    ) -> Result<Verification, GostError> {
        if sig.width() != hasher.width() {
            return Ok(reject(Rejection::Malformed));
        }

        let q = curve.q();
        let (r, s) = (sig.r(), sig.s());
        if r.is_zero() || r >= q || s.is_zero() || s >= q {
            return Ok(reject(Rejection::ComponentOutOfRange));
        }

        let e = message_scalar(hasher, msg, q)?;
        let Some(v) = mod_inverse(&e, q) else {
            debug!(q = %q, e = %e, "subgroup order is not prime");
            return Ok(reject(Rejection::NonInvertibleDigest));
        };

        let z1 = (s * &v) % q;
        let z2 = mod_neg(&((r * &v) % q), q);

        let commitment = curve.double_scalar_mul_base(&z1, &z2, &self.point);
        let Some(x) = commitment.x() else {
            return Ok(reject(Rejection::IdentityPoint));
        };

        if &(x % q) == r {
            Ok(Verification::Valid)
        } else {
            Ok(reject(Rejection::Mismatch))
        }
    }

    /// Verifies an encoded signature `r || s`.
    ///
    /// A buffer of the wrong length is reported as
    /// `Verification::Invalid(Rejection::Malformed)`.
    pub fn verify_bytes<H: MessageHasher + ?Sized>(
        &self,
        curve: &CurveGroup,
        hasher: &H,
        msg: &[u8],
        sig: &[u8],
    ) -> Result<Verification, GostError> {
        match Signature::from_bytes(hasher.width(), sig) {
            Ok(sig) => self.verify(curve, hasher, msg, &sig),
            Err(err) => {
                debug!(%err, "undecodable signature");
                Ok(reject(Rejection::Malformed))
            }
        }
    }
}

fn reject(reason: Rejection) -> Verification {
    debug!(%reason, "signature rejected");
    Verification::Invalid(reason)
}

impl KeyPair {
    /// Generates a fresh key pair: `d` uniform in `[1, q-1]` and `Q = d * P`.
    pub fn generate<R: UniformRandom + ?Sized>(
        curve: &CurveGroup,
        rng: &mut R,
    ) -> Result<Self, GostError> {
        let signing_key = SigningKey::random(curve, rng)?;
        let verifying_key = signing_key.verifying_key(curve);
        debug!(public_key = %verifying_key.point, "generated key pair");
        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    #[inline]
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    #[inline]
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Splits the pair into its keys.
    pub fn into_parts(self) -> (SigningKey, VerifyingKey) {
        (self.signing_key, self.verifying_key)
    }
}
