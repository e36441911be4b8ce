//! GOST 34.10-2018 style signatures over a caller-supplied prime curve.
//!
//! This library implements the signature scheme of GOST R 34.10 using:
//! - A short Weierstrass curve over `F_p` with a base point of prime order `q`
//!   (see [`gost_curve::CurveGroup`])
//! - The GOST 34.11-2012 (Streebog) message hash, 256-bit or 512-bit as
//!   selected by [`HashWidth`]
//! - A caller-supplied uniform random source for keys and nonces
//!
//! # Overview
//!
//! A signing key is a scalar `d` in `[1, q-1]` and the verifying key is
//! `Q = d * P`. A signature on a message is the pair `(r, s)`, encoded as two
//! big-endian integers of the hash width each.
//!
//! # Example
//!
//! ```
//! use gost_curve::DomainParams;
//! use gost_signature::{HashWidth, KeyPair, Verification};
//!
//! // Load the curve
//! let curve = DomainParams::gost_example_256().build().expect("params");
//!
//! // Generate a key pair
//! let mut rng = rand::rng();
//! let keys = KeyPair::generate(&curve, &mut rng).expect("keygen");
//!
//! // Sign the message
//! let msg = b"hello, world!";
//! let signature = keys
//!     .signing_key()
//!     .sign(&curve, &mut rng, &HashWidth::W256, msg)
//!     .expect("signing failed");
//!
//! // Verify the signature
//! let outcome = keys
//!     .verifying_key()
//!     .verify_bytes(&curve, &HashWidth::W256, msg, &signature.to_bytes())
//!     .expect("verification failed");
//! assert_eq!(outcome, Verification::Valid);
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator (CSRNG)
//! - Each signature must use a fresh random nonce
//! - Protect the signing key from unauthorized access
//! - Domain parameters are trusted as given and never validated

mod constants;
mod errors;
mod hash;
mod keys;
mod signatures;


pub use constants::{MAX_SIGN_ATTEMPTS, SIG_SIZE_256, SIG_SIZE_512};
pub use errors::{GostError, SignatureError};
pub use hash::{HashWidth, MessageHasher};
pub use keys::{KeyPair, SigningKey, VerifyingKey};
pub use signatures::{Rejection, Signature, Verification};
