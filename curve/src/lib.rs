//! Elliptic curve group over a caller-supplied prime field.
//!
//! This crate provides affine curve points, the group law and scalar
//! multiplication on a short Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`,
//! modular arithmetic helpers, and uniform sampling of big integers. Curve
//! parameters are supplied at runtime through [`CurveGroup::new`] or
//! [`DomainParams`] and are trusted as given.

mod affine;
mod errors;
mod field;
mod group;
mod params;
mod random;

pub use affine::AffinePoint;
pub use errors::{CurveError, SourceError};
pub use field::{mod_inverse, mod_neg, mod_sub};
pub use group::CurveGroup;
pub use num_bigint::BigUint;
pub use params::DomainParams;
pub use random::{UniformRandom, MAX_SAMPLING_ATTEMPTS};
