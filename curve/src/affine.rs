use core::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Affine point on a short Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`.
/// Represents a point with coordinates (x, y) or the point at infinity.
///
/// Both coordinates are present or both are absent; the point at infinity
/// (identity element) carries no coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffinePoint {
    coords: Option<(BigUint, BigUint)>,
}

impl AffinePoint {
    /// The point at infinity (identity element)
    pub const IDENTITY: Self = AffinePoint { coords: None };

    /// Create a new finite affine point.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint {
            coords: Some((x, y)),
        }
    }

    /// Build a point from optional coordinates.
    ///
    /// Returns `None` when exactly one coordinate is given.
    pub fn from_coordinates(x: Option<BigUint>, y: Option<BigUint>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            (None, None) => Some(Self::IDENTITY),
            _ => None,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    #[inline]
    pub fn x(&self) -> Option<&BigUint> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    #[inline]
    pub fn y(&self) -> Option<&BigUint> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    #[inline]
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            Some((x, y)) => write!(f, "({x:X}, {y:X})"),
            None => f.write_str("O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let id = AffinePoint::IDENTITY;
        assert!(id.is_identity());
        assert_eq!(id.x(), None);
        assert_eq!(id.y(), None);
        assert_eq!(id, AffinePoint::default());
    }

    #[test]
    fn test_finite_point_is_not_identity() {
        let p = AffinePoint::new(BigUint::from(0u32), BigUint::from(0u32));
        assert!(!p.is_identity());
        assert_ne!(p, AffinePoint::IDENTITY);
        assert_eq!(p.coordinates(), Some((&BigUint::from(0u32), &BigUint::from(0u32))));
    }

    #[test]
    fn test_from_coordinates_requires_both() {
        assert_eq!(
            AffinePoint::from_coordinates(None, None),
            Some(AffinePoint::IDENTITY)
        );
        assert_eq!(AffinePoint::from_coordinates(Some(BigUint::from(1u32)), None), None);
        assert_eq!(AffinePoint::from_coordinates(None, Some(BigUint::from(1u32))), None);
        assert_eq!(
            AffinePoint::from_coordinates(Some(BigUint::from(5u32)), Some(BigUint::from(4u32))),
            Some(AffinePoint::new(BigUint::from(5u32), BigUint::from(4u32)))
        );
    }

    #[test]
    fn test_display() {
        let p = AffinePoint::new(BigUint::from(255u32), BigUint::from(16u32));
        assert_eq!(p.to_string(), "(FF, 10)");
        assert_eq!(AffinePoint::IDENTITY.to_string(), "O");
    }
}
