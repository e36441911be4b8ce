use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::field::{mod_inverse, mod_neg, mod_sub};
use crate::AffinePoint;

/// Prime-order subgroup of a short Weierstrass curve `y^2 = x^3 + a*x + b`
/// over `F_p`, together with its base point.
///
/// The parameters are trusted: `p` and `q` are assumed prime, the base point
/// is assumed to lie on the curve and to have order exactly `q`. Nothing here
/// re-checks that. The group is immutable after construction and can be
/// shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveGroup {
    /// Field modulus
    p: BigUint,
    /// Curve coefficient `a`, reduced mod `p`
    a: BigUint,
    /// Curve coefficient `b`, reduced mod `p`
    b: BigUint,
    /// Order of the full group of points
    m: BigUint,
    /// Prime order of the subgroup generated by the base point
    q: BigUint,
    /// Base point generating the order-`q` subgroup
    base: AffinePoint,
}

impl CurveGroup {
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        m: BigUint,
        q: BigUint,
        base: AffinePoint,
    ) -> Self {
        let a = a % &p;
        let b = b % &p;
        CurveGroup {
            p,
            a,
            b,
            m,
            q,
            base,
        }
    }

    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    #[inline]
    pub fn m(&self) -> &BigUint {
        &self.m
    }

    #[inline]
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    #[inline]
    pub fn base(&self) -> &AffinePoint {
        &self.base
    }

    /// Check if a point satisfies the curve equation.
    ///
    /// Only a diagnostic: the arithmetic below never calls it.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return true;
        };
        let p = &self.p;

        let lhs = (y * y) % p;
        let rhs = (x * x * x + &self.a * x + &self.b) % p;

        lhs == rhs
    }

    /// Group law on affine points.
    ///
    /// A vanishing slope denominator means the operands sum to the identity
    /// (`P2 = -P1`, or doubling a point with `y = 0`), and the identity is
    /// returned.
    pub fn add_points(&self, lhs: &AffinePoint, rhs: &AffinePoint) -> AffinePoint {
        let Some((x1, y1)) = lhs.coordinates() else {
            return rhs.clone();
        };
        let Some((x2, y2)) = rhs.coordinates() else {
            return lhs.clone();
        };
        let p = &self.p;

        let lambda = if x1 != x2 || y1 != y2 {
            // λ = (y2 - y1) / (x2 - x1)
            let Some(inv) = mod_inverse(&mod_sub(x2, x1, p), p) else {
                return AffinePoint::IDENTITY;
            };
            (mod_sub(y2, y1, p) * inv) % p
        } else {
            // λ = (3x^2 + a) / (2y)
            let Some(inv) = mod_inverse(&((y1 << 1u32) % p), p) else {
                return AffinePoint::IDENTITY;
            };
            ((x1 * x1 * 3u32 + &self.a) * inv) % p
        };

        // x_r = λ^2 - x1 - x2
        let x3 = mod_sub(&mod_sub(&(&lambda * &lambda), x1, p), x2, p);

        // y_r = λ(x1 - x_r) - y1
        let y3 = mod_sub(&(&lambda * mod_sub(x1, &x3, p)), y1, p);

        AffinePoint::new(x3, y3)
    }

    /// Point doubling: 2*P.
    #[inline]
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        self.add_points(point, point)
    }

    /// Negate a point: (x, -y).
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point.coordinates() {
            Some((x, y)) => AffinePoint::new(x.clone(), mod_neg(y, &self.p)),
            None => AffinePoint::IDENTITY,
        }
    }

    /// Double-and-add scalar multiplication, least significant bit first.
    ///
    /// Takes `O(log n)` group operations; `n = 0` yields the identity.
    pub fn scalar_mul(&self, point: &AffinePoint, n: &BigUint) -> AffinePoint {
        let mut result = AffinePoint::IDENTITY;
        let mut temp = point.clone();
        let mut bits = n.clone();

        while !bits.is_zero() {
            if bits.is_odd() {
                result = self.add_points(&result, &temp);
            }
            temp = self.double(&temp);
            bits >>= 1u32;
        }

        result
    }

    /// Multiply the base point.
    #[inline]
    pub fn mul_base(&self, n: &BigUint) -> AffinePoint {
        self.scalar_mul(&self.base, n)
    }

    /// Compute `a * G + b * point`, where `G` is the base point.
    pub fn double_scalar_mul_base(&self, a: &BigUint, b: &BigUint, point: &AffinePoint) -> AffinePoint {
        self.add_points(&self.mul_base(a), &self.scalar_mul(point, b))
    }
}
