use num_bigint::BigUint;
use rand::TryCryptoRng;

use crate::CurveError;

/// Upper bound on rejection-sampling rounds for a single draw.
///
/// Each round succeeds with probability above 1/2, so hitting this bound
/// means the random source is broken.
pub const MAX_SAMPLING_ATTEMPTS: usize = 128;

/// Source of uniformly distributed integers over a closed interval.
///
/// Implementations used for key and nonce generation must be
/// cryptographically secure.
pub trait UniformRandom {
    /// Draw an integer uniformly from `[low, high]`.
    fn uniform_inclusive(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint, CurveError>;
}

impl<R> UniformRandom for R
where
    R: TryCryptoRng + ?Sized,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    fn uniform_inclusive(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint, CurveError> {
        if low > high {
            return Err(CurveError::EmptyRange);
        }

        let span = high - low + 1u32;
        let bits = span.bits();
        let len = bits.div_ceil(8) as usize;
        let excess = (len as u64) * 8 - bits;
        let mask = 0xffu8 >> excess;
        let mut buf = vec![0u8; len];

        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            self.try_fill_bytes(&mut buf)
                .map_err(CurveError::random_source)?;
            buf[0] &= mask;

            let candidate = BigUint::from_bytes_be(&buf);
            if candidate < span {
                return Ok(low + candidate);
            }
        }

        Err(CurveError::SamplingExhausted {
            attempts: MAX_SAMPLING_ATTEMPTS,
        })
    }
}
