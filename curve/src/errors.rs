//! Error types for curve configuration and random sampling.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Shared, cloneable error reported by a random source.
pub type SourceError = Arc<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Error)]
pub enum CurveError {
    /// A domain parameter could not be parsed as a hexadecimal integer.
    #[error("domain parameter `{field}` is not a valid hex integer")]
    InvalidHex { field: &'static str },
    /// A sampling range with `low > high` was requested.
    #[error("empty sampling range")]
    EmptyRange,
    /// The underlying random source reported a failure.
    #[error("random source failed")]
    RandomSource(#[source] SourceError),
    /// Rejection sampling did not produce an in-range value.
    #[error("rejection sampling exhausted after {attempts} attempts")]
    SamplingExhausted { attempts: usize },
}

impl CurveError {
    /// Wraps a random source failure, keeping it as the error source.
    pub fn random_source<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        CurveError::RandomSource(Arc::from(err.into()))
    }
}

// Random source failures compare by message.
impl PartialEq for CurveError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CurveError::InvalidHex { field: a }, CurveError::InvalidHex { field: b }) => a == b,
            (CurveError::EmptyRange, CurveError::EmptyRange) => true,
            (CurveError::RandomSource(a), CurveError::RandomSource(b)) => {
                a.to_string() == b.to_string()
            }
            (
                CurveError::SamplingExhausted { attempts: a },
                CurveError::SamplingExhausted { attempts: b },
            ) => a == b,
            _ => false,
        }
    }
}

impl Eq for CurveError {}
