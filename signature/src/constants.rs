//! Constants used in the GOST 34.10 signature scheme implementation.

/// Maximum number of nonces drawn for a single signature.
///
/// A nonce is rejected only when `r = 0` or `s = 0`, each of which happens
/// with probability about `1/q`. Running out of attempts means the random
/// source is broken or the subgroup order is degenerate.
pub const MAX_SIGN_ATTEMPTS: usize = 64;

/// Size of a serialized signature in bytes for the 256-bit hash width.
///
/// `r` and `s` are each encoded as 32 big-endian bytes.
pub const SIG_SIZE_256: usize = 64;

/// Size of a serialized signature in bytes for the 512-bit hash width.
///
/// `r` and `s` are each encoded as 64 big-endian bytes.
pub const SIG_SIZE_512: usize = 128;
