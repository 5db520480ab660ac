//! Process identity generation.
//!
//! # Responsibilities
//! - Produce one opaque identity token per process start
//! - Derive the token from a time-seeded random draw
//!
//! # Design Decisions
//! - The token is a debugging/correlation tag, not a security credential
//! - MD5 is used only for its fixed 128-bit width; collision resistance
//!   is not a requirement
//! - Generated exactly once, before any request handler is constructed

use std::fmt;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Fixed literal prefix of every identity token.
pub const IDENTITY_PREFIX: &str = "app-";

/// Error type for identity generation.
///
/// The only failure mode is a wall clock that reads before the Unix epoch,
/// which makes the seed underivable. This is fatal at startup.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("system clock is before the unix epoch: {0}")]
    Clock(#[from] SystemTimeError),
}

/// Opaque per-process identity tag.
///
/// Immutable for the lifetime of the process. The rendered form is the
/// fixed prefix followed by 32 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIdentity(String);

impl ProcessIdentity {
    /// Generate the identity for this process.
    ///
    /// Seeds a PRNG from the current wall-clock nanoseconds, draws one
    /// non-negative 63-bit integer, and digests its decimal rendering.
    pub fn generate() -> Result<Self, IdentityError> {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64;
        Ok(Self::from_seed(nanos))
    }

    /// Derive an identity from an explicit seed.
    ///
    /// Identical seeds produce identical tokens; distinct seeds collide
    /// only as often as the digest does.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        // Masked to 63 bits so the draw is non-negative as a signed integer.
        let draw = rng.gen::<u64>() >> 1;
        let digest = md5::compute(draw.to_string());
        ProcessIdentity(format!("{IDENTITY_PREFIX}{digest:x}"))
    }

    /// The rendered token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
