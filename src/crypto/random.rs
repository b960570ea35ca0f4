//! Secure random source
//!
//! Every random draw in the crate goes through [`SecureRandom`]. Production
//! code uses [`OsRandom`], which reads the operating system CSPRNG and reports
//! an unavailable source as an error instead of falling back to a weaker one.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{LocalPassError, Result};

/// Size of the word space a single `u32` draw covers (2^32)
const WORD_SPACE: u64 = 1 << 32;

/// Source of cryptographically secure randomness
pub trait SecureRandom {
    /// Draw a uniformly random 32-bit word
    fn next_u32(&mut self) -> Result<u32>;

    /// Fill `dest` with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Draw an index uniformly from `[0, bound)` without modulo bias.
    ///
    /// Words at or above the largest multiple of `bound` that fits in 2^32
    /// are rejected and redrawn.
    ///
    /// # Example
    /// ```
    /// use localpass_core::{OsRandom, SecureRandom};
    ///
    /// let idx = OsRandom.uniform_index(31).unwrap();
    /// assert!(idx < 31);
    /// ```
    fn uniform_index(&mut self, bound: usize) -> Result<usize> {
        let bound = bound as u64;
        if bound == 0 || bound > WORD_SPACE {
            return Err(LocalPassError::InvalidArgument(format!(
                "random bound must be in 1..=2^32, got {}",
                bound
            )));
        }

        let limit = WORD_SPACE - WORD_SPACE % bound;
        loop {
            let value = u64::from(self.next_u32()?);
            if value < limit {
                return Ok((value % bound) as usize);
            }
        }
    }

    /// Pick one character uniformly from `pool`
    fn pick(&mut self, pool: &[char]) -> Result<char> {
        let idx = self.uniform_index(pool.len())?;
        Ok(pool[idx])
    }
}

/// Operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn next_u32(&mut self) -> Result<u32> {
        OsRng
            .try_next_u32()
            .map_err(|e| LocalPassError::RandomUnavailable(e.to_string()))
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| LocalPassError::RandomUnavailable(e.to_string()))
    }
}
