//! Key-to-bucket transforms.
//!
//! The two sweeps map their keys differently: processor counts come in steps
//! of two starting at 2, thread counts in steps of one starting at 1. Both are
//! kept as separate variants so neither sweep's semantics leak into the other.

use std::fmt;

/// Fixed linear mapping from a raw key to a bucket index and back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketTransform {
    /// `index = int(key) / 2 - 1`, `label = 2 * index + 2`
    Processors,

    /// `index = int(key) - 1`, `label = index + 1`
    Threads,
}

impl BucketTransform {
    /// Forward transform
    ///
    /// The key is truncated toward zero before the integer arithmetic, and the
    /// halving floors. Returns `None` for NaN or infinite keys. The result is
    /// not range-checked; that is the averager's job. Keys too large in
    /// magnitude for `i64` arithmetic also yield `None`.
    pub fn index(self, key: f64) -> Option<i64> {
        if !key.is_finite() {
            return None;
        }
        // `as` saturates at the i64 bounds
        let whole = key.trunc() as i64;

        match self {
            Self::Processors => whole.div_euclid(2).checked_sub(1),
            Self::Threads => whole.checked_sub(1),
        }
    }

    /// Inverse transform: nominal processor/thread count for a bucket
    pub fn label(self, index: usize) -> u32 {
        let index = index as u32;
        match self {
            Self::Processors => 2 * index + 2,
            Self::Threads => index + 1,
        }
    }

    /// Spacing between consecutive labels
    pub fn step(self) -> u32 {
        match self {
            Self::Processors => 2,
            Self::Threads => 1,
        }
    }

    /// Short machine-readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Processors => "processors",
            Self::Threads => "threads",
        }
    }
}

impl fmt::Display for BucketTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
