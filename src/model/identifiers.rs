//! Row identity and validated scalar newtypes.
//!
//! Raw constructors are never exported - use smart constructors only.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique identity of a row's content model.
///
/// Allocated when a row is built and stable for that row's lifetime.
/// Two rows built by separate loads never share an id, so an id captured
/// before a reload can never resolve to a row of the new list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        Self(NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Star rating of a review. Always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Lowest valid rating.
    pub const MIN: Self = Self(1);
    /// Highest valid rating.
    pub const MAX: Self = Self(5);

    /// Smart constructor: rejects values outside `1..=5`.
    pub fn new(raw: i64) -> Result<Self, InvalidRating> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(InvalidRating(raw))
        }
    }

    /// Clamp any integer into the valid range.
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    /// Get the raw value.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// Maximum rendered line count of a review body.
///
/// `LineLimit::UNLIMITED` (zero) is the sentinel for "never truncate"; an
/// expanded row carries it instead of a separate flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineLimit(u32);

impl LineLimit {
    /// No cap, no affordance.
    pub const UNLIMITED: Self = Self(0);
    /// Limit applied to freshly loaded review rows.
    pub const DEFAULT: Self = Self(3);

    /// Create a limit of `lines` lines (0 means unlimited).
    pub fn new(lines: u32) -> Self {
        Self(lines)
    }

    /// Get the raw line count.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Check for the unlimited sentinel.
    pub fn is_unlimited(&self) -> bool {
        self.0 == 0
    }
}

impl Default for LineLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ===== Error Types =====

/// A rating outside 1..=5; carries the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Rating must be within 1..=5 (got {0})")]
pub struct InvalidRating(pub i64);

// ===== Tests =====
