//! Identifier generation.
//!
//! Two flavors, both RFC 4122 UUIDs:
//!
//! - [`IdGenerator::next`] produces time-sortable version-7 identifiers.
//!   The generator carries its ordering state explicitly instead of hiding
//!   it in a process-wide static, so callers decide the sharing scope.
//! - [`random_id`] produces a random 128-bit version-4 identifier and needs
//!   no state at all.

use uuid::{ContextV7, Timestamp, Uuid};

/// Stateful generator for time-sortable UUIDv7 identifiers.
///
/// Identifiers produced by one generator sort by creation order, including
/// within a single millisecond: the internal context spends spare timestamp
/// bits on a counter.
///
/// # Examples
///
/// ```rust
/// use wireval::IdGenerator;
///
/// let ids = IdGenerator::new();
/// let a = ids.next();
/// let b = ids.next();
/// assert_ne!(a, b);
/// assert!(a < b);
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    context: ContextV7,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        IdGenerator {
            context: ContextV7::new(),
        }
    }

    /// Produces the next identifier.
    #[must_use]
    pub fn next(&self) -> Uuid {
        Uuid::new_v7(Timestamp::now(&self.context))
    }
}

/// Produces a random 128-bit version-4 identifier.
#[must_use]
pub fn random_id() -> Uuid {
    Uuid::new_v4()
}
