//! Identifier newtypes.

use std::fmt;

/// Unique identifier for a process.
///
/// Stable across all scheduling disciplines. Used for reporting and for
/// documenting tie-breaks; scheduling decisions never compare ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub u32);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
