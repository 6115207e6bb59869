//! Type-safe unknown identifiers.
//!
//! Unknowns are dense 32-bit indices handed out by a [`Session`](crate::Session).
//! Their display names cycle through the alphabet with a numeric suffix per
//! full cycle: `a`..`z`, `a1`..`z1`, `a2`, ...

use std::fmt;

const ALPHABET_LEN: u32 = 26;

/// Identifier of an unknown in the generated equation system.
///
/// This is a lightweight 32-bit index that can be copied freely.
/// Two identifiers are equal if and only if they name the same unknown
/// of the same session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u32);

impl VarId {
    /// Creates an identifier from a raw index.
    ///
    /// This is primarily for internal use by the session allocator and
    /// for tests that need to name an unknown by position.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this identifier.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns the display name: `a`..`z` for the first cycle, then the
    /// letter followed by the cycle number.
    #[must_use]
    pub fn name(self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var({})", self.0)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(b'a' + (self.0 % ALPHABET_LEN) as u8);
        let cycle = self.0 / ALPHABET_LEN;
        if cycle == 0 {
            write!(f, "{letter}")
        } else {
            write!(f, "{letter}{cycle}")
        }
    }
}
