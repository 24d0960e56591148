//! Token identifiers for the seven-token ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct token ids tracked by the ledger.
pub const TOKEN_COUNT: usize = 7;

/// A token id in the range 0..=6.
///
/// Ids 0–2 are base tokens: freely mintable under a per-account cooldown.
/// Ids 3–6 are derived tokens: produced only by burning base tokens through
/// the forge. Id 6 additionally carries a global supply cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(u8);

impl TokenId {
    /// All seven ids in ascending order.
    pub const ALL: [Self; TOKEN_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
    ];

    /// Create a token id, returning `None` outside the 0–6 range.
    pub const fn new(raw: u8) -> Option<Self> {
        if raw < TOKEN_COUNT as u8 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Create a token id from a known-good number.
    ///
    /// # Panics
    /// Panics if `raw > 6`. Use [`TokenId::new`] for fallible construction.
    pub const fn of(raw: u8) -> Self {
        assert!(raw < TOKEN_COUNT as u8, "token id out of range");
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into per-id tables.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is a base token (ids 0–2).
    pub const fn is_base(self) -> bool {
        self.0 <= 2
    }

    /// Whether this is a derived token (ids 3–6).
    pub const fn is_derived(self) -> bool {
        self.0 >= 3
    }

    /// Whether this id is subject to the global supply cap.
    pub const fn is_capped(self) -> bool {
        self.0 == 6
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
