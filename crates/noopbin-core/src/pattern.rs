//! The NOOP filler pattern and its byte-order encodings.
//!
//! The pattern is a single 32-bit word, 0xDEADBEEF. Every 4-byte group of a
//! generated binary is this word laid out in the requested byte order,
//! regardless of the endianness of the host producing it.
//!
//! Layout goes through zerocopy's byteorder types so that no code here
//! depends on the host's native order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;
use zerocopy::byteorder::{BigEndian, LittleEndian, U32};
use zerocopy::AsBytes;

/// The filler word written across the whole output.
pub const NOOP_PATTERN: u32 = 0xDEAD_BEEF;

/// Width of one pattern group in bytes.
pub const PATTERN_GROUP_LEN: usize = 4;

// If either of these fails, a pattern group is no longer one 32-bit word.
assert_eq_size!(U32<LittleEndian>, [u8; PATTERN_GROUP_LEN]);
assert_eq_size!(U32<BigEndian>, [u8; PATTERN_GROUP_LEN]);

// ── Byte order ────────────────────────────────────────────────────────────────

/// Arrangement of the pattern bytes within each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least-significant byte first: `EF BE AD DE`.
    Little,
    /// Most-significant byte first: `DE AD BE EF`.
    Big,
}

impl ByteOrder {
    /// Interpret a command-line endianness token.
    ///
    /// A token is accepted when it *starts with* `big` or `little`, so
    /// `bigendian` selects [`ByteOrder::Big`]. Anything else is unset.
    /// Matching is case-sensitive.
    pub fn parse_token(token: &str) -> Option<Self> {
        if token.starts_with("big") {
            Some(Self::Big)
        } else if token.starts_with("little") {
            Some(Self::Little)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown byte order {0:?}, expected 'little' or 'big'")]
pub struct UnknownByteOrder(pub String);

impl FromStr for ByteOrder {
    type Err = UnknownByteOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s).ok_or_else(|| UnknownByteOrder(s.to_string()))
    }
}

// ── Pattern group ─────────────────────────────────────────────────────────────

/// The four bytes of [`NOOP_PATTERN`] in the given order.
pub fn pattern_group(order: ByteOrder) -> [u8; PATTERN_GROUP_LEN] {
    let mut group = [0u8; PATTERN_GROUP_LEN];
    match order {
        ByteOrder::Little => {
            group.copy_from_slice(U32::<LittleEndian>::new(NOOP_PATTERN).as_bytes())
        }
        ByteOrder::Big => group.copy_from_slice(U32::<BigEndian>::new(NOOP_PATTERN).as_bytes()),
    }
    group
}
