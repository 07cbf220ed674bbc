//! Pattern-fill buffer generation.
//!
//! A [`FillRequest`] names a size and a byte order. [`PatternFiller`] turns it
//! into a [`FillBuffer`]: a fully initialized byte sequence whose every 4-byte
//! group is the NOOP pattern in that order.
//!
//! The requested size is rounded with `(size | 3) + 1`. That always moves to
//! the *next* multiple of four, so an already aligned size of 4 becomes 8.
//! Generated files have always been this long and callers depend on it; do
//! not "fix" the rounding.

use std::collections::TryReserveError;
use std::slice::ChunksExact;

use crate::pattern::{pattern_group, ByteOrder, PATTERN_GROUP_LEN};

/// Rounding applied to every requested size. `None` on `u64` overflow.
pub fn effective_len(size_bytes: u64) -> Option<u64> {
    (size_bytes | 0x03).checked_add(1)
}

// ── Request ───────────────────────────────────────────────────────────────────

/// A validated fill request. Constructed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillRequest {
    size_bytes: u64,
    order: ByteOrder,
    effective_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("size must be a positive number of bytes")]
    ZeroSize,
    #[error("size {0} is too large to round up to a 4-byte boundary")]
    Overflow(u64),
}

impl FillRequest {
    pub fn new(size_bytes: u64, order: ByteOrder) -> Result<Self, RequestError> {
        if size_bytes == 0 {
            return Err(RequestError::ZeroSize);
        }
        let effective_len =
            effective_len(size_bytes).ok_or(RequestError::Overflow(size_bytes))?;
        Ok(Self {
            size_bytes,
            order,
            effective_len,
        })
    }

    /// Size as requested, before rounding.
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Number of bytes that will actually be allocated and written.
    pub fn effective_len(&self) -> u64 {
        self.effective_len
    }

    pub fn group_count(&self) -> u64 {
        self.effective_len / PATTERN_GROUP_LEN as u64
    }
}

// ── Buffer ────────────────────────────────────────────────────────────────────

/// Owned output of a fill. Every byte is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillBuffer {
    bytes: Vec<u8>,
    order: ByteOrder,
}

impl FillBuffer {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte order the buffer was filled in.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Iterate the 4-byte pattern groups.
    pub fn groups(&self) -> ChunksExact<'_, u8> {
        self.bytes.chunks_exact(PATTERN_GROUP_LEN)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for FillBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// ── Filler ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum FillError {
    #[error("{0} bytes does not fit in this platform's address space")]
    TooLarge(u64),
    #[error("failed to allocate {len} bytes: {source}")]
    Alloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Produces pattern-filled buffers. Stateless; a unit struct so call sites
/// read as `PatternFiller::fill(&request)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternFiller;

impl PatternFiller {
    /// Fill a buffer for `request`.
    ///
    /// Allocation failure is not recoverable here: it is logged and the
    /// process aborts. Use [`PatternFiller::try_fill`] to handle it instead.
    pub fn fill(request: &FillRequest) -> FillBuffer {
        match Self::try_fill(request) {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::error!(error = %e, "pattern fill failed, aborting");
                std::process::abort();
            }
        }
    }

    /// Fill a buffer for `request`, reserving memory fallibly.
    pub fn try_fill(request: &FillRequest) -> Result<FillBuffer, FillError> {
        let len = usize::try_from(request.effective_len())
            .map_err(|_| FillError::TooLarge(request.effective_len()))?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|source| FillError::Alloc { len, source })?;
        bytes.resize(len, 0);

        tracing::debug!(
            requested = request.size_bytes(),
            effective = len,
            groups = request.group_count(),
            "buffer allocated"
        );
        write_groups(&mut bytes, request.order());
        Ok(FillBuffer {
            bytes,
            order: request.order(),
        })
    }
}

/// Write the pattern over `buf` from offset 0 in whole groups. A trailing
/// remainder shorter than a group is left zeroed.
fn write_groups(buf: &mut [u8], order: ByteOrder) {
    let group = pattern_group(order);
    tracing::trace!(
        order = %order,
        group = hex::encode(group),
        len = buf.len(),
        "writing pattern groups"
    );
    for chunk in buf.chunks_exact_mut(PATTERN_GROUP_LEN) {
        chunk.copy_from_slice(&group);
    }
}
