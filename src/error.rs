//! Errors reported by the counting pass.

use thiserror::Error;

/// Reasons a counting pass (or its configuration) is rejected.
///
/// Every variant is raised before any output buffer is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    /// More buckets were requested than the histogram can hold.
    #[error("bins={bins} exceeds histogram capacity {capacity}")]
    BinsExceedCapacity { bins: usize, capacity: usize },
    /// Bucket count is zero or not a power of two.
    #[error("bins={bins} is not a power of two")]
    BinsNotPowerOfTwo { bins: usize },
    /// Mask does not equal `bins - 1`, so digits could leave `[0, bins)`.
    #[error("mask={mask:#x} does not match bins={bins}")]
    MaskMismatch { bins: usize, mask: u32 },
    /// Shift would move every bit out of a 32-bit key.
    #[error("shift={shift} is out of range for 32-bit keys")]
    ShiftOutOfRange { shift: u32 },
    /// Digit width outside `1..=8` bits.
    #[error("digit width of {bits} bits is out of range (1..=8)")]
    DigitBitsOutOfRange { bits: u32 },
    /// A buffer is shorter than the requested element count.
    #[error("{buffer} has {len} elements, fewer than count={count}")]
    LengthMismatch {
        buffer: &'static str,
        len: usize,
        count: usize,
    },
}
