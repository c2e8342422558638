//! Core types for the counting pass.
//!
//! This module defines:
//! - [`RadixParams`]: the validated digit configuration (bins, mask, shift).
//! - Histogram: the per-call, cache-aligned bucket counters.

use crate::error::PassError;
use cuneiform::cuneiform;

/// Fixed capacity of the histogram, and so the largest supported radix.
pub const MAX_BINS: usize = 256;

/// Widest digit a single pass can select (`1 << MAX_DIGIT_BITS == MAX_BINS`).
pub const MAX_DIGIT_BITS: u32 = 8;

/// Number of bits in a key.
pub const KEY_BITS: u32 = u32::BITS;

/// Digit configuration for one counting pass.
///
/// A `RadixParams` can only be obtained through its constructors, which check
/// that `bins` is a power of two no larger than [`MAX_BINS`], that
/// `mask == bins - 1` and that `shift < 32`. Holding one is therefore proof
/// that [`RadixParams::digit`] always lands in `[0, bins)`.
///
/// # Examples
///
/// ```
/// use radixpass::RadixParams;
///
/// // Third byte of a 32-bit key.
/// let params = RadixParams::new(256, 16).unwrap();
/// assert_eq!(params.mask(), 0xFF);
/// assert_eq!(params.digit(0x00AB_CDEF), 0xAB);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RadixParams {
    bins: usize,
    mask: u32,
    shift: u32,
}

impl RadixParams {
    /// Builds a configuration with `bins` buckets, deriving the mask.
    pub fn new(bins: usize, shift: u32) -> Result<Self, PassError> {
        check_bins(bins)?;
        Self::with_mask(bins, (bins - 1) as u32, shift)
    }

    /// Builds a configuration from the three raw scalars `(bins, mask, shift)`.
    ///
    /// Rejects a mask that disagrees with `bins`, since such a mask would
    /// produce digits outside the histogram.
    pub fn with_mask(bins: usize, mask: u32, shift: u32) -> Result<Self, PassError> {
        check_bins(bins)?;
        if mask as usize != bins - 1 {
            return Err(PassError::MaskMismatch { bins, mask });
        }
        if shift >= KEY_BITS {
            return Err(PassError::ShiftOutOfRange { shift });
        }
        Ok(Self { bins, mask, shift })
    }

    /// Builds a configuration selecting a `bits`-wide digit at `shift`.
    pub fn from_digit_bits(bits: u32, shift: u32) -> Result<Self, PassError> {
        if bits == 0 || bits > MAX_DIGIT_BITS {
            return Err(PassError::DigitBitsOutOfRange { bits });
        }
        Self::new(1 << bits, shift)
    }

    /// Number of distinct digit values.
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Digit mask, always `bins - 1`.
    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Bit offset of the digit inside the key.
    #[inline]
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Extracts the digit of `key`: `(key >> shift) & mask`.
    #[inline(always)]
    pub fn digit(&self, key: u32) -> usize {
        ((key >> self.shift) & self.mask) as usize
    }
}

impl Default for RadixParams {
    /// One byte per pass, starting at the least significant byte.
    fn default() -> Self {
        Self {
            bins: MAX_BINS,
            mask: (MAX_BINS - 1) as u32,
            shift: 0,
        }
    }
}

fn check_bins(bins: usize) -> Result<(), PassError> {
    if bins > MAX_BINS {
        return Err(PassError::BinsExceedCapacity {
            bins,
            capacity: MAX_BINS,
        });
    }
    if !bins.is_power_of_two() {
        return Err(PassError::BinsNotPowerOfTwo { bins });
    }
    Ok(())
}

/// Bucket counters for a single pass.
///
/// Lives on the stack of one call and starts zeroed, so no counts leak from
/// one pass into the next.
#[cuneiform]
pub(crate) struct Histogram {
    pub counts: [usize; MAX_BINS],
}

impl Histogram {
    #[inline(always)]
    pub fn zeroed() -> Self {
        Histogram {
            counts: [0; MAX_BINS],
        }
    }
}
