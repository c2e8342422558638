//! # Radixpass
//!
//! `radixpass` implements one pass of a least-significant-digit radix sort over `u32` keys,
//! carrying a parallel array of `u32` ids (for example particle indices) through the same
//! permutation.
//!
//! A pass is a counting sort on a single digit `(key >> shift) & mask`:
//!
//! 1. **Count** how many keys fall in each of the `bins` buckets.
//! 2. **Accumulate** the counts into bucket end offsets.
//! 3. **Scatter** the `(key, id)` pairs into the output, walking the input backwards so that
//!    pairs with the same digit keep their relative order.
//!
//! That stability is what lets a caller compose passes into a full radix sort.
//!
//! ## Key Features
//!
//! - **Fixed-capacity histogram**: up to 256 buckets (8-bit digits), held in a cache-aligned
//!   array on the stack. No allocation per call, no state carried between calls.
//! - **Fail closed**: inconsistent `bins`/`mask`/`shift` or short buffers are rejected with a
//!   [`PassError`] before anything is written.
//! - **No aliasing**: sources are borrowed shared and destinations exclusively, so an in-place
//!   call cannot be expressed.
//!
//! ## Usage
//!
//! ### Single Pass
//!
//! ```rust
//! use radixpass::prelude::*;
//!
//! let keys = [0x0102, 0x0201, 0x0101];
//! let ids = [0, 1, 2];
//! let mut sorted_keys = [0; 3];
//! let mut sorted_ids = [0; 3];
//!
//! // Group by the low byte.
//! let params = RadixParams::new(256, 0).unwrap();
//! counting_pass(&keys, &ids, &mut sorted_keys, &mut sorted_ids, 3, &params).unwrap();
//!
//! assert_eq!(sorted_keys, [0x0201, 0x0101, 0x0102]);
//! assert_eq!(sorted_ids, [1, 2, 0]);
//! ```
//!
//! ### Full Sort
//!
//! Four byte-wide passes sort 32-bit keys completely. The caller owns both buffer pairs and
//! swaps their roles after every pass.
//!
//! ```rust
//! use radixpass::prelude::*;
//!
//! let mut keys = vec![300, 7, 70_000, 7, 1];
//! let mut ids: Vec<u32> = (0..keys.len() as u32).collect();
//! let mut tmp_keys = vec![0; keys.len()];
//! let mut tmp_ids = vec![0; keys.len()];
//!
//! for shift in [0, 8, 16, 24] {
//!     let params = RadixParams::new(256, shift).unwrap();
//!     counting_pass(&keys, &ids, &mut tmp_keys, &mut tmp_ids, keys.len(), &params).unwrap();
//!     std::mem::swap(&mut keys, &mut tmp_keys);
//!     std::mem::swap(&mut ids, &mut tmp_ids);
//! }
//!
//! assert_eq!(keys, [1, 7, 7, 300, 70_000]);
//! assert_eq!(ids, [4, 1, 3, 0, 2]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Time**: three linear scans over `count` elements plus a `bins`-sized prefix sum.
//! - **Memory**: a 2 KiB histogram on the stack; no heap allocation.
//!
//! The crate emits `log` records (rejections at `debug`, accepted passes at `trace`) and never
//! installs a logger itself.

pub mod algo;
pub mod core;
pub mod error;
pub use crate::algo::{counting_pass, counting_pass_raw};
pub use crate::core::{MAX_BINS, RadixParams};
pub use crate::error::PassError;

pub mod prelude {
    pub use crate::algo::{counting_pass, counting_pass_raw};
    pub use crate::core::{MAX_BINS, RadixParams};
    pub use crate::error::PassError;
}
