//! The counting pass: one stable digit of an LSD radix sort.
//!
//! A pass runs three linear phases over the input:
//! - **Count**: histogram of digit values.
//! - **Accumulate**: inclusive prefix sum, so `counts[d]` is one past the last
//!   output slot of digit `d`.
//! - **Scatter**: walk the input back to front, pre-decrement the bucket end and
//!   write the `(key, id)` pair there.
//!
//! The entry point is [`counting_pass`].

use crate::core::{Histogram, RadixParams};
use crate::error::PassError;
use log::{debug, trace};

/// Stably groups the first `count` keys by digit, carrying the ids along.
///
/// On success `out_keys[..count]` and `out_ids[..count]` hold a permutation of
/// `keys[..count]` / `ids[..count]` in non-decreasing order of
/// [`RadixParams::digit`]; pairs with equal digits keep their input order.
/// Elements past `count` in the outputs are left as they were.
///
/// The pass is not in-place. Running a full sort means calling it once per
/// digit (`shift` = 0, 8, 16, 24 for byte digits) and swapping the roles of the
/// source and destination buffers between calls; that rotation belongs to the
/// caller.
///
/// # Errors
///
/// Returns [`PassError::LengthMismatch`] if any of the four slices holds fewer
/// than `count` elements. Nothing is written on error.
///
/// # Examples
///
/// ```
/// use radixpass::{RadixParams, counting_pass};
///
/// let keys = [5, 3, 5, 1];
/// let ids = [10, 11, 12, 13];
/// let mut out_keys = [0; 4];
/// let mut out_ids = [0; 4];
///
/// let params = RadixParams::with_mask(4, 3, 0).unwrap();
/// counting_pass(&keys, &ids, &mut out_keys, &mut out_ids, 4, &params).unwrap();
///
/// // digits are [1, 3, 1, 1]: the three 1s keep their order, then the 3.
/// assert_eq!(out_keys, [5, 5, 1, 3]);
/// assert_eq!(out_ids, [10, 12, 13, 11]);
/// ```
pub fn counting_pass(
    keys: &[u32],
    ids: &[u32],
    out_keys: &mut [u32],
    out_ids: &mut [u32],
    count: usize,
    params: &RadixParams,
) -> Result<(), PassError> {
    let buffers = [
        ("keys", keys.len()),
        ("ids", ids.len()),
        ("out_keys", out_keys.len()),
        ("out_ids", out_ids.len()),
    ];
    if let Some(&(buffer, len)) = buffers.iter().find(|(_, len)| *len < count) {
        let err = PassError::LengthMismatch { buffer, len, count };
        debug!("counting pass rejected: {err}");
        return Err(err);
    }

    if count == 0 {
        return Ok(());
    }

    trace!(
        "counting pass: count={count} bins={} shift={}",
        params.bins(),
        params.shift()
    );

    let keys = &keys[..count];
    let ids = &ids[..count];
    let out_keys = &mut out_keys[..count];
    let out_ids = &mut out_ids[..count];

    let mut hist = Histogram::zeroed();
    let counts = &mut hist.counts[..params.bins()];

    count_digits(keys, counts, params);
    accumulate(counts);
    scatter(keys, ids, out_keys, out_ids, counts, params);

    Ok(())
}

/// Like [`counting_pass`], but takes the raw `(bins, mask, shift)` scalars.
///
/// The scalars are validated as by [`RadixParams::with_mask`] before any
/// buffer is touched.
///
/// ```
/// use radixpass::{PassError, counting_pass_raw};
///
/// let keys = [1, 2];
/// let ids = [0, 1];
/// let mut out_keys = [7; 2];
/// let mut out_ids = [7; 2];
///
/// let err = counting_pass_raw(&keys, &ids, &mut out_keys, &mut out_ids, 2, 512, 511, 0);
/// assert!(matches!(err, Err(PassError::BinsExceedCapacity { .. })));
/// assert_eq!(out_keys, [7, 7]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn counting_pass_raw(
    keys: &[u32],
    ids: &[u32],
    out_keys: &mut [u32],
    out_ids: &mut [u32],
    count: usize,
    bins: usize,
    mask: u32,
    shift: u32,
) -> Result<(), PassError> {
    let params = RadixParams::with_mask(bins, mask, shift).inspect_err(|err| {
        debug!("counting pass rejected: {err}");
    })?;
    counting_pass(keys, ids, out_keys, out_ids, count, &params)
}

/// Phase 1: `counts[d]` becomes the number of keys whose digit is `d`.
#[inline(always)]
fn count_digits(keys: &[u32], counts: &mut [usize], params: &RadixParams) {
    keys.iter().for_each(|&key| {
        counts[params.digit(key)] += 1;
    });
}

/// Phase 2: inclusive prefix sum in place.
#[inline(always)]
fn accumulate(counts: &mut [usize]) {
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }
}

/// Phase 3: reverse scan with pre-decrement keeps equal digits in input order.
#[inline(always)]
fn scatter(
    keys: &[u32],
    ids: &[u32],
    out_keys: &mut [u32],
    out_ids: &mut [u32],
    counts: &mut [usize],
    params: &RadixParams,
) {
    keys.iter()
        .zip(ids.iter())
        .rev()
        .for_each(|(&key, &id)| {
            let end = &mut counts[params.digit(key)];
            *end -= 1;
            out_keys[*end] = key;
            out_ids[*end] = id;
        });
}
