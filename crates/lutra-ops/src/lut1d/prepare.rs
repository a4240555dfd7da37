//! Inverse preparation: monotonicity and effective-domain analysis.
//!
//! A tabulated curve only has a unique inverse if it is monotonic, and a
//! useful inverse needs to handle flat spots at the ends of the table.
//! This pass runs during `finalize` for inverse-direction LUTs. Per
//! channel it
//!
//! 1. detects the overall direction by comparing the first and last
//!    entries (for half domains, the entries for 0.0 and 1.0; customer
//!    tables do not always populate the extremes sensibly),
//! 2. flattens reversals by clamping any sample that would move against
//!    the detected direction back to its predecessor, and
//! 3. records the effective domain: the index range between the leading
//!    and trailing flat plateaus. Outside that range the inverse is the
//!    nearest plateau value.
//!
//! The half domain includes infinities and NaNs. The positive side is
//! walked from +0 to +inf and the negative side from -0 to -inf with the
//! opposite direction; the negative walk is seeded with the value at +0
//! so the two sides cannot overlap. NaN rows are ignored throughout, as
//! is their 2048-pattern stretch of the domain.

use super::array::{Lut1DArray, MAX_CHANNELS};
use super::Lut1D;

/// Half bit pattern for 1.0.
pub(crate) const HALF_ONE_ROW: usize = 15360;
/// Half bit pattern for +infinity.
pub(crate) const HALF_POS_INF_ROW: usize = 31744;
/// Half bit pattern for +65504, the largest finite half.
pub(crate) const HALF_MAX_POS_ROW: usize = 31743;
/// Half bit pattern for -0.0.
pub(crate) const HALF_NEG_ZERO_ROW: usize = 32768;
/// Half bit pattern for -infinity.
pub(crate) const HALF_NEG_INF_ROW: usize = 64512;
/// Half bit pattern for -65504.
pub(crate) const HALF_MAX_NEG_ROW: usize = 64511;

/// Per-channel analysis produced by inverse preparation.
///
/// `start_domain`/`end_domain` bound the effective domain on the
/// positive side (the whole table for standard domains);
/// `neg_start_domain`/`neg_end_domain` bound the negative side of a half
/// domain and are zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentProperties {
    /// Whether the channel increases from its low to its high entry.
    /// Constant and decreasing channels are both non-increasing.
    pub is_increasing: bool,
    /// First index past the leading flat plateau.
    pub start_domain: usize,
    /// Last index before the trailing flat plateau.
    pub end_domain: usize,
    /// Negative-side start (half domain only).
    pub neg_start_domain: usize,
    /// Negative-side end (half domain only).
    pub neg_end_domain: usize,
}

impl Lut1D {
    /// Makes the table invertible and records the effective domain.
    /// Called by `finalize` for inverse-direction LUTs.
    pub(crate) fn prepare_array(&mut self) {
        let length = self.length();
        let half_domain = self.is_input_half_domain();
        let active_channels = self.channels();

        for c in 0..active_channels {
            let (low, high) = if half_domain {
                (0, HALF_ONE_ROW)
            } else {
                (0, length - 1)
            };
            let is_increasing = self.array.value(low, c) < self.array.value(high, c);

            if half_domain {
                let seed = self.array.value(0, c);
                flatten_span(&mut self.array, c, 1, HALF_POS_INF_ROW, is_increasing, seed);
                // The negative side runs the other way; seeding with the
                // value at +0 keeps the two sides from overlapping.
                flatten_span(
                    &mut self.array,
                    c,
                    HALF_NEG_ZERO_ROW,
                    HALF_NEG_INF_ROW,
                    !is_increasing,
                    seed,
                );
            } else {
                let seed = self.array.value(0, c);
                flatten_span(&mut self.array, c, 1, length - 1, is_increasing, seed);
            }

            let mut props = ComponentProperties {
                is_increasing,
                ..Default::default()
            };
            if half_domain {
                let (start, end) = scan_flat_ends(&self.array, c, 0, HALF_MAX_POS_ROW);
                let (neg_start, neg_end) =
                    scan_flat_ends(&self.array, c, HALF_NEG_ZERO_ROW, HALF_MAX_NEG_ROW);
                props.start_domain = start;
                props.end_domain = end;
                props.neg_start_domain = neg_start;
                props.neg_end_domain = neg_end;
            } else {
                let (start, end) = scan_flat_ends(&self.array, c, 0, length - 1);
                props.start_domain = start;
                props.end_domain = end;
            }
            self.component_properties[c] = props;
        }

        if active_channels == 1 {
            // Storage always holds three columns and evaluation reads
            // all of them; keep the duplicates in sync with the
            // flattened curve.
            let values = self.array.values_mut();
            for row in 0..length {
                let base = row * MAX_CHANNELS;
                let v = values[base];
                values[base + 1] = v;
                values[base + 2] = v;
            }
            self.component_properties[1] = self.component_properties[0];
            self.component_properties[2] = self.component_properties[0];
        }
    }
}

/// Clamps samples in `lo..=hi` that move against `increasing` back to
/// their predecessor, starting from `seed`.
fn flatten_span(
    array: &mut Lut1DArray,
    channel: usize,
    lo: usize,
    hi: usize,
    increasing: bool,
    seed: f32,
) {
    let values = array.values_mut();
    let mut prev = seed;
    for row in lo..=hi {
        let idx = row * MAX_CHANNELS + channel;
        if increasing != (values[idx] > prev) {
            values[idx] = prev;
        } else {
            prev = values[idx];
        }
    }
}

/// Finds the effective `(start, end)` indices inside `lo..=hi` by
/// scanning inward past the flat plateaus at each end. A constant span
/// yields `start == end == lo`.
fn scan_flat_ends(array: &Lut1DArray, channel: usize, lo: usize, hi: usize) -> (usize, usize) {
    let mut end = hi;
    let end_value = array.value(end, channel);
    while end > lo && array.value(end - 1, channel) == end_value {
        end -= 1;
    }

    let mut start = lo;
    let start_value = array.value(start, channel);
    // Works for increasing and decreasing spans alike; there is no
    // requirement that the start value be below the end value.
    while start < end && array.value(start + 1, channel) == start_value {
        start += 1;
    }

    (start, end)
}
