//! Sample storage for 1D LUTs.
//!
//! The table is channel-interleaved single-precision, and the storage
//! width is always three channels even when the logical channel count is
//! one: the inverse machinery may widen a separable LUT to three channels
//! in place, so the room is reserved up front.

use half::f16;

use super::HalfFlags;
use crate::{OpsError, OpsResult};

/// Storage width in channels. The logical channel count may be 1 or 3.
pub(crate) const MAX_CHANNELS: usize = 3;

/// Largest accepted table length (1024 * 1024 rows).
pub(crate) const MAX_LENGTH: usize = 1024 * 1024;

/// Number of rows a half-domain table must have: one per 16-bit pattern.
pub(crate) const HALF_DOMAIN_ENTRIES: usize = 65536;

/// Absolute identity tolerance for standard-domain tables.
const IDENTITY_ABS_TOL: f32 = 1e-5;

/// Channel-interleaved sample table for a 1D LUT.
///
/// Row `i` holds the output for the `i`-th domain point; the domain is
/// either the uniform ramp `i/(length-1)` or, for half-domain tables, the
/// float value of half bit-pattern `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1DArray {
    length: usize,
    channels: usize,
    values: Vec<f32>,
}

impl Lut1DArray {
    /// Allocates a table of `length` rows and fills it with the identity
    /// for the given domain.
    pub fn new(half_flags: HalfFlags, length: usize) -> OpsResult<Self> {
        check_length(length)?;
        let mut array = Self {
            length,
            channels: MAX_CHANNELS,
            values: vec![0.0; length * MAX_CHANNELS],
        };
        array.fill(half_flags);
        Ok(array)
    }

    /// Overwrites every row with the identity for the given domain.
    ///
    /// Half domain: row `i` is the float interpretation of half
    /// bit-pattern `i` (including infinities and NaNs). Standard domain:
    /// row `i` is `i/(length-1)`.
    pub fn fill(&mut self, half_flags: HalfFlags) {
        if half_flags.is_input_half_domain() {
            for idx in 0..self.length {
                let v = f16::from_bits(idx as u16).to_f32();
                let row = idx * MAX_CHANNELS;
                self.values[row..row + MAX_CHANNELS].fill(v);
            }
        } else {
            let step = 1.0 / (self.length as f32 - 1.0);
            for idx in 0..self.length {
                let v = idx as f32 * step;
                let row = idx * MAX_CHANNELS;
                self.values[row..row + MAX_CHANNELS].fill(v);
            }
        }
    }

    /// Resizes the table. The contents are unspecified afterwards; the
    /// caller must refill or overwrite every row before use.
    pub fn resize(&mut self, length: usize, channels: usize) -> OpsResult<()> {
        check_length(length)?;
        check_channels(channels)?;
        self.length = length;
        self.channels = channels;
        self.values.resize(length * MAX_CHANNELS, 0.0);
        Ok(())
    }

    /// Number of rows.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Logical channel count (1 or 3).
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total stored floats: `length * 3` regardless of the logical
    /// channel count.
    #[inline]
    pub fn num_values(&self) -> usize {
        self.length * MAX_CHANNELS
    }

    /// The interleaved samples.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Mutable access to the interleaved samples.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// One sample.
    #[inline]
    pub fn value(&self, row: usize, channel: usize) -> f32 {
        self.values[row * MAX_CHANNELS + channel]
    }

    /// Overwrites one sample.
    #[inline]
    pub fn set_value(&mut self, row: usize, channel: usize, v: f32) {
        self.values[row * MAX_CHANNELS + channel] = v;
    }

    /// Sets the logical channel count without touching storage.
    pub(crate) fn set_channels(&mut self, channels: usize) {
        debug_assert!(channels == 1 || channels == 3);
        self.channels = channels;
    }

    /// Multiplies every stored sample by `factor`.
    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.values {
            *v *= factor;
        }
    }

    /// Structural consistency check.
    pub fn validate(&self) -> OpsResult<()> {
        check_length(self.length)?;
        if self.values.len() != self.length * MAX_CHANNELS {
            return Err(OpsError::Shape(format!(
                "LUT 1D holds {} values, expected {} for {} rows",
                self.values.len(),
                self.length * MAX_CHANNELS,
                self.length
            )));
        }
        if self.channels != 1 && self.channels != 3 {
            return Err(OpsError::Contract(format!(
                "LUT 1D active channel count must be 1 or 3, found {}",
                self.channels
            )));
        }
        Ok(())
    }

    /// Collapses the logical channel count to 1 when all three stored
    /// channels are identical. Storage is unchanged; this only affects
    /// how the table is described, never its effect on pixels.
    pub fn adjust_channel_count(&mut self) {
        if self.channels != MAX_CHANNELS {
            return;
        }
        for row in 0..self.length {
            let base = row * MAX_CHANNELS;
            let r = self.values[base].to_bits();
            if self.values[base + 1].to_bits() != r || self.values[base + 2].to_bits() != r {
                return;
            }
        }
        self.channels = 1;
    }

    /// Whether the table is an identity for the given domain, within the
    /// bit-depth-aware tolerance.
    ///
    /// Half-domain rows compare as halfs within one ULP on the ordered
    /// bit scale; NaN rows are skipped. Standard rows compare against
    /// `i/(length-1)` with an absolute tolerance of 1e-5.
    pub fn is_identity(&self, half_flags: HalfFlags) -> bool {
        if half_flags.is_input_half_domain() {
            for idx in 0..self.length {
                let aim = f16::from_bits(idx as u16);
                if aim.is_nan() {
                    continue;
                }
                let row = idx * MAX_CHANNELS;
                for channel in 0..MAX_CHANNELS {
                    let val = f16::from_f32(self.values[row + channel]);
                    if halfs_differ(aim, val, 1) {
                        return false;
                    }
                }
            }
        } else {
            let step = 1.0 / (self.length as f32 - 1.0);
            for idx in 0..self.length {
                let aim = idx as f32 * step;
                let row = idx * MAX_CHANNELS;
                for channel in 0..MAX_CHANNELS {
                    if (self.values[row + channel] - aim).abs() > IDENTITY_ABS_TOL {
                        return false;
                    }
                }
            }
        }
        true
    }
}

fn check_length(length: usize) -> OpsResult<()> {
    if length < 2 {
        return Err(OpsError::Shape(format!(
            "LUT 1D length '{length}' needs to be at least 2"
        )));
    }
    if length > MAX_LENGTH {
        return Err(OpsError::Shape(format!(
            "LUT 1D length '{length}' must not be greater than {MAX_LENGTH}"
        )));
    }
    Ok(())
}

fn check_channels(channels: usize) -> OpsResult<()> {
    if channels != 1 && channels != 3 {
        return Err(OpsError::Shape(format!(
            "LUT 1D channel count must be 1 or 3, found {channels}"
        )));
    }
    Ok(())
}

/// Maps a half onto a scale where adjacent representable values differ
/// by 1, negative values below zero.
#[inline]
fn half_ordered(h: f16) -> i32 {
    let bits = h.to_bits();
    if bits & 0x8000 != 0 {
        -((bits & 0x7fff) as i32)
    } else {
        bits as i32
    }
}

/// Whether two halfs differ by more than `tol` ULPs.
#[inline]
fn halfs_differ(a: f16, b: f16, tol: i32) -> bool {
    if a.is_nan() || b.is_nan() {
        return !(a.is_nan() && b.is_nan());
    }
    (half_ordered(a) - half_ordered(b)).abs() > tol
}
