//! CPU evaluation of 1D LUTs.
//!
//! Forward standard-domain tables are linearly interpolated; forward
//! half-domain tables are a direct lookup on the input's half bit
//! pattern. Inverse tables are evaluated either exactly, by searching
//! the prepared (weakly monotonic) curve within its effective domain, or
//! via a baked forward approximation from the fast-inverse factory.
//!
//! Inverse evaluation requires the component metadata written by
//! `finalize`; evaluating an unfinalized inverse LUT is unspecified.

use half::f16;

use super::array::MAX_CHANNELS;
use super::fast::make_fast_lut1d_from_inverse;
use super::{HueAdjust, InversionQuality, Lut1D, TransformDirection};
use crate::op::Op;

impl Lut1D {
    /// Forward evaluation of one channel at `v`.
    fn eval_forward_channel(&self, c: usize, v: f32) -> f32 {
        if self.is_input_half_domain() {
            // Round to the nearest half and index on its bit pattern.
            // Exact for half-valued inputs, which is what lookup domains
            // and integer-depth pipelines feed us.
            let row = f16::from_f32(v).to_bits() as usize;
            self.array.value(row, c)
        } else {
            let max_index = (self.length() - 1) as f32;
            let pos = if v.is_nan() {
                0.0
            } else {
                (v * max_index).clamp(0.0, max_index)
            };
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(self.length() - 1);
            let frac = pos - lo as f32;
            let a = self.array.value(lo, c);
            let b = self.array.value(hi, c);
            a + (b - a) * frac
        }
    }

    /// Exact inverse evaluation of one channel at `v`.
    ///
    /// Searches the side of the domain matching the sign of `v`; outside
    /// the effective domain the result is the nearest plateau edge.
    fn eval_inverse_channel(&self, c: usize, v: f32) -> f32 {
        let props = self.component_properties[c];
        if self.is_input_half_domain() {
            if v < 0.0 {
                self.invert_span(
                    c,
                    props.neg_start_domain,
                    props.neg_end_domain,
                    !props.is_increasing,
                    v,
                    true,
                )
            } else {
                self.invert_span(
                    c,
                    props.start_domain,
                    props.end_domain,
                    props.is_increasing,
                    v,
                    true,
                )
            }
        } else {
            self.invert_span(
                c,
                props.start_domain,
                props.end_domain,
                props.is_increasing,
                v,
                false,
            )
        }
    }

    /// Inverts `v` against the weakly monotonic samples in `lo..=hi`.
    ///
    /// Binary-searches for the bracketing pair, inverts linearly within
    /// it, and maps the position back to a domain coordinate: the ramp
    /// coordinate `row/(length-1)` for standard domains, the half value
    /// of the row's bit pattern for half domains.
    fn invert_span(
        &self,
        c: usize,
        lo: usize,
        hi: usize,
        increasing: bool,
        v: f32,
        half_domain: bool,
    ) -> f32 {
        let domain_coord = |row: usize| -> f32 {
            if half_domain {
                f16::from_bits(row as u16).to_f32()
            } else {
                row as f32 / (self.length() - 1) as f32
            }
        };

        if lo >= hi {
            return domain_coord(lo);
        }

        let lo_value = self.array.value(lo, c);
        let hi_value = self.array.value(hi, c);
        let v = if v.is_nan() {
            lo_value
        } else if increasing {
            v.clamp(lo_value, hi_value)
        } else {
            v.clamp(hi_value, lo_value)
        };

        let (mut a, mut b) = (lo, hi);
        while b - a > 1 {
            let mid = (a + b) / 2;
            let sample = self.array.value(mid, c);
            let below = if increasing { sample <= v } else { sample >= v };
            if below {
                a = mid;
            } else {
                b = mid;
            }
        }

        let a_value = self.array.value(a, c);
        let b_value = self.array.value(b, c);
        let frac = if b_value != a_value {
            (v - a_value) / (b_value - a_value)
        } else {
            0.0
        };

        let da = domain_coord(a);
        let db = domain_coord(b);
        da + (db - da) * frac
    }

    /// Applies `eval` channelwise, routing through the DW3 hue-preserving
    /// wrapper when hue adjustment is active.
    fn apply_channelwise<F>(&self, rgb: &mut [f32], eval: F)
    where
        F: Fn(&Self, usize, f32) -> f32,
    {
        if self.hue_adjust == HueAdjust::Dw3 {
            for px in rgb.chunks_exact_mut(MAX_CHANNELS) {
                let input = [px[0], px[1], px[2]];
                let (min_i, mid_i, max_i) = order3(&input);
                let (vmin, vmid, vmax) = (input[min_i], input[mid_i], input[max_i]);

                // Hue factor from the input ordering.
                let f = if vmax > vmin {
                    (vmid - vmin) / (vmax - vmin)
                } else {
                    0.0
                };

                let new_min = eval(self, min_i, vmin);
                let new_max = eval(self, max_i, vmax);
                px[min_i] = new_min;
                px[max_i] = new_max;
                px[mid_i] = new_min + f * (new_max - new_min);
            }
        } else {
            for px in rgb.chunks_exact_mut(MAX_CHANNELS) {
                for c in 0..MAX_CHANNELS {
                    px[c] = eval(self, c, px[c]);
                }
            }
        }
    }

    fn apply_inverse_fast(&self, rgb: &mut [f32]) {
        match make_fast_lut1d_from_inverse(self, false) {
            Ok(fast) => fast.apply(rgb),
            // Cannot fail for an inverse-direction LUT; exact fallback.
            Err(_) => self.apply_channelwise(rgb, |lut, c, v| lut.eval_inverse_channel(c, v)),
        }
    }
}

impl Op for Lut1D {
    fn apply(&self, rgb: &mut [f32]) {
        match self.direction {
            TransformDirection::Forward => {
                self.apply_channelwise(rgb, |lut, c, v| lut.eval_forward_channel(c, v));
            }
            TransformDirection::Inverse => match self.inversion_quality {
                InversionQuality::Exact => {
                    self.apply_channelwise(rgb, |lut, c, v| lut.eval_inverse_channel(c, v));
                }
                InversionQuality::Fast => self.apply_inverse_fast(rgb),
            },
        }
    }

    fn has_channel_crosstalk(&self) -> bool {
        self.hue_adjust != HueAdjust::None
    }
}

/// Indices of the minimum, middle, and maximum of three values.
fn order3(rgb: &[f32; 3]) -> (usize, usize, usize) {
    let mut idx = [0usize, 1, 2];
    idx.sort_by(|&a, &b| rgb[a].partial_cmp(&rgb[b]).unwrap_or(std::cmp::Ordering::Equal));
    (idx[0], idx[1], idx[2])
}
