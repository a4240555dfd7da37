//! Fast-inverse factory and lookup-domain construction.
//!
//! Inverting a tabulated curve sample-by-sample is exact but slow. The
//! factory here bakes an inverse-direction LUT into a forward table that
//! can be rendered like any other, at a bit depth chosen by heuristics:
//! the depth the table was originally quantized at, whether the target
//! is a GPU (which always interpolates, so a smaller table suffices),
//! and whether the curve's range extends outside [0, 1] (which forces a
//! half domain so the whole range stays addressable).

use tracing::debug;

use super::array::HALF_DOMAIN_ENTRIES;
use super::compose::{compose, ComposeMethod};
use super::{HalfFlags, HueAdjust, InversionQuality, Lut1D, TransformDirection};
use crate::{OpsError, OpsResult};
use lutra_core::BitDepth;

/// Extended-range slack around [0, 1].
const RANGE_TOL: f32 = 1e-5;

/// Number of table rows needed for a direct lookup at `incoming` depth.
///
/// Integer depths need one row per code value. For float depths a true
/// lookup is impractical, so 65,536 is returned. `Unknown` and `U32`
/// are not supported.
pub fn lut_ideal_size(incoming: BitDepth) -> OpsResult<usize> {
    match incoming {
        BitDepth::U8 | BitDepth::U10 | BitDepth::U12 | BitDepth::U14 | BitDepth::U16 => {
            Ok(incoming.max_value() as usize + 1)
        }
        BitDepth::F16 | BitDepth::F32 => Ok(HALF_DOMAIN_ENTRIES),
        BitDepth::Unknown | BitDepth::U32 => Err(OpsError::Unsupported(format!(
            "bit depth is not supported for a lookup table: {incoming}"
        ))),
    }
}

/// Number of rows an identity fill expects for the given flags.
///
/// A half domain is always 65,536 rows, whatever the incoming depth;
/// otherwise this defers to [`lut_ideal_size`].
pub fn lut_ideal_size_for(incoming: BitDepth, half_flags: HalfFlags) -> OpsResult<usize> {
    if half_flags.is_input_half_domain() {
        return Ok(HALF_DOMAIN_ENTRIES);
    }
    lut_ideal_size(incoming)
}

/// Builds an identity LUT sized so that inputs of `incoming` depth can
/// be looked up directly: a half domain for float depths, one row per
/// code value for integer depths.
pub fn make_lookup_domain(incoming: BitDepth) -> OpsResult<Lut1D> {
    let flags = if incoming.is_float() {
        HalfFlags::INPUT_HALF
    } else {
        HalfFlags::STANDARD
    };
    let size = lut_ideal_size_for(incoming, flags)?;
    Lut1D::with_half_flags(flags, size)
}

impl Lut1D {
    /// Whether inputs of `incoming` depth can be evaluated by direct
    /// table indexing, with no interpolation: a half-domain LUT fed F16,
    /// or a standard LUT with one row per integer code value.
    pub fn may_lookup(&self, incoming: BitDepth) -> bool {
        if self.is_input_half_domain() {
            incoming == BitDepth::F16
        } else if !incoming.is_float() {
            self.length() == incoming.max_value() as usize + 1
        } else {
            false
        }
    }

    /// Whether any non-NaN sample lies outside `[0 - 1e-5, 1 + 1e-5]`.
    ///
    /// A forward LUT may tabulate values outside its nominal output
    /// range so clamping can happen after interpolation; its inverse
    /// then has to evaluate over an extended domain. This is a plain
    /// scan of the stored values and is safe to call at any time.
    pub fn has_extended_range(&self) -> bool {
        self.values()
            .iter()
            .any(|v| !v.is_nan() && (*v < -RANGE_TOL || *v > 1.0 + RANGE_TOL))
    }
}

/// Builds a forward LUT approximating the inverse of `lut`.
///
/// `lut` must be inverse-direction. The bit depth of the resulting
/// lookup domain starts from the LUT's remembered file bit depth;
/// unknown or impractical depths fall back to 12-bit, GPU targets are
/// capped at 12-bit unless pinned to 16-bit, and extended-range curves
/// force a half domain. During the bake the source is observed with
/// `InversionQuality::Exact` so the fast path cannot recurse into
/// itself.
pub fn make_fast_lut1d_from_inverse(lut: &Lut1D, for_gpu: bool) -> OpsResult<Lut1D> {
    if lut.direction() != TransformDirection::Inverse {
        return Err(OpsError::Contract(
            "a fast LUT can only be built from an inverse-direction 1D LUT".into(),
        ));
    }

    let mut depth = lut.file_output_bit_depth();
    if matches!(depth, BitDepth::Unknown | BitDepth::U14 | BitDepth::U32) {
        depth = BitDepth::U12;
    }

    // GPU targets always interpolate rather than look up, so a smaller
    // table suffices. U16 is kept as the opt-out for tables that must
    // not be subsampled (e.g. float-conversion LUTs).
    if for_gpu && depth != BitDepth::U16 {
        depth = BitDepth::U12;
    }

    if lut.has_extended_range() {
        depth = BitDepth::F16;
    }

    debug!(depth = %depth, for_gpu, "baking fast inverse 1D LUT");

    let mut domain = make_lookup_domain(depth)?;

    // Observe the source as exact (and separable) for the bake; the
    // hue-adjust mode is restored on the result.
    let mut source = lut.clone();
    source.set_inversion_quality(InversionQuality::Exact);
    source.set_hue_adjust(HueAdjust::None);

    compose(&mut domain, &source, ComposeMethod::ResampleNo)?;

    domain.set_hue_adjust(lut.hue_adjust());
    Ok(domain)
}
