//! 1D lookup table operator.
//!
//! A 1D LUT applies an independent transfer function to each color
//! channel. This module holds the complete subsystem: the sample table
//! with its well-formedness invariants, the preparation pass that makes a
//! tabulated curve reliably invertible, functional composition of LUTs
//! and evaluator chains into a single table, and the fast-inverse factory
//! that approximates an inverse LUT at a heuristically chosen bit depth.
//!
//! # Domains
//!
//! A LUT is either *standard domain* (row `i` corresponds to input
//! `i/(length-1)`) or *half domain* (exactly 65,536 rows, row `i`
//! corresponds to the float value of half bit-pattern `i`, spanning the
//! whole binary16 range including infinities and NaNs).
//!
//! # Lifecycle
//!
//! Construct, optionally mutate, then [`Lut1D::finalize`]. Finalize
//! validates, prepares inverse-direction LUTs for evaluation, and assigns
//! the content-addressed cache id. Mutating after finalize leaves a stale
//! cache id; re-finalize before relying on identity or composition.

mod apply;
mod array;
mod compose;
mod fast;
mod prepare;

pub use array::Lut1DArray;
pub use compose::{compose, compose_vec, ComposeMethod};
pub use fast::{
    lut_ideal_size, lut_ideal_size_for, make_fast_lut1d_from_inverse, make_lookup_domain,
};
pub use prepare::ComponentProperties;

use md5::{Digest, Md5};
use tracing::debug;

use crate::matrix::MatrixOp;
use crate::op::Op;
use crate::range::RangeOp;
use crate::{OpsError, OpsResult};
use lutra_core::BitDepth;

pub(crate) use array::{HALF_DOMAIN_ENTRIES, MAX_CHANNELS};

// ============================================================================
// Attribute enums
// ============================================================================

/// Which parts of a LUT's encoding use raw half bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HalfFlags {
    /// The input domain is indexed by half bit patterns.
    pub input_half: bool,
    /// The output values are raw half bit patterns.
    pub output_half: bool,
}

impl HalfFlags {
    /// Standard domain, standard output.
    pub const STANDARD: Self = Self {
        input_half: false,
        output_half: false,
    };

    /// Half-domain input, standard output.
    pub const INPUT_HALF: Self = Self {
        input_half: true,
        output_half: false,
    };

    /// Whether the input domain is indexed by half bit patterns.
    #[inline]
    pub fn is_input_half_domain(&self) -> bool {
        self.input_half
    }

    /// Domain description used in cache ids.
    pub fn domain_name(&self) -> &'static str {
        if self.input_half {
            "half domain"
        } else {
            "standard domain"
        }
    }
}

/// Interpolation algorithm requested for a LUT.
///
/// Only `Default`, `Linear`, `Nearest` and `Best` are accepted by a 1D
/// LUT; the rest fail [`Lut1D::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Implementation-chosen default.
    #[default]
    Default,
    /// Linear interpolation.
    Linear,
    /// Nearest neighbor. Realised as linear on the CPU; a GPU renderer
    /// may implement it natively but must produce the same pixels.
    Nearest,
    /// Best available.
    Best,
    /// Cubic interpolation (3D LUTs only).
    Cubic,
    /// Tetrahedral interpolation (3D LUTs only).
    Tetrahedral,
    /// Unrecognised.
    Unknown,
}

impl Interpolation {
    /// Lowercase name used in messages and cache ids.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Linear => "linear",
            Self::Nearest => "nearest",
            Self::Best => "best",
            Self::Cubic => "cubic",
            Self::Tetrahedral => "tetrahedral",
            Self::Unknown => "unknown",
        }
    }

    fn supported_by_lut1d(&self) -> bool {
        matches!(self, Self::Default | Self::Linear | Self::Nearest | Self::Best)
    }
}

/// Optional hue-preserving post step.
///
/// When active the LUT mixes channels and is no longer separable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueAdjust {
    /// No hue adjustment.
    #[default]
    None,
    /// The DW3 algorithm: the middle channel is reconstructed from the
    /// transformed min/max so the input hue is preserved.
    Dw3,
}

impl HueAdjust {
    /// Lowercase name used in cache ids.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dw3 => "dw3",
        }
    }
}

/// Transform application direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformDirection {
    /// Forward transform.
    #[default]
    Forward,
    /// Inverse transform.
    Inverse,
}

impl TransformDirection {
    /// Returns the opposite direction.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }

    /// Lowercase name used in cache ids.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Inverse => "inverse",
        }
    }
}

/// How an inverse-direction LUT is rendered.
///
/// `Fast` bakes the inverse into a forward lookup at a heuristic bit
/// depth; `Exact` inverts each sample by searching the tabulated curve.
/// The choice affects rendering cost and precision, never the data model:
/// it is excluded from equality and from the cache id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InversionQuality {
    /// Approximate via a resampled forward LUT.
    #[default]
    Fast,
    /// Invert each sample against the tabulated curve.
    Exact,
}

// ============================================================================
// Lut1D
// ============================================================================

/// A 1D LUT operator.
///
/// Owns its sample table and per-channel metadata exclusively; two
/// instances never alias. `clone` is a deep copy.
///
/// # Example
///
/// ```rust
/// use lutra_ops::lut1d::Lut1D;
///
/// let mut lut = Lut1D::new(1024).unwrap();
/// lut.finalize().unwrap();
/// assert!(lut.is_identity());
/// assert!(!lut.cache_id().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Lut1D {
    interpolation: Interpolation,
    array: Lut1DArray,
    half_flags: HalfFlags,
    hue_adjust: HueAdjust,
    direction: TransformDirection,
    inversion_quality: InversionQuality,
    file_output_bit_depth: BitDepth,
    component_properties: [ComponentProperties; MAX_CHANNELS],
    cache_id: String,
}

impl Lut1D {
    /// Creates a forward standard-domain identity LUT of `length` rows.
    pub fn new(length: usize) -> OpsResult<Self> {
        Self::with_half_flags(HalfFlags::STANDARD, length)
    }

    /// Creates a standard-domain identity LUT with the given direction.
    pub fn with_direction(length: usize, direction: TransformDirection) -> OpsResult<Self> {
        let mut lut = Self::new(length)?;
        lut.direction = direction;
        Ok(lut)
    }

    /// Creates an identity LUT for the given domain flags.
    pub fn with_half_flags(half_flags: HalfFlags, length: usize) -> OpsResult<Self> {
        Ok(Self {
            interpolation: Interpolation::Default,
            array: Lut1DArray::new(half_flags, length)?,
            half_flags,
            hue_adjust: HueAdjust::None,
            direction: TransformDirection::Forward,
            inversion_quality: InversionQuality::Fast,
            file_output_bit_depth: BitDepth::Unknown,
            component_properties: [ComponentProperties::default(); MAX_CHANNELS],
            cache_id: String::new(),
        })
    }

    /// Creates a forward standard-domain LUT from loader-style values.
    ///
    /// `values` is row-major with `channels` (1 or 3) floats per row; a
    /// one-channel table is widened into all three storage columns.
    pub fn from_values(length: usize, channels: usize, values: &[f32]) -> OpsResult<Self> {
        if channels != 1 && channels != 3 {
            return Err(OpsError::Shape(format!(
                "LUT 1D channel count must be 1 or 3, found {channels}"
            )));
        }
        if values.len() != length * channels {
            return Err(OpsError::Shape(format!(
                "LUT 1D expected {} values for {} rows x {} channels, found {}",
                length * channels,
                length,
                channels,
                values.len()
            )));
        }
        let mut lut = Self::new(length)?;
        for row in 0..length {
            for ch in 0..MAX_CHANNELS {
                let v = if channels == 1 {
                    values[row]
                } else {
                    values[row * MAX_CHANNELS + ch]
                };
                lut.array.set_value(row, ch, v);
            }
        }
        lut.array.set_channels(channels);
        Ok(lut)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of table rows.
    #[inline]
    pub fn length(&self) -> usize {
        self.array.length()
    }

    /// Logical channel count (1 or 3).
    #[inline]
    pub fn channels(&self) -> usize {
        self.array.channels()
    }

    /// The interleaved samples (always three storage columns).
    #[inline]
    pub fn values(&self) -> &[f32] {
        self.array.values()
    }

    /// Mutable access to the samples. Mutation leaves a stale cache id;
    /// re-finalize before relying on identity or composition.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f32] {
        self.array.values_mut()
    }

    /// The sample table.
    #[inline]
    pub fn array(&self) -> &Lut1DArray {
        &self.array
    }

    /// Requested interpolation.
    #[inline]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Sets the requested interpolation. Validity is checked at
    /// [`Lut1D::validate`].
    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    /// The interpolation the CPU renderer actually uses: always linear,
    /// whatever was requested.
    #[inline]
    pub fn concrete_interpolation(&self) -> Interpolation {
        Interpolation::Linear
    }

    /// Hue-adjust mode.
    #[inline]
    pub fn hue_adjust(&self) -> HueAdjust {
        self.hue_adjust
    }

    /// Sets the hue-adjust mode.
    pub fn set_hue_adjust(&mut self, hue_adjust: HueAdjust) {
        self.hue_adjust = hue_adjust;
    }

    /// Application direction.
    #[inline]
    pub fn direction(&self) -> TransformDirection {
        self.direction
    }

    /// Sets the application direction.
    pub fn set_direction(&mut self, direction: TransformDirection) {
        self.direction = direction;
    }

    /// Inversion rendering quality.
    #[inline]
    pub fn inversion_quality(&self) -> InversionQuality {
        self.inversion_quality
    }

    /// Sets the inversion rendering quality.
    pub fn set_inversion_quality(&mut self, quality: InversionQuality) {
        self.inversion_quality = quality;
    }

    /// Bit depth the table was quantized at in its source file.
    #[inline]
    pub fn file_output_bit_depth(&self) -> BitDepth {
        self.file_output_bit_depth
    }

    /// Remembers the file bit depth. Used by the fast-inverse heuristic.
    pub fn set_file_output_bit_depth(&mut self, depth: BitDepth) {
        self.file_output_bit_depth = depth;
    }

    /// Half flags.
    #[inline]
    pub fn half_flags(&self) -> HalfFlags {
        self.half_flags
    }

    /// Whether the input domain is indexed by half bit patterns.
    #[inline]
    pub fn is_input_half_domain(&self) -> bool {
        self.half_flags.input_half
    }

    /// Sets or clears the half-domain input flag.
    pub fn set_input_half_domain(&mut self, is_half_domain: bool) {
        self.half_flags.input_half = is_half_domain;
    }

    /// Whether output values are raw half bit patterns.
    #[inline]
    pub fn output_raw_halfs(&self) -> bool {
        self.half_flags.output_half
    }

    /// Sets or clears the raw-half output flag.
    pub fn set_output_raw_halfs(&mut self, is_raw_halfs: bool) {
        self.half_flags.output_half = is_raw_halfs;
    }

    /// Per-channel analysis produced by inverse preparation.
    #[inline]
    pub fn component_properties(&self, channel: usize) -> &ComponentProperties {
        &self.component_properties[channel]
    }

    /// Content-addressed identity string. Valid only after
    /// [`Lut1D::finalize`]; empty before.
    #[inline]
    pub fn cache_id(&self) -> &str {
        &self.cache_id
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Whether the table is an identity for its domain, within the
    /// bit-depth-aware tolerance.
    pub fn is_identity(&self) -> bool {
        self.array.is_identity(self.half_flags)
    }

    /// Whether applying this LUT changes nothing at all. Only a
    /// half-domain identity qualifies: a standard-domain identity still
    /// clamps its input to [0, 1].
    pub fn is_no_op(&self) -> bool {
        self.is_input_half_domain() && self.is_identity()
    }

    /// An evaluator with the same effect as this LUT, assuming it is an
    /// identity: a matrix identity for the half domain, a `[0,1]` range
    /// clamp for the standard domain.
    pub fn identity_replacement(&self) -> Box<dyn Op> {
        if self.is_input_half_domain() {
            Box::new(MatrixOp::identity())
        } else {
            Box::new(RangeOp::clamp(0.0, 1.0))
        }
    }

    /// Whether the LUT mixes channels.
    pub fn has_channel_crosstalk(&self) -> bool {
        self.hue_adjust != HueAdjust::None
    }

    /// Whether `self` and `other` form a forward/inverse pair over the
    /// same table.
    ///
    /// Inverse preparation flattens reversals, so a prepared pair may
    /// legitimately compare unequal; such LUTs should not be optimized
    /// away as an identity anyway.
    pub fn is_inverse(&self, other: &Lut1D) -> bool {
        let opposed = (self.direction == TransformDirection::Forward
            && other.direction == TransformDirection::Inverse)
            || (self.direction == TransformDirection::Inverse
                && other.direction == TransformDirection::Forward);
        opposed && self.have_equal_basics(other)
    }

    /// Whether `compose` may merge `self` and `other`: both forward,
    /// neither with hue adjustment.
    pub fn may_compose(&self, other: &Lut1D) -> bool {
        self.direction == TransformDirection::Forward
            && other.direction == TransformDirection::Forward
            && self.hue_adjust == HueAdjust::None
            && other.hue_adjust == HueAdjust::None
    }

    fn have_equal_basics(&self, other: &Lut1D) -> bool {
        self.half_flags == other.half_flags
            && self.hue_adjust == other.hue_adjust
            && self.array == other.array
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Multiplies every stored sample by `factor`.
    pub fn scale(&mut self, factor: f32) {
        self.array.scale(factor);
    }

    /// Returns a deep copy with the direction toggled.
    ///
    /// Component metadata may be stale on the copy and the cache id is
    /// meaningless until it is re-finalized.
    pub fn inverse(&self) -> Lut1D {
        let mut inv = self.clone();
        inv.direction = self.direction.inverse();
        inv
    }

    /// Widens a separable table to three logical channels in place.
    pub(crate) fn widen_to_rgb(&mut self) {
        self.array.set_channels(MAX_CHANNELS);
    }

    // ------------------------------------------------------------------
    // Validation and finalize
    // ------------------------------------------------------------------

    /// Checks the attribute combination and the table structure.
    pub fn validate(&self) -> OpsResult<()> {
        if !self.interpolation.supported_by_lut1d() {
            return Err(OpsError::Unsupported(format!(
                "1D LUT does not support interpolation algorithm: {}",
                self.interpolation.name()
            )));
        }
        self.array.validate()?;
        if self.is_input_half_domain() && self.length() != HALF_DOMAIN_ENTRIES {
            return Err(OpsError::Shape(format!(
                "1D LUT: {} entries found, {} required for half-domain 1D LUT",
                self.length(),
                HALF_DOMAIN_ENTRIES
            )));
        }
        Ok(())
    }

    /// Commits the LUT for use.
    ///
    /// Validates, prepares inverse-direction LUTs for evaluation,
    /// collapses identical channels to a logical
    /// count of 1, and assigns the cache id: the hex MD5 of the raw
    /// float bytes followed by the direction, interpolation, domain, and
    /// hue-adjust names. The inversion quality is not included.
    ///
    /// Validation runs before preparation, so a failed finalize leaves
    /// the table untouched. The digest uses native byte order; it is
    /// stable across runs for identical float contents.
    pub fn finalize(&mut self) -> OpsResult<()> {
        self.validate()?;

        if self.direction == TransformDirection::Inverse {
            self.prepare_array();
        }

        self.array.adjust_channel_count();

        let bytes: Vec<u8> = self
            .array
            .values()
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let mut hasher = Md5::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();

        self.cache_id = format!(
            "{} {} {} {} {}",
            hex_encode(digest),
            self.direction.name(),
            self.interpolation.name(),
            self.half_flags.domain_name(),
            self.hue_adjust.name()
        );

        debug!(
            length = self.length(),
            channels = self.channels(),
            cache_id = %self.cache_id,
            "finalized 1D LUT"
        );
        Ok(())
    }
}

impl PartialEq for Lut1D {
    /// Compares direction, concrete interpolation, half flags, hue
    /// adjust, and the sample table. The inversion quality and cache id
    /// are excluded.
    fn eq(&self, other: &Self) -> bool {
        self.direction == other.direction
            && self.concrete_interpolation() == other.concrete_interpolation()
            && self.have_equal_basics(other)
    }
}

fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let bytes = bytes.as_ref();
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX_CHARS[(b >> 4) as usize] as char);
        s.push(HEX_CHARS[(b & 0xf) as usize] as char);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_3d_interpolation() {
        for interp in [
            Interpolation::Cubic,
            Interpolation::Tetrahedral,
            Interpolation::Unknown,
        ] {
            let mut lut = Lut1D::new(16).unwrap();
            lut.set_interpolation(interp);
            let err = lut.validate().unwrap_err();
            assert!(err.to_string().contains(interp.name()));
        }
        for interp in [
            Interpolation::Default,
            Interpolation::Linear,
            Interpolation::Nearest,
            Interpolation::Best,
        ] {
            let mut lut = Lut1D::new(16).unwrap();
            lut.set_interpolation(interp);
            assert!(lut.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_half_domain_length() {
        let mut lut = Lut1D::new(65535).unwrap();
        lut.set_input_half_domain(true);
        assert!(lut.validate().is_err());

        let mut lut = Lut1D::new(65537).unwrap();
        lut.set_input_half_domain(true);
        assert!(lut.validate().is_err());

        let lut = Lut1D::with_half_flags(HalfFlags::INPUT_HALF, 65536).unwrap();
        assert!(lut.validate().is_ok());
    }

    #[test]
    fn test_identity_and_no_op() {
        let lut = Lut1D::new(3).unwrap();
        assert_eq!(
            lut.values(),
            &[0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0]
        );
        assert!(lut.is_identity());
        assert!(!lut.is_no_op());

        let mut lut = lut;
        lut.scale(2.0);
        assert!(!lut.is_identity());

        let half = Lut1D::with_half_flags(HalfFlags::INPUT_HALF, 65536).unwrap();
        assert!(half.is_identity());
        assert!(half.is_no_op());
    }

    #[test]
    fn test_identity_replacement_kinds() {
        // Half domain: matrix identity, no residual clamping.
        let half = Lut1D::with_half_flags(HalfFlags::INPUT_HALF, 65536).unwrap();
        let mut px = [2.0_f32, -3.0, 0.5];
        half.identity_replacement().apply(&mut px);
        assert_eq!(px, [2.0, -3.0, 0.5]);

        // Standard domain: [0,1] clamp survives.
        let std = Lut1D::new(16).unwrap();
        let mut px = [2.0_f32, -3.0, 0.5];
        std.identity_replacement().apply(&mut px);
        assert_eq!(px, [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut lut = Lut1D::new(16).unwrap();
        lut.finalize().unwrap();

        let mut copy = lut.clone();
        assert_eq!(copy, lut);
        assert_eq!(copy.cache_id(), lut.cache_id());

        copy.scale(2.0);
        assert_ne!(copy, lut);
        assert!(lut.is_identity());
    }

    #[test]
    fn test_double_inverse_roundtrip() {
        let lut = Lut1D::new(16).unwrap();
        let back = lut.inverse().inverse();
        assert_eq!(back, lut);
        assert_eq!(back.direction(), TransformDirection::Forward);
    }

    #[test]
    fn test_is_inverse() {
        let lut = Lut1D::new(16).unwrap();
        let inv = lut.inverse();
        assert!(lut.is_inverse(&inv));
        assert!(inv.is_inverse(&lut));
        assert!(!lut.is_inverse(&lut));

        let mut other = lut.inverse();
        other.scale(0.5);
        assert!(!lut.is_inverse(&other));
    }

    #[test]
    fn test_may_compose() {
        let a = Lut1D::new(16).unwrap();
        let b = Lut1D::new(64).unwrap();
        assert!(a.may_compose(&b));

        let inv = b.inverse();
        assert!(!a.may_compose(&inv));

        let mut hue = Lut1D::new(64).unwrap();
        hue.set_hue_adjust(HueAdjust::Dw3);
        assert!(!a.may_compose(&hue));
        assert!(hue.has_channel_crosstalk());
    }

    #[test]
    fn test_equality_ignores_inversion_quality() {
        let mut a = Lut1D::new(16).unwrap();
        let mut b = Lut1D::new(16).unwrap();
        a.set_inversion_quality(InversionQuality::Fast);
        b.set_inversion_quality(InversionQuality::Exact);
        assert_eq!(a, b);

        // Nearest and linear share the same concrete interpolation.
        a.set_interpolation(Interpolation::Nearest);
        b.set_interpolation(Interpolation::Linear);
        assert_eq!(a, b);
    }

    #[test]
    fn test_finalize_idempotent() {
        let mut lut = Lut1D::with_direction(64, TransformDirection::Inverse).unwrap();
        lut.finalize().unwrap();
        let first = lut.cache_id().to_string();
        lut.finalize().unwrap();
        assert_eq!(lut.cache_id(), first);
    }

    #[test]
    fn test_cache_id_reflects_flags() {
        let mut a = Lut1D::new(16).unwrap();
        a.finalize().unwrap();
        assert!(a.cache_id().ends_with("forward default standard domain none"));

        // Same bytes, different direction: different cache id.
        let mut b = a.inverse();
        b.finalize().unwrap();
        assert_ne!(a.cache_id(), b.cache_id());
        let a_hex = a.cache_id().split(' ').next().unwrap();
        let b_hex = b.cache_id().split(' ').next().unwrap();
        assert_eq!(a_hex, b_hex);
        assert_eq!(a_hex.len(), 32);
    }

    #[test]
    fn test_failed_finalize_leaves_values_untouched() {
        let mut lut = Lut1D::from_values(
            4,
            3,
            &[0.0, 0.0, 0.0, 0.3, 0.3, 0.3, 0.2, 0.2, 0.2, 1.0, 1.0, 1.0],
        )
        .unwrap();
        lut.set_direction(TransformDirection::Inverse);
        lut.set_interpolation(Interpolation::Cubic);

        let before = lut.values().to_vec();
        assert!(lut.finalize().is_err());
        assert_eq!(lut.values(), &before[..]);
    }

    #[test]
    fn test_from_values_shape_checks() {
        assert!(Lut1D::from_values(4, 2, &[0.0; 8]).is_err());
        assert!(Lut1D::from_values(4, 3, &[0.0; 11]).is_err());

        // A one-channel table is widened into all three columns.
        let lut = Lut1D::from_values(2, 1, &[0.1, 0.9]).unwrap();
        assert_eq!(lut.channels(), 1);
        assert_eq!(lut.values(), &[0.1, 0.1, 0.1, 0.9, 0.9, 0.9]);
    }

    #[test]
    fn test_finalize_collapses_identical_channels() {
        let mut lut = Lut1D::from_values(2, 3, &[0.0, 0.0, 0.0, 0.9, 0.9, 0.9]).unwrap();
        assert_eq!(lut.channels(), 3);
        lut.finalize().unwrap();
        assert_eq!(lut.channels(), 1);

        let mut lut = Lut1D::from_values(2, 3, &[0.0, 0.0, 0.0, 0.9, 0.8, 0.9]).unwrap();
        lut.finalize().unwrap();
        assert_eq!(lut.channels(), 3);
    }
}
