//! Functional composition of 1D LUTs.
//!
//! Two operators can be merged into a single table by rendering one
//! table's domain through the other. The result maps the domain of the
//! first operator into the range of the last, so when the first table's
//! domain is too coarse for the curves behind it the composition would
//! alias; in that case a finer identity domain is substituted and the
//! original table is kept at the head of the chain so its effect is
//! still applied first.

use tracing::{debug, trace};

use super::{HalfFlags, Lut1D};
use crate::op::{eval_transform, Op, OpVec};
use crate::{OpsError, OpsResult};

/// Resampling strategy for [`compose`].
///
/// | Method       | Minimum size | Requires half domain |
/// |--------------|--------------|----------------------|
/// | `ResampleNo` | 0            | no                   |
/// | `ResampleBig`| 65,536       | no                   |
/// | `ResampleHd` | 65,536       | yes                  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeMethod {
    /// Keep A's domain as-is.
    ResampleNo,
    /// Resample onto a 65,536-row standard domain if A is coarser.
    ResampleBig,
    /// Resample onto a half domain.
    ResampleHd,
}

impl ComposeMethod {
    fn min_size(&self) -> usize {
        match self {
            Self::ResampleNo => 0,
            Self::ResampleBig | Self::ResampleHd => 65536,
        }
    }

    fn needs_half_domain(&self) -> bool {
        matches!(self, Self::ResampleHd)
    }
}

/// Renders `a`'s domain through `ops`, in place.
///
/// On return `a` represents the chain applied after `a`'s original
/// domain. The caller must ensure every evaluator in `ops` is separable;
/// hue-adjust and bypass propagation are also the caller's problem.
///
/// `a` is widened to three channels first, since the chain may treat the
/// channels differently.
pub fn compose_vec(a: &mut Lut1D, ops: &[Box<dyn Op>]) -> OpsResult<()> {
    if ops.is_empty() {
        return Err(OpsError::Contract(
            "there is nothing to compose the 1D LUT with".into(),
        ));
    }
    debug_assert!(ops.iter().all(|op| op.is_separable()));

    trace!(rows = a.length(), ops = ops.len(), "rendering LUT domain through chain");

    a.widen_to_rgb();
    eval_transform(a.values_mut(), ops);
    Ok(())
}

/// Composes two forward 1D LUTs into `a`.
///
/// The caller is expected to have checked [`Lut1D::may_compose`]: both
/// LUTs forward, neither with hue adjustment.
///
/// If `a`'s domain is too coarse for `method`, `a` is replaced by a
/// fresh identity of the required size (half domain if the method asks
/// for one, format metadata preserved) and the original `a` is applied
/// first through the chain. `b`'s known file bit depth and hue-adjust
/// mode are carried onto the result.
pub fn compose(a: &mut Lut1D, b: &Lut1D, method: ComposeMethod) -> OpsResult<()> {
    let min_size = method.min_size();
    let needs_half_domain = method.needs_half_domain();

    let mut ops: OpVec = Vec::new();

    let a_size = a.length();
    let good_domain = a.is_input_half_domain() || (a_size >= min_size && !needs_half_domain);
    let use_orig_domain = method == ComposeMethod::ResampleNo;

    if !good_domain && !use_orig_domain {
        debug!(
            from = a_size,
            to = min_size,
            half_domain = needs_half_domain,
            "substituting finer identity domain for composition"
        );

        let flags = if needs_half_domain {
            HalfFlags::INPUT_HALF
        } else {
            HalfFlags::STANDARD
        };
        let mut fresh = Lut1D::with_half_flags(flags, min_size)?;
        fresh.set_interpolation(a.interpolation());
        fresh.set_file_output_bit_depth(a.file_output_bit_depth());

        // The original table still applies first.
        let previous = std::mem::replace(a, fresh);
        ops.push(Box::new(previous));
    }

    ops.push(Box::new(b.clone()));

    compose_vec(a, &ops)?;

    if !b.file_output_bit_depth().is_unknown() {
        a.set_file_output_bit_depth(b.file_output_bit_depth());
    }
    a.set_hue_adjust(b.hue_adjust());
    Ok(())
}
