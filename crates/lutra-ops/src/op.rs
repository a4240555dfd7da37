//! The evaluator-chain interface.
//!
//! Operators are held behind owning handles in an ordered chain and are
//! invoked through one narrow method plus cheap introspection predicates.
//! The LUT composition machinery pipes sample buffers through such chains
//! without knowing the concrete operator kinds.
//!
//! # Buffer convention
//!
//! Pixels are three-channel interleaved single-precision floats, processed
//! in place. An evaluator must be pure with respect to the buffer: the same
//! input always produces the same output within one call.

/// A pixel operator that can be evaluated as part of a chain.
pub trait Op {
    /// Evaluates the operator over `rgb`, a three-channel interleaved
    /// buffer, in place. `rgb.len()` must be a multiple of 3.
    fn apply(&self, rgb: &mut [f32]);

    /// Whether the operator mixes channels (e.g. hue adjustment).
    fn has_channel_crosstalk(&self) -> bool {
        false
    }

    /// Whether the operator processes each channel independently.
    fn is_separable(&self) -> bool {
        !self.has_channel_crosstalk()
    }
}

/// An ordered chain of owned evaluators.
pub type OpVec = Vec<Box<dyn Op>>;

/// Evaluates `pixels` through every operator in `ops`, in order, in place.
pub fn eval_transform(pixels: &mut [f32], ops: &[Box<dyn Op>]) {
    debug_assert!(pixels.len() % 3 == 0);
    for op in ops {
        op.apply(pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offset(f32);

    impl Op for Offset {
        fn apply(&self, rgb: &mut [f32]) {
            for v in rgb.iter_mut() {
                *v += self.0;
            }
        }
    }

    #[test]
    fn test_chain_order() {
        struct Double;
        impl Op for Double {
            fn apply(&self, rgb: &mut [f32]) {
                for v in rgb.iter_mut() {
                    *v *= 2.0;
                }
            }
        }

        let ops: OpVec = vec![Box::new(Offset(1.0)), Box::new(Double)];
        let mut pixels = [0.0_f32, 0.5, 1.0];
        eval_transform(&mut pixels, &ops);

        // (v + 1) * 2, not v * 2 + 1
        assert_eq!(pixels, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_default_predicates() {
        let op = Offset(0.0);
        assert!(!op.has_channel_crosstalk());
        assert!(op.is_separable());
    }
}
