use super::FixedVec;

/// Vector of unsigned counts: extents, strides, or subscripts.
pub type UVec = FixedVec<usize>;

/// Vector of single-step offsets, one per axis.
///
/// Each component is expected to be `-1`, `0`, or `1`. This is not checked.
pub type Delta = FixedVec<i8>;
