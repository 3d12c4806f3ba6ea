/// Constructs a `FixedVec` from a list of elements.
///
/// # Examples
///
/// ```
/// # use ndlattice_core::{fixedvec, UVec};
/// let extents: UVec = fixedvec![3, 4, 5];
/// assert_eq!(3, extents.len());
/// assert_eq!(60, extents.product());
/// ```
#[macro_export]
macro_rules! fixedvec {
    ($($elem:expr),* $(,)?) => {
        $crate::FixedVec::from(vec![$($elem),*])
    };
}
