use proptest::prelude::*;

use super::*;

#[test]
fn test_fixedvec_new_is_default_initialized() {
    let v: UVec = FixedVec::new(4);
    assert_eq!(4, v.len());
    assert!(v.is_zero());

    let d: Delta = FixedVec::new(3);
    assert_eq!(&[0, 0, 0], d.as_slice());
}

#[test]
fn test_fixedvec_macro() {
    let v: UVec = fixedvec![2, 10, 3];
    assert_eq!(2, v[0]);
    assert_eq!(10, v[1]);
    assert_eq!(3, v[2]);
    assert_eq!(60, v.product());
    assert_eq!("[2, 10, 3]", v.to_string());

    let d: Delta = fixedvec![-1, 0, 1];
    assert_eq!(&[-1, 0, 1], d.as_slice());
    assert!(!d.is_zero());
}

#[test]
fn test_fixedvec_checked_access() {
    let mut v: UVec = fixedvec![1, 2];
    assert_eq!(Ok(&2), v.get(1));
    assert_eq!(
        Err(CaError::IndexOutOfRange { index: 2, len: 2 }),
        v.get(2),
    );
    assert_eq!(Ok(()), v.set(0, 7));
    assert_eq!(7, v[0]);
    assert_eq!(
        Err(CaError::IndexOutOfRange { index: 5, len: 2 }),
        v.set(5, 0),
    );
    // Failed writes must not touch anything.
    assert_eq!(&[7, 2], v.as_slice());
}

#[test]
#[should_panic]
fn test_fixedvec_index_panics() {
    let v: UVec = FixedVec::new(2);
    let _ = v[2];
}

#[test]
fn test_fixedvec_clone_is_independent() {
    let original: UVec = fixedvec![4, 5, 6];
    let mut copy = original.clone();
    copy[1] = 0;
    assert_eq!(&[4, 5, 6], original.as_slice());
    assert_eq!(&[4, 0, 6], copy.as_slice());
}

#[test]
fn test_fixedvec_take_leaves_empty() {
    let mut source: UVec = fixedvec![1, 2, 3];
    let dest = source.take();
    assert_eq!(&[1, 2, 3], dest.as_slice());
    assert!(source.is_empty());
    assert_eq!(0, source.len());
    assert_eq!("[]", source.to_string());
}

#[test]
fn test_fixedvec_take_without_default_elements() {
    #[derive(Debug, PartialEq)]
    struct Token(u8);

    let mut source = FixedVec::from(vec![Token(7), Token(9)]);
    let dest = source.take();
    assert_eq!(&[Token(7), Token(9)], dest.as_slice());
    assert!(source.is_empty());
    assert!(FixedVec::<Token>::default().is_empty());
}

#[test]
fn test_fixedvec_conversions() {
    let from_array: UVec = FixedVec::from([1, 2, 3]);
    let from_vec: UVec = FixedVec::from(vec![1, 2, 3]);
    let from_slice: UVec = FixedVec::from(&[1_usize, 2, 3][..]);
    let from_iter: UVec = (1..=3).collect();
    assert_eq!(from_array, from_vec);
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_slice, from_iter);
    assert_eq!(vec![1, 2, 3], from_iter.into_vec());
}

proptest! {
    /// Tests that `from_fn()` produces the same elements as the generator.
    #[test]
    fn test_fixedvec_from_fn(len in 0..16_usize, scale in 0..100_usize) {
        let v: UVec = FixedVec::from_fn(len, |i| i * scale);
        prop_assert_eq!(len, v.len());
        for (i, &x) in v.iter().enumerate() {
            prop_assert_eq!(i * scale, x);
        }
    }
}
