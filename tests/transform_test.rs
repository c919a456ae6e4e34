//! TransformTypes, TransformValues, Indices and Map.

use tola_typelist::prelude::*;

type L = typelist![u8, f64, u16, i32];

#[test]
fn test_transform_types() {
    assert_type_eq!(
        Transformed<L, PointerTo>,
        typelist![*const u8, *const f64, *const u16, *const i32]
    );
    assert_type_eq!(Transformed<typelist![], PointerTo>, typelist![]);
}

#[test]
fn test_indices() {
    assert_type_eq!(Indices<L>, typelist![D0, D1, D2, D3]);
    assert_type_eq!(Indices<typelist![]>, typelist![]);
}

/// Replaces each element with the list transformed so far.
struct PrefixSoFar;

impl Func for PrefixSoFar {
    type Shape = ByContext;
}

impl<T, I, Acc> ContextFn<T, I, Acc> for PrefixSoFar {
    type Out = Acc;
}

#[test]
fn test_transform_context_is_transformed_prefix() {
    type Out = Transformed<typelist![u8, u16, u32], PrefixSoFar>;
    type P0 = typelist![];
    type P1 = typelist![P0];
    type P2 = typelist![P0, P1];
    assert_type_eq!(Out, typelist![P0, P1, P2]);
}

/// `(T, index)` pairs.
struct Enumerate;

impl Func for Enumerate {
    type Shape = ByIndex;
}

impl<T, I> IndexFn<T, I> for Enumerate {
    type Out = (T, I);
}

#[test]
fn test_transform_with_index() {
    assert_type_eq!(
        Transformed<typelist![char, bool], Enumerate>,
        typelist![(char, D0), (bool, D1)]
    );
}

#[test]
fn test_transform_values() {
    const SIZES: [usize; 4] = <L as TransformValues<SizeOf, 4>>::VALUES;
    assert_eq!(SIZES, [1, 8, 2, 4]);
    assert_eq!(values!(L, IndexOf), [0, 1, 2, 3]);
    assert_eq!(values!(typelist![[u8; 5], ()], SizeOf), [5, 0]);
}

#[test]
fn test_transform_values_of_bools() {
    // Type-level Bools are values too.
    assert_eq!(values!(L, IsIntegral), [true, false, true, true]);
}

#[test]
fn test_empty_transform_values() {
    let values = <typelist![] as TransformValues<SizeOf, 0>>::VALUES;
    assert!(values.is_empty());
}

#[test]
fn test_map() {
    assert_type_eq!(Mapped<L, Phantom>, typelist![
        core::marker::PhantomData<u8>,
        core::marker::PhantomData<f64>,
        core::marker::PhantomData<u16>,
        core::marker::PhantomData<i32>,
    ]);
    assert_type_eq!(Mapped<typelist![u8], Boxed>, typelist![Box<u8>]);
}
