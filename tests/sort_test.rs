#![recursion_limit = "256"]
//! Sorting: default size order, stability, custom comparators.

use tola_typelist::prelude::*;

#[test]
fn test_sort_by_size_is_stable() {
    type L = typelist![f64, f32, i32, u8, i32, u8, f32, f64];
    assert_type_eq!(Sorted<L>, typelist![u8, u8, f32, i32, i32, f32, f64, f64]);
}

#[test]
fn test_sorted_is_a_fixed_point() {
    type L = typelist![u8, u16, u32, u64];
    assert_type_eq!(Sorted<L>, L);
    type M = typelist![i32, u8, i64, i8];
    assert_type_eq!(Sorted<Sorted<M>>, Sorted<M>);
}

#[test]
fn test_sort_degenerate_lists() {
    assert_type_eq!(Sorted<typelist![]>, typelist![]);
    assert_type_eq!(Sorted<typelist![u64]>, typelist![u64]);
    assert_type_eq!(Sorted<typelist![u64, u8]>, typelist![u8, u64]);
}

#[test]
fn test_equal_sizes_keep_their_order() {
    type L = typelist![u32, i32, f32, char];
    assert_type_eq!(Sorted<L>, L);
    assert_type_eq!(Sorted<L, BySizeDesc>, L);
}

#[test]
fn test_descending() {
    type L = typelist![u8, u64, u16, i8, u32];
    assert_type_eq!(Sorted<L, BySizeDesc>, typelist![u64, u32, u16, u8, i8]);
    assert_type_eq!(Sorted<L, Reverse<BySize>>, typelist![u64, u32, u16, u8, i8]);
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_arrays_and_pointers_by_size() {
    type L = typelist![[u8; 16], &'static u8, [u16; 3], (), u8];
    assert_type_eq!(Sorted<L>, typelist![(), u8, [u16; 3], &'static u8, [u8; 16]]);
}

/// Integers before everything else, otherwise equivalent.
struct IntegersFirst;

impl<A, B> Precedes<A, B> for IntegersFirst
where
    IsIntegral: Predicate<A, Z, Nil> + Predicate<B, Z, Nil>,
{
    type Out = <Test<IsIntegral, A, Z, Nil> as Bool>::And<
        <Test<IsIntegral, B, Z, Nil> as Bool>::Not,
    >;
}

#[test]
fn test_custom_comparator() {
    type L = typelist![f32, u8, f64, i64, char, u16];
    assert_type_eq!(Sorted<L, IntegersFirst>, typelist![u8, i64, u16, f32, f64, char]);
}
