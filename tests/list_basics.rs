//! Construction, length, indexing, push/append and membership.

use tola_typelist::prelude::*;

type L = typelist![f64, f32, i32, u8, i32, u8, f32, f64];

#[test]
fn test_len_counts_duplicates() {
    assert_eq!(<L as TypeList>::LEN, 8);
    assert_eq!(<typelist![] as TypeList>::LEN, 0);
    assert_eq!(<typelist![u8, u8, u8] as TypeList>::LEN, 3);
    assert!(<typelist![] as TypeList>::IS_EMPTY);
    assert!(!<L as TypeList>::IS_EMPTY);
    assert_eq!(<<L as TypeList>::Len as Value>::VALUE, 8);
}

#[test]
fn test_at_follows_declared_order() {
    assert_type_eq!(At<L, 0>, f64);
    assert_type_eq!(At<L, 1>, f32);
    assert_type_eq!(At<L, 2>, i32);
    assert_type_eq!(At<L, 3>, u8);
    assert_type_eq!(At<L, 7>, f64);
    assert_type_eq!(<L as Get<D4>>::Out, i32);
}

#[test]
fn test_push_back_then_at_len() {
    type M = Pushed<L, String>;
    assert_eq!(<M as TypeList>::LEN, 9);
    assert_type_eq!(At<M, 8>, String);
    assert_type_eq!(At<M, 0>, f64);

    type E = <typelist![] as TypeList>::PushBack<char>;
    assert_type_eq!(E, typelist![char]);
}

#[test]
fn test_push_front() {
    type M = <L as TypeList>::PushFront<bool>;
    assert_eq!(<M as TypeList>::LEN, 9);
    assert_type_eq!(At<M, 0>, bool);
    assert_type_eq!(At<M, 1>, f64);
}

#[test]
fn test_append_and_prepend_many() {
    type A = typelist![u8, u16];
    type B = typelist![i8, i16, i32];
    assert_type_eq!(Appended<A, B>, typelist![u8, u16, i8, i16, i32]);
    assert_type_eq!(<A as TypeList>::Prepend<B>, typelist![i8, i16, i32, u8, u16]);
    assert_type_eq!(Appended<A, typelist![]>, A);
    assert_type_eq!(Appended<typelist![], B>, B);
    assert_eq!(<Appended<A, B> as TypeList>::LEN, 5);
}

#[test]
fn test_duplicates_are_kept() {
    type M = Pushed<Pushed<typelist![u8], u8>, u8>;
    assert_type_eq!(M, typelist![u8, u8, u8]);
}

#[test]
fn test_contains() {
    assert!(<L as Has<i32>>::VALUE);
    assert!(!<L as Has<String>>::VALUE);
    assert!(<L as Contains<typelist![i32]>>::VALUE);
    assert!(<L as Contains<typelist![u8, f64, u8]>>::VALUE);
    assert!(!<L as Contains<typelist![u8, char]>>::VALUE);
    assert!(<L as Contains<typelist![]>>::VALUE);
    assert!(!<typelist![] as Contains<typelist![u8]>>::VALUE);
}

#[test]
fn test_contains_distinguishes_generic_arguments() {
    type G = typelist![Option<u8>, Result<u8, i32>, [u8; 4], &'static str];
    assert!(<G as Has<Option<u8>>>::VALUE);
    assert!(!<G as Has<Option<i8>>>::VALUE);
    assert!(<G as Has<Result<u8, i32>>>::VALUE);
    assert!(!<G as Has<Result<i32, u8>>>::VALUE);
    assert!(<G as Has<[u8; 4]>>::VALUE);
    assert!(!<G as Has<[u8; 3]>>::VALUE);
    assert!(<G as Has<&'static str>>::VALUE);
    assert!(!<G as Has<String>>::VALUE);
}

#[test]
fn test_map_with_constructors() {
    type M = Mapped<typelist![u8, i32], Optional>;
    assert_type_eq!(M, typelist![Option<u8>, Option<i32>]);

    type V = Mapped<typelist![u8, i32], Listed>;
    assert_type_eq!(V, typelist![Vec<u8>, Vec<i32>]);

    type P = Mapped<typelist![], Phantom>;
    assert_type_eq!(P, typelist![]);
}

#[test]
fn test_lists_as_elements() {
    type Nested = typelist![typelist![u8], typelist![u8, u16]];
    assert!(<Nested as Has<typelist![u8, u16]>>::VALUE);
    assert!(!<Nested as Has<typelist![u16]>>::VALUE);
    assert_type_eq!(Unique<typelist![typelist![u8], typelist![u8]]>, typelist![typelist![u8]]);
}
