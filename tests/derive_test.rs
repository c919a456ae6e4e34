#![allow(dead_code)]
//! `#[derive(Element)]` on user types.

use tola_typelist::prelude::*;

#[derive(Element)]
struct Meters(f64);

#[derive(Element)]
struct Seconds(f64);

#[derive(Element)]
enum Signal {
    Low,
    High(u32),
}

#[derive(Element)]
struct Wrapper<T>(T);

#[derive(Element)]
struct View<'a> {
    bytes: &'a [u8],
}

mod left {
    #[derive(tola_typelist::Element)]
    pub struct Token;
}

mod right {
    #[derive(tola_typelist::Element)]
    pub struct Token;
}

fn same<A: SameAs<B>, B>() -> bool {
    <A::Out as Value>::VALUE
}

#[test]
fn test_identity_by_name() {
    assert!(same::<Meters, Meters>());
    assert!(!same::<Meters, Seconds>());
    assert!(!same::<Meters, f64>());
    assert!(!same::<Signal, u32>());
}

#[test]
fn test_identity_includes_module_path() {
    assert!(same::<left::Token, left::Token>());
    assert!(!same::<left::Token, right::Token>());
}

#[test]
fn test_generic_identity_includes_arguments() {
    assert!(same::<Wrapper<u8>, Wrapper<u8>>());
    assert!(!same::<Wrapper<u8>, Wrapper<u16>>());
    assert!(!same::<Wrapper<Meters>, Wrapper<Seconds>>());
    assert!(same::<Wrapper<Wrapper<Meters>>, Wrapper<Wrapper<Meters>>>());
    assert!(same::<View<'static>, View<'static>>());
}

#[test]
fn test_derived_types_in_lists() {
    type L = typelist![Meters, Seconds, Meters, Wrapper<u8>, Wrapper<u8>, Signal];
    assert_type_eq!(Unique<L>, typelist![Meters, Seconds, Wrapper<u8>, Signal]);
    assert!(<L as Has<Wrapper<u8>>>::VALUE);
    assert!(!<L as Has<Wrapper<i8>>>::VALUE);
    assert_type_eq!(Found<L, IsType<Seconds>>, Seconds);
}

#[test]
fn test_derived_storage_size() {
    assert_eq!(<<Meters as StorageSize>::Size as Value>::VALUE, 8);
    assert_eq!(
        <<Signal as StorageSize>::Size as Value>::VALUE,
        core::mem::size_of::<Signal>()
    );
    type L = typelist![Meters, u8, left::Token, Signal];
    assert_type_eq!(Sorted<L>, typelist![left::Token, u8, Meters, Signal]);
}

fn same_value<A: SameAs<B>, B>(_: &A, _: &B) -> bool {
    <A::Out as Value>::VALUE
}

fn distinct_len<A, B>(_: &A, _: &B) -> usize
where
    typelist![A, B, A]: Distinct,
{
    <<typelist![A, B, A] as Distinct>::Out as TypeList>::LEN
}

#[test]
fn test_same_name_in_different_blocks() {
    let a = {
        #[derive(Element)]
        struct Tag;
        Tag
    };
    let b = {
        #[derive(Element)]
        struct Tag(u64);
        Tag(0)
    };
    assert!(same_value(&a, &a));
    assert!(!same_value(&a, &b));
    assert!(!same_value(&b, &a));
    assert_eq!(distinct_len(&a, &b), 2);
}
