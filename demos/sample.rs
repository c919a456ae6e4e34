#![recursion_limit = "256"]
//! Prints what each list operation resolves to.
//!
//! ```text
//! cargo run --example sample
//! ```

use core::any::type_name;
use tola_typelist::prelude::*;

#[derive(Element)]
struct Meters(#[allow(dead_code)] f64);

type C = typelist![f64, f32, i32, u8, i32, u8, f32, f64];
type A = typelist![[i32; 1], [i32; 2], [i32; 3], u8, u8, i32, i32, f32];

fn show<T>(label: &str) {
    println!("{:<24} {}", label, type_name::<T>());
}

fn main() {
    println!("== scalars ==");
    show::<C>("list");
    println!("{:<24} {}", "size", <C as TypeList>::LEN);
    println!("{:<24} {}", "contains i32", <C as Has<i32>>::VALUE);
    println!("{:<24} {}", "push String, size", <Pushed<C, String> as TypeList>::LEN);
    show::<Unique<C>>("distinct");
    show::<Sliced<C, 0, 3>>("slice 0..3");
    show::<Sorted<C>>("sort");
    show::<At<C, 3>>("at 3");
    show::<Found<C, IsIntegral>>("first integer");
    show::<Found<C, IsType<char>>>("first char");
    println!("{:<24} {:?}", "sizes", values!(C, SizeOf));

    println!("== arrays ==");
    show::<A>("list");
    show::<Sorted<A>>("sort");
    show::<Transformed<A, PointerTo>>("pointers");

    println!("== conversion ==");
    show::<Injected<Unique<C>, Tuple>>("as tuple");
    show::<Injected<Unique<C>, OneOf>>("as union");
    show::<Extracted<(Meters, u8), Tuple>>("from tuple");
    println!(
        "{:<24} {}",
        "all numeric",
        <C as AllOf<Either<IsIntegral, IsFloat>>>::VALUE
    );
}
