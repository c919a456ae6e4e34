//! Declarative macros: list construction, compile-time type assertions
//! and template adapters.

/// Build a type list.
///
/// ```
/// use tola_typelist::prelude::*;
///
/// type Empty = typelist![];
/// type L = typelist![u8, i32, u8];
///
/// assert_eq!(<Empty as TypeList>::LEN, 0);
/// assert_eq!(<L as TypeList>::LEN, 3);
/// ```
#[macro_export]
macro_rules! typelist {
    () => { $crate::list::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::typelist![$($rest),*]>
    };
}

/// Fail compilation unless the two types are identical.
///
/// ```
/// use tola_typelist::prelude::*;
///
/// assert_type_eq!(At<typelist![u8, i32], 1>, i32);
/// ```
///
/// ```compile_fail
/// use tola_typelist::prelude::*;
///
/// assert_type_eq!(At<typelist![u8, i32], 1>, u8);
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($left:ty, $right:ty $(,)?) => {
        const _: () = {
            #[allow(dead_code)]
            trait TypeEq<T: ?Sized> {}
            impl<T: ?Sized> TypeEq<T> for T {}
            #[allow(dead_code)]
            fn check<L: ?Sized + TypeEq<R>, R: ?Sized>() {}
            #[allow(dead_code)]
            fn assert() {
                check::<$left, $right>();
            }
        };
    };
}

/// `F` applied to every element of `L`, as a `[V; LEN]` constant.
///
/// Shorthand for `<L as TransformValues<F, { <L as TypeList>::LEN }>>::VALUES`;
/// `L` must be a concrete list.
///
/// ```
/// use tola_typelist::prelude::*;
///
/// type L = typelist![u8, u64];
/// assert_eq!(values!(L, SizeOf), [1, 8]);
/// ```
#[macro_export]
macro_rules! values {
    ($list:ty, $func:ty $(,)?) => {
        <$list as $crate::list::TransformValues<
            $func,
            { <$list as $crate::list::TypeList>::LEN },
        >>::VALUES
    };
}

/// Adapt a generic type into a template for `Inject`/`Extract`.
///
/// `template!(pub Pairs => Pair<A, B>)` declares the marker `Pairs`;
/// `template!(pub Pair<A, B>)` names it `PairTemplate`. The generic type
/// must not put bounds on its parameters.
///
/// ```
/// use tola_typelist::prelude::*;
///
/// pub struct Pair<A, B>(A, B);
/// template!(pub Pair<A, B>);
///
/// type P = Injected<typelist![u8, char], PairTemplate>;
/// assert_type_eq!(P, Pair<u8, char>);
/// assert_type_eq!(Extracted<P, PairTemplate>, typelist![u8, char]);
/// ```
#[macro_export]
macro_rules! template {
    ($vis:vis $marker:ident => $name:ident < $($param:ident),+ $(,)? >) => {
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $marker;

        impl<$($param),+> $crate::list::Inject<$crate::typelist![$($param),+]> for $marker {
            type Out = $name<$($param),+>;
        }

        impl<$($param),+> $crate::list::Extract<$name<$($param),+>> for $marker {
            type Types = $crate::typelist![$($param),+];
        }
    };
    ($vis:vis $name:ident < $($param:ident),+ $(,)? >) => {
        $crate::paste::paste! {
            $crate::template!($vis [<$name Template>] => $name<$($param),+>);
        }
    };
}
