/// Build an [`HList`](crate::HList) value: `hlist![1, "two", 3.0]`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::HNil };
    ($head: expr $(,)?) => { $crate::HCons::new($head, $crate::HNil) };
    ($head: expr, $($tail: expr),+ $(,)?) => {
        $crate::HCons::new($head, $crate::hlist![$($tail),+])
    };
}

/// Spell the type of an [`HList`](crate::HList): `HList![i32, &str, f64]`.
#[macro_export]
macro_rules! HList {
    () => { $crate::HNil };
    ($head: ty $(,)?) => { $crate::HCons<$head, $crate::HNil> };
    ($head: ty, $($tail: ty),+ $(,)?) => {
        $crate::HCons<$head, $crate::HList![$($tail),+]>
    };
}
