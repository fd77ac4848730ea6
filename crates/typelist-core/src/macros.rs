/// Spell a type list out of its elements.
///
/// `TypeList![A, B]` is `Cons<A, Cons<B, Nil>>`; `TypeList![]` is `Nil`.
#[macro_export]
macro_rules! TypeList {
    () => { $crate::Nil };
    ($head: ty $(,)?) => { $crate::Cons<$head, $crate::Nil> };
    ($head: ty, $($tail: ty),+ $(,)?) => {
        $crate::Cons<$head, $crate::TypeList![$($tail),+]>
    };
}
