/// Implemented only when `Self` and `T` are the same type.
pub trait TypeEq<T: ?Sized> {}

impl<T: ?Sized> TypeEq<T> for T {}

/// Compiles only if `A` and `B` are the same type.
///
/// ```
/// use typelist_core::{assert_type_eq, At, I1, TypeList};
///
/// const _: () = assert_type_eq::<At<TypeList![u8, u16], I1>, u16>();
/// ```
pub const fn assert_type_eq<A, B>()
where
    A: TypeEq<B> + ?Sized,
    B: ?Sized,
{
}
