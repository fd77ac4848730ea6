use std::marker::PhantomData;

use crate::Never;

/// The empty list.
///
/// Uninhabited: a type list has no runtime representation.
pub enum Nil {}

/// A list with the first element `H` and the rest of the list `T`.
///
/// Uninhabited, as [`Nil`]. `H` may be unsized: `TypeList![str, [u8], dyn Debug]` is a list.
pub struct Cons<H: ?Sized, T>(Never, PhantomData<fn() -> (*const H, T)>);

/// `L` with `H` put in front of it.
pub type Prepend<H, L> = Cons<H, L>;

pub trait TypeList: Sealed {
    /// The number of types in the list.
    const LEN: usize;
}

/// A list with at least one element.
///
/// Not implemented for [`Nil`]: `<Nil as NonEmpty>::Head` does not compile.
pub trait NonEmpty: TypeList {
    type Head: ?Sized;
    type Tail: TypeList;
    type Last: ?Sized;
}

impl TypeList for Nil {
    const LEN: usize = 0;
}

impl<H, T> TypeList for Cons<H, T>
where
    H: ?Sized,
    T: TypeList,
{
    const LEN: usize = 1 + T::LEN;
}

impl<H: ?Sized> NonEmpty for Cons<H, Nil> {
    type Head = H;
    type Tail = Nil;
    type Last = H;
}

impl<H, H2, T> NonEmpty for Cons<H, Cons<H2, T>>
where
    H: ?Sized,
    H2: ?Sized,
    Cons<H2, T>: NonEmpty,
{
    type Head = H;
    type Tail = Cons<H2, T>;
    type Last = <Cons<H2, T> as NonEmpty>::Last;
}

pub trait Sealed {}
impl Sealed for Nil {}
impl<H: ?Sized, T> Sealed for Cons<H, T> where T: Sealed {}
