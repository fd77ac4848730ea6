use crate::list::{Cons, Nil, TypeList};

/// Append `X` at the end of the list.
pub trait PushBack<X: ?Sized>: TypeList {
    type Output: TypeList;
}

impl<X: ?Sized> PushBack<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<X, H, T> PushBack<X> for Cons<H, T>
where
    X: ?Sized,
    H: ?Sized,
    T: PushBack<X>,
{
    type Output = Cons<H, <T as PushBack<X>>::Output>;
}

/// The elements of `Self` followed by the elements of `R`.
pub trait Concat<R>: TypeList
where
    R: TypeList,
{
    type Output: TypeList;
}

impl<R> Concat<R> for Nil
where
    R: TypeList,
{
    type Output = R;
}

impl<H, T, R> Concat<R> for Cons<H, T>
where
    H: ?Sized,
    T: Concat<R>,
    R: TypeList,
{
    type Output = Cons<H, <T as Concat<R>>::Output>;
}

pub trait Reverse: TypeList {
    type Output: TypeList;
}

impl Reverse for Nil {
    type Output = Nil;
}

impl<H, T> Reverse for Cons<H, T>
where
    H: ?Sized,
    T: Reverse,
    <T as Reverse>::Output: PushBack<H>,
{
    type Output = <<T as Reverse>::Output as PushBack<H>>::Output;
}
