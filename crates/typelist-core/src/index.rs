use std::marker::PhantomData;

use crate::list::Cons;
use crate::Never;

/// Lookup of the element at the position `I`.
///
/// Implemented only for positions within the list: `At<Nil, I0>`, or any `I` not less than
/// the length of the list, does not compile.
pub trait TypeAt<I> {
    type Output: ?Sized;
}

/// The type at the position `I` in the list `L`.
pub type At<L, I> = <L as TypeAt<I>>::Output;

/// A type-level position.
pub trait Idx {
    const IDX: usize;
}

/// Position zero.
pub enum Here {}

/// The position following `I`.
pub struct There<I>(Never, PhantomData<fn() -> I>);

impl Idx for Here {
    const IDX: usize = 0;
}
impl<I> Idx for There<I>
where
    I: Idx,
{
    const IDX: usize = 1 + I::IDX;
}

impl<H: ?Sized, T> TypeAt<Here> for Cons<H, T> {
    type Output = H;
}
impl<H, T, I> TypeAt<There<I>> for Cons<H, T>
where
    H: ?Sized,
    I: Idx,
    T: TypeAt<I>,
{
    type Output = <T as TypeAt<I>>::Output;
}

pub type I0 = Here;
pub type I1 = There<I0>;
pub type I2 = There<I1>;
pub type I3 = There<I2>;
pub type I4 = There<I3>;
pub type I5 = There<I4>;
pub type I6 = There<I5>;
pub type I7 = There<I6>;
pub type I8 = There<I7>;
pub type I9 = There<I8>;
pub type I10 = There<I9>;
pub type I11 = There<I10>;
pub type I12 = There<I11>;
pub type I13 = There<I12>;
pub type I14 = There<I13>;
pub type I15 = There<I14>;
