//! Heterogeneous lists of values, shaped by a [`TypeList`].

use typelist_core::{At, Cons, Nil, TypeList};

mod fold;
mod get;
mod macros;
mod push_back;
mod tuple;


pub use fold::{HFold, HFolder};
pub use get::{Get, GetMut};
pub use push_back::PushBack;
pub use tuple::IntoTuple;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HNil;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HCons<H, T>(H, T);

/// Implemented only for [`HNil`] and [`HCons`]: `LEN` always agrees with `Types`.
///
/// ```compile_fail,E0277
/// use typelist_hlist::HList;
///
/// struct Fake;
///
/// impl HList for Fake {
///     type Types = typelist_core::Nil;
///     const LEN: usize = 3;
/// }
/// ```
pub trait HList: Sized + sealed::Sealed {
    /// The types of the elements.
    type Types: TypeList;

    const LEN: usize = <Self::Types as TypeList>::LEN;

    fn push_front<H>(self, head: H) -> HCons<H, Self> {
        HCons(head, self)
    }

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl HList for HNil {
    type Types = Nil;
}

impl<H, T> HList for HCons<H, T>
where
    T: HList,
{
    type Types = Cons<H, T::Types>;
}

impl<H, T> HCons<H, T>
where
    T: HList,
{
    pub fn new(head: H, tail: T) -> Self {
        Self(head, tail)
    }

    pub fn head(&self) -> &H {
        &self.0
    }
    pub fn head_mut(&mut self) -> &mut H {
        &mut self.0
    }
    pub fn tail(&self) -> &T {
        &self.1
    }
    pub fn tail_mut(&mut self) -> &mut T {
        &mut self.1
    }
    pub fn into_parts(self) -> (H, T) {
        (self.0, self.1)
    }

    /// The element at the type-level position `I`.
    pub fn at<I>(&self) -> &At<<Self as HList>::Types, I>
    where
        Self: Get<I>,
    {
        <Self as Get<I>>::get(self)
    }

    pub fn at_mut<I>(&mut self) -> &mut At<<Self as HList>::Types, I>
    where
        Self: GetMut<I>,
    {
        <Self as GetMut<I>>::get_mut(self)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::HNil {}
    impl<H, T> Sealed for super::HCons<H, T> where T: Sealed {}
}
