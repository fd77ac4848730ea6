use typelist_core::{At, Here, Idx, There, TypeAt};

use crate::{HCons, HList};

/// Access by a type-level position.
///
/// The element type is the one the [`TypeList`](typelist_core::TypeList) of the elements has at
/// `I`, so the positions past the end do not compile.
pub trait Get<I>: HList<Types: TypeAt<I, Output: Sized>> {
    fn get(&self) -> &At<Self::Types, I>;
    fn into_item(self) -> At<Self::Types, I>;
}

pub trait GetMut<I>: Get<I> {
    fn get_mut(&mut self) -> &mut At<Self::Types, I>;
}

impl<H, T> Get<Here> for HCons<H, T>
where
    T: HList,
{
    fn get(&self) -> &H {
        &self.0
    }
    fn into_item(self) -> H {
        self.0
    }
}
impl<H, T, I> Get<There<I>> for HCons<H, T>
where
    I: Idx,
    T: Get<I>,
{
    fn get(&self) -> &At<T::Types, I> {
        <T as Get<I>>::get(&self.1)
    }
    fn into_item(self) -> At<T::Types, I> {
        <T as Get<I>>::into_item(self.1)
    }
}

impl<H, T> GetMut<Here> for HCons<H, T>
where
    T: HList,
{
    fn get_mut(&mut self) -> &mut H {
        &mut self.0
    }
}
impl<H, T, I> GetMut<There<I>> for HCons<H, T>
where
    I: Idx,
    T: GetMut<I>,
{
    fn get_mut(&mut self) -> &mut At<T::Types, I> {
        <T as GetMut<I>>::get_mut(&mut self.1)
    }
}
