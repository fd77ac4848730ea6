use typelist_core::PushBack as PushBackType;

use crate::{HCons, HList, HNil};

/// Append a value; the element types of the result are the element types of `Self` with `X`
/// pushed back.
pub trait PushBack<X>: HList<Types: PushBackType<X>> {
    type Out: HList<Types = <Self::Types as PushBackType<X>>::Output>;

    fn push_back(self, item: X) -> Self::Out;
}

impl<X> PushBack<X> for HNil {
    type Out = HCons<X, HNil>;

    fn push_back(self, item: X) -> Self::Out {
        self.push_front(item)
    }
}

impl<H, T, X> PushBack<X> for HCons<H, T>
where
    T: PushBack<X>,
{
    type Out = HCons<H, T::Out>;

    fn push_back(self, item: X) -> Self::Out {
        let HCons(head, tail) = self;
        tail.push_back(item).push_front(head)
    }
}
