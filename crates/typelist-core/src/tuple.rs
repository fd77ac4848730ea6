use crate::list::TypeList;

/// A tuple seen as the list of its field types.
pub trait Tuple {
    type List: TypeList;
}

/// The list of the field types of the tuple `T`.
pub type ListOf<T> = <T as Tuple>::List;

macro_rules! impl_tuple {
    ($($T: ident),*) => {
        impl<$($T),*> Tuple for ($($T,)*) {
            type List = crate::TypeList![$($T),*];
        }
    };
}

impl_tuple!();
impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
impl_tuple!(A, B, C, D, E, F, G, H, I);
impl_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
