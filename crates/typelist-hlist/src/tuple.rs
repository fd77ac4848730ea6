use crate::{HCons, HList, HNil};

/// Convert a list into the tuple of its elements.
pub trait IntoTuple: HList {
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;
}

macro_rules! hlist_pat {
    () => { HNil };
    ($head: ident $(, $tail: ident)*) => { HCons($head, hlist_pat!($($tail),*)) };
}

macro_rules! impl_tuple {
    ($($T: ident),*) => {
        impl<$($T),*> IntoTuple for crate::HList![$($T),*] {
            type Tuple = ($($T,)*);

            #[allow(non_snake_case)]
            fn into_tuple(self) -> Self::Tuple {
                let hlist_pat!($($T),*) = self;
                ($($T,)*)
            }
        }

        impl<$($T),*> From<($($T,)*)> for crate::HList![$($T),*] {
            #[allow(non_snake_case)]
            fn from(($($T,)*): ($($T,)*)) -> Self {
                crate::hlist![$($T),*]
            }
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
