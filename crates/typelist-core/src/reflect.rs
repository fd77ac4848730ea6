use std::any::{self, TypeId};

use crate::error::LookupError;
use crate::list::{Cons, Nil, TypeList};

/// Runtime description of an element of a type list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeInfo {
    /// position in the list
    pub index: usize,

    /// [`std::any::type_name`] of the element
    pub name: &'static str,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub id: TypeId,
}

impl TypeInfo {
    pub fn of<T>(index: usize) -> Self
    where
        T: ?Sized + 'static,
    {
        Self { index, name: any::type_name::<T>(), id: TypeId::of::<T>() }
    }

    pub fn is<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.id == TypeId::of::<T>()
    }
}

/// Access to the elements of a list by a position known only at runtime.
pub trait Reflect: TypeList {
    /// Descriptions of all the elements, in the list order.
    fn type_infos() -> Vec<TypeInfo> {
        let mut infos = Vec::with_capacity(Self::LEN);
        Self::collect_into(Self::LEN, &mut infos);
        infos
    }

    fn type_info_at(index: usize) -> Result<TypeInfo, LookupError> {
        log::trace!("looking up #{} in a list of {} types", index, Self::LEN);

        let result = if Self::LEN == 0 {
            Err(LookupError::Empty { index })
        } else if index >= Self::LEN {
            Err(LookupError::OutOfRange { index, len: Self::LEN })
        } else {
            Self::lookup_from(Self::LEN, index)
                .ok_or(LookupError::OutOfRange { index, len: Self::LEN })
        };

        match &result {
            Ok(info) => log::trace!("#{} is {}", index, info.name),
            Err(reason) => log::debug!("lookup failed: {}", reason),
        }
        result
    }

    /// Position of the first occurrence of `T`.
    fn position_of<T>() -> Option<usize>
    where
        T: ?Sized + 'static,
    {
        Self::type_infos().into_iter().find(|info| info.is::<T>()).map(|info| info.index)
    }

    #[doc(hidden)]
    fn lookup_from(total_len: usize, index: usize) -> Option<TypeInfo>;

    #[doc(hidden)]
    fn collect_into(total_len: usize, infos: &mut Vec<TypeInfo>);
}

impl Reflect for Nil {
    fn lookup_from(_total_len: usize, _index: usize) -> Option<TypeInfo> {
        None
    }
    fn collect_into(_total_len: usize, _infos: &mut Vec<TypeInfo>) {}
}

impl<H, T> Reflect for Cons<H, T>
where
    H: ?Sized + 'static,
    T: Reflect,
{
    fn lookup_from(total_len: usize, index: usize) -> Option<TypeInfo> {
        if total_len - index == Self::LEN {
            Some(TypeInfo::of::<H>(index))
        } else {
            T::lookup_from(total_len, index)
        }
    }

    fn collect_into(total_len: usize, infos: &mut Vec<TypeInfo>) {
        infos.push(TypeInfo::of::<H>(total_len - Self::LEN));
        T::collect_into(total_len, infos)
    }
}
