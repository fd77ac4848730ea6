use crate::list::TypeList;

/// The number of types in `L`, usable in `const` context.
pub const fn length<L>() -> usize
where
    L: TypeList,
{
    L::LEN
}

pub const fn is_empty<L>() -> bool
where
    L: TypeList,
{
    L::LEN == 0
}
