//! Type-level lists: an ordered sequence of types with its length and indexed lookup resolved
//! by the compiler.

mod display;
mod error;
mod index;
mod len;
mod list;
mod macros;
mod ops;
mod reflect;
mod tuple;
mod type_eq;

#[cfg(test)]
mod tests;

mod exports {
    pub use crate::display::{display, DisplayConfig, TypeListDisplay};
    pub use crate::error::LookupError;
    pub use crate::index::{At, Here, Idx, There, TypeAt};
    pub use crate::index::{I0, I1, I10, I11, I12, I13, I14, I15, I2, I3, I4, I5, I6, I7, I8, I9};
    pub use crate::len::{is_empty, length};
    pub use crate::list::{Cons, Nil, NonEmpty, Prepend, TypeList};
    pub use crate::ops::{Concat, PushBack, Reverse};
    pub use crate::reflect::{Reflect, TypeInfo};
    pub use crate::tuple::{ListOf, Tuple};
    pub use crate::type_eq::{assert_type_eq, TypeEq};
}
mod imports {
    pub type Never = std::convert::Infallible;
}

pub use exports::*;
pub use imports::*;
