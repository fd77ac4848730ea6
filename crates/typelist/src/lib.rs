//! typelist — compile-time lists of types.
//!
//! A type list is an ordered sequence of types that exists only for the compiler: [`Nil`] is the
//! empty list, [`Cons<H, T>`](Cons) is the list with the first element `H` followed by the list
//! `T`. Neither has values. The length and the element at a position are computed during
//! compilation, at no runtime cost.
//!
//! # Building a List
//!
//! ```
//! use typelist::{Cons, Nil, ListOf, Prepend, TypeList, assert_type_eq};
//!
//! type Spelled = TypeList![i32, f64, char];
//!
//! assert_type_eq::<Spelled, Cons<i32, Cons<f64, Cons<char, Nil>>>>();
//! assert_type_eq::<Spelled, ListOf<(i32, f64, char)>>();
//! assert_type_eq::<Prepend<u8, Spelled>, TypeList![u8, i32, f64, char]>();
//! ```
//!
//! # Length
//!
//! [`TypeList::LEN`] and the `const fn` [`length`] are usable in `const` context:
//!
//! ```
//! use typelist::{length, Nil, TypeList};
//!
//! const _: () = assert!(length::<TypeList![i32, f64, char, f32]>() == 4);
//! const _: () = assert!(<Nil as TypeList>::LEN == 0);
//! ```
//!
//! # Indexed Lookup
//!
//! A position is a type: [`Here`] is zero, [`There<I>`](There) is the position after `I`;
//! [`I0`] .. [`I15`] are shortcuts. [`At<L, I>`](At) is the type at the position `I` of `L`.
//!
//! ```
//! use typelist::{assert_type_eq, At, TypeList, I0, I2};
//!
//! type L = TypeList![i32, char, f64, i16];
//!
//! let value: At<L, I2> = 2.5;
//! assert_type_eq::<At<L, I0>, i32>();
//! # let _ = value;
//! ```
//!
//! A position past the end of the list does not compile:
//!
//! ```compile_fail,E0277
//! use typelist::{At, TypeList, I4};
//!
//! type L = TypeList![i32, char, f64, i16];
//! let _value: At<L, I4> = 0;
//! ```
//!
//! Neither does any lookup in the empty list:
//!
//! ```compile_fail,E0277
//! use typelist::{At, Nil, I0};
//!
//! let _value: At<Nil, I0> = 0;
//! ```
//!
//! ```compile_fail,E0277
//! use typelist::{Nil, NonEmpty};
//!
//! let _value: <Nil as NonEmpty>::Head = 0;
//! ```
//!
//! # Runtime Positions
//!
//! When a position is known only at runtime, [`Reflect`] reports an out-of-range position as a
//! [`LookupError`]:
//!
//! ```
//! use typelist::{LookupError, Reflect, TypeList};
//!
//! type L = TypeList![i32, char];
//!
//! assert!(L::type_info_at(1).unwrap().is::<char>());
//! assert_eq!(L::type_info_at(2), Err(LookupError::OutOfRange { index: 2, len: 2 }));
//! assert_eq!(typelist::display::<L>().to_string(), "[i32, char]");
//! ```
//!
//! # Values
//!
//! With the `hlist` feature (on by default), [`hlist`] provides lists of values whose shape is a
//! type list:
//!
//! ```
//! use typelist::hlist::{hlist, HList};
//! use typelist::{assert_type_eq, TypeList, I1};
//!
//! let list = hlist![1u8, "two", 3.0f32];
//! assert_eq!(*list.at::<I1>(), "two");
//! assert_type_eq::<<HList![u8, &str, f32] as HList>::Types, TypeList![u8, &str, f32]>();
//! ```
//!
//! ```compile_fail,E0277
//! use typelist::hlist::hlist;
//! use typelist::I2;
//!
//! let list = hlist![1u8, "two"];
//! let _ = list.at::<I2>();
//! ```

pub use typelist_core::*;

#[cfg(feature = "hlist")]
pub mod hlist {
    pub use typelist_hlist::*;
}
