//! Typed validators for the retry engine.
//!
//! Each submodule defines a [`Validator`](crate::prompt::Validator) for one
//! kind of answer and the [`Console`](crate::console::Console) methods that
//! prompt with it:
//!
//! - [`numeric`]: bounded integers and floats of any width
//! - [`character`]: a single character within an ordinal range
//! - [`boolean`]: one of two case-insensitive tokens
//! - [`array`]: delimited lists of strings or integers
//! - [`address`]: IPv4 addresses in binary, decimal, dotted or hex form

pub mod address;
pub mod array;
pub mod boolean;
pub mod character;
pub mod numeric;

pub use address::{AddressForm, AddressValidator};
pub use array::{ArrayValidator, IntArrayValidator};
pub use boolean::BoolValidator;
pub use character::CharValidator;
pub use numeric::{NumberValidator, Numeric};
