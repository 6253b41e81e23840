//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that are relevant for this crate.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer with an associated constant for every
//! well-defined value. Since values not yet assigned can still appear on
//! the wire, any integer is a valid value.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` are implemented to convert from
//! the string codes to the values and back.
//!
//! Types also implement a `parse()` function for creation from wire
//! format and a `compose()` method for composing into wire format data.
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here. This is mostly so we can have associated types like
//! `FromStrError` without having to resort to devilishly long names.

pub use self::class::Class;
pub use self::exterr::ExtendedErrorCode;
pub use self::opcode::Opcode;
pub use self::opt::OptionCode;
pub use self::rcode::{rcode_text, Rcode};
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod exterr;
pub mod opcode;
pub mod opt;
pub mod rcode;
pub mod rtype;
