//! A DNS wire-format message codec.
//!
//! This crate decodes DNS messages from their wire format into a structured
//! representation and encodes such a representation back into the wire
//! format. Decoding is strict: truncated data, compression pointers that
//! point forward or loop, and values that make no sense in their place are
//! rejected rather than repaired.
//!
//! # Modules
//!
//! * [base] contains the message itself, its parts, and everything needed
//!   to parse and compose them, and
//! * [rdata] contains types for the record data of the supported record
//!   types.
//!
//! The most important items are re-exported at the top level: the
//! [`Message`] type, the [`decode`] and [`encode`] functions, and the
//! [`Error`] type with its [`error_to_text`] companion.
//!
//! ```
//! use domain_wire::base::iana::{Class, Rtype};
//! use domain_wire::{decode, encode, Message};
//!
//! let query = Message::query_with_id(
//!     0x1234, "example.com", Rtype::A, Class::IN
//! ).unwrap();
//! let wire = encode(&query).unwrap();
//! let decoded = decode(&wire).unwrap();
//! assert_eq!(decoded.header().id(), 0x1234);
//! assert_eq!(decoded.question().unwrap().qname(), "example.com.");
//! ```
//!
//! # Reference of Feature Flags
//!
//! * `rand`: enables the creation of queries with random message IDs via
//!   the [rand](https://github.com/rust-random/rand) crate. This feature
//!   is enabled by default.
//! * `std`: support for the Rust std library. This enables the
//!   implementations of `std::error::Error` and lets `Vec<u8>` serve as a
//!   target for [`Message::compose`]. This feature is enabled by default.
//!
//! Without the `std` feature, the crate only needs `alloc`. [`encode`]
//! stays available, and messages can also be composed into fixed-size
//! buffers via [`Message::compose`].

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std"))]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

extern crate alloc;

pub use self::base::error::{error_to_text, Error};
pub use self::base::message::{decode, Message};
pub use self::base::message_builder::encode;

pub mod base;
pub mod rdata;
