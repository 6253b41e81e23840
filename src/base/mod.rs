//! Basics.
//!
//! This module provides the types for working with DNS messages in wire
//! format: the message itself, its header, question and records, domain
//! names and character strings, as well as the EDNS machinery of the OPT
//! record.
//!
//!
//! ## Parsing and Composing Messages
//!
//! We use the term *parsing* for extracting data from a wire-format
//! representation and *composing* for producing such a representation.
//!
//! Both parsing and composing happen on buffers holding a complete DNS
//! message. This is a reasonable choice given the limited size of DNS
//! messages and the complexities introduced by compressing domain names in
//! a message by referencing other parts of the message. The fundamental
//! tools for parsing and composing live in the [wire] module.
//!
//! The types [`Message`] and [`MessageBuilder`] are there to make parsing
//! and constructing DNS messages easy. A [`Message`] is decoded from the
//! binary data of a DNS message and gives access to its question and
//! the records of its three record sections. It can also be created from
//! scratch and composed via a [`MessageBuilder`].
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data, arranged in
//! submodules:
//!
//! * [charstr] for DNS character strings,
//! * [header] for the header of DNS messages,
//! * [name] for domain names,
//! * [opt] for the record data of OPT records used in EDNS,
//! * [question] for questions,
//! * [record] for DNS resource records, and
//! * [rdata] for the basics of record data.
//!
//! The record data of the individual record types lives in the top-level
//! [rdata][crate::rdata] module.

pub use self::charstr::CharStr;
pub use self::error::{error_to_text, Error};
pub use self::header::{Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, OptionCode, Rcode, Rtype};
pub use self::message::{decode, Message, Section};
pub use self::message_builder::encode;
pub use self::message_builder::MessageBuilder;
pub use self::opt::{EdnsConfig, Opt, OptOption, OptRecord, OptTtl};
pub use self::question::Question;
pub use self::record::{Envelope, Record, RecordData, UnparsedData};
pub use self::wire::{ComposeError, Composer, ParseError, VecTarget};

pub mod charstr;
pub mod error;
pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod opt;
pub mod question;
pub mod rdata;
pub mod record;
pub mod wire;
