//! Resource Records.
//!
//! This module defines the [`Record`] type for resource records in all
//! three record sections of a message. A record parsed from a message
//! keeps its record data unparsed as a view into the message octets until
//! its typed form is asked for via [`Record::parse_data`]. Records created
//! for composing carry their typed data right away.

use alloc::string::String;
use octseq::parse::Parser;

use super::iana::{Class, Rtype};
use super::name::{compose_compressed_name, parse_name};
use super::opt::{Opt, OptTtl};
use super::rdata::{ComposeRecordData, ParseRecordData, UnknownRecordData};
use super::wire::{compose_len_prefixed, ComposeError, Composer, ParseError};
use crate::rdata::AllRecordData;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// All information available through the DNS is stored in resource records.
/// They have a three part key of a domain name, resource record type, and
/// class. The domain name is called the *owner* of the record. The record
/// type describes the kind of data the record holds, such as IP addresses.
/// The class describes which sort of network the information is for. In
/// practice, the only relevant class is IN, the Internet.
///
/// There is one more piece of data: the TTL or time to live. This value
/// says how long a record remains valid before it should be refreshed from
/// its original source.
///
/// The OPT pseudo record reuses the class and TTL fields for something
/// else entirely. This is why both live in the record’s [`Envelope`].
///
/// The lifetime `'a` is that of the message a record was parsed from. The
/// record data of parsed records points into that message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record<'a> {
    /// The owner of the record.
    owner: String,

    /// The record type.
    rtype: Rtype,

    /// The class and TTL fields.
    envelope: Envelope,

    /// The record data.
    data: RecordData<'a>,
}

impl<'a> Record<'a> {
    /// Creates a new record from its parts.
    ///
    /// The record type is taken from the data.
    pub fn new(
        owner: impl Into<String>,
        class: Class,
        ttl: u32,
        data: impl Into<AllRecordData>,
    ) -> Self {
        let data = data.into();
        Record {
            owner: owner.into(),
            rtype: crate::base::rdata::RecordData::rtype(&data),
            envelope: Envelope::Standard { class, ttl },
            data: RecordData::Parsed(data),
        }
    }

    /// Creates a new OPT record.
    ///
    /// The owner of an OPT record is always the root.
    #[must_use]
    pub fn new_opt(udp_payload_size: u16, ttl: OptTtl, opt: Opt) -> Self {
        Record {
            owner: String::from("."),
            rtype: Rtype::OPT,
            envelope: Envelope::Opt {
                udp_payload_size,
                ttl,
            },
            data: RecordData::Parsed(AllRecordData::Opt(opt)),
        }
    }

    /// Returns a reference to the owner domain name.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the record type.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class and TTL fields.
    #[must_use]
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Returns a mutable reference to the class and TTL fields.
    pub fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    /// Returns the record class as it appears on the wire.
    ///
    /// For an OPT record this is the UDP payload size.
    #[must_use]
    pub fn class(&self) -> Class {
        match self.envelope {
            Envelope::Standard { class, .. } => class,
            Envelope::Opt {
                udp_payload_size, ..
            } => Class::from_int(udp_payload_size),
        }
    }

    /// Returns the record’s time-to-live as it appears on the wire.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        match self.envelope {
            Envelope::Standard { ttl, .. } => ttl,
            Envelope::Opt { ttl, .. } => ttl.to_u32(),
        }
    }

    /// Return a reference to the record data.
    #[must_use]
    pub fn data(&self) -> &RecordData<'a> {
        &self.data
    }

    /// Return a mutable reference to the record data.
    pub fn data_mut(&mut self) -> &mut RecordData<'a> {
        &mut self.data
    }

    /// Returns the length of the record data if it is still unparsed.
    #[must_use]
    pub fn rdlen(&self) -> Option<usize> {
        match self.data {
            RecordData::Unparsed(ref data) => Some(data.len()),
            RecordData::Parsed(_) => None,
        }
    }

    /// Returns the typed record data.
    ///
    /// Returns `Ok(None)` if the record type is not supported. Record data
    /// that is too short for its type or has trailing octets is
    /// [`ParseError::Malformed`].
    pub fn parse_data(&self) -> Result<Option<AllRecordData>, ParseError> {
        match self.data {
            RecordData::Unparsed(ref data) => data.parse(self.rtype),
            RecordData::Parsed(ref data) => Ok(Some(data.clone())),
        }
    }

    /// Replaces unparsed record data with its typed form.
    ///
    /// Returns whether the record now holds typed data. This is not the
    /// case for unsupported record types.
    pub fn parse_in_place(&mut self) -> Result<bool, ParseError> {
        if let RecordData::Unparsed(data) = self.data {
            match data.parse(self.rtype)? {
                Some(parsed) => self.data = RecordData::Parsed(parsed),
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    /// Converts the record into one that doesn’t borrow from a message.
    ///
    /// Data of unsupported record types becomes [`UnknownRecordData`].
    pub fn into_owned(self) -> Result<Record<'static>, ParseError> {
        let data = match self.data {
            RecordData::Unparsed(data) => match data.parse(self.rtype)? {
                Some(parsed) => parsed,
                None => AllRecordData::Unknown(
                    UnknownRecordData::from_octets(
                        self.rtype,
                        data.as_slice().into(),
                    ),
                ),
            },
            RecordData::Parsed(data) => data,
        };
        Ok(Record {
            owner: self.owner,
            rtype: self.rtype,
            envelope: self.envelope,
            data: RecordData::Parsed(data),
        })
    }

    /// Parses a record from the beginning of the parser.
    ///
    /// The parser has to cover the whole message so that compressed names
    /// can be resolved. The record data is not parsed but checked to fit
    /// into the message.
    pub fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        let owner = parse_name(parser)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = parser.parse_u32_be()?;
        let rdlen = usize::from(parser.parse_u16_be()?);
        if !rtype.is_record_type() {
            tracing::debug!(%rtype, "unknown record type");
            return Err(ParseError::form_error("unknown record type"));
        }
        let envelope = if rtype == Rtype::OPT {
            Envelope::Opt {
                udp_payload_size: class.to_int(),
                ttl: OptTtl::from_u32(ttl),
            }
        } else if class.is_record_class() {
            Envelope::Standard { class, ttl }
        } else {
            tracing::debug!(%class, "unknown record class");
            return Err(ParseError::form_error("unknown record class"));
        };
        if rdlen > parser.remaining() {
            tracing::debug!(
                rdlen,
                remaining = parser.remaining(),
                "record data exceeds message"
            );
            return Err(ParseError::malformed("record data exceeds message"));
        }
        let data = UnparsedData {
            message: parser.octets_ref(),
            pos: parser.pos(),
            len: rdlen,
        };
        parser.advance(rdlen)?;
        Ok(Record {
            owner,
            rtype,
            envelope,
            data: RecordData::Unparsed(data),
        })
    }

    /// Appends the wire format of the record to the target.
    ///
    /// The owner name is compressed against what is already in the target.
    /// Unparsed data is copied verbatim. Typed data of unsupported record
    /// types cannot be composed.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        compose_compressed_name(&self.owner, target)?;
        self.rtype.compose(target)?;
        self.class().compose(target)?;
        target.append_slice(&self.ttl().to_be_bytes())?;
        match self.data {
            RecordData::Unparsed(ref data) => {
                compose_len_prefixed(target, |target| {
                    target.append_slice(data.as_slice())?;
                    Ok(())
                })
            }
            RecordData::Parsed(ref data) => data.compose_len_rdata(target),
        }
    }
}

//------------ Envelope ------------------------------------------------------

/// The class and TTL fields of a record.
///
/// Regular records carry a class and a TTL. The OPT record uses the class
/// field for the UDP payload size and packs a number of values into the
/// TTL field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Envelope {
    /// The fields of any record but OPT.
    Standard {
        /// The record class.
        class: Class,

        /// The time to live in seconds.
        ttl: u32,
    },

    /// The fields of an OPT record.
    Opt {
        /// The largest UDP payload the sender can receive.
        udp_payload_size: u16,

        /// The extended rcode, EDNS version and flags.
        ttl: OptTtl,
    },
}

//------------ RecordData ----------------------------------------------------

/// The data of a record, either still in wire format or parsed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordData<'a> {
    /// Record data as it appeared in a message.
    Unparsed(UnparsedData<'a>),

    /// Typed record data.
    Parsed(AllRecordData),
}

impl<'a> From<AllRecordData> for RecordData<'a> {
    fn from(data: AllRecordData) -> Self {
        RecordData::Parsed(data)
    }
}

//------------ UnparsedData --------------------------------------------------

/// Record data that has not been parsed yet.
///
/// This is a view of the record data within the message it was parsed
/// from. The whole message is kept so that compressed domain names in the
/// record data can be resolved later on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnparsedData<'a> {
    /// The complete message.
    message: &'a [u8],

    /// The start of the record data in the message.
    pos: usize,

    /// The length of the record data.
    len: usize,
}

impl<'a> UnparsedData<'a> {
    /// Returns the position of the data in its message.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the length of the data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the record data is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the record data.
    #[must_use]
    pub fn as_slice(&self) -> &'a [u8] {
        &self.message[self.pos..self.pos + self.len]
    }

    /// Returns a parser positioned at the data and limited to it.
    pub fn parser(&self) -> Result<Parser<'a, [u8]>, ParseError> {
        let mut parser = Parser::from_ref(self.message);
        parser.advance(self.pos)?;
        Ok(parser.parse_parser(self.len)?)
    }

    /// Parses the data as record data of the given type.
    ///
    /// Running out of record data in the middle of a field means the
    /// record data length was wrong, so this is reported as malformed
    /// data rather than short input.
    pub fn parse(
        &self,
        rtype: Rtype,
    ) -> Result<Option<AllRecordData>, ParseError> {
        let mut parser = self.parser()?;
        AllRecordData::parse_rdata(rtype, &mut parser).map_err(|err| {
            tracing::debug!(%rtype, %err, "malformed record data");
            match err {
                ParseError::ShortInput => {
                    ParseError::malformed("short record data")
                }
                err => err,
            }
        })
    }
}

//============ Testing =======================================================
