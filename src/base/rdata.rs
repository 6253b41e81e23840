//! Resource record data.
//!
//! Each resource record type has it’s own definition of the content and
//! formatting of its data. This module provides the basics for implementing
//! specific types for this record data. The concrete implementations for
//! the supported record types live in the top-level [rdata] module.
//!
//! There are three traits herein: Any type that represents record data
//! implements [`RecordData`]. If it can be added to a message, it also
//! implements [`ComposeRecordData`]. If the data can be parsed from an
//! existing message, the type in addition implements [`ParseRecordData`].
//!
//! The module also provides a type, [`UnknownRecordData`], that holds the
//! data of record types that have no implementation.
//!
//! [rdata]: crate::rdata

use alloc::vec::Vec;
use octseq::parse::Parser;

use super::iana::Rtype;
use super::wire::{
    compose_len_prefixed, parse_remaining, ComposeError, Composer,
    ParseError,
};

//----------- RecordData -----------------------------------------------------

/// A type that represents record data.
///
/// The type needs to be able to to be able to provide the record type of a
/// record with a value’s data via the [`rtype`][Self::rtype] method.
pub trait RecordData {
    /// Returns the record type associated with this record data instance.
    ///
    /// This is a method rather than an associated function to allow one
    /// type to be used for several real record types.
    fn rtype(&self) -> Rtype;
}

impl<'a, T: RecordData> RecordData for &'a T {
    fn rtype(&self) -> Rtype {
        (*self).rtype()
    }
}

//----------- ComposeRecordData ----------------------------------------------

/// A type of record data that can be composed.
pub trait ComposeRecordData: RecordData {
    /// Appends the wire format of the record data into `target`.
    ///
    /// Domain names may be compressed against everything the target holds
    /// already if the record type allows it.
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>;

    /// Appends the record data prefixed with its length.
    fn compose_len_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        compose_len_prefixed(target, |target| self.compose_rdata(target))
    }
}

impl<'a, T: ComposeRecordData> ComposeRecordData for &'a T {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        (*self).compose_rdata(target)
    }
}

//------------ ParseRecordData -----------------------------------------------

/// A record data type that can be parsed from a message.
pub trait ParseRecordData<'a>: RecordData + Sized {
    /// Parses the record data.
    ///
    /// The record data is for a record of type `rtype`. The function may
    /// decide whether it wants to parse data for that type. It should return
    /// `Ok(None)` if it doesn’t.
    ///
    /// The `parser` is positioned at the beginning of the record data and is
    /// is limited to the length of the data. It still covers the full
    /// message before the data so compression pointers can be followed.
    /// The method has to consume the data completely and fail with a
    /// malformed error if there is anything left.
    ///
    /// If the function doesn’t want to process the data, it must not touch
    /// the parser. In particual, it must not advance it.
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, [u8]>,
    ) -> Result<Option<Self>, ParseError>;
}

/// Checks that a record data parser has been used up.
pub fn check_exhausted(parser: &Parser<[u8]>) -> Result<(), ParseError> {
    if parser.remaining() != 0 {
        tracing::debug!(
            remaining = parser.remaining(),
            "trailing octets in record data"
        );
        return Err(ParseError::malformed("trailing data"));
    }
    Ok(())
}

//------------ UnknownRecordData ---------------------------------------------

/// The data of a record type without an implementation.
///
/// This type accepts any record type and stores the plain, unparsed record
/// data as an octets vector.
///
/// Because some record types allow compressed domain names in their record
/// data, the data can only be interpreted in the context of the message it
/// came from. For that reason, this type can be parsed but never composed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    data: Vec<u8>,
}

impl UnknownRecordData {
    /// Creates generic record data from a vector containing the data.
    #[must_use]
    pub fn from_octets(rtype: Rtype, data: Vec<u8>) -> Self {
        UnknownRecordData { rtype, data }
    }

    /// Returns the record type this data is for.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Takes the remaining content of the parser as record data.
    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser<[u8]>,
    ) -> Result<Self, ParseError> {
        parse_remaining(parser).map(|data| Self::from_octets(rtype, data.into()))
    }
}

//--- RecordData

impl RecordData for UnknownRecordData {
    fn rtype(&self) -> Rtype {
        self.rtype
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
pub(crate) mod test {
    use super::*;
    use core::fmt::Debug;
    use std::vec::Vec;

    /// Check that composing and parsing are reverse operations.
    ///
    /// The data is composed behind a few octets of garbage so that the
    /// parser does not start at position zero.
    pub fn test_compose_parse<In, F, Out>(data: &In, parse: F)
    where
        In: ComposeRecordData + PartialEq<Out> + Debug,
        F: for<'a> FnOnce(&mut Parser<'a, [u8]>) -> Result<Out, ParseError>,
        Out: Debug,
    {
        let mut buf = Vec::from(&b"\xde\xad"[..]);
        data.compose_len_rdata(&mut buf).unwrap();
        let mut parser = Parser::from_ref(buf.as_slice());
        parser.advance(2).unwrap();
        let len = usize::from(parser.parse_u16_be().unwrap());
        assert_eq!(parser.remaining(), len);
        let mut rdata = parser.parse_parser(len).unwrap();
        let parsed = (parse)(&mut rdata).unwrap();
        assert_eq!(rdata.remaining(), 0);
        assert_eq!(*data, parsed);
    }

    #[test]
    fn unknown() {
        let mut parser = Parser::from_ref(&b"\x01\x02\x03"[..]);
        let data = UnknownRecordData::parse(Rtype::NULL, &mut parser).unwrap();
        assert_eq!(data.data(), b"\x01\x02\x03");
        assert_eq!(RecordData::rtype(&data), Rtype::NULL);
        assert!(check_exhausted(&parser).is_ok());
    }
}
