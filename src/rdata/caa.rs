//! CAA record data.
//!
//! The CAA record type is defined in [RFC 8659].
//!
//! [RFC 8659]: https://www.rfc-editor.org/rfc/rfc8659

use crate::base::charstr::{CharStr, CharStrError};
use crate::base::iana::Rtype;
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::{
    parse_remaining, Compose, ComposeError, Composer, Parse, ParseError,
};
use alloc::vec::Vec;
use octseq::parse::Parser;

//------------ Caa ---------------------------------------------------------

/// CAA record data.
///
/// The record consists of a flags octet, a property tag carried as a
/// character string, and a property value that takes up the rest of the
/// record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Caa {
    flags: u8,
    tag: CharStr,
    value: Vec<u8>,
}

impl Caa {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::CAA;

    /// Creates a new CAA record data from the flags, tag, and value.
    #[must_use]
    pub fn new(flags: u8, tag: CharStr, value: Vec<u8>) -> Self {
        Caa { flags, tag, value }
    }

    /// Creates a new CAA record data from a tag and value given as slices.
    ///
    /// Fails if the tag is longer than 255 octets.
    pub fn from_slices(
        flags: u8,
        tag: &[u8],
        value: &[u8],
    ) -> Result<Self, CharStrError> {
        Ok(Self::new(flags, CharStr::from_slice(tag)?, value.into()))
    }

    /// If the value is set to "1", the Property is critical.
    /// A CA MUST NOT issue certificates for any FQDN if the
    /// Relevant RRset for that FQDN contains a CAA critical
    /// Property for an unknown or unsupported Property Tag.
    #[must_use]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// The Property identifier
    #[must_use]
    pub fn tag(&self) -> &CharStr {
        &self.tag
    }

    /// The Property Value
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u8::parse(parser)?,
            CharStr::parse(parser)?,
            parse_remaining(parser)?.into(),
        ))
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

rtype_record_data!(Caa);

impl ComposeRecordData for Caa {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.flags.compose(target)?;
        self.tag.compose(target)?;
        target.append_slice(&self.value)?;
        Ok(())
    }
}

//============ Testing =======================================================
