//! URI record data.
//!
//! The URI record type is defined in [RFC 7553].
//!
//! [RFC 7553]: https://tools.ietf.org/html/rfc7553

use crate::base::iana::Rtype;
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::{
    parse_remaining, Compose, ComposeError, Composer, Parse, ParseError,
};
use alloc::vec::Vec;
use octseq::parse::Parser;

//------------ Uri ---------------------------------------------------------

/// URI record data.
///
/// The target is kept as opaque octets. Unlike in a character string it
/// has no length octet but simply extends to the end of the record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Uri {
    priority: u16,
    weight: u16,
    target: Vec<u8>,
}

impl Uri {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::URI;

    #[must_use]
    pub fn new(priority: u16, weight: u16, target: Vec<u8>) -> Self {
        Uri {
            priority,
            weight,
            target,
        }
    }

    #[must_use]
    pub fn priority(&self) -> u16 {
        self.priority
    }

    #[must_use]
    pub fn weight(&self) -> u16 {
        self.weight
    }

    #[must_use]
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u16::parse(parser)?,
            u16::parse(parser)?,
            parse_remaining(parser)?.into(),
        ))
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

rtype_record_data!(Uri);

impl ComposeRecordData for Uri {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.priority.compose(target)?;
        self.weight.compose(target)?;
        target.append_slice(&self.target)?;
        Ok(())
    }
}

//============ Testing =======================================================
