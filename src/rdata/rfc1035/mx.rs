//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::{compose_compressed_name, parse_name};
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::{Compose, ComposeError, Composer, Parse, ParseError};
use alloc::string::String;
use octseq::parse::Parser;

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Mx {
    preference: u16,
    exchange: String,
}

impl Mx {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::MX;

    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Mx {
            preference,
            exchange: exchange.into(),
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    #[must_use]
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        Ok(Self::new(u16::parse(parser)?, parse_name(parser)?))
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

rtype_record_data!(Mx);

impl ComposeRecordData for Mx {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.preference.compose(target)?;
        compose_compressed_name(&self.exchange, target)
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::rdata::test::test_compose_parse;
    use std::vec::Vec;

    #[test]
    fn mx_compose_parse() {
        let rdata = Mx::new(12, "mail.example.com.");
        test_compose_parse(&rdata, |parser| Mx::parse(parser));
    }

    #[test]
    fn compressed_exchange() {
        let mut target = Vec::from(&b"\x04mail\x07example\x03com\x00"[..]);
        Mx::new(10, "mail.example.com.")
            .compose_len_rdata(&mut target)
            .unwrap();
        assert_eq!(&target[18..], b"\x00\x04\x00\x0a\xc0\x00");
    }
}
