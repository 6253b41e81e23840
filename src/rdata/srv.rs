//! Record data from [RFC 2782]: SRV records.
//!
//! This RFC defines the Srv record type.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::iana::Rtype;
use crate::base::name::{compose_name, parse_name};
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::{Compose, ComposeError, Composer, Parse, ParseError};
use alloc::string::String;
use octseq::parse::Parser;

//------------ Srv ---------------------------------------------------------

/// Srv record data.
///
/// Srv records specify the location of the server(s) for a specific
/// protocol and domain. The target name is never compressed when composing
/// but compressed names are accepted when parsing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: String,
}

impl Srv {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::SRV;

    pub fn new(
        priority: u16,
        weight: u16,
        port: u16,
        target: impl Into<String>,
    ) -> Self {
        Srv {
            priority,
            weight,
            port,
            target: target.into(),
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
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u16::parse(parser)?,
            u16::parse(parser)?,
            u16::parse(parser)?,
            parse_name(parser)?,
        ))
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

rtype_record_data!(Srv);

impl ComposeRecordData for Srv {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.priority.compose(target)?;
        self.weight.compose(target)?;
        self.port.compose(target)?;
        compose_name(&self.target, target)
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
    fn srv_compose_parse() {
        let rdata = Srv::new(10, 11, 12, "example.com.");
        test_compose_parse(&rdata, |parser| Srv::parse(parser));
    }

    #[test]
    fn target_not_compressed() {
        let mut target = Vec::from(&b"\x07example\x03com\x00"[..]);
        Srv::new(1, 2, 443, "example.com")
            .compose_rdata(&mut target)
            .unwrap();
        assert_eq!(
            &target[13..],
            b"\x00\x01\x00\x02\x01\xbb\x07example\x03com\x00"
        );
    }

    #[test]
    fn compressed_target_accepted() {
        let data = b"\x07example\x03com\x00\x00\x01\x00\x02\x01\xbb\xc0\x00";
        let mut parser = Parser::from_ref(&data[..]);
        parser.advance(13).unwrap();
        let srv = Srv::parse(&mut parser).unwrap();
        assert_eq!(srv.target(), "example.com.");
        assert_eq!(srv.port(), 443);
    }
}
