//! Record data from [RFC 4034]: RRSIG records.
//!
//! Only the signature record is supported. It is carried and re-encoded
//! but never verified.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::Rtype;
use crate::base::name::{compose_name, parse_name_uncompressed};
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::{
    parse_remaining, Compose, ComposeError, Composer, Parse, ParseError,
};
use alloc::string::String;
use alloc::vec::Vec;
use octseq::parse::Parser;

//------------ Rrsig ---------------------------------------------------------

/// Rrsig record data.
///
/// The signer’s name must not be compressed, neither when composing nor
/// in a message being parsed. The signature takes up whatever is left of
/// the record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Rrsig {
    type_covered: Rtype,
    algorithm: u8,
    labels: u8,
    original_ttl: u32,
    expiration: u32,
    inception: u32,
    key_tag: u16,
    signer_name: String,
    signature: Vec<u8>,
}

impl Rrsig {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::RRSIG;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: Rtype,
        algorithm: u8,
        labels: u8,
        original_ttl: u32,
        expiration: u32,
        inception: u32,
        key_tag: u16,
        signer_name: impl Into<String>,
        signature: Vec<u8>,
    ) -> Self {
        Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name: signer_name.into(),
            signature,
        }
    }

    #[must_use]
    pub fn type_covered(&self) -> Rtype {
        self.type_covered
    }

    #[must_use]
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    #[must_use]
    pub fn labels(&self) -> u8 {
        self.labels
    }

    #[must_use]
    pub fn original_ttl(&self) -> u32 {
        self.original_ttl
    }

    /// The end of the validity period as seconds since the epoch.
    #[must_use]
    pub fn expiration(&self) -> u32 {
        self.expiration
    }

    /// The start of the validity period as seconds since the epoch.
    #[must_use]
    pub fn inception(&self) -> u32 {
        self.inception
    }

    #[must_use]
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    #[must_use]
    pub fn signer_name(&self) -> &str {
        &self.signer_name
    }

    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        let type_covered = Rtype::parse(parser)?;
        let algorithm = u8::parse(parser)?;
        let labels = u8::parse(parser)?;
        let original_ttl = u32::parse(parser)?;
        let expiration = u32::parse(parser)?;
        let inception = u32::parse(parser)?;
        let key_tag = u16::parse(parser)?;
        let signer_name = parse_name_uncompressed(parser)?;
        let signature = parse_remaining(parser)?.into();
        Ok(Rrsig {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        })
    }
}

//--- RecordData, ParseRecordData, ComposeRecordData

rtype_record_data!(Rrsig);

impl ComposeRecordData for Rrsig {
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.type_covered.compose(target)?;
        self.algorithm.compose(target)?;
        self.labels.compose(target)?;
        self.original_ttl.compose(target)?;
        self.expiration.compose(target)?;
        self.inception.compose(target)?;
        self.key_tag.compose(target)?;
        compose_name(&self.signer_name, target)?;
        target.append_slice(&self.signature)?;
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::rdata::test::test_compose_parse;

    fn rrsig() -> Rrsig {
        Rrsig::new(
            Rtype::A,
            13,
            2,
            3600,
            1_700_086_400,
            1_700_000_000,
            2371,
            "example.com.",
            b"foobar".to_vec(),
        )
    }

    #[test]
    fn rrsig_compose_parse() {
        test_compose_parse(&rrsig(), |parser| Rrsig::parse(parser));
    }

    #[test]
    fn rrsig_compressed_signer() {
        let mut data = Vec::from(&b"\x07example\x03com\x00"[..]);
        data.extend_from_slice(b"\x00\x01\x0d\x02\x00\x00\x0e\x10");
        data.extend_from_slice(b"\x65\x55\xf0\x80\x65\x54\x9f\x00\x09\x43");
        data.extend_from_slice(b"\xc0\x00\x01\x02");
        let mut parser = Parser::from_ref(data.as_slice());
        parser.advance(13).unwrap();
        assert_eq!(
            Rrsig::parse(&mut parser),
            Err(ParseError::IllegalCompression)
        );
    }
}
