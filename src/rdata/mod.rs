//! Record data implementations.
//!
//! This module contains the implementations of the record data for all
//! record types the crate understands.
//!
//! The types are named identically to the [`Rtype`] constant they
//! implement. They are grouped into submodules for the RFCs they are
//! defined in. All types are also re-exported at the top level here. Ie.,
//! for the AAAA record type, you can simply `use domain_wire::rdata::Aaaa`.
//!
//! The enum [`AllRecordData`] collects all of them plus the OPT pseudo
//! record and data of unsupported types.
//!
//! [`Rtype`]: crate::base::iana::Rtype

#[macro_use]
mod macros;

// The rdata_types! macro (defined in self::macros) reexports the record data
// types here and creates the AllRecordData enum containing all record types
// that can be parsed and composed.
rdata_types! {
    rfc1035::{
        A,
        Cname,
        Hinfo,
        Mx,
        Ns,
        Ptr,
        Soa,
        Txt,
    }
    aaaa::{
        Aaaa,
    }
    srv::{
        Srv,
    }
    rfc4034::{
        Rrsig,
    }
    ilnp::{
        Nid,
        L32,
        L64,
        Lp,
    }
    uri::{
        Uri,
    }
    caa::{
        Caa,
    }
}

pub mod aaaa;
pub mod caa;
pub mod ilnp;
pub mod rfc1035;
pub mod rfc4034;
pub mod srv;
pub mod uri;

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::opt::Opt;
    use crate::base::rdata::ParseRecordData;
    use crate::base::wire::ParseError;
    use octseq::parse::Parser;

    fn parse(
        rtype: Rtype,
        data: &[u8],
    ) -> Result<Option<AllRecordData>, ParseError> {
        AllRecordData::parse_rdata(rtype, &mut Parser::from_ref(data))
    }

    #[test]
    fn dispatch_by_rtype() {
        assert_eq!(
            parse(Rtype::A, b"\x01\x02\x03\x04"),
            Ok(Some(A::from_octets(1, 2, 3, 4).into()))
        );
        assert_eq!(
            parse(Rtype::NS, b"\x02ns\x00"),
            Ok(Some(Ns::new("ns.").into()))
        );
        assert_eq!(
            parse(Rtype::PTR, b"\x02ns\x00"),
            Ok(Some(Ptr::new("ns.").into()))
        );
        assert_eq!(parse(Rtype::OPT, b""), Ok(Some(Opt::default().into())));
    }

    #[test]
    fn unsupported_types_are_left_alone() {
        assert_eq!(parse(Rtype::NULL, b"\x01\x02"), Ok(None));
        assert_eq!(parse(Rtype::from_int(0xfff0), b""), Ok(None));
    }

    #[test]
    fn trailing_data_is_malformed() {
        assert!(matches!(
            parse(Rtype::A, b"\x01\x02\x03\x04\x05"),
            Err(ParseError::Malformed(_))
        ));
    }
}
