//! DNS response codes and extended response codes.
//!
//! The original DNS specification in [RFC 1035] specified four bits of the
//! message header as response code. Later, [RFC 6891] added eight bits to
//! the response code to be transmitted as part of the OPT pseudo-resource
//! record and the TSIG record of [RFC 8945] uses a sixteen bit error code.
//! All of these codes share the same definition space.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891
//! [RFC 8945]: https://tools.ietf.org/html/rfc8945
#![allow(clippy::upper_case_acronyms)]

//------------ Rcode --------------------------------------------------------

int_enum! {
    /// DNS Response Codes.
    ///
    /// The response code of a response indicates what happend on the
    /// server when trying to answer the query. The code is a 4 bit value
    /// and part of the header of a DNS message. Only the lower four bits
    /// of the wrapped value are ever placed into a header.
    =>
    Rcode, u8;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name
    /// server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    (REFUSED => 5, "REFUSED")

    /// Name exists when it should not.
    (YXDOMAIN => 6, "YXDOMAIN")

    /// RR set exists when it should not.
    (YXRRSET => 7, "YXRRSET")

    /// RR set that should exist does not.
    (NXRRSET => 8, "NXRRSET")

    /// Server not authoritative for zone or client not authorized.
    (NOTAUTH => 9, "NOTAUTH")

    /// Name not contained in zone.
    (NOTZONE => 10, "NOTZONE")

    /// DSO-TYPE not implemented.
    (DSOTYPENI => 11, "DSOTYPENI")
}

int_enum_str_with_decimal!(Rcode, u8, "unknown rcode");

impl Rcode {
    /// Creates a header rcode from the lower four bits of an octet.
    #[must_use]
    pub const fn masked(value: u8) -> Self {
        Rcode(value & 0x0F)
    }
}

//------------ Extended error code text ---------------------------------------

/// Returns the registry name of an extended response code.
///
/// The value covers the full sixteen bit space shared by header, OPT and
/// TSIG error codes. Values that have not been assigned are reported by
/// the name of the range they fall into.
#[must_use]
pub fn rcode_text(code: u16) -> &'static str {
    match code {
        0 => "NoError",
        1 => "FormErr",
        2 => "ServFail",
        3 => "NXDomain",
        4 => "NotImp",
        5 => "Refused",
        6 => "YXDomain",
        7 => "YXRRSet",
        8 => "NXRRSet",
        9 => "NotAuth",
        10 => "NotZone",
        11 => "DSOTYPENI",
        12..=15 => "Unassigned",
        16 => "BADVERS",
        17 => "BADKEY",
        18 => "BADTIME",
        19 => "BADMODE",
        20 => "BADNAME",
        21 => "BADALG",
        22 => "BADTRUNC",
        23 => "BADCOOKIE",
        24..=3840 => "Unassigned",
        3841..=4095 => "Reserved for Private Use",
        4096..=65534 => "Unassigned",
        65535 => "Reserved",
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn masked() {
        assert_eq!(Rcode::masked(0x13), Rcode::NXDOMAIN);
        assert_eq!(Rcode::masked(0xF0), Rcode::NOERROR);
    }

    #[test]
    fn from_str() {
        assert_eq!(Rcode::from_str("refused").unwrap(), Rcode::REFUSED);
        assert_eq!(Rcode::from_str("15").unwrap().to_int(), 15);
        assert!(Rcode::from_str("BADCOOKIE").is_err());
    }

    #[test]
    fn text() {
        assert_eq!(rcode_text(3), "NXDomain");
        assert_eq!(rcode_text(13), "Unassigned");
        assert_eq!(rcode_text(23), "BADCOOKIE");
        assert_eq!(rcode_text(100), "Unassigned");
        assert_eq!(rcode_text(4000), "Reserved for Private Use");
        assert_eq!(rcode_text(65535), "Reserved");
    }
}
