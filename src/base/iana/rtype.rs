//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. Normal query includes the
    /// type of record information is requested for. A few aditional types,
    /// called query types, are defined as well and can only be used in
    /// questions. This type represents both these types.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address (RFC 1035).
    (A => 1, "A")

    /// An authoritative name server (RFC 1035).
    (NS => 2, "NS")

    /// A mail destination (RFC 1035, obsolete, use MX).
    (MD => 3, "MD")

    /// A mail forwarder (RFC 1035, obsolete, use MX).
    (MF => 4, "MF")

    /// The canonical name for an alias (RFC 1035).
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority (RFC 1035).
    (SOA => 6, "SOA")

    /// A mailbox domain name (RFC 1035, experimental).
    (MB => 7, "MB")

    /// A mail group member (RFC 1035, experimental).
    (MG => 8, "MG")

    /// A mail rename domain name (RFC 1035, experimental).
    (MR => 9, "MR")

    /// A null resource record (RFC 1035, experimental).
    (NULL => 10, "NULL")

    /// A well known service description (RFC 1035).
    (WKS => 11, "WKS")

    /// A domain name pointer (RFC 1035).
    (PTR => 12, "PTR")

    /// Host information (RFC 1035).
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information (RFC 1035).
    (MINFO => 14, "MINFO")

    /// Mail exchange (RFC 1035).
    (MX => 15, "MX")

    /// Text strings (RFC 1035).
    (TXT => 16, "TXT")

    /// Responsible person (RFC 1183).
    (RP => 17, "RP")

    /// AFS database location (RFC 1183).
    (AFSDB => 18, "AFSDB")

    /// X.25 PSDN address (RFC 1183).
    (X25 => 19, "X25")

    /// ISDN address (RFC 1183).
    (ISDN => 20, "ISDN")

    /// Route through (RFC 1183).
    (RT => 21, "RT")

    /// NSAP style A record (RFC 1706).
    (NSAP => 22, "NSAP")

    /// Domain name pointer, NSAP style (RFC 1348).
    (NSAPPTR => 23, "NSAPPTR")

    /// Security signature (RFC 2535).
    (SIG => 24, "SIG")

    /// Security key (RFC 2535).
    (KEY => 25, "KEY")

    /// X.400 mail mapping information (RFC 2163).
    (PX => 26, "PX")

    /// Geographical position (RFC 1712).
    (GPOS => 27, "GPOS")

    /// IPv6 address (RFC 3596).
    (AAAA => 28, "AAAA")

    /// Location information (RFC 1876).
    (LOC => 29, "LOC")

    /// Next domain (RFC 2535, obsolete).
    (NXT => 30, "NXT")

    /// Endpoint identifier.
    (EID => 31, "EID")

    /// Nimrod locator.
    (NIMLOC => 32, "NIMLOC")

    /// Server selection (RFC 2782).
    (SRV => 33, "SRV")

    /// ATM address.
    (ATMA => 34, "ATMA")

    /// Naming authority pointer (RFC 3403).
    (NAPTR => 35, "NAPTR")

    /// Key exchanger (RFC 2230).
    (KX => 36, "KX")

    /// Certificate (RFC 4398).
    (CERT => 37, "CERT")

    /// A6 (RFC 2874, historic).
    (A6 => 38, "A6")

    /// Delegation name (RFC 6672).
    (DNAME => 39, "DNAME")

    /// Kitchen sink.
    (SINK => 40, "SINK")

    /// EDNS option pseudo-record (RFC 6891).
    (OPT => 41, "OPT")

    /// Address prefix list (RFC 3123).
    (APL => 42, "APL")

    /// Delegation signer (RFC 4034).
    (DS => 43, "DS")

    /// SSH key fingerprint (RFC 4255).
    (SSHFP => 44, "SSHFP")

    /// IPsec key (RFC 4025).
    (IPSECKEY => 45, "IPSECKEY")

    /// DNSSEC signature (RFC 4034).
    (RRSIG => 46, "RRSIG")

    /// Next secure (RFC 4034).
    (NSEC => 47, "NSEC")

    /// DNS key (RFC 4034).
    (DNSKEY => 48, "DNSKEY")

    /// DHCP identifier (RFC 4701).
    (DHCID => 49, "DHCID")

    /// Hashed next secure (RFC 5155).
    (NSEC3 => 50, "NSEC3")

    /// NSEC3 parameters (RFC 5155).
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// TLSA certificate association (RFC 6698).
    (TLSA => 52, "TLSA")

    /// S/MIME cert association (RFC 8162).
    (SMIMEA => 53, "SMIMEA")

    /// Host identity protocol (RFC 8005).
    (HIP => 55, "HIP")

    /// Zone status information.
    (NINFO => 56, "NINFO")

    /// RKEY.
    (RKEY => 57, "RKEY")

    /// Trust anchor link.
    (TALINK => 58, "TALINK")

    /// Child DS (RFC 7344).
    (CDS => 59, "CDS")

    /// DNSKEY(s) the child wants reflected in DS (RFC 7344).
    (CDNSKEY => 60, "CDNSKEY")

    /// OpenPGP key (RFC 7929).
    (OPENPGPKEY => 61, "OPENPGPKEY")

    /// Child-to-parent synchronization (RFC 7477).
    (CSYNC => 62, "CSYNC")

    /// Message digest for DNS zone (RFC 8976).
    (ZONEMD => 63, "ZONEMD")

    /// General purpose service binding (RFC 9460).
    (SVCB => 64, "SVCB")

    /// Service binding for HTTPS (RFC 9460).
    (HTTPS => 65, "HTTPS")

    /// Sender policy framework (RFC 7208, obsolete).
    (SPF => 99, "SPF")

    /// User information (IANA reserved).
    (UINFO => 100, "UINFO")

    /// User ID (IANA reserved).
    (UID => 101, "UID")

    /// Group ID (IANA reserved).
    (GID => 102, "GID")

    /// Unspecified (IANA reserved).
    (UNSPEC => 103, "UNSPEC")

    /// ILNP node identifier (RFC 6742).
    (NID => 104, "NID")

    /// ILNP 32 bit locator (RFC 6742).
    (L32 => 105, "L32")

    /// ILNP 64 bit locator (RFC 6742).
    (L64 => 106, "L64")

    /// ILNP locator pointer (RFC 6742).
    (LP => 107, "LP")

    /// EUI-48 address (RFC 7043).
    (EUI48 => 108, "EUI48")

    /// EUI-64 address (RFC 7043).
    (EUI64 => 109, "EUI64")

    /// Transaction key (RFC 2930).
    (TKEY => 249, "TKEY")

    /// Transaction signature (RFC 8945).
    (TSIG => 250, "TSIG")

    /// Incremental zone transfer (RFC 1995).
    (IXFR => 251, "IXFR")

    /// Transfer of an entire zone (RFC 1035). Question only.
    (AXFR => 252, "AXFR")

    /// Mailbox-related records (RFC 1035). Question only.
    (MAILB => 253, "MAILB")

    /// Mail agent records (RFC 1035, obsolete). Question only.
    (MAILA => 254, "MAILA")

    /// All records (RFC 1035). Question only.
    (ANY => 255, "ANY")

    /// Uniform resource identifier (RFC 7553).
    (URI => 256, "URI")

    /// Certification authority authorization (RFC 8659).
    (CAA => 257, "CAA")

    /// Application visibility and control.
    (AVC => 258, "AVC")

    /// Digital object architecture.
    (DOA => 259, "DOA")

    /// Automatic multicast tunneling relay (RFC 8777).
    (AMTRELAY => 260, "AMTRELAY")

    /// Resolver information as key/value pairs (RFC 9606).
    (RESINFO => 261, "RESINFO")

    /// DNSSEC trust authorities.
    (TA => 32768, "TA")

    /// DNSSEC lookaside validation (RFC 4431, obsolete).
    (DLV => 32769, "DLV")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16, "unknown record type");

impl Rtype {
    /// Returns whether the type may appear in a resource record.
    ///
    /// This is every type with a mnemonic except for the four types that
    /// only make sense in a question.
    #[must_use]
    pub const fn is_record_type(self) -> bool {
        self.is_known() && !self.is_question_only()
    }

    /// Returns whether the type may appear in a question.
    #[must_use]
    pub const fn is_question_type(self) -> bool {
        self.is_known()
    }

    /// Returns whether the type is one of the question-only types.
    #[must_use]
    pub const fn is_question_only(self) -> bool {
        matches!(self.0, 252..=255)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Rtype;
    use core::str::FromStr;

    #[test]
    fn record_and_question_types() {
        assert!(Rtype::A.is_record_type());
        assert!(Rtype::OPT.is_record_type());
        assert!(Rtype::IXFR.is_record_type());
        assert!(Rtype::DLV.is_record_type());
        assert!(!Rtype::AXFR.is_record_type());
        assert!(!Rtype::ANY.is_record_type());
        assert!(Rtype::ANY.is_question_type());
        assert!(Rtype::MAILA.is_question_type());
        assert!(!Rtype::from_int(54).is_question_type());
        assert!(!Rtype::from_int(1000).is_record_type());
    }

    #[test]
    fn from_str() {
        assert_eq!(Rtype::from_str("aaaa").unwrap(), Rtype::AAAA);
        assert_eq!(Rtype::from_str("TYPE65534").unwrap(), Rtype::from_int(65534));
        assert!(Rtype::from_str("TYPE").is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(format!("{}", Rtype::RRSIG), "RRSIG");
        assert_eq!(format!("{}", Rtype::from_int(54)), "TYPE54");
        assert_eq!(format!("{:?}", Rtype::MX), "Rtype::MX");
    }
}
