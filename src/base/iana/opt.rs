//! EDNS option codes.

//------------ OptionCode ----------------------------------------------------

int_enum! {
    /// EDNS option codes.
    ///
    /// The record data of an OPT record is a sequence of options, each
    /// identified by a 16 bit *option code.* The assigned codes can be
    /// found in the [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-11
    =>
    OptionCode, u16;

    /// Long-Lived Queries (1).
    (LLQ => 1, "LLQ")

    /// Update lease (2).
    (UL => 2, "UL")

    /// Name server identifier (3).
    ///
    /// Defined in [RFC 5001].
    ///
    /// [RFC 5001]: https://tools.ietf.org/html/rfc5001
    (NSID => 3, "NSID")

    /// DNSSEC algorithm understood (5).
    (DAU => 5, "DAU")

    /// DS hash understood (6).
    (DHU => 6, "DHU")

    /// NSEC3 hash understood (7).
    (N3U => 7, "N3U")

    /// Client subnet (8).
    (CLIENT_SUBNET => 8, "edns-client-subnet")

    /// Zone expiry (9).
    (EXPIRE => 9, "EDNS EXPIRE")

    /// DNS cookie (10).
    ///
    /// Defined in [RFC 7873].
    ///
    /// [RFC 7873]: https://tools.ietf.org/html/rfc7873
    (COOKIE => 10, "COOKIE")

    /// TCP keepalive (11).
    (TCP_KEEPALIVE => 11, "edns-tcp-keepalive")

    /// Padding (12).
    (PADDING => 12, "Padding")

    /// Chain query (13).
    (CHAIN => 13, "CHAIN")

    /// Key tag (14).
    (KEY_TAG => 14, "edns-key-tag")

    /// Extended DNS error (15).
    ///
    /// Defined in [RFC 8914].
    ///
    /// [RFC 8914]: https://tools.ietf.org/html/rfc8914
    (EXTENDED_ERROR => 15, "Extended DNS Error")

    /// Client tag (16).
    (CLIENT_TAG => 16, "EDNS-Client-Tag")

    /// Server tag (17).
    (SERVER_TAG => 17, "EDNS-Server-Tag")

    /// Report channel (18).
    (REPORT_CHANNEL => 18, "Report-Channel")

    /// Zone version (19).
    (ZONEVERSION => 19, "ZONEVERSION")

    /// Device ID (26946).
    (DEVICE_ID => 26946, "DeviceId")
}

int_enum_str_with_decimal!(OptionCode, u16, "unknown option code");
