//! Decoding captured and hand-crafted messages.

mod common;

use std::net::Ipv4Addr;

use domain_wire::base::iana::{Class, ExtendedErrorCode, Rcode, Rtype};
use domain_wire::base::{ParseError, Question, Section};
use domain_wire::rdata::{AllRecordData, A};
use domain_wire::{decode, Error, Message};
use rstest::rstest;

// A response for yahoo.com A with six answers, all compressed against the
// question name, and an OPT record.
const YAHOO: &[u8] = &[
    0x04, 0xa0, 0x81, 0x80, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00, 0x00, 0x01,
    0x05, 0x79, 0x61, 0x68, 0x6f, 0x6f, 0x03, 0x63, 0x6f, 0x6d, 0x00, 0x00,
    0x01, 0x00, 0x01, 0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00,
    0x68, 0x00, 0x04, 0x4a, 0x06, 0xe7, 0x14, 0xc0, 0x0c, 0x00, 0x01, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x68, 0x00, 0x04, 0x62, 0x89, 0x0b, 0xa3, 0xc0,
    0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x68, 0x00, 0x04, 0x62,
    0x89, 0x0b, 0xa4, 0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00,
    0x68, 0x00, 0x04, 0x4a, 0x06, 0x8f, 0x19, 0xc0, 0x0c, 0x00, 0x01, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x68, 0x00, 0x04, 0x4a, 0x06, 0xe7, 0x15, 0xc0,
    0x0c, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x68, 0x00, 0x04, 0x4a,
    0x06, 0x8f, 0x1a, 0x00, 0x00, 0x29, 0x04, 0xd0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
];

// A response for urlabuse.com SOA. The names in the record data are
// compressed.
const CLOUDFLARE_SOA: &[u8] = &[
    0x3b, 0x99, 0x81, 0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x75, 0x72, 0x6c, 0x61, 0x62, 0x75, 0x73, 0x65, 0x03, 0x63, 0x6f,
    0x6d, 0x00, 0x00, 0x06, 0x00, 0x01, 0xc0, 0x0c, 0x00, 0x06, 0x00, 0x01,
    0x00, 0x00, 0x07, 0x08, 0x00, 0x2f, 0x04, 0x61, 0x6e, 0x6e, 0x61, 0x02,
    0x6e, 0x73, 0x0a, 0x63, 0x6c, 0x6f, 0x75, 0x64, 0x66, 0x6c, 0x61, 0x72,
    0x65, 0xc0, 0x15, 0x03, 0x64, 0x6e, 0x73, 0xc0, 0x32, 0x8b, 0xcc, 0x60,
    0xd2, 0x00, 0x00, 0x27, 0x10, 0x00, 0x00, 0x09, 0x60, 0x00, 0x09, 0x3a,
    0x80, 0x00, 0x00, 0x07, 0x08, 0x00, 0x00, 0x29, 0x04, 0xd0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

#[test]
fn simple_query() {
    common::init_logging();
    let msg = decode(
        b"\x12\x34\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
          \x06google\x03com\x00\x00\x01\x00\x01",
    )
    .unwrap();
    assert_eq!(msg.header().id(), 0x1234);
    assert!(msg.header().rd());
    assert!(!msg.header().qr());
    let counts = msg.counts();
    assert_eq!(counts.qdcount, 1);
    assert_eq!(counts.ancount, 0);
    assert_eq!(
        msg.question(),
        Some(&Question::new("google.com.", Rtype::A, Class::IN))
    );
}

#[test]
fn yahoo_response() {
    common::init_logging();
    let msg = decode(YAHOO).unwrap();
    assert_eq!(msg.header().id(), 0x04a0);
    assert_eq!(msg.answer().len(), 6);
    let expected: [[u8; 4]; 6] = [
        [74, 6, 231, 20],
        [98, 137, 11, 163],
        [98, 137, 11, 164],
        [74, 6, 143, 25],
        [74, 6, 231, 21],
        [74, 6, 143, 26],
    ];
    for (record, addr) in msg.answer().iter().zip(expected) {
        assert_eq!(record.owner(), "yahoo.com.");
        assert_eq!(record.rtype(), Rtype::A);
        assert_eq!(record.class(), Class::IN);
        assert_eq!(record.ttl(), 104);
        match record.parse_data().unwrap() {
            Some(AllRecordData::A(a)) => {
                assert_eq!(a.addr(), Ipv4Addr::from(addr))
            }
            data => panic!("unexpected record data {:?}", data),
        }
    }
    assert!(msg.answer_at(6).is_none());
    let opt = msg.opt().unwrap().unwrap();
    assert_eq!(opt.udp_payload_size(), 1232);
    assert!(opt.opt().is_empty());
}

#[test]
fn cloudflare_soa() {
    common::init_logging();
    let msg = decode(CLOUDFLARE_SOA).unwrap();
    let record = msg.answer_at(0).unwrap();
    assert_eq!(record.owner(), "urlabuse.com.");
    assert_eq!(record.ttl(), 1800);
    match record.parse_data().unwrap() {
        Some(AllRecordData::Soa(soa)) => {
            assert_eq!(soa.mname(), "anna.ns.cloudflare.com.");
            assert_eq!(soa.rname(), "dns.cloudflare.com.");
            assert_eq!(soa.serial(), 2345427154);
            assert_eq!(soa.refresh(), 10000);
            assert_eq!(soa.retry(), 2400);
            assert_eq!(soa.expire(), 604800);
            assert_eq!(soa.minimum(), 1800);
        }
        data => panic!("unexpected record data {:?}", data),
    }
    assert!(msg.answer_at(4).is_none());
}

#[test]
fn mixed_compression() {
    common::init_logging();
    let msg = decode(
        b"\x00\x01\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
          \x07example\x03com\x00\x00\x01\x00\x01\
          \x03www\xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x3c\
          \x00\x04\x01\x02\x03\x04",
    )
    .unwrap();
    let record = msg.answer_at(0).unwrap();
    assert_eq!(record.owner(), "www.example.com.");
    assert_eq!(record.ttl(), 60);
    assert_eq!(
        record.parse_data().unwrap(),
        Some(A::from_octets(1, 2, 3, 4).into())
    );
}

#[test]
fn nsid_with_extended_error() {
    common::init_logging();
    let msg = decode(&[
        0x75, 0x10, 0x81, 0x82, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01, 0x0d, 0x64, 0x6e, 0x73, 0x73, 0x65, 0x63, 0x2d, 0x66, 0x61,
        0x69, 0x6c, 0x65, 0x64, 0x03, 0x6f, 0x72, 0x67, 0x00, 0x00, 0x01,
        0x00, 0x01, 0x00, 0x00, 0x29, 0x04, 0xd0, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x44, 0x00, 0x0f, 0x00, 0x35, 0x00, 0x09, 0x6e, 0x6f, 0x20,
        0x53, 0x45, 0x50, 0x20, 0x6d, 0x61, 0x74, 0x63, 0x68, 0x69, 0x6e,
        0x67, 0x20, 0x74, 0x68, 0x65, 0x20, 0x44, 0x53, 0x20, 0x66, 0x6f,
        0x75, 0x6e, 0x64, 0x20, 0x66, 0x6f, 0x72, 0x20, 0x64, 0x6e, 0x73,
        0x73, 0x65, 0x63, 0x2d, 0x66, 0x61, 0x69, 0x6c, 0x65, 0x64, 0x2e,
        0x6f, 0x72, 0x67, 0x2e, 0x00, 0x03, 0x00, 0x07, 0x36, 0x33, 0x36,
        0x6d, 0x32, 0x00, 0x36,
    ])
    .unwrap();
    let header = msg.header();
    assert_eq!(header.id(), 0x7510);
    assert!(header.qr());
    assert!(header.rd());
    assert!(header.ra());
    assert!(!header.aa());
    assert_eq!(header.rcode(), Rcode::SERVFAIL);
    assert_eq!(msg.question().unwrap().qname(), "dnssec-failed.org.");

    // The OPT record stays unparsed until asked for.
    assert_eq!(msg.additional_at(0).unwrap().rdlen(), Some(0x44));

    assert_eq!(msg.nsid(), Ok(b"636m2\x006".to_vec()));
    let err = msg.extended_error().unwrap().unwrap();
    assert_eq!(err.code(), ExtendedErrorCode::DNSKEY_MISSING);
    assert_eq!(
        err.text(),
        "no SEP matching the DS found for dnssec-failed.org."
    );
    assert_eq!(msg.client_cookie(), Err(Error::ClientCookieNotFound));
}

#[test]
fn border_length_name() {
    common::init_logging();
    let octets = common::long_name_query(&[63, 63, 63, 61]);
    let msg = decode(&octets).unwrap();
    // Four labels with dots plus the root make 255 octets on the wire, the
    // presentation format is one shorter.
    assert_eq!(msg.question().unwrap().qname().len(), 254);
}

#[rstest]
#[case::long_name(
    &common::long_name_query(&[63, 63, 63, 62]),
    ParseError::LongName
)]
#[case::self_loop(
    b"\xaa\xbb\x81\x80\x00\x01\x00\x00\x00\x00\x00\x00\
      \xc0\x0c\x00\x01\x00\x01",
    ParseError::IllegalCompression
)]
#[case::forward_pointer(
    b"\xaa\xbb\x81\x80\x00\x01\x00\x00\x00\x00\x00\x00\
      \xc0\x10\x00\x01\x00\x01\x00",
    ParseError::IllegalCompression
)]
// A label followed by a pointer back to that label. It is short on the
// wire but keeps repeating "a." until the name is too long.
#[case::expanding_loop(
    b"\xaa\xbb\x81\x80\x00\x01\x00\x00\x00\x00\x00\x00\
      \x01a\xc0\x0c\x00\x01\x00\x01",
    ParseError::LongName
)]
#[case::truncated_question(
    b"\x00\x01\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
      \x01a\x00\x00\x01\x00",
    ParseError::ShortInput
)]
#[case::empty(b"", ParseError::EmptyBuffer)]
#[case::short_header(b"\x00\x01\x81\x80\x00\x01", ParseError::ShortHeader)]
#[case::two_questions(
    b"\x00\x01\x01\x00\x00\x02\x00\x00\x00\x00\x00\x00\
      \x00\x00\x01\x00\x01\x00\x00\x01\x00\x01",
    ParseError::MultipleQuestions
)]
fn rejected(#[case] octets: &[u8], #[case] expected: ParseError) {
    common::init_logging();
    assert_eq!(Message::decode(octets), Err(expected));
}

#[rstest]
// Label length 64 uses the reserved 0b01 label type.
#[case::bad_label_type(
    b"\x00\x01\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
      \x40\x00\x01\x00\x01"
)]
#[case::unknown_qtype(
    b"\x00\x01\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
      \x00\xff\xf0\x00\x01"
)]
#[case::unknown_qclass(
    b"\x00\x01\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
      \x00\x00\x01\x00\x05"
)]
fn format_errors(#[case] octets: &[u8]) {
    common::init_logging();
    let err = decode(octets).unwrap_err();
    assert_eq!(err.code(), 1);
}

#[test]
fn rdata_exceeds_message() {
    common::init_logging();
    let err = decode(
        b"\x00\x01\x81\x80\x00\x00\x00\x01\x00\x00\x00\x00\
          \x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x08\x01\x02\x03\x04",
    )
    .unwrap_err();
    assert_eq!(err.code(), -15);
}

#[test]
fn records_iterate_all_sections() {
    common::init_logging();
    let msg = decode(CLOUDFLARE_SOA).unwrap();
    let sections: Vec<_> = msg.records().map(|(section, _)| section).collect();
    assert_eq!(sections, [Section::Answer, Section::Additional]);
}

#[test]
fn decoded_message_outlives_buffer_when_owned() {
    common::init_logging();
    let msg = {
        let buf = YAHOO.to_vec();
        decode(&buf).unwrap().into_owned().unwrap()
    };
    assert_eq!(msg.answer().len(), 6);
    assert_eq!(msg.answer_at(5).unwrap().rdlen(), None);
}
