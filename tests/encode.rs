//! Encoding messages and reading them back.

mod common;

use domain_wire::base::iana::{Class, Rtype};
use domain_wire::base::{CharStr, ComposeError, Question, Record};
use domain_wire::rdata::{
    AllRecordData, Caa, Cname, Hinfo, Lp, Mx, Soa, Srv, Txt, A,
};
use domain_wire::{decode, encode, Error, Message};

// The query for urlabuse.com A with a client cookie.
const COOKIE_QUERY: &[u8] = &[
    0xb0, 0xf2, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x75, 0x72, 0x6c, 0x61, 0x62, 0x75, 0x73, 0x65, 0x03, 0x63, 0x6f,
    0x6d, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x29, 0x04, 0xd0, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x0a, 0x00, 0x08, 0xaa, 0xbb, 0xcc,
    0xdd, 0xee, 0xff, 0x00, 0x11,
];

const CLIENT_COOKIE: [u8; 8] = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x00, 0x11];

#[test]
fn cookie_query() {
    common::init_logging();
    let mut query =
        Message::query_with_id(0xb0f2, "urlabuse.com", Rtype::A, Class::IN)
            .unwrap();
    query.add_cookie(&CLIENT_COOKIE, None).unwrap();
    let wire = encode(&query).unwrap();
    assert_eq!(wire.len(), 53);
    assert_eq!(wire, COOKIE_QUERY);

    let decoded = decode(&wire).unwrap();
    assert_eq!(decoded.client_cookie(), Ok(CLIENT_COOKIE));
}

#[test]
fn cookie_added_to_decoded_message() {
    common::init_logging();
    // The query without the cookie option.
    let mut plain = COOKIE_QUERY[..41].to_vec();
    plain[39..41].copy_from_slice(b"\x00\x00");
    let mut msg = decode(&plain).unwrap();
    msg.add_cookie(&CLIENT_COOKIE, None).unwrap();
    assert_eq!(msg.additional().len(), 1);
    assert_eq!(encode(&msg).unwrap(), COOKIE_QUERY);
}

#[cfg(feature = "rand")]
#[test]
fn random_query() {
    common::init_logging();
    let query = Message::query("google.com", Rtype::TXT, Class::IN).unwrap();
    assert!(query.header().rd());
    assert_eq!(
        query.question(),
        Some(&Question::new("google.com", Rtype::TXT, Class::IN))
    );
    let decoded = decode(&encode(&query).unwrap()).unwrap().into_owned().unwrap();
    assert_eq!(decoded.header(), query.header());
    assert!(decoded.opt().unwrap().is_some());
}

#[test]
fn round_trip_all_types() {
    common::init_logging();
    let mut msg =
        Message::query_with_id(7, "example.com.", Rtype::ANY, Class::IN)
            .unwrap();
    msg.header_mut().set_qr(true);
    msg.header_mut().set_aa(true);
    let answers: Vec<AllRecordData> = vec![
        A::from_octets(192, 0, 2, 1).into(),
        Cname::new("www.example.com.").into(),
        Mx::new(10, "mail.example.com.").into(),
        Soa::new(
            "ns.example.com.",
            "hostmaster.example.com.",
            1,
            7200,
            3600,
            1209600,
            300,
        )
        .into(),
        Txt::build_from_slice(b"v=spf1 -all").into(),
        Hinfo::new(
            CharStr::from_slice(b"PDP-11").unwrap(),
            CharStr::from_slice(b"UNIX").unwrap(),
        )
        .into(),
        Srv::new(1, 2, 53, "ns.example.com.").into(),
        Lp::new(10, "l64-subnet1.example.com.").into(),
        Caa::from_slices(0, b"issue", b"ca.example.net").unwrap().into(),
    ];
    for data in &answers {
        msg.push_answer(Record::new("example.com.", Class::IN, 3600, data.clone()));
    }

    let wire = encode(&msg).unwrap();
    let decoded = decode(&wire).unwrap();
    assert_eq!(decoded.header(), msg.header());
    assert_eq!(decoded.question(), msg.question());
    assert_eq!(decoded.answer().len(), answers.len());
    for (record, data) in decoded.answer().iter().zip(&answers) {
        assert_eq!(record.owner(), "example.com.");
        assert_eq!(record.ttl(), 3600);
        assert_eq!(record.parse_data().unwrap().as_ref(), Some(data));
    }
}

#[test]
fn caa_answer() {
    common::init_logging();
    let mut msg =
        Message::query_with_id(1, "fakedomain.fake", Rtype::CAA, Class::IN)
            .unwrap();
    msg.push_answer(Record::new(
        "fakedomain.fake",
        Class::IN,
        3600,
        Caa::from_slices(1, b"issuewild", b"google.com").unwrap(),
    ));
    let wire = encode(&msg).unwrap();
    let decoded = decode(&wire).unwrap();
    match decoded.answer_at(0).unwrap().parse_data().unwrap() {
        Some(AllRecordData::Caa(caa)) => {
            assert_eq!(caa.flags(), 1);
            assert_eq!(caa.tag().as_slice(), b"issuewild");
            assert_eq!(caa.value(), b"google.com");
        }
        data => panic!("unexpected record data {:?}", data),
    }
}

#[test]
fn response_to_query() {
    common::init_logging();
    let query =
        Message::query_with_id(0x4242, "example.com", Rtype::A, Class::IN)
            .unwrap();
    let mut response = Message::response_to(&query);
    response.push_answer(Record::new(
        "example.com",
        Class::IN,
        60,
        A::from_octets(192, 0, 2, 1),
    ));
    let wire = encode(&response).unwrap();
    assert_eq!(
        wire,
        b"\x42\x42\x81\x00\x00\x01\x00\x01\x00\x00\x00\x00\
          \x07example\x03com\x00\x00\x01\x00\x01\
          \xc0\x0c\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\xc0\x00\x02\x01"
    );
}

#[test]
fn bad_names_are_rejected() {
    common::init_logging();
    let long_label = "a".repeat(64);
    assert_eq!(
        Message::query_with_id(1, long_label.as_str(), Rtype::A, Class::IN),
        Err(Error::Compose(ComposeError::LongLabel))
    );

    let long_name = vec!["a".repeat(63); 5].join(".");
    assert_eq!(
        Message::query_with_id(1, long_name.as_str(), Rtype::A, Class::IN),
        Err(Error::Compose(ComposeError::LongName))
    );

    let mut msg = Message::new();
    msg.push_answer(Record::new(
        long_name.as_str(),
        Class::IN,
        0,
        A::from_octets(1, 2, 3, 4),
    ));
    assert_eq!(encode(&msg), Err(Error::Compose(ComposeError::LongName)));
}

#[test]
fn unparsed_records_copy_verbatim() {
    common::init_logging();
    let wire = b"\x00\x01\x81\x80\x00\x00\x00\x01\x00\x00\x00\x00\
                 \x00\x00\x0a\x00\x01\x00\x00\x00\x3c\x00\x03abc";
    let msg = decode(wire).unwrap();
    assert_eq!(encode(&msg).unwrap(), wire);

    // Once detached from its message, an unsupported type can’t be encoded.
    let owned = msg.into_owned().unwrap();
    assert_eq!(
        encode(&owned),
        Err(Error::Compose(ComposeError::NotImplemented(Rtype::NULL)))
    );
}
