//! Accessing existing DNS messages.
//!
//! This module defines the [`Message`] type, the in-memory form of a DNS
//! message. A message is either parsed from its wire format via
//! [`Message::decode`] or the [`decode`] function, or assembled step by
//! step starting from [`Message::new`], [`Message::query`], or
//! [`Message::response_to`]. The wire format is produced through the
//! methods and functions of the [message_builder] module.
//!
//! A decoded message borrows the octets it was decoded from: the record
//! data of its records stays unparsed until it is asked for. Use
//! [`Message::into_owned`] to detach a message from its octets.
//!
//! [message_builder]: super::message_builder

use alloc::string::String;
use alloc::vec::Vec;
use octseq::parse::Parser;

use super::error::Error;
use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::exterr::ExtendedErrorCode;
use super::iana::{Class, Rtype};
use super::name::name_to_wire;
use super::opt::{
    Cookie, EdnsConfig, ExtendedError, Nsid, Opt, OptOption, OptRecord,
    OptTtl,
};
use super::question::Question;
use super::record::{Envelope, Record, RecordData};
use super::wire::{Parse, ParseError};
use crate::rdata::AllRecordData;

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// The message consists of a header, at most one question, and the three
/// record sections answer, authority, and additional. The section counts
/// of the header are not stored. They are derived from the sections when
/// needed so they can never disagree with the content.
///
/// The lifetime `'a` is that of the octets a message was decoded from.
/// Messages created from scratch can use any lifetime, including
/// `'static`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message<'a> {
    header: Header,
    question: Option<Question>,
    answer: Vec<Record<'a>>,
    authority: Vec<Record<'a>>,
    additional: Vec<Record<'a>>,
}

/// # Creation and Conversion
///
impl<'a> Message<'a> {
    /// Creates a new, empty message.
    ///
    /// All header fields are zero, there is no question and no records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query with a random ID.
    ///
    /// The query asks for recursion and announces EDNS support through an
    /// OPT record without options. Fails if `qname` is not a valid domain
    /// name.
    #[cfg(feature = "rand")]
    pub fn query(
        qname: impl Into<String>,
        qtype: Rtype,
        qclass: Class,
    ) -> Result<Self, Error> {
        Self::query_with_id(::rand::random(), qname, qtype, qclass)
    }

    /// Creates a query with the given ID.
    ///
    /// This is the same as [`query`][Self::query] but with the ID provided
    /// by the caller.
    pub fn query_with_id(
        id: u16,
        qname: impl Into<String>,
        qtype: Rtype,
        qclass: Class,
    ) -> Result<Self, Error> {
        let qname = qname.into();
        name_to_wire(&qname)?;
        let mut res = Self::new();
        res.header.set_id(id);
        res.header.set_rd(true);
        res.question = Some(Question::new(qname, qtype, qclass));
        res.add_edns(None)?;
        Ok(res)
    }

    /// Creates an empty response to the given query.
    ///
    /// The ID, opcode, and the RD and CD flags are copied from the query.
    /// So is the question. The QR flag is set.
    #[must_use]
    pub fn response_to(query: &Message) -> Self {
        let mut res = Self::new();
        let header = query.header();
        res.header.set_id(header.id());
        res.header.set_qr(true);
        res.header.set_opcode(header.opcode());
        res.header.set_rd(header.rd());
        res.header.set_cd(header.cd());
        res.question = query.question.clone();
        res
    }

    /// Decodes a message from its wire format.
    ///
    /// The header and question are parsed completely. The records of the
    /// three record sections are parsed up to their record data, which is
    /// kept as a reference into `octets`.
    pub fn decode(octets: &'a [u8]) -> Result<Self, ParseError> {
        if octets.is_empty() {
            return Err(ParseError::EmptyBuffer);
        }
        if octets.len() < HeaderSection::LEN {
            tracing::debug!(len = octets.len(), "message shorter than header");
            return Err(ParseError::ShortHeader);
        }
        let mut parser = Parser::from_ref(octets);
        let section = HeaderSection::parse(&mut parser)?;
        let counts = *section.counts();
        tracing::trace!(
            id = section.header().id(),
            qdcount = counts.qdcount,
            ancount = counts.ancount,
            nscount = counts.nscount,
            arcount = counts.arcount,
            "decoding message"
        );
        let question = match counts.qdcount {
            0 => None,
            1 => Some(Question::parse(&mut parser)?),
            _ => {
                tracing::debug!(
                    qdcount = counts.qdcount,
                    "more than one question"
                );
                return Err(ParseError::MultipleQuestions);
            }
        };
        let answer = parse_section(&mut parser, Section::Answer, counts.ancount)?;
        let authority =
            parse_section(&mut parser, Section::Authority, counts.nscount)?;
        let additional =
            parse_section(&mut parser, Section::Additional, counts.arcount)?;
        Ok(Message {
            header: *section.header(),
            question,
            answer,
            authority,
            additional,
        })
    }

    /// Converts the message into one that doesn’t borrow its octets.
    ///
    /// All record data is parsed. Data of unsupported record types is kept
    /// as [`UnknownRecordData`][crate::base::rdata::UnknownRecordData].
    pub fn into_owned(self) -> Result<Message<'static>, ParseError> {
        fn convert(
            section: Vec<Record>,
        ) -> Result<Vec<Record<'static>>, ParseError> {
            section.into_iter().map(Record::into_owned).collect()
        }

        Ok(Message {
            header: self.header,
            question: self.question,
            answer: convert(self.answer)?,
            authority: convert(self.authority)?,
            additional: convert(self.additional)?,
        })
    }
}

/// # Header and Question
///
impl<'a> Message<'a> {
    /// Returns the message header.
    #[must_use]
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the section counts as they would appear in the wire format.
    ///
    /// Counts for sections with more than 65,535 entries are capped at
    /// that value. Such a message cannot be encoded.
    #[must_use]
    pub fn counts(&self) -> HeaderCounts {
        fn count<T>(items: &[T]) -> u16 {
            u16::try_from(items.len()).unwrap_or(u16::MAX)
        }

        HeaderCounts {
            qdcount: u16::from(self.question.is_some()),
            ancount: count(&self.answer),
            nscount: count(&self.authority),
            arcount: count(&self.additional),
        }
    }

    /// Returns the header section with the counts derived from the content.
    #[must_use]
    pub fn header_section(&self) -> HeaderSection {
        HeaderSection::new(self.header, self.counts())
    }

    /// Returns the question if there is one.
    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Sets or removes the question.
    pub fn set_question(&mut self, question: Option<Question>) {
        self.question = question
    }
}

/// # Record Sections
///
impl<'a> Message<'a> {
    /// Returns the records of the answer section.
    #[must_use]
    pub fn answer(&self) -> &[Record<'a>] {
        &self.answer
    }

    /// Returns the records of the authority section.
    #[must_use]
    pub fn authority(&self) -> &[Record<'a>] {
        &self.authority
    }

    /// Returns the records of the additional section.
    #[must_use]
    pub fn additional(&self) -> &[Record<'a>] {
        &self.additional
    }

    /// Returns the records of the given section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[Record<'a>] {
        match section {
            Section::Answer => &self.answer,
            Section::Authority => &self.authority,
            Section::Additional => &self.additional,
        }
    }

    /// Returns the record at position `idx` of the answer section.
    #[must_use]
    pub fn answer_at(&self, idx: usize) -> Option<&Record<'a>> {
        self.answer.get(idx)
    }

    /// Returns the record at position `idx` of the authority section.
    #[must_use]
    pub fn authority_at(&self, idx: usize) -> Option<&Record<'a>> {
        self.authority.get(idx)
    }

    /// Returns the record at position `idx` of the additional section.
    #[must_use]
    pub fn additional_at(&self, idx: usize) -> Option<&Record<'a>> {
        self.additional.get(idx)
    }

    /// Appends a record to the answer section.
    pub fn push_answer(&mut self, record: Record<'a>) {
        self.answer.push(record)
    }

    /// Appends a record to the authority section.
    pub fn push_authority(&mut self, record: Record<'a>) {
        self.authority.push(record)
    }

    /// Appends a record to the additional section.
    ///
    /// Use [`add_edns`][Self::add_edns] for adding EDNS options instead of
    /// pushing a second OPT record.
    pub fn push_additional(&mut self, record: Record<'a>) {
        self.additional.push(record)
    }

    /// Returns an iterator over the records of all three sections.
    pub fn records(&self) -> impl Iterator<Item = (Section, &Record<'a>)> {
        Section::ALL.into_iter().flat_map(move |section| {
            self.section(section).iter().map(move |record| (section, record))
        })
    }
}

/// # EDNS
///
impl<'a> Message<'a> {
    /// Returns the OPT record if there is one.
    #[must_use]
    pub fn opt_record(&self) -> Option<&Record<'a>> {
        self.additional
            .iter()
            .find(|record| record.rtype() == Rtype::OPT)
    }

    /// Returns the content of the OPT record if there is one.
    pub fn opt(&self) -> Result<Option<OptRecord>, ParseError> {
        let record = match self.opt_record() {
            Some(record) => record,
            None => return Ok(None),
        };
        let (udp_payload_size, ttl) = match *record.envelope() {
            Envelope::Opt {
                udp_payload_size,
                ttl,
            } => (udp_payload_size, ttl),
            Envelope::Standard { class, ttl } => {
                (class.to_int(), OptTtl::from_u32(ttl))
            }
        };
        match record.parse_data()? {
            Some(AllRecordData::Opt(opt)) => {
                Ok(Some(OptRecord::new(udp_payload_size, ttl, opt)))
            }
            _ => Err(ParseError::malformed("OPT record without OPT data")),
        }
    }

    /// Returns a mutable reference to the OPT record data.
    ///
    /// Unparsed data is parsed first.
    fn opt_mut(&mut self) -> Result<Option<&mut Record<'a>>, ParseError> {
        let record = match self
            .additional
            .iter_mut()
            .find(|record| record.rtype() == Rtype::OPT)
        {
            Some(record) => record,
            None => return Ok(None),
        };
        record.parse_in_place()?;
        Ok(Some(record))
    }

    /// Adds an EDNS option with the default configuration.
    ///
    /// See [`add_edns_with`][Self::add_edns_with] for the details.
    pub fn add_edns(&mut self, option: Option<OptOption>) -> Result<(), Error> {
        self.add_edns_with(EdnsConfig::default(), option)
    }

    /// Adds an EDNS option.
    ///
    /// If there is no OPT record yet, one is added to the additional
    /// section using the UDP payload size from `config`. Passing `None` as
    /// the option only makes sure there is an OPT record, announcing EDNS
    /// support to the receiver. Otherwise the option is appended to the
    /// options of the OPT record.
    pub fn add_edns_with(
        &mut self,
        config: EdnsConfig,
        option: Option<OptOption>,
    ) -> Result<(), Error> {
        match self.opt_mut()? {
            Some(record) => {
                let opt = match *record.data_mut() {
                    RecordData::Parsed(AllRecordData::Opt(ref mut opt)) => opt,
                    _ => {
                        return Err(ParseError::malformed(
                            "OPT record without OPT data",
                        )
                        .into())
                    }
                };
                if let Some(option) = option {
                    opt.push(option)
                }
            }
            None => {
                tracing::trace!(
                    udp_payload_size = config.udp_payload_size,
                    "adding OPT record"
                );
                self.additional.push(Record::new_opt(
                    config.udp_payload_size,
                    OptTtl::default(),
                    option.map(Opt::from).unwrap_or_default(),
                ))
            }
        }
        Ok(())
    }

    /// Adds a cookie option.
    ///
    /// The client cookie has to be exactly eight octets long, a server
    /// cookie, if present, between eight and 32 octets. Otherwise the
    /// method fails with [`Error::WrongInput`].
    pub fn add_cookie(
        &mut self,
        client: &[u8],
        server: Option<&[u8]>,
    ) -> Result<(), Error> {
        let cookie = Cookie::from_slices(client, server)?;
        self.add_edns(Some(cookie.into()))
    }

    /// Adds an NSID option.
    ///
    /// In a query, the option is empty, signalling that the server should
    /// include its identifier in the response. In a response, `nsid` is
    /// the server’s identifier.
    pub fn add_nsid(&mut self, nsid: &[u8]) -> Result<(), Error> {
        self.add_edns(Some(Nsid::from_slice(nsid).into()))
    }

    /// Adds an extended DNS error option.
    pub fn add_extended_error(
        &mut self,
        code: ExtendedErrorCode,
        text: &str,
    ) -> Result<(), Error> {
        self.add_edns(Some(ExtendedError::new(code, text).into()))
    }

    /// Returns the client cookie.
    ///
    /// Fails with [`Error::ClientCookieNotFound`] if there is no OPT record,
    /// no cookie option, or the cookie option is broken.
    pub fn client_cookie(&self) -> Result<[u8; 8], Error> {
        self.opt()?
            .and_then(|opt| opt.opt().cookie())
            .map(|cookie| cookie.client())
            .ok_or(Error::ClientCookieNotFound)
    }

    /// Returns the server’s identifier from the NSID option.
    ///
    /// Fails with [`Error::NsidNotFound`] if there is no OPT record, no
    /// NSID option, or the option is empty.
    pub fn nsid(&self) -> Result<Vec<u8>, Error> {
        self.opt()?
            .and_then(|opt| opt.opt().nsid())
            .filter(|nsid| !nsid.is_empty())
            .map(Nsid::into_octets)
            .ok_or(Error::NsidNotFound)
    }

    /// Returns the first extended DNS error if there is one.
    pub fn extended_error(&self) -> Result<Option<ExtendedError>, Error> {
        Ok(self.opt()?.and_then(|opt| opt.opt().extended_error()))
    }

    /// Sets or clears the DNSSEC OK bit of the OPT record.
    ///
    /// Fails with [`Error::NoOpt`] if there is no OPT record.
    pub fn set_dnssec_ok(&mut self, value: bool) -> Result<(), Error> {
        let record = match self
            .additional
            .iter_mut()
            .find(|record| record.rtype() == Rtype::OPT)
        {
            Some(record) => record,
            None => return Err(Error::NoOpt),
        };
        match *record.envelope_mut() {
            Envelope::Opt { ref mut ttl, .. } => ttl.set_dnssec_ok(value),
            Envelope::Standard { .. } => return Err(Error::NoOpt),
        }
        Ok(())
    }

    /// Removes the OPT record.
    ///
    /// Returns whether there was one.
    pub fn remove_edns(&mut self) -> bool {
        let len = self.additional.len();
        self.additional.retain(|record| record.rtype() != Rtype::OPT);
        self.additional.len() != len
    }
}

//------------ Section -------------------------------------------------------

/// The record sections of a DNS message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Section {
    Answer,
    Authority,
    Additional,
}

impl Section {
    /// All sections in the order they appear in a message.
    pub const ALL: [Section; 3] =
        [Section::Answer, Section::Authority, Section::Additional];
}

/// Parses `count` records of a section.
fn parse_section<'a>(
    parser: &mut Parser<'a, [u8]>,
    section: Section,
    count: u16,
) -> Result<Vec<Record<'a>>, ParseError> {
    let mut res = Vec::new();
    for idx in 0..count {
        match Record::parse(parser) {
            Ok(record) => res.push(record),
            Err(err) => {
                tracing::debug!(?section, idx, %err, "failed to parse record");
                return Err(err);
            }
        }
    }
    tracing::trace!(?section, count, "parsed section");
    Ok(res)
}

//------------ decode --------------------------------------------------------

/// Decodes a message from its wire format.
///
/// This is [`Message::decode`] with the error converted into the
/// crate-level [`Error`].
pub fn decode(octets: &[u8]) -> Result<Message<'_>, Error> {
    Message::decode(octets).map_err(Into::into)
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::iana::{Opcode, OptionCode, Rcode};
    use crate::base::rdata::UnknownRecordData;
    use crate::rdata::A;

    // A response for example.com A with two answers, the second one
    // compressed.
    const RESPONSE: &[u8] = b"\x12\x34\x81\x80\x00\x01\x00\x02\x00\x00\x00\x00\
        \x07example\x03com\x00\x00\x01\x00\x01\
        \xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\x5d\xb8\xd8\x22\
        \xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\x5d\xb8\xd8\x23";

    #[test]
    fn decode_response() {
        let msg = Message::decode(RESPONSE).unwrap();
        assert_eq!(msg.header().id(), 0x1234);
        assert!(msg.header().qr());
        assert!(msg.header().rd());
        assert!(msg.header().ra());
        assert_eq!(msg.header().rcode(), Rcode::NOERROR);
        assert_eq!(
            msg.question(),
            Some(&Question::new_in("example.com.", Rtype::A))
        );
        assert_eq!(msg.counts().ancount, 2);
        let record = msg.answer_at(1).unwrap();
        assert_eq!(record.owner(), "example.com.");
        assert_eq!(
            record.parse_data().unwrap(),
            Some(A::from_octets(93, 184, 216, 35).into())
        );
        assert!(msg.answer_at(2).is_none());
        assert!(msg.opt().unwrap().is_none());
    }

    #[test]
    fn decode_errors() {
        assert_eq!(Message::decode(b""), Err(ParseError::EmptyBuffer));
        assert_eq!(
            Message::decode(b"\x12\x34\x01\x00"),
            Err(ParseError::ShortHeader)
        );
        assert_eq!(
            Message::decode(b"\x12\x34\x01\x00\x00\x02\0\0\0\0\0\0"),
            Err(ParseError::MultipleQuestions)
        );
        // Claims an answer but doesn’t have one.
        assert_eq!(
            Message::decode(b"\x12\x34\x01\x00\x00\x00\x00\x01\0\0\0\0"),
            Err(ParseError::ShortInput)
        );
    }

    #[test]
    fn into_owned() {
        let msg = {
            let octets = RESPONSE.to_vec();
            Message::decode(&octets).unwrap().into_owned().unwrap()
        };
        assert_eq!(msg.answer().len(), 2);
        assert_eq!(msg.answer_at(0).unwrap().rdlen(), None);
    }

    #[test]
    fn query_with_id() {
        let msg =
            Message::query_with_id(7, "example.com", Rtype::AAAA, Class::IN)
                .unwrap();
        assert_eq!(msg.header().id(), 7);
        assert!(msg.header().rd());
        assert!(!msg.header().qr());
        assert_eq!(msg.header().opcode(), Opcode::QUERY);
        assert_eq!(msg.counts().arcount, 1);
        let opt = msg.opt().unwrap().unwrap();
        assert_eq!(opt.udp_payload_size(), 1232);
        assert!(opt.opt().is_empty());

        assert!(
            Message::query_with_id(7, "a..b", Rtype::A, Class::IN).is_err()
        );
    }

    #[test]
    fn response_to() {
        let mut query =
            Message::query_with_id(9, "example.com", Rtype::A, Class::IN)
                .unwrap();
        query.header_mut().set_cd(true);
        let response = Message::response_to(&query);
        assert_eq!(response.header().id(), 9);
        assert!(response.header().qr());
        assert!(response.header().rd());
        assert!(response.header().cd());
        assert_eq!(response.question(), query.question());
        assert!(response.additional().is_empty());
    }

    #[test]
    fn add_edns_merges() {
        let mut msg = Message::new();
        msg.add_edns(None).unwrap();
        msg.add_edns(None).unwrap();
        assert_eq!(msg.additional().len(), 1);
        assert!(msg.opt().unwrap().unwrap().opt().is_empty());

        msg.add_nsid(b"").unwrap();
        msg.add_cookie(b"\x01\x02\x03\x04\x05\x06\x07\x08", None)
            .unwrap();
        assert_eq!(msg.additional().len(), 1);
        let opt = msg.opt().unwrap().unwrap();
        assert_eq!(opt.opt().options().len(), 2);
        assert_eq!(opt.opt().options()[0].code(), OptionCode::NSID);
        assert_eq!(opt.opt().options()[1].code(), OptionCode::COOKIE);
        assert_eq!(opt.opt().rdlen(), 16);
    }

    #[test]
    fn add_edns_rejects_opt_without_opt_data() {
        let mut msg = Message::new();
        msg.push_additional(Record::new(
            ".",
            Class::IN,
            0,
            UnknownRecordData::from_octets(Rtype::OPT, vec![0, 3, 0, 0]),
        ));
        assert!(matches!(
            msg.add_nsid(b"abc"),
            Err(Error::Parse(ParseError::Malformed(_)))
        ));
        assert!(matches!(
            msg.add_edns(None),
            Err(Error::Parse(ParseError::Malformed(_)))
        ));
        assert_eq!(msg.additional().len(), 1);
    }

    #[test]
    fn add_edns_with_config() {
        let mut msg = Message::new();
        msg.add_edns_with(
            EdnsConfig {
                udp_payload_size: 4096,
            },
            Some(Nsid::empty().into()),
        )
        .unwrap();
        let opt = msg.opt().unwrap().unwrap();
        assert_eq!(opt.udp_payload_size(), 4096);
        assert_eq!(opt.opt().options().len(), 1);
    }

    #[test]
    fn cookie_accessors() {
        let mut msg = Message::new();
        assert_eq!(msg.client_cookie(), Err(Error::ClientCookieNotFound));
        assert!(matches!(
            msg.add_cookie(b"short", None),
            Err(Error::WrongInput(_))
        ));
        assert!(msg.additional().is_empty());
        msg.add_cookie(b"\x01\x02\x03\x04\x05\x06\x07\x08", Some(&[9u8; 8][..]))
            .unwrap();
        assert_eq!(
            msg.client_cookie(),
            Ok(*b"\x01\x02\x03\x04\x05\x06\x07\x08")
        );
    }

    #[test]
    fn nsid_accessors() {
        let mut msg = Message::new();
        assert_eq!(msg.nsid(), Err(Error::NsidNotFound));
        msg.add_nsid(b"").unwrap();
        assert_eq!(msg.nsid(), Err(Error::NsidNotFound));

        let mut msg = Message::new();
        msg.add_nsid(b"472m118").unwrap();
        assert_eq!(msg.nsid(), Ok(b"472m118".to_vec()));
    }

    #[test]
    fn extended_error() {
        let mut msg = Message::new();
        assert_eq!(msg.extended_error(), Ok(None));
        msg.add_extended_error(ExtendedErrorCode::BLOCKED, "no")
            .unwrap();
        let err = msg.extended_error().unwrap().unwrap();
        assert_eq!(err.code(), ExtendedErrorCode::BLOCKED);
        assert_eq!(err.text(), "no");
    }

    #[test]
    fn dnssec_ok() {
        let mut msg = Message::new();
        assert_eq!(msg.set_dnssec_ok(true), Err(Error::NoOpt));
        msg.add_edns(None).unwrap();
        msg.set_dnssec_ok(true).unwrap();
        assert!(msg.opt().unwrap().unwrap().ttl().dnssec_ok());
        msg.set_dnssec_ok(false).unwrap();
        assert!(!msg.opt().unwrap().unwrap().ttl().dnssec_ok());
        assert!(msg.remove_edns());
        assert!(!msg.remove_edns());
        assert_eq!(msg.set_dnssec_ok(true), Err(Error::NoOpt));
    }

    #[test]
    fn records_iter() {
        let mut msg = Message::new();
        msg.push_answer(Record::new("a.", Class::IN, 1, A::from_octets(1, 1, 1, 1)));
        msg.push_additional(Record::new("b.", Class::IN, 1, A::from_octets(2, 2, 2, 2)));
        let sections: Vec<_> =
            msg.records().map(|(section, _)| section).collect();
        assert_eq!(sections, [Section::Answer, Section::Additional]);
    }
}
