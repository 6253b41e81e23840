//! Building a new DNS message.
//!
//! The [`MessageBuilder`] writes a message consecutively into an octets
//! builder implementing [`Composer`]. It starts out with the header section
//! with all counts set to zero, takes the question and the records of the
//! three record sections in order, and fills in the counts when finished.
//!
//! Domain names are compressed against everything already written to the
//! target, so records that are pushed later can refer to names of the
//! question or of earlier records.
//!
//! Most of the time, there is no need to use the builder directly. A
//! complete [`Message`] can be composed via [`Message::compose`] or the
//! [`encode`] function.

use alloc::vec::Vec;

use super::error::Error;
use super::header::{Header, HeaderCounts, HeaderSection};
use super::message::{Message, Section};
use super::question::Question;
use super::record::Record;
use super::wire::{Compose, ComposeError, Composer, VecTarget};

//------------ MessageBuilder ------------------------------------------------

/// Builds a message into an octets builder.
///
/// Sections must be built in order: question first, then answer,
/// authority, and additional records. The builder doesn’t enforce this.
/// Pushing records out of order produces a message with wrong counts.
#[derive(Clone, Debug)]
pub struct MessageBuilder<Target> {
    target: Target,
    counts: HeaderCounts,
}

impl<Target: Composer> MessageBuilder<Target> {
    /// Starts a new message in the given target.
    ///
    /// The target is cleared and the header section is written with all
    /// counts set to zero.
    pub fn new(mut target: Target, header: Header) -> Result<Self, ComposeError> {
        target.truncate(0);
        HeaderSection::new(header, HeaderCounts::new()).compose(&mut target)?;
        Ok(MessageBuilder {
            target,
            counts: HeaderCounts::new(),
        })
    }

    /// Returns the section counts of everything pushed so far.
    #[must_use]
    pub fn counts(&self) -> HeaderCounts {
        self.counts
    }

    /// Returns the octets of the message built so far.
    ///
    /// The counts in the header section are only updated by
    /// [`finish`][Self::finish].
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.target.as_ref()
    }

    /// Appends a question.
    ///
    /// If composing fails, the target is left as it was before the call.
    pub fn push_question(
        &mut self,
        question: &Question,
    ) -> Result<(), ComposeError> {
        let count = increment(self.counts.qdcount)?;
        self.push(|target| question.compose(target))?;
        self.counts.qdcount = count;
        Ok(())
    }

    /// Appends a record to the given section.
    ///
    /// If composing fails, the target is left as it was before the call.
    pub fn push_record(
        &mut self,
        section: Section,
        record: &Record,
    ) -> Result<(), ComposeError> {
        let count = increment(match section {
            Section::Answer => self.counts.ancount,
            Section::Authority => self.counts.nscount,
            Section::Additional => self.counts.arcount,
        })?;
        if let Err(err) = self.push(|target| record.compose(target)) {
            tracing::debug!(
                ?section,
                owner = record.owner(),
                rtype = %record.rtype(),
                %err,
                "failed to compose record"
            );
            return Err(err);
        }
        match section {
            Section::Answer => self.counts.ancount = count,
            Section::Authority => self.counts.nscount = count,
            Section::Additional => self.counts.arcount = count,
        }
        Ok(())
    }

    /// Runs `op` on the target, truncating the target if it fails.
    fn push(
        &mut self,
        op: impl FnOnce(&mut Target) -> Result<(), ComposeError>,
    ) -> Result<(), ComposeError> {
        let pos = self.target.as_ref().len();
        if let Err(err) = op(&mut self.target) {
            self.target.truncate(pos);
            return Err(err);
        }
        Ok(())
    }

    /// Completes the message and returns the target.
    pub fn finish(mut self) -> Target {
        let counts = [
            self.counts.qdcount,
            self.counts.ancount,
            self.counts.nscount,
            self.counts.arcount,
        ];
        for (idx, count) in counts.into_iter().enumerate() {
            let pos = 4 + 2 * idx;
            self.target.as_mut()[pos..pos + 2]
                .copy_from_slice(&count.to_be_bytes());
        }
        self.target
    }
}

/// Returns a section count increased by one.
fn increment(count: u16) -> Result<u16, ComposeError> {
    count.checked_add(1).ok_or(ComposeError::LongData)
}

//------------ Message::compose ----------------------------------------------

impl<'a> Message<'a> {
    /// Composes the wire format of the message into the target.
    ///
    /// The target is cleared first. Records with unparsed data are copied
    /// verbatim, all names are compressed where the record type allows it.
    pub fn compose<Target: Composer>(
        &self,
        target: Target,
    ) -> Result<Target, ComposeError> {
        let mut builder = MessageBuilder::new(target, self.header())?;
        if let Some(question) = self.question() {
            builder.push_question(question)?;
        }
        for (section, record) in self.records() {
            builder.push_record(section, record)?;
        }
        let target = builder.finish();
        tracing::trace!(len = target.as_ref().len(), "composed message");
        Ok(target)
    }
}

//------------ encode --------------------------------------------------------

/// Encodes a message into a new vector.
pub fn encode(message: &Message) -> Result<Vec<u8>, Error> {
    Ok(message.compose(VecTarget::new())?.into_vec())
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::rdata::{Mx, A};
    use octseq::array::Array;

    #[test]
    fn build_query() {
        let mut header = Header::new();
        header.set_id(0xbeef);
        header.set_rd(true);
        let mut builder = MessageBuilder::new(Vec::new(), header).unwrap();
        builder
            .push_question(&Question::new_in("example.com", Rtype::A))
            .unwrap();
        assert_eq!(builder.counts().qdcount, 1);
        assert_eq!(
            builder.finish(),
            b"\xbe\xef\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
              \x07example\x03com\x00\x00\x01\x00\x01"
        );
    }

    #[test]
    fn new_clears_target() {
        let builder =
            MessageBuilder::new(b"garbage".to_vec(), Header::new()).unwrap();
        assert_eq!(builder.as_slice(), &[0u8; 12][..]);
    }

    #[test]
    fn failed_record_truncates() {
        let mut builder =
            MessageBuilder::new(Array::<40>::new(), Header::new()).unwrap();
        builder
            .push_record(
                Section::Answer,
                &Record::new("a.", Class::IN, 0, A::from_octets(1, 2, 3, 4)),
            )
            .unwrap();
        let len = builder.as_slice().len();
        assert_eq!(
            builder.push_record(
                Section::Answer,
                &Record::new(
                    "averyveryverylongname.",
                    Class::IN,
                    0,
                    Mx::new(10, "a.")
                ),
            ),
            Err(ComposeError::ShortBuf)
        );
        assert_eq!(builder.as_slice().len(), len);
        assert_eq!(builder.counts().ancount, 1);
        let target = builder.finish();
        assert_eq!(&target.as_ref()[6..8], b"\x00\x01");
    }

    #[test]
    fn count_overflow() {
        assert_eq!(increment(u16::MAX), Err(ComposeError::LongData));
        assert_eq!(increment(7), Ok(8));
    }

    #[test]
    fn compose_message() {
        let mut msg =
            Message::query_with_id(1, "example.com.", Rtype::MX, Class::IN)
                .unwrap();
        msg.remove_edns();
        msg.header_mut().set_qr(true);
        msg.push_answer(Record::new(
            "example.com.",
            Class::IN,
            300,
            Mx::new(10, "mail.example.com."),
        ));
        let wire = encode(&msg).unwrap();
        assert_eq!(
            wire,
            b"\x00\x01\x81\x00\x00\x01\x00\x01\x00\x00\x00\x00\
              \x07example\x03com\x00\x00\x0f\x00\x01\
              \xc0\x0c\x00\x0f\x00\x01\x00\x00\x01\x2c\x00\x09\
              \x00\x0a\x04mail\xc0\x0c"
        );
        assert_eq!(
            msg.compose(VecTarget::new()).unwrap().into_vec(),
            msg.compose(Vec::new()).unwrap()
        );
        let decoded = Message::decode(&wire).unwrap();
        assert_eq!(decoded.question(), msg.question());
        assert_eq!(
            decoded.answer_at(0).unwrap().parse_data().unwrap(),
            Some(Mx::new(10, "mail.example.com.").into())
        );
    }
}
