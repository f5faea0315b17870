//! Scanning over the entries of a DNS message.
//!
//! The [`Scanner`] is a cursor over the questions and resource records of a
//! message in wire format. See its documentation for how to use it.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::{Class, Rtype};
use super::name::{decompress, Dname, NameBuf};
use super::rdata::{Field, RdataDecoder, RecordData};
use super::wire::ParseError;
use octseq::parse::Parser;
use tracing::{debug, trace};

//------------ Section -------------------------------------------------------

/// The section of a message an entry belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Section {
    /// The question section.
    Question,

    /// The answer section.
    Answer,

    /// The authority section.
    Authority,

    /// The additional section.
    Additional,
}

//------------ Scanner -------------------------------------------------------

/// A cursor over the entries of a DNS message.
///
/// A scanner is created from the complete octets of a message via
/// [`new`][Self::new]. It starts out positioned before the first entry of
/// the message. Each call to [`advance`][Self::advance] moves it to the next
/// entry, be it a question or a resource record, until all entries announced
/// in the header have been visited. Most of the time, though, callers aren’t
/// interested in the questions, so there are [`next_answer`][Self::next_answer]
/// and [`next_record`][Self::next_record] which skip over the questions
/// first.
///
/// When positioned on an entry, the scanner provides access to its owner
/// name via [`name`][Self::name] and to the fixed fields following the name
/// via [`rtype`][Self::rtype], [`class`][Self::class], [`ttl`][Self::ttl],
/// and [`rdlen`][Self::rdlen]. The record data can be accessed raw via
/// [`rdata`][Self::rdata] or decoded via [`decode`][Self::decode],
/// [`decode_rdata`][Self::decode_rdata], and
/// [`parse_rdata`][Self::parse_rdata].
///
/// The owner name is decompressed into a buffer owned by the scanner. The
/// name returned by [`name`][Self::name] borrows from the scanner and thus
/// can’t be kept around once the scanner moves on. Use
/// [`Dname::to_name_buf`] if you need to.
///
/// Once the scanner encounters broken data, it stops and remembers the
/// error. All further attempts to move on will fail. Check
/// [`err`][Self::err] after iteration ended to learn whether the message was
/// consumed completely.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    /// The complete message.
    msg: &'a [u8],

    /// The header section of the message.
    section: HeaderSection,

    /// The number of entries visited so far, including the current one.
    seen: usize,

    /// The current entry if the scanner is positioned on one.
    entry: Option<Entry>,

    /// The position right after the current entry.
    ///
    /// This is where the next entry starts.
    end: usize,

    /// The decompressed owner name of the current entry.
    name: NameBuf,

    /// The error that stopped the scanner.
    err: Option<ParseError>,
}

/// The positions of the current entry.
#[derive(Clone, Copy, Debug)]
struct Entry {
    /// The start of the owner name.
    start: usize,

    /// The start of the fixed fields after the owner name.
    fixed: usize,

    /// Whether the entry is a question.
    question: bool,
}

/// # Creation and Header Access
///
impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given message.
    ///
    /// Fails if the message is too short to contain a header.
    pub fn new(msg: &'a [u8]) -> Result<Self, ParseError> {
        let section = HeaderSection::from_message_slice(msg)?;
        Ok(Scanner {
            msg,
            section,
            seen: 0,
            entry: None,
            end: HeaderSection::LEN,
            name: NameBuf::new(),
            err: None,
        })
    }

    /// Returns the complete message.
    pub fn as_slice(&self) -> &'a [u8] {
        self.msg
    }

    /// Returns the header of the message.
    pub fn header(&self) -> Header {
        self.section.header()
    }

    /// Returns the section counts of the message.
    pub fn counts(&self) -> HeaderCounts {
        self.section.counts()
    }

    /// Returns the message ID.
    pub fn id(&self) -> u16 {
        self.header().id()
    }
}

/// # Iteration
///
impl<'a> Scanner<'a> {
    /// Moves the scanner to the next entry.
    ///
    /// Returns whether there was a next entry. If there wasn’t, either all
    /// entries have been visited or the message is broken. In the latter
    /// case, [`err`][Self::err] returns the error.
    pub fn advance(&mut self) -> bool {
        if self.err.is_some() || self.seen >= self.counts().total() {
            return false;
        }
        match self.step() {
            Ok(()) => true,
            Err(err) => {
                debug!(pos = self.end, entry = self.seen, "{}", err);
                self.entry = None;
                self.err = Some(err);
                false
            }
        }
    }

    /// Moves past all questions if they haven’t been visited yet.
    pub fn skip_questions(&mut self) {
        let qdcount = usize::from(self.counts().qdcount());
        while self.seen < qdcount && self.advance() {}
    }

    /// Moves to the next record of the answer section.
    ///
    /// Skips over any remaining questions first. Returns `false` once all
    /// answers have been visited or if the message is broken.
    pub fn next_answer(&mut self) -> bool {
        self.skip_questions();
        let counts = self.counts();
        let answers_end =
            usize::from(counts.qdcount()) + usize::from(counts.ancount());
        if self.err.is_some() || self.seen >= answers_end {
            return false;
        }
        self.advance()
    }

    /// Moves to the next resource record of any section.
    ///
    /// Skips over any remaining questions first.
    pub fn next_record(&mut self) -> bool {
        self.skip_questions();
        self.advance()
    }

    /// Returns the position right after the current entry.
    ///
    /// Before the first entry, this is the position right after the header.
    /// Once all entries have been visited, the position equals the length
    /// of the message unless there is trailing data.
    pub fn pos(&self) -> usize {
        self.end
    }

    /// Returns the error that stopped the scanner if there was one.
    pub fn err(&self) -> Option<ParseError> {
        self.err
    }

    /// Steps onto the entry starting at the end of the current one.
    fn step(&mut self) -> Result<(), ParseError> {
        let start = self.end;
        let name_len = decompress(self.msg, start, &mut self.name)?;
        let fixed = start + name_len;
        let question = self.seen < usize::from(self.counts().qdcount());

        let mut parser = Parser::from_ref(self.msg);
        parser.seek(fixed)?;
        if question {
            parser.advance(4)?;
        } else {
            parser.advance(8)?;
            let rdlen = parser.parse_u16_be()?;
            parser.advance(usize::from(rdlen))?;
        }

        self.seen += 1;
        self.entry = Some(Entry {
            start,
            fixed,
            question,
        });
        self.end = parser.pos();
        trace!(
            pos = start,
            entry = self.seen,
            name = %Dname::from_octets_unchecked(self.name.as_slice()),
            "stepped onto entry"
        );
        Ok(())
    }
}

/// # Access to the Current Entry
///
impl<'a> Scanner<'a> {
    /// Returns the section of the current entry.
    ///
    /// Returns `None` if the scanner isn’t positioned on an entry.
    pub fn section(&self) -> Option<Section> {
        self.entry?;
        let counts = self.counts();
        let mut idx = self.seen - 1;
        for (count, section) in [
            (counts.qdcount(), Section::Question),
            (counts.ancount(), Section::Answer),
            (counts.nscount(), Section::Authority),
        ] {
            let count = usize::from(count);
            if idx < count {
                return Some(section);
            }
            idx -= count;
        }
        Some(Section::Additional)
    }

    /// Returns the position of the start of the current entry.
    pub fn entry_pos(&self) -> Option<usize> {
        self.entry.map(|entry| entry.start)
    }

    /// Returns the owner name of the current entry.
    ///
    /// If the scanner isn’t positioned on an entry, returns the root name.
    pub fn name(&self) -> Dname<&[u8]> {
        if self.entry.is_none() {
            return Dname::root();
        }
        Dname::from_octets_unchecked(self.name.as_slice())
    }

    /// Returns the type of the current entry.
    ///
    /// For questions this is the query type.
    pub fn rtype(&self) -> Rtype {
        self.fixed_u16(0).into()
    }

    /// Returns the class of the current entry.
    pub fn class(&self) -> Class {
        self.fixed_u16(2).into()
    }

    /// Returns the TTL of the current record.
    ///
    /// Returns zero for questions.
    pub fn ttl(&self) -> u32 {
        self.record_fixed()
            .and_then(|fixed| {
                let mut parser = Parser::from_ref(self.msg);
                parser.seek(fixed + 4).ok()?;
                parser.parse_u32_be().ok()
            })
            .unwrap_or(0)
    }

    /// Returns the length of the record data of the current record.
    ///
    /// Returns zero for questions.
    pub fn rdlen(&self) -> u16 {
        match self.record_fixed() {
            Some(_) => self.fixed_u16(8),
            None => 0,
        }
    }

    /// Returns the record data of the current record.
    ///
    /// Returns an empty slice for questions.
    pub fn rdata(&self) -> &'a [u8] {
        match self.record_fixed() {
            Some(fixed) => self.msg.get(fixed + 10..self.end).unwrap_or(&[]),
            None => &[],
        }
    }

    /// Returns a decoder for the record data of the current record.
    ///
    /// For questions, the decoder covers an empty window.
    pub fn rdata_decoder(&self) -> RdataDecoder<'a> {
        let start = self.record_fixed().map(|fixed| fixed + 10);
        let start = start.unwrap_or(self.end);
        RdataDecoder::new(self.msg, start, self.end).unwrap_or_else(|_| {
            // Both positions have been checked when stepping onto the entry.
            unreachable!("record data outside of message")
        })
    }

    /// Decodes the record data of the current record into `fields`.
    ///
    /// The fields are decoded in order and the record data must be
    /// consumed exactly. Failing to decode stops the scanner.
    ///
    /// If the scanner isn’t positioned on a resource record, returns an
    /// error without stopping the scanner.
    pub fn decode(&mut self, fields: &mut [Field]) -> Result<(), ParseError> {
        self.with_decoder(|decoder| decoder.decode(fields))
    }

    /// Decodes the record data of the current record as type `D`.
    ///
    /// This doesn’t check that the record is of the record type of `D`.
    /// Failing to decode stops the scanner. As with [`decode`][Self::decode],
    /// calling this method while not on a resource record is an error that
    /// leaves the scanner alone.
    pub fn decode_rdata<D: RecordData>(&mut self) -> Result<D, ParseError> {
        self.with_decoder(|decoder| {
            let data = D::decode(decoder)?;
            decoder.finish()?;
            Ok(data)
        })
    }

    /// Decodes the record data if the current record is of type `D`.
    ///
    /// Returns `Ok(None)` if the record type is a different one or the
    /// scanner isn’t positioned on a record.
    pub fn parse_rdata<D: RecordData>(
        &mut self,
    ) -> Result<Option<D>, ParseError> {
        if self.record_fixed().is_none() || self.rtype() != D::RTYPE {
            return Ok(None);
        }
        self.decode_rdata().map(Some)
    }

    /// Runs `op` on a decoder for the current record data.
    ///
    /// Any error produced by `op` is kept as the scanner’s error.
    fn with_decoder<T, F>(&mut self, op: F) -> Result<T, ParseError>
    where
        F: FnOnce(&mut RdataDecoder<'a>) -> Result<T, ParseError>,
    {
        if let Some(err) = self.err {
            return Err(err);
        }
        if self.record_fixed().is_none() {
            return Err(ParseError::rdata_error("not positioned on a record"));
        }
        let mut decoder = self.rdata_decoder();
        op(&mut decoder).map_err(|err| {
            debug!(pos = self.end, entry = self.seen, "{}", err);
            self.err = Some(err);
            err
        })
    }

    /// Returns the position of the fixed fields if on a resource record.
    fn record_fixed(&self) -> Option<usize> {
        match self.entry {
            Some(entry) if !entry.question => Some(entry.fixed),
            _ => None,
        }
    }

    /// Returns the 16 bit integer at `offset` into the fixed fields.
    ///
    /// Returns zero if not positioned on an entry.
    fn fixed_u16(&self, offset: usize) -> u16 {
        self.entry
            .and_then(|entry| {
                let mut parser = Parser::from_ref(self.msg);
                parser.seek(entry.fixed + offset).ok()?;
                parser.parse_u16_be().ok()
            })
            .unwrap_or(0)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Class;
    use crate::base::name::NameError;

    // One question for example.com/A, one answer with an A record, one
    // authority record with an NS record, and one OPT record.
    static MSG: &[u8] = b"\x12\x34\x81\x80\x00\x01\x00\x01\x00\x01\x00\x01\
        \x07example\x03com\x00\x00\x01\x00\x01\
        \xc0\x0c\x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\xc0\x00\x02\x01\
        \xc0\x0c\x00\x02\x00\x01\x00\x01\x51\x80\x00\x06\x03ns1\xc0\x0c\
        \x00\x00\x29\x10\x00\x00\x00\x00\x00\x00\x00";

    #[test]
    fn short_message() {
        assert_eq!(
            Scanner::new(b"\x12\x34\x81\x80\x00\x01").err(),
            Some(ParseError::ShortInput)
        );
    }

    #[test]
    fn advance_all() {
        let mut scanner = Scanner::new(MSG).unwrap();
        assert_eq!(scanner.id(), 0x1234);
        assert_eq!(scanner.section(), None);
        assert_eq!(scanner.pos(), 12);

        assert!(scanner.advance());
        assert_eq!(scanner.section(), Some(Section::Question));
        assert_eq!(scanner.entry_pos(), Some(12));
        assert_eq!(scanner.name().as_slice(), b"\x07example\x03com\x00");
        assert_eq!(scanner.rtype(), Rtype::A);
        assert_eq!(scanner.class(), Class::IN);
        assert_eq!(scanner.ttl(), 0);
        assert_eq!(scanner.rdlen(), 0);
        assert_eq!(scanner.rdata(), b"");

        assert!(scanner.advance());
        assert_eq!(scanner.section(), Some(Section::Answer));
        assert_eq!(scanner.name().as_slice(), b"\x07example\x03com\x00");
        assert_eq!(scanner.ttl(), 3600);
        assert_eq!(scanner.rdlen(), 4);
        assert_eq!(scanner.rdata(), b"\xc0\x00\x02\x01");

        assert!(scanner.advance());
        assert_eq!(scanner.section(), Some(Section::Authority));
        assert_eq!(scanner.rtype(), Rtype::NS);
        assert_eq!(scanner.ttl(), 86400);

        assert!(scanner.advance());
        assert_eq!(scanner.section(), Some(Section::Additional));
        assert!(scanner.name().is_root());
        assert_eq!(scanner.rtype(), Rtype::OPT);
        assert_eq!(scanner.class(), Class::from_int(4096));

        assert!(!scanner.advance());
        assert_eq!(scanner.pos(), MSG.len());
        assert_eq!(scanner.err(), None);
    }

    #[test]
    fn next_answer() {
        let mut scanner = Scanner::new(MSG).unwrap();
        assert!(scanner.next_answer());
        assert_eq!(scanner.section(), Some(Section::Answer));
        assert!(!scanner.next_answer());
        assert_eq!(scanner.err(), None);
    }

    #[test]
    fn next_record() {
        let mut scanner = Scanner::new(MSG).unwrap();
        let mut sections = [None; 3];
        for item in sections.iter_mut() {
            assert!(scanner.next_record());
            *item = scanner.section();
        }
        assert_eq!(
            sections,
            [
                Some(Section::Answer),
                Some(Section::Authority),
                Some(Section::Additional)
            ]
        );
        assert!(!scanner.next_record());
    }

    #[test]
    fn decode_fields() {
        let mut scanner = Scanner::new(MSG).unwrap();
        scanner.next_answer();
        scanner.next_record();
        let mut name = NameBuf::new();
        scanner.decode(&mut [Field::Name(&mut name)]).unwrap();
        assert_eq!(name.as_slice(), b"\x03ns1\x07example\x03com\x00");
    }

    #[test]
    fn decode_failure_is_sticky() {
        let mut scanner = Scanner::new(MSG).unwrap();
        assert!(scanner.next_answer());
        let mut val = 0u16;
        assert!(matches!(
            scanner.decode(&mut [Field::U16(&mut val)]),
            Err(ParseError::Rdata(_))
        ));
        assert!(matches!(scanner.err(), Some(ParseError::Rdata(_))));
        assert!(!scanner.next_record());
    }

    #[test]
    fn truncated_record() {
        // Cut into the record data of the answer.
        let mut scanner = Scanner::new(&MSG[..43]).unwrap();
        assert!(!scanner.next_answer());
        assert_eq!(scanner.err(), Some(ParseError::ShortInput));
        assert_eq!(scanner.section(), None);
        assert!(scanner.name().is_root());
        assert_eq!(scanner.rtype(), Rtype::from_int(0));
    }

    #[test]
    fn missing_entries() {
        // The header promises more entries than there are.
        let mut msg = [0u8; 12];
        msg[7] = 1;
        let mut scanner = Scanner::new(&msg).unwrap();
        assert!(!scanner.next_answer());
        assert_eq!(scanner.err(), Some(ParseError::ShortInput));
    }

    #[test]
    fn pointer_loop() {
        let msg = b"\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                    \xc0\x0e\xc0\x0c\x00\x01\x00\x01";
        let mut scanner = Scanner::new(msg).unwrap();
        assert!(!scanner.advance());
        assert_eq!(
            scanner.err(),
            Some(ParseError::Name(NameError::ExcessiveCompression))
        );
        assert!(!scanner.advance());
    }
}
