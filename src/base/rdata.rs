//! Decoding record data.
//!
//! The data of a resource record is a sequence of fields whose layout
//! depends on the record type. This module provides the pieces to decode
//! such data without knowing anything about specific record types: the
//! [`RdataDecoder`] consumes the record data window of a record field by
//! field and the [`Field`] enum describes which kinds of fields there are
//! and where to put their decoded values.
//!
//! Record types are decoded by implementing the [`RecordData`] trait. Its
//! one method typically hands a list of fields to [`RdataDecoder::decode`]
//! and assembles the result from the filled-in values. A number of
//! implementations for common record types can be found in the
//! [rdata](crate::rdata) module.

use super::iana::Rtype;
use super::name::{decompress_within, NameBuf};
use super::wire::ParseError;

//------------ RecordData ----------------------------------------------------

/// A type that can be decoded from the data of a resource record.
///
/// The trait is implemented by types representing the record data of a
/// specific record type. The scanner uses [`RTYPE`](Self::RTYPE) to decide
/// whether a record is of this type at all and only then calls
/// [`decode`](Self::decode).
pub trait RecordData: Sized {
    /// The record type this record data is for.
    const RTYPE: Rtype;

    /// Decodes the record data from the given decoder.
    ///
    /// Implementations must consume the record data exactly. Any leftover
    /// data is treated as an error by the caller.
    fn decode(decoder: &mut RdataDecoder) -> Result<Self, ParseError>;
}

//------------ Field ---------------------------------------------------------

/// The destination for a field of record data.
///
/// Each variant describes the wire format of one field and holds a mutable
/// reference to where the decoded value should go.
#[derive(Debug)]
pub enum Field<'d> {
    /// A 16 bit unsigned integer in network byte order.
    U16(&'d mut u16),

    /// A 32 bit unsigned integer in network byte order.
    U32(&'d mut u32),

    /// A fixed number of octets.
    ///
    /// The number of octets is the length of the slice.
    Octets(&'d mut [u8]),

    /// A domain name that may be compressed.
    Name(&'d mut NameBuf),
}

//------------ RdataDecoder --------------------------------------------------

/// A decoder for the data of a single resource record.
///
/// The decoder covers the record data window of a record in a message. It
/// keeps a reference to the complete message rather than only the window
/// since domain names in record data can contain compression pointers into
/// any part of the message.
#[derive(Clone, Debug)]
pub struct RdataDecoder<'a> {
    /// The complete message.
    msg: &'a [u8],

    /// The position of the next field within `msg`.
    pos: usize,

    /// The end of the record data within `msg`.
    end: usize,
}

impl<'a> RdataDecoder<'a> {
    /// Creates a decoder for the record data in `msg[start..end]`.
    ///
    /// Fails if the window isn’t within the message.
    pub fn new(
        msg: &'a [u8],
        start: usize,
        end: usize,
    ) -> Result<Self, ParseError> {
        if start > end || end > msg.len() {
            return Err(ParseError::ShortInput);
        }
        Ok(RdataDecoder {
            msg,
            pos: start,
            end,
        })
    }

    /// Returns the number of octets left in the record data.
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Returns the remaining record data.
    pub fn as_slice(&self) -> &'a [u8] {
        &self.msg[self.pos..self.end]
    }

    /// Decodes all fields in order and checks that the data is used up.
    pub fn decode(&mut self, fields: &mut [Field]) -> Result<(), ParseError> {
        for field in fields.iter_mut() {
            match field {
                Field::U16(target) => **target = self.parse_u16()?,
                Field::U32(target) => **target = self.parse_u32()?,
                Field::Octets(target) => self.parse_octets(target)?,
                Field::Name(target) => self.parse_name(target)?,
            }
        }
        self.finish()
    }

    /// Takes a 16 bit integer from the beginning of the data.
    pub fn parse_u16(&mut self) -> Result<u16, ParseError> {
        let mut buf = [0u8; 2];
        self.parse_octets(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Takes a 32 bit integer from the beginning of the data.
    pub fn parse_u32(&mut self) -> Result<u32, ParseError> {
        let mut buf = [0u8; 4];
        self.parse_octets(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Fills `target` from the beginning of the data.
    pub fn parse_octets(&mut self, target: &mut [u8]) -> Result<(), ParseError> {
        if self.remaining() < target.len() {
            return Err(ParseError::rdata_error("short record data"));
        }
        let end = self.pos + target.len();
        target.copy_from_slice(&self.msg[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    /// Decompresses a domain name from the beginning of the data.
    ///
    /// The name may be compressed, but everything up to its first
    /// compression pointer has to be within the record data. Any problem
    /// with the name is reported as malformed record data.
    pub fn parse_name(&mut self, target: &mut NameBuf) -> Result<(), ParseError> {
        let used = decompress_within(self.msg, self.pos, self.end, target)
            .map_err(|_| ParseError::rdata_error("malformed domain name"))?;
        self.pos += used;
        Ok(())
    }

    /// Skips over `len` octets of data.
    pub fn skip(&mut self, len: usize) -> Result<(), ParseError> {
        if self.remaining() < len {
            return Err(ParseError::rdata_error("short record data"));
        }
        self.pos += len;
        Ok(())
    }

    /// Checks that all data has been consumed.
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.pos == self.end {
            Ok(())
        } else {
            Err(ParseError::rdata_error("trailing data"))
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::wire::FormError;

    // Some preceding octets, then the name "example.com" at position 4, then
    // record data from position 17.
    static MSG: &[u8] = b"\x00\x00\x00\x00\x07example\x03com\x00\
                          \x00\x0a\xc0\x04\x00\x00\x00\x07";

    fn decoder(start: usize, end: usize) -> RdataDecoder<'static> {
        RdataDecoder::new(MSG, start, end).unwrap()
    }

    fn is_rdata_error(err: ParseError) -> bool {
        matches!(err, ParseError::Rdata(_))
    }

    #[test]
    fn window_bounds() {
        assert!(RdataDecoder::new(MSG, 17, MSG.len()).is_ok());
        assert!(RdataDecoder::new(MSG, MSG.len(), MSG.len()).is_ok());
        assert_eq!(
            RdataDecoder::new(MSG, 17, MSG.len() + 1).err(),
            Some(ParseError::ShortInput)
        );
        assert_eq!(
            RdataDecoder::new(MSG, 18, 17).err(),
            Some(ParseError::ShortInput)
        );
    }

    #[test]
    fn decode_fields() {
        let mut pref = 0u16;
        let mut name = NameBuf::new();
        let mut serial = 0u32;
        decoder(17, 25)
            .decode(&mut [
                Field::U16(&mut pref),
                Field::Name(&mut name),
                Field::U32(&mut serial),
            ])
            .unwrap();
        assert_eq!(pref, 10);
        assert_eq!(name.as_slice(), b"\x07example\x03com\x00");
        assert_eq!(serial, 7);
    }

    #[test]
    fn decode_octets() {
        let mut addr = [0u8; 4];
        decoder(21, 25)
            .decode(&mut [Field::Octets(&mut addr)])
            .unwrap();
        assert_eq!(addr, [0, 0, 0, 7]);
    }

    #[test]
    fn short_data() {
        let mut addr = [0u8; 4];
        let err = decoder(22, 25)
            .decode(&mut [Field::Octets(&mut addr)])
            .unwrap_err();
        assert!(is_rdata_error(err));

        let mut val = 0u32;
        let err = decoder(17, 19)
            .decode(&mut [Field::U32(&mut val)])
            .unwrap_err();
        assert!(is_rdata_error(err));

        let mut name = NameBuf::new();
        let err = decoder(19, 19)
            .decode(&mut [Field::Name(&mut name)])
            .unwrap_err();
        assert!(is_rdata_error(err));
    }

    #[test]
    fn trailing_data() {
        let mut val = 0u16;
        assert_eq!(
            decoder(17, 21).decode(&mut [Field::U16(&mut val)]),
            Err(ParseError::Rdata(FormError::new("trailing data")))
        );
        assert_eq!(val, 10);
    }

    #[test]
    fn name_beyond_window() {
        // The pointer starts within the window but ends outside.
        let mut name = NameBuf::new();
        let err = decoder(19, 20)
            .decode(&mut [Field::Name(&mut name)])
            .unwrap_err();
        assert!(is_rdata_error(err));

        // An uncompressed name running past the end of the window.
        let err = decoder(4, 10)
            .decode(&mut [Field::Name(&mut name)])
            .unwrap_err();
        assert!(is_rdata_error(err));
    }

    #[test]
    fn bad_name() {
        let msg: &[u8] = b"\x00\x02\x41\x00";
        let mut name = NameBuf::new();
        let mut val = 0;
        assert_eq!(
            RdataDecoder::new(msg, 0, 4).unwrap().decode(&mut [
                Field::U16(&mut val),
                Field::Name(&mut name)
            ]),
            Err(ParseError::rdata_error("malformed domain name"))
        );

        // Pointer loops within record data.
        let msg: &[u8] = b"\xc0\x00";
        assert!(is_rdata_error(
            RdataDecoder::new(msg, 0, 2)
                .unwrap()
                .decode(&mut [Field::Name(&mut name)])
                .unwrap_err()
        ));
    }

    #[test]
    fn unterminated_name() {
        // The name in the window never ends. Whatever follows the window
        // must not change the outcome.
        let mut name = NameBuf::new();
        for msg in [
            &b"\x03abc"[..],
            &b"\x03abc\x41\x00"[..],
            &b"\x03abc\x00"[..],
            &b"\x03abc\xc0\x00"[..],
        ] {
            assert_eq!(
                RdataDecoder::new(msg, 0, 4)
                    .unwrap()
                    .decode(&mut [Field::Name(&mut name)]),
                Err(ParseError::rdata_error("malformed domain name"))
            );
        }
    }

    #[test]
    fn skip() {
        let mut dec = decoder(17, 25);
        dec.skip(4).unwrap();
        assert_eq!(dec.remaining(), 4);
        assert_eq!(dec.as_slice(), b"\x00\x00\x00\x07");
        assert!(is_rdata_error(dec.skip(5).unwrap_err()));
        dec.skip(4).unwrap();
        dec.finish().unwrap();
    }
}
