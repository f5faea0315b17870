//! Decompressing domain names found in a DNS message.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use super::{NameBuf, NameError, MAX_COMPRESSION_STEPS, MAX_NAME_LEN};
use crate::base::wire::ParseError;
use octseq::builder::{OctetsBuilder, Truncate};
use octseq::parse::Parser;

//------------ decompress ----------------------------------------------------

/// Decompresses the domain name starting at `start` in `msg`.
///
/// The complete, uncompressed name is written into `target`, replacing
/// whatever was there before. Since compression pointers are indexes into
/// the message, `msg` has to be the complete message even if the name is
/// part of some record data.
///
/// Returns the number of octets the name occupies at `start`. If the name
/// contains a compression pointer, this is the number of octets up to and
/// including the first pointer as everything after it lives elsewhere in
/// the message. Otherwise it is the length of the name.
///
/// The function fails if the name is broken in any way. In this case, the
/// content of `target` is unspecified.
pub fn decompress(
    msg: &[u8],
    start: usize,
    target: &mut NameBuf,
) -> Result<usize, ParseError> {
    decompress_within(msg, start, msg.len(), target)
}

/// Decompresses a name whose uncompressed part has to end before `end`.
///
/// Everything up to and including the first compression pointer is read
/// from `msg[..end]` only. Compression pointers may still point anywhere in
/// `msg`. Reading beyond `end` results in a short input error.
pub(crate) fn decompress_within(
    msg: &[u8],
    start: usize,
    end: usize,
    target: &mut NameBuf,
) -> Result<usize, ParseError> {
    target.truncate(0);
    let head = msg.get(..end).ok_or(ParseError::ShortInput)?;
    let mut parser = Parser::from_ref(head);
    parser.seek(start)?;

    // The position right after the first compression pointer.
    let mut resume = None;

    for _ in 0..MAX_COMPRESSION_STEPS {
        match LabelType::parse(&mut parser)? {
            LabelType::Normal(label_len) => {
                let label_len = usize::from(label_len);
                if target.as_slice().len() + 1 + label_len > MAX_NAME_LEN {
                    return Err(NameError::LongName.into());
                }
                let label = parser.peek(label_len)?;
                append_label(target, label)?;
                parser.advance(label_len)?;
                if label_len == 0 {
                    let end = resume.unwrap_or_else(|| parser.pos());
                    return Ok(end - start);
                }
            }
            LabelType::Compressed(ptr) => {
                if ptr >= msg.len() {
                    return Err(NameError::BadPointer.into());
                }
                if resume.is_none() {
                    resume = Some(parser.pos());
                    parser = Parser::from_ref(msg);
                }
                parser.seek(ptr)?;
            }
        }
    }
    Err(NameError::ExcessiveCompression.into())
}

/// Appends a label including its length octet to `target`.
fn append_label(target: &mut NameBuf, label: &[u8]) -> Result<(), NameError> {
    // The label was checked to fit already, so appending can’t fail.
    let len = u8::try_from(label.len()).map_err(|_| NameError::BadLabel)?;
    target
        .append_slice(&[len])
        .and_then(|_| target.append_slice(label))
        .map_err(|_| NameError::LongName)
}

//------------ LabelType -----------------------------------------------------

/// The type of a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with its size in octets.
    Normal(u8),

    /// A compressed label with the position of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// Attempts to take a label type from the beginning of `parser`.
    fn parse(parser: &mut Parser<[u8]>) -> Result<Self, ParseError> {
        let ltype = parser.parse_u8()?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype)),
            0xC0..=0xFF => {
                let res = usize::from(parser.parse_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(NameError::BadLabel.into()),
        }
    }
}

//============ Testing =======================================================
