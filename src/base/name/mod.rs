//! Domain names.
//!
//! Domain names appear in DNS messages in wire format: a sequence of labels,
//! each prefixed by a length octet, ending in the empty root label. To keep
//! messages small, a name may end in a *compression pointer* instead of the
//! root label. The pointer gives the position of the remainder of the name
//! anywhere in the message, and that remainder can itself end in a pointer.
//!
//! This module provides two things. The [`decompress`] function follows all
//! compression pointers of a name in a message and assembles the complete,
//! uncompressed name into a [`NameBuf`], a fixed-size buffer that never
//! allocates. The [`Dname`] type wraps an uncompressed name over some octets
//! sequence, be it a slice into such a buffer or any other sequence, and
//! provides comparison and formatting.
//!
//! Decompression is bounded in two ways independent of the size of the
//! message: the resulting name can be at most [`MAX_NAME_LEN`] octets long
//! and at most [`MAX_COMPRESSION_STEPS`] labels and pointers are processed
//! for a single name. The second limit makes sure that pointer loops
//! terminate quickly.

pub use self::dname::{Dname, DnameIter};
pub use self::parsed::decompress;
pub(crate) use self::parsed::decompress_within;

use core::fmt;

mod dname;
mod parsed;

//------------ Limits ---------------------------------------------------------

/// The maximum length of an uncompressed domain name in octets.
///
/// This includes the length octets of all labels and the root label.
pub const MAX_NAME_LEN: usize = 255;

/// The maximum number of labels and compression pointers in a single name.
pub const MAX_COMPRESSION_STEPS: usize = 255;

//------------ NameBuf --------------------------------------------------------

/// An octets buffer large enough for any uncompressed domain name.
///
/// The buffer lives entirely on the stack. The scanner keeps one as the
/// scratch space for the owner name of the current entry and the record
/// data decoder writes names into caller-provided ones.
pub type NameBuf = octseq::array::Array<MAX_NAME_LEN>;

//------------ NameError -----------------------------------------------------

/// A domain name was malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// A label header used one of the reserved label types.
    BadLabel,

    /// A compression pointer pointed beyond the end of the message.
    BadPointer,

    /// The name is longer than the 255 octets allowed.
    LongName,

    /// Too many labels and compression pointers.
    ExcessiveCompression,

    /// The name ended before its root label.
    Unterminated,

    /// There was data after the root label.
    TrailingData,
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NameError::BadLabel => "invalid label type",
            NameError::BadPointer => "compression pointer out of bounds",
            NameError::LongName => "long domain name",
            NameError::ExcessiveCompression => {
                "too many compression pointers"
            }
            NameError::Unterminated => "missing root label",
            NameError::TrailingData => "trailing data",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NameError {}
