//! Basics.
//!
//! This module provides the types needed for scanning wire-format DNS
//! messages.
//!
//!
//! ## Scanning Messages
//!
//! A DNS message consists of a twelve octet header followed by four
//! sections: the question section and the answer, authority, and additional
//! sections holding resource records. The number of entries in each section
//! is given in the header. Domain names within the message can be
//! compressed by replacing their tail with a pointer to an earlier
//! occurrence of the same labels anywhere in the message.
//!
//! The [`Scanner`] walks over the entries of a message in order. For each
//! entry, it decompresses the owner name into a scratch buffer it owns and
//! provides access to the fixed fields following the name. It never copies
//! the message and never allocates. Resource data is only looked at when
//! asked for, either as a raw slice or through the generic decoder provided
//! by the [rdata](rdata/index.html) module.
//!
//! Once anything about the message turns out to be broken, the scanner stops
//! and remembers the error. Since the position of everything after a broken
//! entry depends on that entry’s lengths, there is no way to continue
//! reliably.
//!
//!
//! # Types for DNS Data
//!
//! The types the scanner is built from are arranged in submodules:
//!
//! * [header](header/index.html) for the header of DNS messages,
//! * [iana](iana/index.html) for the parameter types defined via IANA
//!   registries,
//! * [name](name/index.html) for domain names and their decompression,
//! * [rdata](rdata/index.html) for the generic record data decoder, and
//! * [wire](wire/index.html) for the error types of wire-format parsing.

//--- Re-exports

pub use self::header::{Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::name::{Dname, NameBuf};
pub use self::rdata::{Field, RdataDecoder, RecordData};
pub use self::scanner::{Scanner, Section};
pub use self::wire::{FormError, ParseError};

//--- Modules

pub mod header;
pub mod iana;
pub mod name;
pub mod rdata;
pub mod scanner;
pub mod wire;
