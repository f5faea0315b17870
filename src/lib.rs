//! Scanning DNS messages in wire format.
//!
//! This crate reads DNS messages straight from the octets they were
//! received as. Instead of parsing a message into a tree of owned values, it
//! provides a cursor, the [`Scanner`][base::Scanner], that walks over the
//! message entry by entry. Only the parts a caller actually asks for are
//! decoded: the header fields are read in place, the owner name of the
//! current entry is decompressed into a fixed-size scratch buffer owned by
//! the scanner, and record data is only looked at when a caller requests it.
//! No heap allocations happen at all.
//!
//! A typical use is picking the addresses for a queried name out of a
//! response:
//!
//! ```
//! use domscan::base::iana::{Class, Rtype};
//! use domscan::base::{Dname, Scanner};
//! use domscan::rdata::{Aaaa, A};
//!
//! # fn main() -> Result<(), domscan::base::wire::ParseError> {
//! # let msg: &[u8] = b"\x1a\xcb\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
//! #     \x03www\x06google\x03com\x00\x00\x01\x00\x01\
//! #     \xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\xd8\x3a\xc3\x44";
//! let qname = Dname::from_octets(b"\x03www\x06google\x03com\x00")?;
//!
//! let mut scanner = Scanner::new(msg)?;
//! while scanner.next_answer() {
//!     if scanner.class() != Class::IN || scanner.name() != qname {
//!         continue;
//!     }
//!     match scanner.rtype() {
//!         Rtype::A => {
//!             let data: A = scanner.decode_rdata()?;
//!             println!("{}", data);
//!         }
//!         Rtype::AAAA => {
//!             let data: Aaaa = scanner.decode_rdata()?;
//!             println!("{}", data);
//!         }
//!         _ => {}
//!     }
//! }
//! if let Some(err) = scanner.err() {
//!     return Err(err);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! * [base] contains the scanner together with the types it is built from:
//!   the message header, domain names, the IANA parameter types, and the
//!   generic record data decoder.
//! * [rdata] contains record data types for a number of common record
//!   types, all decoded through the generic decoder.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serde serialization for the IANA parameter types.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

#[macro_use]
extern crate core;

pub mod base;
pub mod rdata;
