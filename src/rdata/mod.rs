//! Record data implementations.
//!
//! This module contains record data types for a number of common record
//! types. All of them implement the [`RecordData`] trait and can thus be
//! decoded from the current record of a scanner via
//! [`Scanner::decode_rdata`] or [`Scanner::parse_rdata`].
//!
//! The types are named after the record type they implement. They are
//! grouped into submodules for the RFCs they are defined in. All types are
//! also re-exported at the top level here. Ie., for the AAAA record type,
//! you can simply `use domscan::rdata::Aaaa` instead of
//! `use domscan::rdata::rfc3596::Aaaa`.
//!
//! Adding a type for some other record type only requires implementing
//! [`RecordData`], typically by handing a list of [`Field`]s to the
//! decoder.
//!
//! [`RecordData`]: crate::base::rdata::RecordData
//! [`Field`]: crate::base::rdata::Field
//! [`Scanner::decode_rdata`]: crate::base::Scanner::decode_rdata
//! [`Scanner::parse_rdata`]: crate::base::Scanner::parse_rdata

#[macro_use]
mod macros;

pub mod rfc1035;
pub mod rfc2782;
pub mod rfc3596;

pub use self::rfc1035::{Cname, Mx, Ns, Ptr, Soa, A};
pub use self::rfc2782::Srv;
pub use self::rfc3596::Aaaa;
