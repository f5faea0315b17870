//! IANA Definitions for DNS.
//!
//! This module contains types for the parameters defined in IANA registries
//! that a scanner needs to recognize.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer value used on the wire with associated
//! constants for all the well-known values. Since any value may appear in a
//! message, every integer value is a valid value of the type and values
//! without a constant are handled just as well.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` are implemented to convert from
//! the string codes to the values and back.
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here. This is mostly so we can have associated types like
//! `FromStrError` without having to resort to devilishly long names.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;
