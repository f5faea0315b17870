//! Record data for the A record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::rdata::{Field, RdataDecoder, RecordData};
use crate::base::wire::ParseError;
use core::fmt;
use core::net::Ipv4Addr;

//------------ A ------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host. The wire format is the 32
/// bit IPv4 address in network byte order. The presentation format is the
/// usual dotted notation.
///
/// The A record type is defined in [RFC 1035, section 3.4.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.4.1
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// Creates a new A record data from an IPv4 address.
    #[must_use]
    pub fn new(addr: Ipv4Addr) -> A {
        A { addr }
    }

    /// Creates a new A record from the IPv4 address components.
    #[must_use]
    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> A {
        A::new(Ipv4Addr::new(a, b, c, d))
    }

    #[must_use]
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }
}

//--- From

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

impl From<A> for Ipv4Addr {
    fn from(data: A) -> Self {
        data.addr
    }
}

//--- RecordData

impl RecordData for A {
    const RTYPE: Rtype = Rtype::A;

    fn decode(decoder: &mut RdataDecoder) -> Result<Self, ParseError> {
        let mut octets = [0u8; 4];
        decoder.decode(&mut [Field::Octets(&mut octets)])?;
        Ok(Ipv4Addr::from(octets).into())
    }
}

//--- Display

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode() {
        let data: &[u8] = b"\xc0\x00\x02\x01";
        let mut decoder = RdataDecoder::new(data, 0, 4).unwrap();
        assert_eq!(A::decode(&mut decoder), Ok(A::from_octets(192, 0, 2, 1)));
    }

    #[test]
    fn decode_bad_length() {
        let data: &[u8] = b"\xc0\x00\x02\x01\x00";
        for len in [3, 5] {
            let mut decoder = RdataDecoder::new(data, 0, len).unwrap();
            assert!(matches!(
                A::decode(&mut decoder),
                Err(ParseError::Rdata(_))
            ));
        }
    }

    #[test]
    #[cfg(feature = "std")]
    fn display() {
        use std::string::ToString;

        assert_eq!(A::from_octets(216, 58, 195, 68).to_string(), "216.58.195.68");
    }
}
