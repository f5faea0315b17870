//! Record data from [RFC 3596]: AAAA records.
//!
//! This RFC defines the Aaaa record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::rdata::{Field, RdataDecoder, RecordData};
use crate::base::wire::ParseError;
use core::fmt;
use core::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

/// Aaaa record data.
///
/// Aaaa records convey the IPv6 address of a host. The wire format is the
/// 128 bit IPv6 address in network byte order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }
}

//--- From

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

impl From<Aaaa> for Ipv6Addr {
    fn from(data: Aaaa) -> Self {
        data.addr
    }
}

//--- RecordData

impl RecordData for Aaaa {
    const RTYPE: Rtype = Rtype::AAAA;

    fn decode(decoder: &mut RdataDecoder) -> Result<Self, ParseError> {
        let mut octets = [0u8; 16];
        decoder.decode(&mut [Field::Octets(&mut octets)])?;
        Ok(Ipv6Addr::from(octets).into())
    }
}

//--- Display

impl fmt::Display for Aaaa {
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
        let data: &[u8] = b"\x26\x07\xf8\xb0\x40\x05\x08\x07\
                            \x00\x00\x00\x00\x00\x00\x20\x04";
        let mut decoder = RdataDecoder::new(data, 0, 16).unwrap();
        assert_eq!(
            Aaaa::decode(&mut decoder).unwrap().addr(),
            Ipv6Addr::new(0x2607, 0xf8b0, 0x4005, 0x807, 0, 0, 0, 0x2004)
        );

        let mut decoder = RdataDecoder::new(data, 0, 4).unwrap();
        assert!(matches!(
            Aaaa::decode(&mut decoder),
            Err(ParseError::Rdata(_))
        ));
    }
}
