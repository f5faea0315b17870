//! Record data for the SOA record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::{Dname, NameBuf};
use crate::base::rdata::{Field, RdataDecoder, RecordData};
use crate::base::wire::ParseError;
use core::fmt;

//------------ Soa ----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The Soa record type is defined in [RFC 1035, section 3.3.13][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.13
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Soa {
    mname: Dname<NameBuf>,
    rname: Dname<NameBuf>,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    /// Creates new Soa record data from content.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mname: Dname<NameBuf>,
        rname: Dname<NameBuf>,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server for the zone.
    pub fn mname(&self) -> Dname<&[u8]> {
        self.mname.for_ref()
    }

    /// The mailbox for the person responsible for this zone.
    pub fn rname(&self) -> Dname<&[u8]> {
        self.rname.for_ref()
    }

    /// The serial number of the original copy of the zone.
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// The time interval in seconds before the zone should be refreshed.
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// The time in seconds before a failed refresh is retried.
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// The upper limit of time in seconds the zone is authoritative.
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// The minimum TTL to be exported with any RR from this zone.
    pub fn minimum(&self) -> u32 {
        self.minimum
    }
}

//--- RecordData

impl RecordData for Soa {
    const RTYPE: Rtype = Rtype::SOA;

    fn decode(decoder: &mut RdataDecoder) -> Result<Self, ParseError> {
        let mut mname = NameBuf::new();
        let mut rname = NameBuf::new();
        let [mut serial, mut refresh, mut retry, mut expire, mut minimum] =
            [0u32; 5];
        decoder.decode(&mut [
            Field::Name(&mut mname),
            Field::Name(&mut rname),
            Field::U32(&mut serial),
            Field::U32(&mut refresh),
            Field::U32(&mut retry),
            Field::U32(&mut expire),
            Field::U32(&mut minimum),
        ])?;
        Ok(Soa::new(
            Dname::from_octets_unchecked(mname),
            Dname::from_octets_unchecked(rname),
            serial,
            refresh,
            retry,
            expire,
            minimum,
        ))
    }
}

//--- Display

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    static MSG: &[u8] = b"\x07example\x03com\x00\
        \x02ns\xc0\x00\x05admin\xc0\x00\
        \x78\x5f\x4d\x11\x00\x00\x1c\x20\x00\x00\x0e\x10\
        \x00\x12\x75\x00\x00\x00\x0e\x10";

    #[test]
    fn decode() {
        let mut decoder = RdataDecoder::new(MSG, 13, MSG.len()).unwrap();
        let soa = Soa::decode(&mut decoder).unwrap();
        assert_eq!(
            soa.mname(),
            Dname::from_octets(b"\x02ns\x07example\x03com\x00").unwrap()
        );
        assert_eq!(
            soa.rname(),
            Dname::from_octets(b"\x05admin\x07example\x03com\x00").unwrap()
        );
        assert_eq!(soa.serial(), 2019511569);
        assert_eq!(soa.refresh(), 7200);
        assert_eq!(soa.retry(), 3600);
        assert_eq!(soa.expire(), 1209600);
        assert_eq!(soa.minimum(), 3600);
    }

    #[test]
    fn decode_short() {
        let mut decoder =
            RdataDecoder::new(MSG, 13, MSG.len() - 1).unwrap();
        assert!(matches!(
            Soa::decode(&mut decoder),
            Err(ParseError::Rdata(_))
        ));
    }

    #[test]
    #[cfg(feature = "std")]
    fn display() {
        use std::string::ToString;

        let mut decoder = RdataDecoder::new(MSG, 13, MSG.len()).unwrap();
        assert_eq!(
            Soa::decode(&mut decoder).unwrap().to_string(),
            "ns.example.com. admin.example.com. 2019511569 7200 3600 \
             1209600 3600"
        );
    }
}
