//! Record data from [RFC 2782]: SRV records.
//!
//! This RFC defines the Srv record type.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::iana::Rtype;
use crate::base::name::{Dname, NameBuf};
use crate::base::rdata::{Field, RdataDecoder, RecordData};
use crate::base::wire::ParseError;
use core::fmt;

//------------ Srv ---------------------------------------------------------

/// Srv record data.
///
/// Srv records specify the location of the server(s) for a specific
/// protocol and domain.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: Dname<NameBuf>,
}

impl Srv {
    pub fn new(
        priority: u16,
        weight: u16,
        port: u16,
        target: Dname<NameBuf>,
    ) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn target(&self) -> Dname<&[u8]> {
        self.target.for_ref()
    }
}

//--- RecordData

impl RecordData for Srv {
    const RTYPE: Rtype = Rtype::SRV;

    fn decode(decoder: &mut RdataDecoder) -> Result<Self, ParseError> {
        let (mut priority, mut weight, mut port) = (0, 0, 0);
        let mut target = NameBuf::new();
        decoder.decode(&mut [
            Field::U16(&mut priority),
            Field::U16(&mut weight),
            Field::U16(&mut port),
            Field::Name(&mut target),
        ])?;
        Ok(Srv::new(
            priority,
            weight,
            port,
            Dname::from_octets_unchecked(target),
        ))
    }
}

//--- Display

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Testing =======================================================
