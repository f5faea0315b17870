//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::{Dname, NameBuf};
use crate::base::rdata::{Field, RdataDecoder, RecordData};
use crate::base::wire::ParseError;
use core::fmt;

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Mx {
    preference: u16,
    exchange: Dname<NameBuf>,
}

impl Mx {
    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: Dname<NameBuf>) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> Dname<&[u8]> {
        self.exchange.for_ref()
    }
}

//--- RecordData

impl RecordData for Mx {
    const RTYPE: Rtype = Rtype::MX;

    fn decode(decoder: &mut RdataDecoder) -> Result<Self, ParseError> {
        let mut preference = 0;
        let mut exchange = NameBuf::new();
        decoder.decode(&mut [
            Field::U16(&mut preference),
            Field::Name(&mut exchange),
        ])?;
        Ok(Mx::new(preference, Dname::from_octets_unchecked(exchange)))
    }
}

//--- Display

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//============ Testing =======================================================
