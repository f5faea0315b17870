//! DNS response codes.
//!
//! The original DNS specification in [RFC 1035] specified four bits of the
//! message header as response code. The type [`Rcode`] defined herein
//! represents these codes. Extended response codes carried in the OPT
//! record are out of scope for a scanner that treats OPT as opaque.
//!
//! [`Rcode`]: struct.Rcode.html
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

//------------ Rcode --------------------------------------------------------

int_enum! {
    /// DNS Response Codes.
    ///
    /// The response code of a response indicates what happend on the server
    /// when trying to answer the query. The code is a 4 bit value and part of
    /// the header of a DNS message.
    ///
    /// The values are defined in one registry, [IANA DNS RCODEs].
    ///
    /// [IANA DNS RCODEs]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-6
    =>
    Rcode, u8;

    /// No error condition.
    ///
    /// (Otherwise known as success.)
    (NOERROR => 0, "NOERROR")

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    ///
    /// The name server refused to perform the operation requested by the
    /// query for policy reasons.
    (REFUSED => 5, "REFUSED")
}

int_enum_str_with_decimal!(Rcode, u8, "unknown rcode");

impl Rcode {
    /// Returns whether the rcode signals an error condition.
    #[must_use]
    pub fn is_error(self) -> bool {
        self != Rcode::NOERROR
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Rcode;

    #[test]
    fn values() {
        assert_eq!(Rcode::NOERROR.to_int(), 0);
        assert_eq!(Rcode::FORMERR.to_int(), 1);
        assert_eq!(Rcode::SERVFAIL.to_int(), 2);
        assert_eq!(Rcode::NXDOMAIN.to_int(), 3);
        assert_eq!(Rcode::NOTIMP.to_int(), 4);
        assert_eq!(Rcode::REFUSED.to_int(), 5);
        assert!(!Rcode::NOERROR.is_error());
        assert!(Rcode::NXDOMAIN.is_error());
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(format!("{}", Rcode::NXDOMAIN), "NXDOMAIN");
        assert_eq!(format!("{}", Rcode::from_int(11)), "11");
    }
}
