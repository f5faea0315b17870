//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. Normal query includes the
    /// type of record information is requested for. A few aditional types,
    /// called query types, are defined as well and can only be used in
    /// questions. This type represents both these types.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    /// Only the types a scanner commonly deals with have constants. All
    /// other values can still be represented via `from_int`.
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// OPT.
    ///
    /// The pseudo-record carrying EDNS information. See RFC 6891.
    (OPT => 41, "OPT")

    /// Transfer of entire zone.
    ///
    /// See RFC 1035 and RFC 5936.
    (AXFR => 252, "AXFR")

    /// A request for all records the server/cache has available.
    ///
    /// See RFC 1035 and RFC 6895.
    (ANY => 255, "ANY")
}

int_enum_str_with_prefix!(Rtype, "TYPE", b"TYPE", u16, "unknown record type");

impl Rtype {
    /// Returns whether the type can only appear in questions.
    #[must_use]
    pub fn is_qtype(self) -> bool {
        matches!(self, Rtype::AXFR | Rtype::ANY)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Rtype;
    use core::str::FromStr;

    #[test]
    fn values() {
        let expected = [
            (Rtype::A, 1),
            (Rtype::NS, 2),
            (Rtype::CNAME, 5),
            (Rtype::SOA, 6),
            (Rtype::PTR, 12),
            (Rtype::MX, 15),
            (Rtype::TXT, 16),
            (Rtype::AAAA, 28),
            (Rtype::SRV, 33),
            (Rtype::OPT, 41),
            (Rtype::AXFR, 252),
            (Rtype::ANY, 255),
        ];
        for (rtype, value) in expected {
            assert_eq!(rtype.to_int(), value);
            assert_eq!(Rtype::from_int(value), rtype);
        }
        assert!(Rtype::ANY.is_qtype());
        assert!(!Rtype::A.is_qtype());
    }

    #[test]
    fn from_str() {
        assert_eq!(Rtype::from_str("aaaa").unwrap(), Rtype::AAAA);
        assert_eq!(Rtype::from_str("TYPE65").unwrap(), Rtype::from_int(65));
        assert!(Rtype::from_str("TYPEx").is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Rtype::MX), "Rtype::MX");
        assert_eq!(format!("{:?}", Rtype::from_int(65)), "Rtype(65)");
        assert_eq!(format!("{}", Rtype::from_int(65)), "TYPE65");
    }

    #[cfg(feature = "std")]
    #[test]
    fn from_str_error() {
        let err = Rtype::from_str("TYPEx").unwrap_err();
        assert_eq!(format!("{}", err), "unknown record type");
        let err: &dyn std::error::Error = &err;
        assert_eq!(format!("{}", err), "unknown record type");
        assert!(err.source().is_none());
    }
}
