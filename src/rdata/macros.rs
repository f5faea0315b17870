//! Macros for record data types.

//------------ name_type! ----------------------------------------------------

/// A macro for implementing a record data type with a single domain name.
///
/// Creates the type and implements some basic methods plus the
/// `RecordData`, `PartialEq`, and `Display` traits.
macro_rules! name_type {
    ( $(#[$attr:meta])* ($target:ident, $rtype:ident, $field:ident) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub struct $target {
            $field: Dname<NameBuf>,
        }

        impl $target {
            /// Creates new record data from the domain name.
            pub fn new($field: Dname<NameBuf>) -> Self {
                $target { $field }
            }

            /// Returns the domain name.
            pub fn $field(&self) -> Dname<&[u8]> {
                self.$field.for_ref()
            }
        }

        impl RecordData for $target {
            const RTYPE: Rtype = Rtype::$rtype;

            fn decode(
                decoder: &mut RdataDecoder,
            ) -> Result<Self, ParseError> {
                let mut $field = NameBuf::new();
                decoder.decode(&mut [Field::Name(&mut $field)])?;
                Ok($target::new(Dname::from_octets_unchecked($field)))
            }
        }

        impl fmt::Display for $target {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                self.$field.fmt(f)
            }
        }
    };
}
