//! Uncompressed domain names.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::{NameBuf, NameError, MAX_NAME_LEN};
use core::{fmt, hash};
use octseq::builder::OctetsBuilder;

//------------ Dname ---------------------------------------------------------

/// An uncompressed absolute domain name.
///
/// The name is stored in wire format atop some octets sequence: each label
/// is preceded by its length and the name ends with the empty root label.
/// The type is used both for names handed out by the scanner, in which case
/// the octets are a slice borrowed from the scanner’s scratch buffer, and for
/// names kept for longer, which can use a [`NameBuf`] as their octets.
///
/// Comparison between names ignores ASCII case: two names are equal if they
/// have the same length and all their octets are equal after mapping the
/// letters ‘a’ to ‘z’ to ‘A’ to ‘Z’. This works across octets types.
#[derive(Clone, Copy)]
pub struct Dname<Octs>(Octs);

/// # Creation and Conversion
///
impl<Octs> Dname<Octs> {
    /// Creates a domain name from an octets sequence.
    ///
    /// This checks that `octets` contains a properly encoded,
    /// uncompressed, absolute name and fails otherwise.
    pub fn from_octets(octets: Octs) -> Result<Self, NameError>
    where
        Octs: AsRef<[u8]>,
    {
        check_slice(octets.as_ref())?;
        Ok(Dname(octets))
    }

    /// Creates a domain name from octets known to hold a valid name.
    pub(crate) fn from_octets_unchecked(octets: Octs) -> Self {
        Dname(octets)
    }

    /// Returns a reference to the underlying octets sequence.
    pub fn as_octets(&self) -> &Octs {
        &self.0
    }

    /// Converts the name into the underlying octets sequence.
    pub fn into_octets(self) -> Octs {
        self.0
    }
}

impl Dname<&'static [u8]> {
    /// Returns the root name atop a static slice.
    pub fn root() -> Self {
        Dname(b"\0")
    }
}

impl<Octs: AsRef<[u8]>> Dname<Octs> {
    /// Returns a reference to the underlying octets slice.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns a name atop a reference to the octets.
    pub fn for_ref(&self) -> Dname<&[u8]> {
        Dname(self.as_slice())
    }

    /// Returns an owned copy of the name.
    ///
    /// The scanner hands out names that are only valid until it moves on to
    /// the next entry. This method can be used to keep a name around for
    /// longer.
    pub fn to_name_buf(&self) -> Dname<NameBuf> {
        let mut buf = NameBuf::new();
        // A valid name always fits the buffer.
        if buf.append_slice(self.as_slice()).is_err() {
            unreachable!("name longer than 255 octets")
        }
        Dname(buf)
    }

    /// Returns whether the name is the root label only.
    pub fn is_root(&self) -> bool {
        self.as_slice().len() == 1
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// Labels are returned without their length octet. The last label
    /// returned is always the empty root label.
    pub fn iter(&self) -> DnameIter<'_> {
        DnameIter::new(self.as_slice())
    }

    /// Returns the number of labels in the name, including the root label.
    pub fn label_count(&self) -> usize {
        self.iter().count()
    }
}

/// Checks whether an octet slice contains a correctly encoded name.
fn check_slice(mut slice: &[u8]) -> Result<(), NameError> {
    if slice.len() > MAX_NAME_LEN {
        return Err(NameError::LongName);
    }
    loop {
        let (&len, tail) = slice.split_first().ok_or(NameError::Unterminated)?;
        if len > 0x3F {
            return Err(NameError::BadLabel);
        }
        let len = usize::from(len);
        if tail.len() < len {
            return Err(NameError::Unterminated);
        }
        if len == 0 {
            if tail.is_empty() {
                return Ok(());
            }
            return Err(NameError::TrailingData);
        }
        slice = &tail[len..];
    }
}

//--- PartialEq and Eq

impl<Octs, Other> PartialEq<Dname<Other>> for Dname<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    fn eq(&self, other: &Dname<Other>) -> bool {
        self.as_slice().eq_ignore_ascii_case(other.as_slice())
    }
}

impl<Octs: AsRef<[u8]>> Eq for Dname<Octs> {}

//--- Hash

impl<Octs: AsRef<[u8]>> hash::Hash for Dname<Octs> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.as_slice() {
            ch.to_ascii_lowercase().hash(state)
        }
    }
}

//--- AsRef

impl<Octs: AsRef<[u8]>> AsRef<[u8]> for Dname<Octs> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- IntoIterator

impl<'a, Octs: AsRef<[u8]>> IntoIterator for &'a Dname<Octs> {
    type Item = &'a [u8];
    type IntoIter = DnameIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display and Debug

impl<Octs: AsRef<[u8]>> fmt::Display for Dname<Octs> {
    /// Formats the domain name.
    ///
    /// This will produce the domain name in presentation format with the
    /// trailing dot. Dots, spaces, and backslashes within labels are
    /// escaped with a backslash, non-printable octets as a backslash
    /// followed by three decimal digits.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.iter() {
            if label.is_empty() {
                break;
            }
            for &ch in label {
                if ch == b' ' || ch == b'.' || ch == b'\\' {
                    write!(f, "\\{}", ch as char)?;
                } else if !(0x20..0x7F).contains(&ch) {
                    write!(f, "\\{:03}", ch)?;
                } else {
                    write!(f, "{}", (ch as char))?;
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl<Octs: AsRef<[u8]>> fmt::Debug for Dname<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Dname({})", self)
    }
}

//------------ DnameIter -----------------------------------------------------

/// An iterator over the labels in a domain name.
#[derive(Clone, Debug)]
pub struct DnameIter<'a> {
    slice: &'a [u8],
}

impl<'a> DnameIter<'a> {
    fn new(slice: &'a [u8]) -> Self {
        DnameIter { slice }
    }
}

impl<'a> Iterator for DnameIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.slice.split_first()?;
        let len = usize::from(len).min(tail.len());
        let (label, tail) = tail.split_at(len);
        self.slice = tail;
        Some(label)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_octets() {
        assert!(Dname::from_octets(b"\x03www\x07example\x03com\0").is_ok());
        assert!(Dname::from_octets(b"\0").is_ok());

        // relative name
        assert_eq!(
            Dname::from_octets(b"\x03www\x07example\x03com").err(),
            Some(NameError::Unterminated)
        );

        // bytes shorter than what label length says.
        assert_eq!(
            Dname::from_octets(b"\x03www\x07exa").err(),
            Some(NameError::Unterminated)
        );

        // compression pointers aren’t allowed.
        assert_eq!(
            Dname::from_octets(b"\x03www\xc0\x00").err(),
            Some(NameError::BadLabel)
        );

        // data after the root label.
        assert_eq!(
            Dname::from_octets(b"\x03www\0\0").err(),
            Some(NameError::TrailingData)
        );

        // label 63 long ok, 64 bad.
        let mut slice = [0u8; 65];
        slice[0] = 63;
        assert!(Dname::from_octets(&slice[..]).is_ok());
        let mut slice = [0u8; 66];
        slice[0] = 64;
        assert_eq!(
            Dname::from_octets(&slice[..]).err(),
            Some(NameError::BadLabel)
        );

        // name 255 long ok, 256 bad.
        let mut buf = [0u8; 256];
        for chunk in buf[..250].chunks_mut(10) {
            chunk[0] = 9;
        }
        buf[250] = 3;
        assert!(Dname::from_octets(&buf[..255]).is_ok());
        buf[250] = 4;
        assert_eq!(
            Dname::from_octets(&buf[..256]).err(),
            Some(NameError::LongName)
        );
    }

    #[test]
    fn eq() {
        let www = Dname::from_octets(b"\x03www\x06google\x03com\0").unwrap();
        let upper = Dname::from_octets(b"\x03WWW\x06Google\x03COM\0").unwrap();
        let ftp = Dname::from_octets(b"\x03ftp\x06google\x03com\0").unwrap();
        let short = Dname::from_octets(b"\x06google\x03com\0").unwrap();

        assert_eq!(www, upper);
        assert_ne!(www, ftp);
        assert_ne!(www, short);
        assert_eq!(www, www.to_name_buf());
        assert_eq!(upper.for_ref(), www);
    }

    #[test]
    fn eq_is_ascii_only() {
        // Only a-z fold. Octets beyond ASCII are compared as they are.
        let a = Dname::from_octets(b"\x01\xe4\0").unwrap();
        let b = Dname::from_octets(b"\x01\xc4\0").unwrap();
        assert_ne!(a, b);
        let a = Dname::from_octets(b"\x01[\0").unwrap();
        let b = Dname::from_octets(b"\x01{\0").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn iter() {
        let name = Dname::from_octets(b"\x03www\x07example\x03com\0").unwrap();
        let labels: &[&[u8]] = &[b"www", b"example", b"com", b""];
        assert!(name.iter().eq(labels.iter().copied()));
        assert_eq!(name.label_count(), 4);
        assert!(!name.is_root());
        assert!(Dname::root().is_root());
        assert_eq!(Dname::root().label_count(), 1);
        assert_eq!(name.as_slice().len(), 17);
    }

    #[test]
    #[cfg(feature = "std")]
    fn display() {
        use std::string::ToString;

        assert_eq!(
            Dname::from_octets(b"\x03www\x07example\x03com\0")
                .unwrap()
                .to_string(),
            "www.example.com."
        );
        assert_eq!(Dname::root().to_string(), ".");
        assert_eq!(
            Dname::from_octets(b"\x04a.b\x01\x03com\0").unwrap().to_string(),
            "a\\.b\\001.com."
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn hash_ignores_case() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(t: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            t.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(
            hash_of(&Dname::from_octets(b"\x03www\0").unwrap()),
            hash_of(&Dname::from_octets(b"\x03WwW\0").unwrap())
        );
    }
}
