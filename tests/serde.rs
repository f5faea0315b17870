#![cfg(feature = "serde")]

use domscan::base::iana::{Class, Opcode, Rcode, Rtype};
use serde_test::{assert_tokens, Token};

#[test]
fn iana_types_as_integers() {
    assert_tokens(&Rtype::AAAA, &[Token::U16(28)]);
    assert_tokens(&Rtype::from_int(65280), &[Token::U16(65280)]);
    assert_tokens(&Class::IN, &[Token::U16(1)]);
    assert_tokens(&Opcode::NOTIFY, &[Token::U8(4)]);
    assert_tokens(&Rcode::NXDOMAIN, &[Token::U8(3)]);
}
