use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by domscan and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to see every entry the scanner steps onto:
///   RUST_LOG=domscan=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// A response for www.google.com with an A and an AAAA answer and an OPT
/// record in the additional section.
pub static GOOGLE_RESPONSE: &[u8] = b"\
    \x1a\xcb\x81\x80\x00\x01\x00\x02\x00\x00\x00\x01\
    \x03www\x06google\x03com\x00\x00\xff\x00\x01\
    \xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\xd8\x3a\xc3\x44\
    \xc0\x0c\x00\x1c\x00\x01\x00\x00\x01\x2c\x00\x10\
    \x26\x07\xf8\xb0\x40\x05\x08\x07\x00\x00\x00\x00\x00\x00\x20\x04\
    \x00\x00\x29\x10\x00\x00\x00\x00\x00\x00\x00";

/// Builds a message with the given header counts followed by `body`.
pub fn message(counts: [u16; 4], body: &[u8]) -> Vec<u8> {
    let mut res = vec![0x12, 0x34, 0x81, 0x80];
    for count in counts {
        res.extend_from_slice(&count.to_be_bytes());
    }
    res.extend_from_slice(body);
    res
}
