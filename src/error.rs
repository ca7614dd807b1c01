//! A dedicated error for all possible errors in DNS queries: I/O, DNS packet
//! inconsistencies, root hints parsing, etc.
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DnsError {
    /// the value being encoded violates a wire-format limit (oversized
    /// label, oversized name)
    FormErrEncode(String),
    /// the bytes being decoded are not a well-formed DNS message
    FormErrDecode(String),
    /// I/O failure on a socket or file
    Io(io::Error),
    /// the root hints file held no usable `A` records
    RootHintsEmpty,
    /// a root hints line could not be parsed
    RootHintsParse(String),
}

/// A specific custom `Result` for all functions
pub type DnsResult<T> = Result<T, DnsError>;

impl fmt::Display for DnsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsError::FormErrEncode(s) => write!(f, "FORMERR (encode): {}", s),
            DnsError::FormErrDecode(s) => write!(f, "FORMERR (decode): {}", s),
            DnsError::Io(e) => write!(f, "I/O error: {}", e),
            DnsError::RootHintsEmpty => write!(f, "root hints file contained no A records"),
            DnsError::RootHintsParse(s) => write!(f, "root hints parse error: {}", s),
        }
    }
}

impl std::error::Error for DnsError {}

// All conversions for internal errors for DnsError
impl From<io::Error> for DnsError {
    fn from(err: io::Error) -> Self {
        DnsError::Io(err)
    }
}
