//! Library-side helpers for the one-shot stub client (C4): building the
//! query message and classifying the resolver's reply. The socket I/O
//! and presentation/rendering live in `src/bin/client`; this module is
//! the part worth unit-testing without a network round trip.
use std::net::Ipv4Addr;

use rand::Rng;

use crate::network_order::{FromWire, ToWire};
use crate::error::DnsResult;
use crate::rfc1035::{ptr_name_for_ipv4, Message, Name, QType, Question, TIMEOUT_SENTINEL};

/// Builds the one-question query this client sends: `rd=0` (the stub
/// never asks its paired iterative resolver to recurse), a random
/// transaction id (the source this crate is modeled on hardcoded
/// `0xABCE`; randomizing avoids cross-query id collisions).
pub fn build_query(name: &str, qtype: QType) -> DnsResult<Vec<u8>> {
    let qname = if qtype == QType::PTR {
        match name.parse::<Ipv4Addr>() {
            Ok(addr) => ptr_name_for_ipv4(addr),
            Err(_) => Name::try_from(name)?,
        }
    } else {
        Name::try_from(name)?
    };

    let id: u16 = rand::thread_rng().gen();
    let question = Question::new(qname, qtype);
    let message = Message::new_query(id, question);

    let mut buf = Vec::new();
    message.to_wire(&mut buf)?;
    Ok(buf)
}

/// What the client got back from the resolver.
pub enum Reply {
    /// A well-formed DNS message (possibly carrying an error rcode).
    Message(Message),
    /// The 7-byte `timeout` sentinel, or anything else too short to be a
    /// DNS header: resolution did not complete.
    Exhausted,
}

/// Classifies a datagram received from the resolver, per spec.md §4.4:
/// a reply shorter than 12 octets (the `timeout` sentinel is 7) is
/// reported as exhaustion rather than attempted as a DNS decode.
pub fn classify_reply(datagram: &[u8]) -> DnsResult<Reply> {
    if datagram.len() < 12 {
        debug_assert!(datagram == TIMEOUT_SENTINEL || datagram.len() < TIMEOUT_SENTINEL.len() + 1);
        return Ok(Reply::Exhausted);
    }
    let (message, _) = Message::from_wire(datagram, 0)?;
    Ok(Reply::Message(message))
}
