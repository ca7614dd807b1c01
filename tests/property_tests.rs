//! Property tests for the universal wire-format invariants: header
//! round-trip, uncompressed name round-trip, and pointer-cycle refusal.
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use dnslib::network_order::{FromWire, ToWire};
use dnslib::rfc1035::{Flags, Header, Name};

#[derive(Debug, Clone)]
struct ArbFlags(Flags);

impl Arbitrary for ArbFlags {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbFlags(Flags {
            qr: bool::arbitrary(g),
            opcode: u8::arbitrary(g) & 0xF,
            aa: bool::arbitrary(g),
            tc: bool::arbitrary(g),
            rd: bool::arbitrary(g),
            ra: bool::arbitrary(g),
            z: u8::arbitrary(g) & 0x7,
            rcode: u8::arbitrary(g) & 0xF,
        })
    }
}

#[quickcheck]
fn header_round_trip(id: u16, flags: ArbFlags, qd: u16, an: u16, ns: u16, ar: u16) -> bool {
    let header = Header {
        id,
        flags: flags.0,
        qd_count: qd,
        an_count: an,
        ns_count: ns,
        ar_count: ar,
    };
    let mut buf = Vec::new();
    header.to_wire(&mut buf).unwrap();
    let (decoded, next) = Header::from_wire(&buf, 0).unwrap();
    decoded == header && next == 12
}

/// A label restricted to 1-63 ASCII lowercase letters, i.e. always a
/// legal RFC 1035 label regardless of what quickcheck shrinks it to.
#[derive(Debug, Clone)]
struct ArbLabel(Vec<u8>);

impl Arbitrary for ArbLabel {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = (usize::arbitrary(g) % 63) + 1;
        let bytes = (0..len)
            .map(|_| *g.choose(b"abcdefghijklmnopqrstuvwxyz0123456789").unwrap())
            .collect();
        ArbLabel(bytes)
    }
}

#[derive(Debug, Clone)]
struct ArbName(Name);

impl Arbitrary for ArbName {
    fn arbitrary(g: &mut Gen) -> Self {
        let label_count = usize::arbitrary(g) % 5; // keep total well under 255
        let labels = (0..label_count).map(|_| ArbLabel::arbitrary(g).0).collect();
        ArbName(Name { labels })
    }
}

#[quickcheck]
fn name_round_trip_uncompressed(name: ArbName) -> bool {
    let mut buf = Vec::new();
    name.0.to_wire(&mut buf).unwrap();
    let (decoded, next) = Name::from_wire(&buf, 0).unwrap();
    decoded == name.0 && next == buf.len()
}

#[quickcheck]
fn pointer_cycle_of_any_length_is_refused(hop_count: u8) -> bool {
    // build a chain of `hops` two-byte pointers, each one pointing at the
    // next, with the last one pointing back to the first — a cycle no
    // matter how many hops quickcheck picks.
    let hops = (hop_count % 8) as usize + 1;
    let mut msg = Vec::new();
    let base = 0usize;
    for i in 0..hops {
        let next_offset = base + ((i + 1) % hops) * 2;
        msg.push(0xC0 | ((next_offset >> 8) as u8));
        msg.push((next_offset & 0xFF) as u8);
    }
    matches!(Name::from_wire(&msg, 0), Err(dnslib::error::DnsError::FormErrDecode(_)))
}
