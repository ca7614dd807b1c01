//! End-to-end scenarios driving the transport-agnostic resolver engine
//! directly (no real sockets bound), matching the concrete scenarios
//! named in the engine's design notes.
use std::net::Ipv4Addr;

use dnslib::client::build_query;
use dnslib::network_order::{FromWire, ToWire};
use dnslib::resolver::{Action, ResolverEngine};
use dnslib::rfc1035::{
    decode_header_only, Flags, Header, Message, Name, QClass, QType, RData, ResourceRecord,
    TIMEOUT_SENTINEL,
};
use dnslib::roothints;

fn roots() -> Vec<Ipv4Addr> {
    roothints::load("tests/fixtures/named.root").unwrap()
}

fn answer(id: u16, rcode: u8, an_count: u16) -> Vec<u8> {
    let header = Header {
        id,
        flags: Flags {
            qr: true,
            rcode,
            ..Default::default()
        },
        qd_count: 1,
        an_count,
        ns_count: 0,
        ar_count: 0,
    };
    let mut buf = Vec::new();
    header.to_wire(&mut buf).unwrap();

    if an_count > 0 {
        let rr = ResourceRecord {
            name: Name::try_from("example.com").unwrap(),
            rtype: QType::A,
            rclass: QClass::IN,
            ttl: 300,
            rdata: RData::A(Ipv4Addr::new(93, 184, 216, 34)),
        };
        rr.to_wire(&mut buf).unwrap();
    }
    buf
}

fn referral(id: u16, glue: Vec<Ipv4Addr>) -> Vec<u8> {
    let header = Header {
        id,
        flags: Flags { qr: true, ..Default::default() },
        qd_count: 1,
        an_count: 0,
        ns_count: 0,
        ar_count: glue.len() as u16,
    };
    let mut buf = Vec::new();
    header.to_wire(&mut buf).unwrap();
    for addr in glue {
        let rr = ResourceRecord {
            name: Name::root(),
            rtype: QType::A,
            rclass: QClass::IN,
            ttl: 60,
            rdata: RData::A(addr),
        };
        rr.to_wire(&mut buf).unwrap();
    }
    buf
}

#[test]
fn s1_answer_from_first_root_is_forwarded_verbatim() {
    let mut engine = ResolverEngine::new(roots());
    let query = build_query("example.com", QType::A).unwrap();
    let id = decode_header_only(&query).unwrap().id;

    assert_eq!(engine.start_query(query), Action::SendUpstream(Ipv4Addr::new(198, 41, 0, 4)));

    let reply = answer(id, 0, 1);
    let action = engine.on_upstream_datagram(&reply).unwrap();
    assert_eq!(action, Action::ReplyToClient(reply.clone()));

    let (decoded, _) = Message::from_wire(&reply, 0).unwrap();
    assert_eq!(decoded.answers[0].rdata, RData::A(Ipv4Addr::new(93, 184, 216, 34)));
}

#[test]
fn s2_nxdomain_forwards_without_trying_more_roots() {
    let mut engine = ResolverEngine::new(roots());
    let query = build_query("nonexistent.invalid", QType::A).unwrap();
    let id = decode_header_only(&query).unwrap().id;
    engine.start_query(query);

    let reply = answer(id, 3, 0); // NXDOMAIN
    let action = engine.on_upstream_datagram(&reply).unwrap();
    assert_eq!(action, Action::ReplyToClient(reply));
    assert!(!engine.is_busy());
}

#[test]
fn s3_servfail_on_first_root_falls_back_to_second() {
    let all_roots = roots();
    let mut engine = ResolverEngine::new(all_roots.clone());
    let query = build_query("example.com", QType::A).unwrap();
    let id = decode_header_only(&query).unwrap().id;
    engine.start_query(query);

    let servfail = answer(id, 2, 0);
    let action = engine.on_upstream_datagram(&servfail).unwrap();
    assert_eq!(action, Action::SendUpstream(all_roots[1]));

    let ok = answer(id, 0, 1);
    let action = engine.on_upstream_datagram(&ok).unwrap();
    assert_eq!(action, Action::ReplyToClient(ok));
}

#[test]
fn s4_timeout_on_every_root_yields_sentinel() {
    let all_roots = roots();
    let mut engine = ResolverEngine::new(all_roots.clone());
    let query = build_query("example.com", QType::A).unwrap();
    engine.start_query(query);

    for _ in 0..all_roots.len() - 1 {
        let action = engine.on_upstream_timeout();
        assert!(matches!(action, Action::SendUpstream(_)));
    }
    let action = engine.on_upstream_timeout();
    assert_eq!(action, Action::ReplyToClient(TIMEOUT_SENTINEL.to_vec()));
}

#[test]
fn s5_mx_answer_decodes_with_preference_and_exchange() {
    let header = Header {
        id: 1,
        flags: Flags { qr: true, ..Default::default() },
        qd_count: 0,
        an_count: 1,
        ns_count: 0,
        ar_count: 0,
    };
    let mut buf = Vec::new();
    header.to_wire(&mut buf).unwrap();
    let rr = ResourceRecord {
        name: Name::try_from("example.com").unwrap(),
        rtype: QType::MX,
        rclass: QClass::IN,
        ttl: 300,
        rdata: RData::Mx {
            preference: 10,
            exchange: Name::try_from("mx.example.com").unwrap(),
        },
    };
    rr.to_wire(&mut buf).unwrap();

    let (decoded, _) = Message::from_wire(&buf, 0).unwrap();
    match &decoded.answers[0].rdata {
        RData::Mx { preference, exchange } => {
            assert_eq!(*preference, 10);
            assert_eq!(exchange.to_string(), "mx.example.com.");
            assert_eq!(format!("{} {}", preference, exchange), "10 mx.example.com.");
        }
        other => panic!("expected MX, got {:?}", other),
    }
}

#[test]
fn s6_ptr_query_encodes_reversed_octet_labels() {
    let query = build_query("8.8.8.8", QType::PTR).unwrap();
    let (message, _) = Message::from_wire(&query, 0).unwrap();
    let labels: Vec<String> = message.questions[0]
        .name
        .labels
        .iter()
        .map(|l| String::from_utf8_lossy(l).into_owned())
        .collect();
    assert_eq!(labels, vec!["8", "8", "8", "8", "in-addr", "arpa"]);
}

#[test]
fn referral_chases_second_glue_candidate_before_exhausting() {
    let all_roots = roots();
    let mut engine = ResolverEngine::new(all_roots);
    let query = build_query("example.com", QType::A).unwrap();
    let id = decode_header_only(&query).unwrap().id;
    engine.start_query(query);

    let glue = vec![Ipv4Addr::new(192, 0, 2, 53), Ipv4Addr::new(192, 0, 2, 54)];
    let action = engine.on_upstream_datagram(&referral(id, glue.clone())).unwrap();
    assert_eq!(action, Action::SendUpstream(glue[0]));

    // first delegate times out: falls back to the second queued glue
    // candidate, not back to the root list — once current_server has
    // moved off the root list, a dead end only drains next_candidates.
    let action = engine.on_upstream_timeout();
    assert_eq!(action, Action::SendUpstream(glue[1]));

    // and once that's exhausted too, with no candidates left, it's terminal.
    let action = engine.on_upstream_timeout();
    assert_eq!(action, Action::ReplyToClient(TIMEOUT_SENTINEL.to_vec()));
}
