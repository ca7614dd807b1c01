//! The iterative resolution state machine (`IDLE -> QUERYING_ROOT ->
//! QUERYING_DELEGATE -> DONE`), expressed as pure state transitions over
//! a `ResolverQuery` rather than nested conditionals wired directly into
//! a socket loop. This lets the state machine be driven by tests (or a
//! mock transport) with no real UDP socket involved; `src/bin/resolver`
//! owns the sockets and feeds events in.
use std::collections::{HashSet, VecDeque};
use std::net::Ipv4Addr;

use crate::error::DnsResult;
use crate::network_order::FromWire;
use crate::rfc1035::{decode_header_only, Message, TIMEOUT_SENTINEL};

/// SERVFAIL and NOTIMP are both treated as fallback-triggering dead ends;
/// REFUSED likewise. NXDOMAIN/FORMERR are forwarded immediately.
const RCODE_SERVFAIL: u8 = 2;
const RCODE_NXDOMAIN: u8 = 3;
const RCODE_NOTIMP: u8 = 4;
const RCODE_REFUSED: u8 = 5;
const RCODE_FORMERR: u8 = 1;

/// What the driving loop should do after feeding the engine an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Send the in-flight client query (unmodified) to this upstream IP.
    SendUpstream(Ipv4Addr),
    /// The client query's lifecycle has ended: send this payload back to
    /// the original client address and return to IDLE.
    ReplyToClient(Vec<u8>),
}

/// Per-client-query state, alive only between `IDLE` and `DONE`.
#[derive(Debug, Clone)]
struct ResolverQuery {
    client_query: Vec<u8>,
    current_server: Ipv4Addr,
    next_candidates: VecDeque<Ipv4Addr>,
    /// every IP sent to during this client query; enforces "a server is
    /// never queried twice within one client query" (spec invariant).
    tried: HashSet<Ipv4Addr>,
}

/// The resolver engine. Holds the fixed root list and, while busy, the
/// single in-flight client query's state.
pub struct ResolverEngine {
    roots: Vec<Ipv4Addr>,
    active: Option<ResolverQuery>,
}

impl ResolverEngine {
    pub fn new(roots: Vec<Ipv4Addr>) -> Self {
        ResolverEngine { roots, active: None }
    }

    /// True while a client query is in flight — the caller MUST refuse
    /// new client datagrams while this holds (at-most-one-in-flight).
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    /// The original client payload, forwarded unmodified to whichever
    /// server an `Action::SendUpstream` names. `None` when idle.
    pub fn client_query_bytes(&self) -> Option<&[u8]> {
        self.active.as_ref().map(|q| q.client_query.as_slice())
    }

    /// IDLE -> QUERYING_ROOT: a datagram arrived on the client-facing
    /// socket. `client_query` is forwarded unmodified to `roots[0]`.
    pub fn start_query(&mut self, client_query: Vec<u8>) -> Action {
        let first_root = self.roots[0];
        self.active = Some(ResolverQuery {
            client_query,
            current_server: first_root,
            next_candidates: VecDeque::new(),
            tried: HashSet::from([first_root]),
        });
        Action::SendUpstream(first_root)
    }

    /// A datagram arrived on the upstream socket while a query is active.
    pub fn on_upstream_datagram(&mut self, msg: &[u8]) -> DnsResult<Action> {
        // Cheap header-only peek first: "does this carry an answer?"
        let header = decode_header_only(msg)?;
        if header.an_count > 0 {
            return Ok(self.finish(msg.to_vec()));
        }

        let (full, _) = Message::from_wire(msg, 0)?;
        let rcode = full.header.flags.rcode;
        let glue = full.glue_addresses();

        if rcode == RCODE_NXDOMAIN || rcode == RCODE_FORMERR {
            return Ok(self.finish(msg.to_vec()));
        }
        if rcode == RCODE_SERVFAIL || rcode == RCODE_NOTIMP || rcode == RCODE_REFUSED || glue.is_empty() {
            return Ok(self.dead_end(Some(msg.to_vec())));
        }

        match self.pick_from_glue(glue) {
            Some(next) => Ok(Action::SendUpstream(next)),
            // every candidate in this referral has already been tried:
            // functionally an empty-glue dead end.
            None => Ok(self.dead_end(Some(msg.to_vec()))),
        }
    }

    /// No upstream datagram arrived within the configured timeout.
    pub fn on_upstream_timeout(&mut self) -> Action {
        self.dead_end(None)
    }

    /// A datagram arrived but couldn't be decoded (`FormErrDecode`):
    /// spec.md §7 treats this the same as an unreachable server — a
    /// dead end with no raw response to fall back on forwarding.
    pub fn on_unusable_response(&mut self) -> Action {
        self.dead_end(None)
    }

    /// Picks the first not-yet-tried address out of a referral's glue,
    /// making it `current_server` and queuing the rest. Returns `None`
    /// if every candidate has already been tried this query.
    fn pick_from_glue(&mut self, glue: Vec<Ipv4Addr>) -> Option<Ipv4Addr> {
        let query = self.active.as_mut().expect("query active");
        let mut queue: VecDeque<Ipv4Addr> = glue.into();
        while let Some(candidate) = queue.pop_front() {
            if query.tried.insert(candidate) {
                query.current_server = candidate;
                query.next_candidates = queue;
                return Some(candidate);
            }
        }
        None
    }

    /// Step 4: dead-end handling, shared by timeout and unusable-response
    /// paths. `raw_response` is `Some` only on the non-timeout path.
    fn dead_end(&mut self, raw_response: Option<Vec<u8>>) -> Action {
        if let Some(next) = self.advance_past_dead_end() {
            return Action::SendUpstream(next);
        }

        // terminal: forward the last raw response if one exists, else
        // the timeout sentinel.
        match raw_response {
            Some(msg) => self.finish(msg),
            None => self.finish(TIMEOUT_SENTINEL.to_vec()),
        }
    }

    /// Tries, in order: the next root (if `current_server` is a root and
    /// not the last one), then the queued glue candidates (skipping any
    /// already tried). Returns the next server to query, if any, and
    /// updates `current_server`/`tried` in place.
    fn advance_past_dead_end(&mut self) -> Option<Ipv4Addr> {
        let query = self.active.as_mut().expect("query active");

        if let Some(idx) = self.roots.iter().position(|&r| r == query.current_server) {
            if idx + 1 < self.roots.len() {
                let next = self.roots[idx + 1];
                query.current_server = next;
                query.tried.insert(next);
                return Some(next);
            }
        }

        while let Some(candidate) = query.next_candidates.pop_front() {
            if query.tried.insert(candidate) {
                query.current_server = candidate;
                return Some(candidate);
            }
        }

        None
    }

    /// DONE: clears per-query state and returns the reply to send.
    fn finish(&mut self, payload: Vec<u8>) -> Action {
        self.active = None;
        Action::ReplyToClient(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network_order::ToWire;
    use crate::rfc1035::{Flags, Header, Question, QClass, QType, RData, ResourceRecord, Name};

    fn root(n: u8) -> Ipv4Addr {
        Ipv4Addr::new(198, 41, 0, n)
    }

    fn client_query() -> Vec<u8> {
        let msg = Message::new_query(0xABCE, Question::new(Name::try_from("example.com").unwrap(), QType::A));
        let mut buf = Vec::new();
        msg.to_wire(&mut buf).unwrap();
        buf
    }

    fn response(an_count: u16, rcode: u8, additionals: Vec<Ipv4Addr>) -> Vec<u8> {
        let header = Header {
            id: 0xABCE,
            flags: Flags {
                qr: true,
                rcode,
                ..Default::default()
            },
            qd_count: 0,
            an_count,
            ns_count: 0,
            ar_count: additionals.len() as u16,
        };
        let mut buf = Vec::new();
        header.to_wire(&mut buf).unwrap();
        for addr in additionals {
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
    fn idle_to_querying_root_sends_first_root() {
        let mut engine = ResolverEngine::new(vec![root(1), root(2)]);
        let action = engine.start_query(client_query());
        assert_eq!(action, Action::SendUpstream(root(1)));
        assert!(engine.is_busy());
    }

    #[test]
    fn answer_present_forwards_and_finishes() {
        let mut engine = ResolverEngine::new(vec![root(1)]);
        engine.start_query(client_query());
        let msg = response(1, 0, vec![]);
        let action = engine.on_upstream_datagram(&msg).unwrap();
        assert_eq!(action, Action::ReplyToClient(msg));
        assert!(!engine.is_busy());
    }

    #[test]
    fn servfail_on_non_last_root_advances_to_next_root() {
        let mut engine = ResolverEngine::new(vec![root(1), root(2)]);
        engine.start_query(client_query());
        let msg = response(0, 2, vec![]); // SERVFAIL, no glue
        let action = engine.on_upstream_datagram(&msg).unwrap();
        assert_eq!(action, Action::SendUpstream(root(2)));
    }

    #[test]
    fn servfail_on_last_root_is_terminal() {
        let mut engine = ResolverEngine::new(vec![root(1)]);
        engine.start_query(client_query());
        let msg = response(0, 2, vec![]);
        let action = engine.on_upstream_datagram(&msg).unwrap();
        assert_eq!(action, Action::ReplyToClient(msg));
    }

    #[test]
    fn nxdomain_forwards_immediately_even_with_more_roots_left() {
        let mut engine = ResolverEngine::new(vec![root(1), root(2)]);
        engine.start_query(client_query());
        let msg = response(0, 3, vec![]); // NXDOMAIN
        let action = engine.on_upstream_datagram(&msg).unwrap();
        assert_eq!(action, Action::ReplyToClient(msg));
    }

    #[test]
    fn referral_follows_first_glue_address() {
        let mut engine = ResolverEngine::new(vec![root(1)]);
        engine.start_query(client_query());
        let glue = vec![Ipv4Addr::new(192, 0, 2, 1), Ipv4Addr::new(192, 0, 2, 2)];
        let msg = response(0, 0, glue.clone());
        let action = engine.on_upstream_datagram(&msg).unwrap();
        assert_eq!(action, Action::SendUpstream(glue[0]));
    }

    #[test]
    fn timeout_on_delegate_falls_back_to_queued_glue() {
        let mut engine = ResolverEngine::new(vec![root(1)]);
        engine.start_query(client_query());
        let glue = vec![Ipv4Addr::new(192, 0, 2, 1), Ipv4Addr::new(192, 0, 2, 2)];
        let msg = response(0, 0, glue.clone());
        engine.on_upstream_datagram(&msg).unwrap();
        let action = engine.on_upstream_timeout();
        assert_eq!(action, Action::SendUpstream(glue[1]));
    }

    #[test]
    fn exhaustion_sends_timeout_sentinel() {
        let mut engine = ResolverEngine::new(vec![root(1)]);
        engine.start_query(client_query());
        let action = engine.on_upstream_timeout();
        assert_eq!(action, Action::ReplyToClient(TIMEOUT_SENTINEL.to_vec()));
        assert!(!engine.is_busy());
    }

    #[test]
    fn already_tried_glue_ip_is_skipped() {
        let mut engine = ResolverEngine::new(vec![root(1)]);
        engine.start_query(client_query());
        let delegate = Ipv4Addr::new(192, 0, 2, 1);
        engine.on_upstream_datagram(&response(0, 0, vec![delegate])).unwrap();
        // the delegate server itself refers back to roots[0] as "glue" —
        // since it was already tried, the engine must not resend to it.
        let action = engine.on_upstream_datagram(&response(0, 0, vec![root(1)])).unwrap();
        assert_eq!(action, Action::ReplyToClient(response(0, 0, vec![root(1)])));
    }
}
