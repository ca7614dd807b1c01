//! Dig-style presentation layer. Kept out of the library crate (as a
//! binary-local `DisplayWrapper`, the same pattern the source uses) since
//! formatting choices are an external collaborator, not core logic.
use std::fmt;

use dnslib::rfc1035::{Header, Message, Question, ResourceRecord};

pub struct DisplayWrapper<'a, T>(pub &'a T);

impl fmt::Display for DisplayWrapper<'_, Header> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0;
        let rcode = h
            .flags
            .rcode_name()
            .map(String::from)
            .unwrap_or_else(|| format!("RCODE{}", h.flags.rcode));
        write!(
            f,
            "id:{:04X} qr:{} opcode:{} aa:{} tc:{} rd:{} ra:{} rcode:{} qd:{} an:{} ns:{} ar:{}",
            h.id,
            h.flags.qr,
            h.flags.opcode,
            h.flags.aa,
            h.flags.tc,
            h.flags.rd,
            h.flags.ra,
            rcode,
            h.qd_count,
            h.an_count,
            h.ns_count,
            h.ar_count
        )
    }
}

impl fmt::Display for DisplayWrapper<'_, Question> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.0.name, self.0.qclass, self.0.qtype)
    }
}

impl fmt::Display for DisplayWrapper<'_, ResourceRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rr = self.0;
        write!(f, "{}\t{}\t{}\t{}\t{}", rr.name, rr.ttl, rr.rclass, rr.rtype, rr.rdata)
    }
}

/// Prints a fully decoded reply the way `dig` would: header summary,
/// question, then each non-empty section.
pub fn display_message(message: &Message) {
    println!(";; {}", DisplayWrapper(&message.header));

    if let Some(rcode) = message.header.flags.rcode_name() {
        if rcode != "NOERROR" {
            println!(";; {}", rcode);
        }
    }

    println!(";; QUESTION SECTION:");
    for q in &message.questions {
        println!(";{}", DisplayWrapper(q));
    }

    if !message.answers.is_empty() {
        println!(";; ANSWER SECTION:");
        for rr in &message.answers {
            println!("{}", DisplayWrapper(rr));
        }
    }

    if !message.authorities.is_empty() {
        println!(";; AUTHORITY SECTION:");
        for rr in &message.authorities {
            println!("{}", DisplayWrapper(rr));
        }
    }

    if !message.additionals.is_empty() {
        println!(";; ADDITIONAL SECTION:");
        for rr in &message.additionals {
            println!("{}", DisplayWrapper(rr));
        }
    }
}

pub fn display_exhausted() {
    eprintln!(";; resolution exhausted: no reply within the configured timeout");
}
