//! Core structures for DNS messages, per https://datatracker.ietf.org/doc/html/rfc1035
//!
//! Everything in this module implements `ToWire`/`FromWire` (see
//! `crate::network_order`). Decode never panics on well-formed-but-unusual
//! wire values (reserved `z` bits, unrecognized RR type/class codes) —
//! it surfaces `DnsError::FormErrDecode` only for genuinely malformed
//! bytes (truncation, reserved label-length bits, pointer cycles).
use std::collections::HashSet;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{DnsError, DnsResult};
use crate::network_order::{FromWire, ToWire};
use crate::util::is_pointer;

/// Maximum size of a UDP datagram we're willing to build or read, matching
/// the non-EDNS(0) RFC 1035 UDP limit this crate targets (no EDNS(0), per
/// the system's non-goals).
pub const MAX_DNS_PACKET_SIZE: usize = 512;

/// The literal sentinel the resolver sends the client when resolution is
/// exhausted. Deliberately shorter than a DNS header (12 octets) so the
/// client can detect it unambiguously by length alone.
pub const TIMEOUT_SENTINEL: &[u8] = b"timeout";

//------------------------------------------------------------------------
// Header
//------------------------------------------------------------------------

/// DNS message header: https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl ToWire for Header {
    fn to_wire(&self, buf: &mut Vec<u8>) -> DnsResult<()> {
        self.id.to_wire(buf)?;
        self.flags.to_wire(buf)?;
        self.qd_count.to_wire(buf)?;
        self.an_count.to_wire(buf)?;
        self.ns_count.to_wire(buf)?;
        self.ar_count.to_wire(buf)?;
        Ok(())
    }
}

impl<'a> FromWire<'a> for Header {
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let (id, offset) = u16::from_wire(msg, offset)?;
        let (flags, offset) = Flags::from_wire(msg, offset)?;
        let (qd_count, offset) = u16::from_wire(msg, offset)?;
        let (an_count, offset) = u16::from_wire(msg, offset)?;
        let (ns_count, offset) = u16::from_wire(msg, offset)?;
        let (ar_count, offset) = u16::from_wire(msg, offset)?;
        Ok((
            Header {
                id,
                flags,
                qd_count,
                an_count,
                ns_count,
                ar_count,
            },
            offset,
        ))
    }
}

/// The 16-bit flags word, packed/unpacked as a whole per spec.md §4.1:
/// `flags = (qr<<15)|(opcode<<11)|(aa<<10)|(tc<<9)|(rd<<8)|(ra<<7)|(z<<4)|rcode`.
///
/// `opcode` and `rcode` are kept as raw numeric values rather than closed
/// enums: the wire carries 4-bit fields whose full 0-15 range is legal
/// even though only a handful of values are currently assigned, and a
/// resolver forwarding arbitrary upstream traffic must not fail to decode
/// a message merely because it used an opcode or rcode this crate doesn't
/// have a name for. `z` is explicitly required to be tolerated by
/// spec.md §4.1; the same tolerance is extended to `opcode`/`rcode` for
/// the same reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: u8,
}

impl Flags {
    /// The recognized rcode, or `None` if the value isn't one of
    /// spec.md §3's `{NOERROR, FORMERR, SERVFAIL, NXDOMAIN, NOTIMP, REFUSED}`.
    pub fn rcode_name(&self) -> Option<&'static str> {
        rcode_name(self.rcode)
    }
}

pub fn rcode_name(rcode: u8) -> Option<&'static str> {
    match rcode {
        0 => Some("NOERROR"),
        1 => Some("FORMERR"),
        2 => Some("SERVFAIL"),
        3 => Some("NXDOMAIN"),
        4 => Some("NOTIMP"),
        5 => Some("REFUSED"),
        _ => None,
    }
}

impl ToWire for Flags {
    fn to_wire(&self, buf: &mut Vec<u8>) -> DnsResult<()> {
        let word: u16 = ((self.qr as u16) << 15)
            | ((self.opcode as u16 & 0xF) << 11)
            | ((self.aa as u16) << 10)
            | ((self.tc as u16) << 9)
            | ((self.rd as u16) << 8)
            | ((self.ra as u16) << 7)
            | ((self.z as u16 & 0x7) << 4)
            | (self.rcode as u16 & 0xF);
        word.to_wire(buf)
    }
}

impl<'a> FromWire<'a> for Flags {
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let (word, next) = u16::from_wire(msg, offset)?;
        Ok((
            Flags {
                qr: (word >> 15) & 0x1 == 1,
                opcode: ((word >> 11) & 0xF) as u8,
                aa: (word >> 10) & 0x1 == 1,
                tc: (word >> 9) & 0x1 == 1,
                rd: (word >> 8) & 0x1 == 1,
                ra: (word >> 7) & 0x1 == 1,
                z: ((word >> 4) & 0x7) as u8,
                rcode: (word & 0xF) as u8,
            },
            next,
        ))
    }
}

//------------------------------------------------------------------------
// Domain names, with RFC 1035 §4.1.4 compression
//------------------------------------------------------------------------

/// One 1-63 octet label. Labels are opaque bytes on the wire (not
/// guaranteed UTF-8), so this crate never assumes they decode as `str`.
pub type Label = Vec<u8>;

/// An owned, fully-resolved domain name: a sequence of labels, root-
/// terminated implicitly (an empty `labels` vec is the root name `.`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Name {
    pub labels: Vec<Label>,
}

impl Name {
    pub fn root() -> Self {
        Name { labels: Vec::new() }
    }

    /// This name's wire length in octets, including every length byte and
    /// the terminating zero — used to enforce the 255-octet cap.
    fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }
}

impl ToWire for Name {
    fn to_wire(&self, buf: &mut Vec<u8>) -> DnsResult<()> {
        if self.wire_len() > 255 {
            return Err(DnsError::FormErrEncode(format!(
                "name exceeds 255 octets ({})",
                self.wire_len()
            )));
        }
        for label in &self.labels {
            if label.len() > 63 || label.is_empty() {
                return Err(DnsError::FormErrEncode(format!(
                    "label length {} out of range 1..=63",
                    label.len()
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label);
        }
        buf.push(0);
        Ok(())
    }
}

impl<'a> FromWire<'a> for Name {
    /// Walks labels per spec.md §4.1, following at most one pointer chain
    /// and refusing to revisit any offset already seen during this name's
    /// resolution (pointer-cycle defense spec.md §9 notes the teacher's
    /// source lacks). Total emitted label bytes are capped at 255.
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let mut labels = Vec::new();
        let mut pos = offset;
        let mut visited: HashSet<usize> = HashSet::new();
        let mut total_len = 0usize;
        // the offset to resume the *enclosing* message parse at, fixed the
        // first time we either hit the terminator or follow a pointer
        let mut resume_at: Option<usize> = None;

        loop {
            if pos >= msg.len() {
                return Err(DnsError::FormErrDecode(
                    "name decode ran past end of message".into(),
                ));
            }
            if !visited.insert(pos) {
                return Err(DnsError::FormErrDecode(
                    "compression pointer cycle detected".into(),
                ));
            }

            let b = msg[pos];
            if b == 0 {
                if resume_at.is_none() {
                    resume_at = Some(pos + 1);
                }
                break;
            } else if is_pointer(b) {
                if pos + 1 >= msg.len() {
                    return Err(DnsError::FormErrDecode("truncated compression pointer".into()));
                }
                if resume_at.is_none() {
                    resume_at = Some(pos + 2);
                }
                let target = (((b as u16) & 0x3F) << 8) | msg[pos + 1] as u16;
                pos = target as usize;
                continue;
            } else if b & 0xC0 != 0 {
                // top bits `01` or `10`: reserved
                return Err(DnsError::FormErrDecode(
                    "reserved label length bits".into(),
                ));
            } else {
                let len = b as usize; // top bits `00`, so len <= 63
                if pos + 1 + len > msg.len() {
                    return Err(DnsError::FormErrDecode("truncated label".into()));
                }
                total_len += len + 1;
                if total_len > 255 {
                    return Err(DnsError::FormErrDecode("name exceeds 255 octets".into()));
                }
                labels.push(msg[pos + 1..pos + 1 + len].to_vec());
                pos += 1 + len;
            }
        }

        Ok((Name { labels }, resume_at.unwrap()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        for label in &self.labels {
            write!(f, "{}.", String::from_utf8_lossy(label))?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Name {
    type Error = DnsError;

    fn try_from(domain: &str) -> DnsResult<Self> {
        if domain.is_empty() {
            return Err(DnsError::FormErrEncode("empty domain name".into()));
        }
        let labels: Vec<Label> = if domain == "." {
            Vec::new()
        } else {
            domain
                .split('.')
                .filter(|s| !s.is_empty())
                .map(|s| s.as_bytes().to_vec())
                .collect()
        };
        Ok(Name { labels })
    }
}

/// Builds the reverse-lookup name for an IPv4 address per spec.md §4.1's
/// PTR encoding rule: octets reversed, followed by `in-addr.arpa`.
pub fn ptr_name_for_ipv4(addr: Ipv4Addr) -> Name {
    let octets = addr.octets();
    let mut labels: Vec<Label> = octets
        .iter()
        .rev()
        .map(|o| o.to_string().into_bytes())
        .collect();
    labels.push(b"in-addr".to_vec());
    labels.push(b"arpa".to_vec());
    Name { labels }
}

//------------------------------------------------------------------------
// QType / QClass — recognized sets with an `Unknown` escape hatch
//------------------------------------------------------------------------

/// RR type codes recognized by spec.md §3, plus a catch-all. Unlike a
/// classic `TryFrom`-based closed enum, `Unknown` keeps decode total: an
/// RR of a type this crate doesn't otherwise understand is never a decode
/// failure, only an opaque `RData::Raw` payload — exactly spec.md §3's
/// "Unknown types → raw bytes, round-trippable."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QType {
    A,
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,
    AAAA,
    Unknown(u16),
}

impl QType {
    pub fn code(self) -> u16 {
        match self {
            QType::A => 1,
            QType::NS => 2,
            QType::MD => 3,
            QType::MF => 4,
            QType::CNAME => 5,
            QType::SOA => 6,
            QType::MB => 7,
            QType::MG => 8,
            QType::NULL => 10,
            QType::WKS => 11,
            QType::PTR => 12,
            QType::HINFO => 13,
            QType::MINFO => 14,
            QType::MX => 15,
            QType::TXT => 16,
            QType::AAAA => 28,
            QType::Unknown(code) => code,
        }
    }

    pub fn from_code(code: u16) -> Self {
        match code {
            1 => QType::A,
            2 => QType::NS,
            3 => QType::MD,
            4 => QType::MF,
            5 => QType::CNAME,
            6 => QType::SOA,
            7 => QType::MB,
            8 => QType::MG,
            10 => QType::NULL,
            11 => QType::WKS,
            12 => QType::PTR,
            13 => QType::HINFO,
            14 => QType::MINFO,
            15 => QType::MX,
            16 => QType::TXT,
            28 => QType::AAAA,
            other => QType::Unknown(other),
        }
    }
}

impl Default for QType {
    fn default() -> Self {
        QType::A
    }
}

impl fmt::Display for QType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QType::Unknown(code) => write!(f, "TYPE{}", code),
            other => write!(f, "{:?}", other),
        }
    }
}

impl FromStr for QType {
    type Err = DnsError;

    fn from_str(s: &str) -> DnsResult<Self> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "A" => QType::A,
            "NS" => QType::NS,
            "MD" => QType::MD,
            "MF" => QType::MF,
            "CNAME" => QType::CNAME,
            "SOA" => QType::SOA,
            "MB" => QType::MB,
            "MG" => QType::MG,
            "NULL" => QType::NULL,
            "WKS" => QType::WKS,
            "PTR" => QType::PTR,
            "HINFO" => QType::HINFO,
            "MINFO" => QType::MINFO,
            "MX" => QType::MX,
            "TXT" => QType::TXT,
            "AAAA" => QType::AAAA,
            other => {
                return Err(DnsError::FormErrEncode(format!(
                    "unrecognized query type mnemonic '{}'",
                    other
                )))
            }
        })
    }
}

impl ToWire for QType {
    fn to_wire(&self, buf: &mut Vec<u8>) -> DnsResult<()> {
        self.code().to_wire(buf)
    }
}

impl<'a> FromWire<'a> for QType {
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let (code, next) = u16::from_wire(msg, offset)?;
        Ok((QType::from_code(code), next))
    }
}

/// RR class codes recognized by spec.md §3, plus a catch-all for the same
/// reason as `QType::Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QClass {
    IN,
    CS,
    CH,
    HS,
    Unknown(u16),
}

impl QClass {
    pub fn code(self) -> u16 {
        match self {
            QClass::IN => 1,
            QClass::CS => 2,
            QClass::CH => 3,
            QClass::HS => 4,
            QClass::Unknown(code) => code,
        }
    }

    pub fn from_code(code: u16) -> Self {
        match code {
            1 => QClass::IN,
            2 => QClass::CS,
            3 => QClass::CH,
            4 => QClass::HS,
            other => QClass::Unknown(other),
        }
    }
}

impl Default for QClass {
    fn default() -> Self {
        QClass::IN
    }
}

impl fmt::Display for QClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QClass::Unknown(code) => write!(f, "CLASS{}", code),
            other => write!(f, "{:?}", other),
        }
    }
}

impl ToWire for QClass {
    fn to_wire(&self, buf: &mut Vec<u8>) -> DnsResult<()> {
        self.code().to_wire(buf)
    }
}

impl<'a> FromWire<'a> for QClass {
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let (code, next) = u16::from_wire(msg, offset)?;
        Ok((QClass::from_code(code), next))
    }
}

//------------------------------------------------------------------------
// Question
//------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub qtype: QType,
    pub qclass: QClass,
}

impl Question {
    pub fn new(name: Name, qtype: QType) -> Self {
        Question {
            name,
            qtype,
            qclass: QClass::IN,
        }
    }
}

impl ToWire for Question {
    fn to_wire(&self, buf: &mut Vec<u8>) -> DnsResult<()> {
        self.name.to_wire(buf)?;
        self.qtype.to_wire(buf)?;
        self.qclass.to_wire(buf)?;
        Ok(())
    }
}

impl<'a> FromWire<'a> for Question {
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let (name, offset) = Name::from_wire(msg, offset)?;
        let (qtype, offset) = QType::from_wire(msg, offset)?;
        let (qclass, offset) = QClass::from_wire(msg, offset)?;
        Ok((Question { name, qtype, qclass }, offset))
    }
}

//------------------------------------------------------------------------
// Resource records
//------------------------------------------------------------------------

/// RDATA, tagged by the RR's type — a single closed enum rather than the
/// dynamically-typed grab bag a raw-bytes-plus-type-tag pair would give.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Ns(Name),
    Cname(Name),
    Ptr(Name),
    Mx { preference: u16, exchange: Name },
    /// TXT, SOA, AAAA and any type this crate doesn't parse further:
    /// length-preserving opaque bytes.
    Raw(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub rtype: QType,
    pub rclass: QClass,
    pub ttl: u32,
    pub rdata: RData,
}

impl ResourceRecord {
    /// The glue-selection logic the resolver engine runs over the
    /// additional section: "is this a usable referral?" becomes exactly
    /// this accessor.
    pub fn as_a_record(&self) -> Option<Ipv4Addr> {
        match self.rdata {
            RData::A(addr) => Some(addr),
            _ => None,
        }
    }
}

impl ToWire for ResourceRecord {
    fn to_wire(&self, buf: &mut Vec<u8>) -> DnsResult<()> {
        self.name.to_wire(buf)?;
        self.rtype.to_wire(buf)?;
        self.rclass.to_wire(buf)?;
        self.ttl.to_wire(buf)?;

        // RDATA is length-prefixed; we don't know its encoded length
        // until after encoding it, so encode into a scratch buffer first.
        let mut rdata_buf = Vec::new();
        match &self.rdata {
            RData::A(addr) => addr.to_wire(&mut rdata_buf)?,
            RData::Ns(name) | RData::Cname(name) | RData::Ptr(name) => name.to_wire(&mut rdata_buf)?,
            RData::Mx { preference, exchange } => {
                preference.to_wire(&mut rdata_buf)?;
                exchange.to_wire(&mut rdata_buf)?;
            }
            RData::Raw(bytes) => rdata_buf.extend_from_slice(bytes),
        }
        if rdata_buf.len() > u16::MAX as usize {
            return Err(DnsError::FormErrEncode("RDATA too long".into()));
        }
        (rdata_buf.len() as u16).to_wire(buf)?;
        buf.extend_from_slice(&rdata_buf);
        Ok(())
    }
}

impl<'a> FromWire<'a> for ResourceRecord {
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let (name, offset) = Name::from_wire(msg, offset)?;
        let (rtype, offset) = QType::from_wire(msg, offset)?;
        let (rclass, offset) = QClass::from_wire(msg, offset)?;
        let (ttl, offset) = u32::from_wire(msg, offset)?;
        let (rdlength, offset) = u16::from_wire(msg, offset)?;
        let rdlength = rdlength as usize;

        let rdata_end = offset
            .checked_add(rdlength)
            .filter(|&end| end <= msg.len())
            .ok_or_else(|| DnsError::FormErrDecode("RDATA shorter than rdlength".into()))?;

        let rdata = match rtype {
            QType::A => {
                if rdlength != 4 {
                    return Err(DnsError::FormErrDecode(format!(
                        "A record RDATA must be 4 octets, got {}",
                        rdlength
                    )));
                }
                let (addr, _) = Ipv4Addr::from_wire(msg, offset)?;
                RData::A(addr)
            }
            QType::NS => RData::Ns(Name::from_wire(msg, offset)?.0),
            QType::CNAME => RData::Cname(Name::from_wire(msg, offset)?.0),
            QType::PTR => RData::Ptr(Name::from_wire(msg, offset)?.0),
            QType::MX => {
                let (preference, name_offset) = u16::from_wire(msg, offset)?;
                let (exchange, _) = Name::from_wire(msg, name_offset)?;
                RData::Mx { preference, exchange }
            }
            // TXT, SOA, AAAA, and anything unrecognized: opaque, length-preserving.
            _ => RData::Raw(msg[offset..rdata_end].to_vec()),
        };

        Ok((
            ResourceRecord {
                name,
                rtype,
                rclass,
                ttl,
                rdata,
            },
            rdata_end,
        ))
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::Ns(name) | RData::Cname(name) | RData::Ptr(name) => write!(f, "{}", name),
            RData::Mx { preference, exchange } => write!(f, "{} {}", preference, exchange),
            RData::Raw(bytes) => write!(f, "\\# {} {}", bytes.len(), hex_dump(bytes)),
        }
    }
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

//------------------------------------------------------------------------
// Message — the full DNS packet
//------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Builds a one-question query: `rd=0` (the stub never asks the
    /// iterative resolver it's paired with to recurse further), one
    /// question, all other counts and sections empty. The transaction id
    /// is left to the caller to randomize per query.
    pub fn new_query(id: u16, question: Question) -> Self {
        Message {
            header: Header {
                id,
                flags: Flags {
                    qr: false,
                    opcode: 0,
                    aa: false,
                    tc: false,
                    rd: false,
                    ra: false,
                    z: 0,
                    rcode: 0,
                },
                qd_count: 1,
                an_count: 0,
                ns_count: 0,
                ar_count: 0,
            },
            questions: vec![question],
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    /// All `A` records in the additional section, in appearance order —
    /// the glue candidates a referral is chased with.
    pub fn glue_addresses(&self) -> Vec<Ipv4Addr> {
        self.additionals.iter().filter_map(|rr| rr.as_a_record()).collect()
    }
}

impl ToWire for Message {
    fn to_wire(&self, buf: &mut Vec<u8>) -> DnsResult<()> {
        self.header.to_wire(buf)?;
        for q in &self.questions {
            q.to_wire(buf)?;
        }
        for rr in &self.answers {
            rr.to_wire(buf)?;
        }
        for rr in &self.authorities {
            rr.to_wire(buf)?;
        }
        for rr in &self.additionals {
            rr.to_wire(buf)?;
        }
        Ok(())
    }
}

impl<'a> FromWire<'a> for Message {
    /// Offsets are never required to be non-decreasing: compression
    /// pointers may point backward to any prior byte. This falls out for
    /// free since `Name::from_wire` takes the whole message and an
    /// absolute offset, with no assumption about section ordering.
    fn from_wire(msg: &'a [u8], offset: usize) -> DnsResult<(Self, usize)> {
        let (header, mut offset) = Header::from_wire(msg, offset)?;

        let mut questions = Vec::with_capacity(header.qd_count as usize);
        for _ in 0..header.qd_count {
            let (q, next) = Question::from_wire(msg, offset)?;
            questions.push(q);
            offset = next;
        }

        let mut answers = Vec::with_capacity(header.an_count as usize);
        for _ in 0..header.an_count {
            let (rr, next) = ResourceRecord::from_wire(msg, offset)?;
            answers.push(rr);
            offset = next;
        }

        let mut authorities = Vec::with_capacity(header.ns_count as usize);
        for _ in 0..header.ns_count {
            let (rr, next) = ResourceRecord::from_wire(msg, offset)?;
            authorities.push(rr);
            offset = next;
        }

        let mut additionals = Vec::with_capacity(header.ar_count as usize);
        for _ in 0..header.ar_count {
            let (rr, next) = ResourceRecord::from_wire(msg, offset)?;
            additionals.push(rr);
            offset = next;
        }

        Ok((
            Message {
                header,
                questions,
                answers,
                authorities,
                additionals,
            },
            offset,
        ))
    }
}

/// Decodes only the 12-octet header, for a cheap "does this response
/// carry an answer?" check without paying to decode the rest of a large
/// referral response.
pub fn decode_header_only(msg: &[u8]) -> DnsResult<Header> {
    if msg.len() < 12 {
        return Err(DnsError::FormErrDecode(
            "message shorter than a DNS header".into(),
        ));
    }
    Header::from_wire(msg, 0).map(|(h, _)| h)
}
