//! Parses a `named.root`-format hints file into the ordered list of root
//! server IPv4 addresses the resolver engine bootstraps from.
use std::net::Ipv4Addr;
use std::path::Path;

use crate::error::{DnsError, DnsResult};

/// Reads `path` and returns root server addresses in file order, skipping
/// comment lines (`;`), the root-zone owner lines (`.`), and any record
/// whose type isn't `A` (notably `AAAA`, since this crate has no IPv6
/// support). An empty result is a fatal startup condition.
pub fn load<P: AsRef<Path>>(path: P) -> DnsResult<Vec<Ipv4Addr>> {
    let contents = std::fs::read_to_string(path)?;
    let roots = parse(&contents)?;
    if roots.is_empty() {
        return Err(DnsError::RootHintsEmpty);
    }
    Ok(roots)
}

/// Pure parsing logic, split out from `load` so it can be exercised
/// without touching the filesystem.
fn parse(contents: &str) -> DnsResult<Vec<Ipv4Addr>> {
    let mut roots = Vec::new();

    for line in contents.lines() {
        if line.is_empty() || line.starts_with(';') || line.starts_with('.') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        // NAME TTL TYPE VALUE
        if fields.len() < 4 {
            continue;
        }
        if fields[2] != "A" {
            continue;
        }

        let addr: Ipv4Addr = fields[3]
            .parse()
            .map_err(|_| DnsError::RootHintsParse(format!("bad address on line: {}", line)))?;
        roots.push(addr);
    }

    Ok(roots)
}
