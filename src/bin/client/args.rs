//! Manage command line arguments here.
use std::str::FromStr;

use clap::{App, Arg};

use dnslib::error::{DnsError, DnsResult};
use dnslib::rfc1035::QType;

/// `<prog> <resolver_ip> <resolver_port> <name> <type> [timeout_seconds=10]`
#[derive(Debug)]
pub struct CliOptions {
    pub resolver_ip: String,
    pub resolver_port: u16,
    pub name: String,
    pub qtype: QType,
    pub timeout_secs: u64,
}

impl CliOptions {
    pub fn options() -> DnsResult<Self> {
        let matches = App::new("DNS stub client")
            .version("0.1")
            .about("Sends one query to a paired iterative resolver and prints the answer")
            .arg(Arg::new("resolver_ip").required(true).index(1))
            .arg(Arg::new("resolver_port").required(true).index(2))
            .arg(Arg::new("name").required(true).index(3))
            .arg(Arg::new("qtype").required(true).index(4))
            .arg(Arg::new("timeout").required(false).index(5))
            .get_matches();

        let resolver_ip = matches.value_of("resolver_ip").unwrap().to_string();

        let resolver_port = matches
            .value_of("resolver_port")
            .unwrap()
            .parse::<u16>()
            .map_err(|_| DnsError::FormErrEncode("resolver port must be a 16-bit integer".into()))?;

        let name = matches.value_of("name").unwrap().to_string();

        // <type> is upper-cased before lookup, per the CLI contract.
        let qtype = QType::from_str(&matches.value_of("qtype").unwrap().to_uppercase())?;

        let timeout_secs = match matches.value_of("timeout") {
            Some(s) => s
                .parse::<u64>()
                .map_err(|_| DnsError::FormErrEncode("timeout must be an integer".into()))?,
            None => 10,
        };

        Ok(CliOptions {
            resolver_ip,
            resolver_port,
            name,
            qtype,
            timeout_secs,
        })
    }
}
