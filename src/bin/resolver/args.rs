//! Manage command line arguments here.
use clap::{App, Arg};

use dnslib::error::{DnsError, DnsResult};

/// `<prog> <port> [timeout_seconds=5]`
#[derive(Debug)]
pub struct CliOptions {
    pub port: u16,
    pub timeout_secs: u64,
}

impl CliOptions {
    pub fn options() -> DnsResult<Self> {
        let matches = App::new("DNS iterative resolver")
            .version("0.1")
            .about("Chases referrals from a root hints list on behalf of a stub client")
            .arg(
                Arg::new("port")
                    .help("UDP port to bind on localhost")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::new("timeout")
                    .help("per-upstream-hop timeout, in seconds")
                    .required(false)
                    .index(2),
            )
            .get_matches();

        let port = matches
            .value_of("port")
            .unwrap()
            .parse::<u16>()
            .map_err(|_| DnsError::FormErrEncode("port must be a 16-bit integer".into()))?;

        let timeout_secs = match matches.value_of("timeout") {
            Some(s) => s
                .parse::<u64>()
                .map_err(|_| DnsError::FormErrEncode("timeout must be an integer".into()))?,
            None => 5,
        };

        Ok(CliOptions { port, timeout_secs })
    }
}
