//! The one-shot stub client: build a query, send it to a paired
//! iterative resolver, print whatever comes back.
use std::net::UdpSocket;
use std::time::Duration;

use log::debug;

use dnslib::client::{build_query, classify_reply, Reply};
use dnslib::error::DnsResult;
use dnslib::rfc1035::MAX_DNS_PACKET_SIZE;

mod args;
use args::CliOptions;

mod display;
use display::{display_exhausted, display_message};

fn main() -> DnsResult<()> {
    dnslib::logging::init();

    let options = CliOptions::options()?;
    debug!("options: {:?}", &options);

    let query = build_query(&options.name, options.qtype)?;
    debug!("query: {} bytes", query.len());

    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.set_read_timeout(Some(Duration::from_secs(options.timeout_secs)))?;
    socket.send_to(&query, (options.resolver_ip.as_str(), options.resolver_port))?;

    let mut buf = [0u8; MAX_DNS_PACKET_SIZE * 4];
    let received = match socket.recv(&mut buf) {
        Ok(n) => n,
        Err(e) if is_timeout(&e) => {
            display_exhausted();
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    match classify_reply(&buf[..received])? {
        Reply::Message(message) => {
            display_message(&message);
            Ok(())
        }
        Reply::Exhausted => {
            display_exhausted();
            std::process::exit(1);
        }
    }
}

fn is_timeout(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
    )
}
