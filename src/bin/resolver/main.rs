//! The iterative resolver process: one client-facing socket, one
//! upstream socket, driving `dnslib::resolver::ResolverEngine`.
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

use log::{debug, info, warn};

use dnslib::error::DnsResult;
use dnslib::resolver::{Action, ResolverEngine};
use dnslib::rfc1035::MAX_DNS_PACKET_SIZE;
use dnslib::roothints;

mod args;
use args::CliOptions;

fn main() -> DnsResult<()> {
    dnslib::logging::init();

    let options = CliOptions::options()?;
    debug!("options: {:?}", &options);

    let roots = roothints::load("named.root")?;
    info!("loaded {} root servers", roots.len());

    let client_socket = UdpSocket::bind(("127.0.0.1", options.port))?;
    let upstream_socket = UdpSocket::bind(("0.0.0.0", 0))?;
    info!("listening on {}", client_socket.local_addr()?);

    let mut engine = ResolverEngine::new(roots);
    let mut client_addr: Option<SocketAddr> = None;
    let mut buf = [0u8; MAX_DNS_PACKET_SIZE * 4];

    loop {
        if !engine.is_busy() {
            // blocking receive, no deadline: idle wait for a client.
            let (n, addr) = client_socket.recv_from(&mut buf)?;
            debug!("client query from {}: {} bytes", addr, n);
            client_addr = Some(addr);
            match engine.start_query(buf[..n].to_vec()) {
                Action::SendUpstream(ip) => {
                    send_upstream(&upstream_socket, &engine, ip)?;
                }
                Action::ReplyToClient(_) => unreachable!("start_query always sends upstream first"),
            }
            continue;
        }

        upstream_socket.set_read_timeout(Some(Duration::from_secs(options.timeout_secs)))?;
        let action = match upstream_socket.recv(&mut buf) {
            Ok(n) => match engine.on_upstream_datagram(&buf[..n]) {
                Ok(action) => action,
                Err(e) => {
                    warn!("unusable upstream response, treating as dead end: {}", e);
                    engine.on_unusable_response()
                }
            },
            Err(e) if is_timeout(&e) => engine.on_upstream_timeout(),
            Err(e) => return Err(e.into()),
        };

        match action {
            Action::SendUpstream(ip) => send_upstream(&upstream_socket, &engine, ip)?,
            Action::ReplyToClient(payload) => {
                let addr = client_addr.take().expect("client_addr set while busy");
                client_socket.send_to(&payload, addr)?;
                debug!("replied to {} ({} bytes)", addr, payload.len());
                // the query just finished: any datagram still in flight from
                // a server we gave up on belongs to no active query and must
                // be discarded, not mistaken for the next query's first reply.
                drain_upstream(&upstream_socket, &mut buf)?;
            }
        }
    }
}

/// Non-blockingly reads and discards whatever is already sitting in the
/// upstream socket's receive buffer. Called only while idle, between one
/// client query's DONE and the next one's IDLE -> QUERYING_ROOT.
fn drain_upstream(socket: &UdpSocket, buf: &mut [u8]) -> DnsResult<()> {
    socket.set_read_timeout(Some(Duration::from_millis(1)))?;
    loop {
        match socket.recv(buf) {
            Ok(n) => debug!("discarded {} stale upstream bytes", n),
            Err(e) if is_timeout(&e) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn send_upstream(socket: &UdpSocket, engine: &ResolverEngine, ip: std::net::Ipv4Addr) -> DnsResult<()> {
    let query = engine
        .client_query_bytes()
        .expect("query active when sending upstream");
    socket.send_to(query, (ip, 53))?;
    debug!("sent to {}:53", ip);
    Ok(())
}

fn is_timeout(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
    )
}
