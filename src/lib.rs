//! An iterative DNS resolver and a companion stub client, exchanging
//! RFC 1035 messages over UDP.
pub mod error;
pub mod network_order;
pub mod rfc1035;

pub mod client;
pub mod logging;
pub mod resolver;
pub mod roothints;
pub mod util;

pub mod macros;
