//! Festival server probe over TCP.
//!
//! Festival's server mode reads Scheme expressions from the socket.  Asking
//! it to `require` the speech-dispatcher module succeeds only when
//! festival-freebsoft-utils is installed, in which case the reply carries an
//! `LP` (Lisp result) marker.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use crate::application::system::{FestivalError, FestivalProbe, FestivalStatus};

/// Expression whose evaluation needs festival-freebsoft-utils.
pub const FREEBSOFT_PROBE: &[u8] = b"(require 'speech-dispatcher)\n";
/// Marker Festival puts in front of a successful Lisp reply.
pub const LISP_REPLY_MARKER: &str = "LP";

/// [`FestivalProbe`] talking to a real server.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpFestivalProbe;

impl FestivalProbe for TcpFestivalProbe {
    fn probe(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<FestivalStatus, FestivalError> {
        let address = (host, port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| FestivalError::Resolve {
                host: host.to_string(),
                port,
            })?;

        let mut stream =
            TcpStream::connect_timeout(&address, timeout).map_err(|source| FestivalError::Connect {
                address: address.to_string(),
                source,
            })?;
        stream
            .set_read_timeout(Some(timeout))
            .map_err(FestivalError::Exchange)?;
        stream
            .write_all(FREEBSOFT_PROBE)
            .map_err(FestivalError::Exchange)?;

        let mut reply = [0u8; 1024];
        let read = stream.read(&mut reply).map_err(FestivalError::Exchange)?;
        let reply = String::from_utf8_lossy(&reply[..read]);
        debug!(%address, reply = %reply, "festival replied");

        Ok(FestivalStatus {
            freebsoft_utils: reply.contains(LISP_REPLY_MARKER),
        })
    }
}
